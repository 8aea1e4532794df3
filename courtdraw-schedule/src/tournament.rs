//! Tournament building - single elimination and round-robin groups
//!
//! Level 1 - Orchestration

use chrono::NaiveDate;
use courtdraw_core::{Group, Match, Player, PlayerId, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::bracket::build_bracket;
use crate::config::{DrawConfig, GroupConfig};
use crate::deadlines::linear_deadlines;
use crate::draw::generate_draw;
use crate::round_robin::{assign_deadlines, generate_group_matches, generate_groups, scheduled_round_count};
use crate::sizing::bracket_size;

/// A complete knockout bracket
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SingleElimination {
    /// Slots in the first round
    pub bracket_size: usize,
    /// Matches per round, first round first
    pub rounds: Vec<Vec<Match>>,
    /// Seed that reproduces this draw
    pub seed: u64,
}

impl SingleElimination {
    /// Number of rounds including the final
    pub fn round_count(&self) -> u32 {
        self.rounds.len() as u32
    }

    /// The final, if the bracket has any rounds
    pub fn final_match(&self) -> Option<&Match> {
        self.rounds.last().and_then(|round| round.first())
    }
}

/// A round-robin group stage
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoundRobin {
    pub groups: Vec<Group>,
    /// Seed that reproduces the grouping
    pub seed: u64,
}

impl RoundRobin {
    /// Total matches over all groups
    pub fn match_count(&self) -> usize {
        self.groups.iter().map(|g| g.matches.len()).sum()
    }
}

// ============================================================================
// Level 1 - Orchestration
// ============================================================================

/// Draw and schedule a single-elimination bracket
///
/// # Arguments
/// * `players` - Every entrant
/// * `seeded_ids` - Seeded entrants, best first
/// * `start`, `end` - Date range for the whole bracket
/// * `config` - Seed and deadline settings
pub fn build_single_elimination(
    players: &[Player],
    seeded_ids: &[PlayerId],
    start: NaiveDate,
    end: NaiveDate,
    config: &DrawConfig,
) -> Result<SingleElimination> {
    let size = bracket_size(players.len())?;
    let (mut rng, seed) = create_rng(config.seed);

    tracing::info!(
        "Drawing {} players ({} seeded) into a bracket of {}",
        players.len(),
        seeded_ids.len(),
        size
    );

    let round_one = generate_draw(players, seeded_ids, size, &mut rng)?;
    let rounds = build_bracket(
        round_one,
        size,
        start,
        end,
        config.deadline_strategy,
        &config.weight_table,
    )?;

    Ok(SingleElimination {
        bracket_size: size,
        rounds,
        seed,
    })
}

/// Split players into groups and schedule each group's rounds
///
/// Every group gets linear deadlines for the rounds it actually plays.
pub fn build_round_robin(
    players: &[Player],
    start: NaiveDate,
    end: NaiveDate,
    config: &GroupConfig,
) -> Result<RoundRobin> {
    let (mut rng, seed) = create_rng(config.seed);
    let mut groups = generate_groups(players, config.group_size, &mut rng)?;

    for group in &mut groups {
        let rounds = scheduled_round_count(group.players.len(), config.rounds);
        let deadlines = linear_deadlines(start, end, rounds)?;
        let mut matches = generate_group_matches(&group.players, config.rounds);
        assign_deadlines(&mut matches, &deadlines);
        group.matches = matches;
    }

    let result = RoundRobin { groups, seed };
    tracing::info!(
        "Scheduled {} groups with {} matches",
        result.groups.len(),
        result.match_count()
    );

    Ok(result)
}

// ============================================================================
// Level 4 - Utilities
// ============================================================================

/// Seeded generator plus the seed it was built from
fn create_rng(seed: Option<u64>) -> (ChaCha8Rng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    tracing::debug!("Using random seed {}", seed);
    (ChaCha8Rng::seed_from_u64(seed), seed)
}

// ============================================================================
// TESTS
// ============================================================================
