//! Round-robin groups and fixtures
//!
//! Level 2 - Phases
//!
//! Fixtures use the circle method: the first player stays put while the
//! others rotate one position per round, so every pair meets exactly once
//! over a full cycle. Odd groups get a virtual bye whose pairings are dropped.

use chrono::NaiveDate;
use courtdraw_core::{ensure_unique_ids, Error, Group, Match, Player, Result, Slot};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::deadlines::linear_deadlines;

/// Shuffle players into groups of `group_size` (the last group may be smaller)
pub fn generate_groups<R: Rng>(players: &[Player], group_size: usize, rng: &mut R) -> Result<Vec<Group>> {
    if group_size == 0 {
        return Err(Error::invalid("group size must be positive"));
    }
    if players.is_empty() {
        return Err(Error::invalid("cannot build groups without players"));
    }
    ensure_unique_ids(players)?;

    let mut shuffled = players.to_vec();
    shuffled.shuffle(rng);

    let groups: Vec<Group> = shuffled
        .chunks(group_size)
        .enumerate()
        .map(|(i, chunk)| Group::new(i + 1, chunk.to_vec()))
        .collect();

    tracing::debug!(
        "Split {} players into {} groups of up to {}",
        players.len(),
        groups.len(),
        group_size
    );

    Ok(groups)
}

/// Rounds needed for everyone in a group of `group_len` to meet once
pub fn full_round_count(group_len: usize) -> usize {
    let total = group_len + group_len % 2;
    total.saturating_sub(1)
}

/// Rounds actually scheduled when `limit` rounds are requested
pub fn scheduled_round_count(group_len: usize, limit: Option<usize>) -> usize {
    let full = full_round_count(group_len);
    limit.map_or(full, |rounds| rounds.min(full))
}

/// Generate a group's fixtures with the circle method
///
/// # Arguments
/// * `players` - Group members in group order
/// * `number_of_rounds` - Rounds to generate (None = full round robin)
///
/// # Returns
/// Pending matches, numbered from 1 within each round
pub fn generate_group_matches(players: &[Player], number_of_rounds: Option<usize>) -> Vec<Match> {
    let rounds = scheduled_round_count(players.len(), number_of_rounds);

    // None is the virtual bye for odd groups
    let mut circle: Vec<Option<&Player>> = players.iter().map(Some).collect();
    if circle.len() % 2 == 1 {
        circle.push(None);
    }
    let total = circle.len();

    let mut matches = Vec::new();
    for round in 1..=rounds as u32 {
        let mut number = 0;
        for i in 0..total / 2 {
            if let (Some(home), Some(away)) = (circle[i], circle[total - 1 - i]) {
                number += 1;
                matches.push(Match::new(
                    round,
                    number,
                    Slot::Player(home.clone()),
                    Slot::Player(away.clone()),
                ));
            }
        }
        circle[1..].rotate_right(1);
    }

    matches
}

/// Linear deadlines for a full round robin in a group of `group_len`
pub fn round_robin_deadlines(start: NaiveDate, end: NaiveDate, group_len: usize) -> Result<Vec<NaiveDate>> {
    linear_deadlines(start, end, full_round_count(group_len))
}

/// Attach each match's round deadline
pub(crate) fn assign_deadlines(matches: &mut [Match], deadlines: &[NaiveDate]) {
    for m in matches {
        m.deadline = deadlines.get(m.round as usize - 1).copied();
    }
}
