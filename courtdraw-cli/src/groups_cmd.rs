//! Groups command - round-robin group stage from a roster
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_groups()
//! - Level 4: file I/O (see `io`)

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;

use courtdraw_schedule::{build_round_robin, GroupConfig, RoundRobin, DEFAULT_GROUP_SIZE};

use crate::io::{load_players, print_json};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct GroupsArgs {
    /// Roster JSON file (array of players)
    #[arg(long, value_name = "FILE")]
    pub players: PathBuf,

    /// First day of play (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,

    /// Last day of play (YYYY-MM-DD)
    #[arg(long)]
    pub end: NaiveDate,

    /// Players per group (the last group may be smaller)
    #[arg(long, default_value_t = DEFAULT_GROUP_SIZE)]
    pub group_size: usize,

    /// Rounds to schedule per group (default: full round robin)
    #[arg(long)]
    pub rounds: Option<usize>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run groups command
pub fn run(args: GroupsArgs, seed: Option<u64>, pretty: bool) -> Result<()> {
    let stage = build_groups(&args, seed)?;
    print_json(&stage, pretty)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn build_groups(args: &GroupsArgs, seed: Option<u64>) -> Result<RoundRobin> {
    let players = load_players(&args.players)?;

    let mut config = GroupConfig::new(args.group_size);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(rounds) = args.rounds {
        config = config.with_rounds(rounds);
    }

    build_round_robin(&players, args.start, args.end, &config).context("Failed to build groups")
}

// ============================================================================
// TESTS
// ============================================================================
