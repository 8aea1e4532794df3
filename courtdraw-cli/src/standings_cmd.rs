//! Standings command - rank a group from recorded matches
//!
//! Level 1 - Orchestration (single phase)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use courtdraw_core::Standing;
use courtdraw_schedule::calculate_standings;

use crate::io::{load_matches, load_players, print_json};

#[derive(Args)]
pub struct StandingsArgs {
    /// Group members JSON file (array of players, in group order)
    #[arg(long, value_name = "FILE")]
    pub players: PathBuf,

    /// Group matches JSON file (array of matches, any status)
    #[arg(long, value_name = "FILE")]
    pub matches: PathBuf,
}

/// Run standings command
pub fn run(args: StandingsArgs, pretty: bool) -> Result<()> {
    let standings = compute(&args)?;
    if let Some(leader) = standings.first() {
        tracing::info!("{} leads with {} points", leader.player.display_name(), leader.points);
    }
    print_json(&standings, pretty)
}

fn compute(args: &StandingsArgs) -> Result<Vec<Standing>> {
    let players = load_players(&args.players)?;
    let matches = load_matches(&args.matches)?;
    calculate_standings(&matches, &players).context("Failed to calculate standings")
}
