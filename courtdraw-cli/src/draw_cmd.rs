//! Draw command - knockout bracket from a roster
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_draw()
//! - Level 3: draw_config()
//! - Level 4: file I/O (see `io`)

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;

use courtdraw_core::PlayerId;
use courtdraw_schedule::{build_single_elimination, DrawConfig, SingleElimination};

use crate::io::{load_players, load_weight_table, print_json};
use crate::StrategyArg;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct DrawArgs {
    /// Roster JSON file (array of players)
    #[arg(long, value_name = "FILE")]
    pub players: PathBuf,

    /// Seeded player ids, best first
    #[arg(long, value_delimiter = ',')]
    pub seeds: Vec<String>,

    /// First day of play (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,

    /// Last day of play (YYYY-MM-DD)
    #[arg(long)]
    pub end: NaiveDate,

    /// How days are shared between rounds
    #[arg(long, value_enum, default_value_t = StrategyArg::Progressive)]
    pub strategy: StrategyArg,

    /// Custom progressive weights (JSON map of round count to weights)
    #[arg(long, value_name = "FILE")]
    pub weights: Option<PathBuf>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run draw command
pub fn run(args: DrawArgs, seed: Option<u64>, pretty: bool) -> Result<()> {
    let bracket = build_draw(&args, seed)?;

    tracing::info!(
        "Bracket of {} with {} rounds (seed {})",
        bracket.bracket_size,
        bracket.round_count(),
        bracket.seed
    );

    print_json(&bracket, pretty)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Load the roster and draw the bracket
fn build_draw(args: &DrawArgs, seed: Option<u64>) -> Result<SingleElimination> {
    let players = load_players(&args.players)?;
    let seeded_ids: Vec<PlayerId> = args.seeds.iter().map(|id| PlayerId::new(id.trim())).collect();
    let config = draw_config(args, seed)?;

    build_single_elimination(&players, &seeded_ids, args.start, args.end, &config)
        .context("Failed to draw bracket")
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn draw_config(args: &DrawArgs, seed: Option<u64>) -> Result<DrawConfig> {
    let table = load_weight_table(args.weights.as_deref())?;
    let mut config = DrawConfig::default()
        .with_strategy(args.strategy.into())
        .with_weight_table(table);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

// ============================================================================
// TESTS
// ============================================================================
