//! Deadlines command - preview how a date range splits into rounds
//!
//! Level 1 - Orchestration (single phase)

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;

use courtdraw_schedule::{calculate_deadlines, DeadlineStrategy};

use crate::io::{load_weight_table, print_json};
use crate::StrategyArg;

#[derive(Args)]
pub struct DeadlinesArgs {
    /// First day of play (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,

    /// Last day of play (YYYY-MM-DD)
    #[arg(long)]
    pub end: NaiveDate,

    /// Number of rounds
    #[arg(long)]
    pub rounds: usize,

    /// How days are shared between rounds
    #[arg(long, value_enum, default_value_t = StrategyArg::Progressive)]
    pub strategy: StrategyArg,

    /// Custom progressive weights (JSON map of round count to weights)
    #[arg(long, value_name = "FILE")]
    pub weights: Option<PathBuf>,
}

/// Deadline preview written to stdout
#[derive(Debug, Serialize)]
struct DeadlineReport {
    strategy: DeadlineStrategy,
    deadlines: Vec<NaiveDate>,
}

/// Run deadlines command
pub fn run(args: DeadlinesArgs, pretty: bool) -> Result<()> {
    let report = compute(&args)?;
    print_json(&report, pretty)
}

fn compute(args: &DeadlinesArgs) -> Result<DeadlineReport> {
    let table = load_weight_table(args.weights.as_deref())?;
    let strategy = DeadlineStrategy::from(args.strategy);
    let deadlines = calculate_deadlines(args.start, args.end, args.rounds, strategy, &table)
        .context("Failed to compute deadlines")?;
    Ok(DeadlineReport { strategy, deadlines })
}
