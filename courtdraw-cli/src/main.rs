//! Courtdraw CLI - Command-line interface
//!
//! Commands:
//! - draw: Draw and schedule a single-elimination bracket
//! - groups: Split players into round-robin groups with fixtures
//! - deadlines: Preview round deadlines for a date range
//! - standings: Rank a group from recorded results
//!
//! Results are written to stdout as JSON; logs go to stderr.

mod deadlines_cmd;
mod draw_cmd;
mod groups_cmd;
mod io;
mod standings_cmd;

use clap::{Parser, Subcommand, ValueEnum};
use courtdraw_schedule::DeadlineStrategy;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "courtdraw")]
#[command(about = "Tournament draws, group fixtures and standings")]
struct Cli {
    /// Random seed for reproducible draws and groups
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a knockout bracket
    Draw(draw_cmd::DrawArgs),
    /// Build round-robin groups
    Groups(groups_cmd::GroupsArgs),
    /// Compute round deadlines
    Deadlines(deadlines_cmd::DeadlinesArgs),
    /// Calculate group standings
    Standings(standings_cmd::StandingsArgs),
}

/// Deadline strategy as accepted on the command line
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum StrategyArg {
    Linear,
    #[default]
    Progressive,
    Balanced,
}

impl From<StrategyArg> for DeadlineStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Linear => DeadlineStrategy::Linear,
            StrategyArg::Progressive => DeadlineStrategy::Progressive,
            StrategyArg::Balanced => DeadlineStrategy::Balanced,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging (RUST_LOG overrides the default level)
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Draw(args) => draw_cmd::run(args, cli.seed, cli.pretty),
        Commands::Groups(args) => groups_cmd::run(args, cli.seed, cli.pretty),
        Commands::Deadlines(args) => deadlines_cmd::run(args, cli.pretty),
        Commands::Standings(args) => standings_cmd::run(args, cli.pretty),
    }
}
