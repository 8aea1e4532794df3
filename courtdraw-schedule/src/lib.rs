//! Courtdraw Schedule - brackets, groups, deadlines and standings
//!
//! This crate turns a roster into a playable tournament:
//! - Knockout draws with seeds and byes
//! - Round-robin groups scheduled with the circle method
//! - Deadline strategies for spreading rounds over a date range
//! - Group standings from recorded results
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: build_single_elimination, build_round_robin (orchestration)
//! - Level 2: generate_draw, build_bracket, generate_group_matches, calculate_standings (phases)
//! - Level 3: seed_and_bye_positions, calculate_deadlines (steps)
//! - Level 4: sizing, configuration

pub mod advancement;
mod bracket;
mod config;
pub mod deadlines;
mod draw;
mod round_robin;
pub mod seeding;
mod sizing;
mod standings;
mod tournament;

pub use advancement::{next_slot, record_result, Advancement, SlotRef};
pub use bracket::build_bracket;
pub use config::{DeadlineStrategy, DrawConfig, GroupConfig, DEFAULT_GROUP_SIZE};
pub use deadlines::{calculate_deadlines, WeightTable};
pub use draw::generate_draw;
pub use round_robin::{
    full_round_count, generate_group_matches, generate_groups, round_robin_deadlines, scheduled_round_count,
};
pub use seeding::{seed_and_bye_positions, Placement, MAX_SEEDS};
pub use sizing::{bracket_size, round_count};
pub use standings::{calculate_standings, POINTS_PER_WIN};
pub use tournament::{build_round_robin, build_single_elimination, RoundRobin, SingleElimination};
