//! Bracket structure - the full knockout skeleton
//!
//! Level 2 - Phases
//!
//! Later rounds are placeholders: filling in winners is the job of whoever
//! records results (see `advancement`).

use chrono::NaiveDate;
use courtdraw_core::{Error, Match, Result};

use crate::config::DeadlineStrategy;
use crate::deadlines::{calculate_deadlines, WeightTable};
use crate::sizing::round_count;

/// Expand round one into every round of the bracket, with deadlines
///
/// # Arguments
/// * `round_one` - Matches from `generate_draw`
/// * `bracket_size` - Slots in the bracket
/// * `start`, `end` - Date range for the whole bracket
/// * `strategy` - Deadline distribution between rounds
/// * `table` - Progressive weights
///
/// # Returns
/// One vector of matches per round, first round first
pub fn build_bracket(
    round_one: Vec<Match>,
    bracket_size: usize,
    start: NaiveDate,
    end: NaiveDate,
    strategy: DeadlineStrategy,
    table: &WeightTable,
) -> Result<Vec<Vec<Match>>> {
    let rounds = round_count(bracket_size)?;
    if round_one.len() != bracket_size / 2 {
        return Err(Error::invalid(format!(
            "a bracket of {} needs {} first-round matches, got {}",
            bracket_size,
            bracket_size / 2,
            round_one.len()
        )));
    }

    let deadlines = calculate_deadlines(start, end, rounds as usize, strategy, table)?;

    let mut bracket: Vec<Vec<Match>> = Vec::with_capacity(rounds as usize);
    bracket.push(
        round_one
            .into_iter()
            .map(|m| m.with_deadline(deadlines[0]))
            .collect(),
    );

    for round in 2..=rounds {
        let matches_in_round = bracket_size >> round;
        let deadline = deadlines[round as usize - 1];
        bracket.push(
            (1..=matches_in_round as u32)
                .map(|number| Match::placeholder(round, number).with_deadline(deadline))
                .collect(),
        );
    }

    Ok(bracket)
}
