//! Round deadlines - dividing a date range between rounds
//!
//! Level 3 - Steps
//!
//! Three strategies:
//! - Linear: every round gets the same share of days
//! - Progressive: fixed per-round weights that front-load early rounds
//! - Balanced: weights follow match counts, scaled up for later rounds
//!
//! Days are rounded up per round, so the last deadline may land a day or two
//! past the end date.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use courtdraw_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::config::DeadlineStrategy;

/// Tolerance when checking that a weight vector sums to one
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Per-round weights for the progressive strategy, keyed by round count
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<usize, Vec<f64>>", into = "BTreeMap<usize, Vec<f64>>")]
pub struct WeightTable {
    weights: BTreeMap<usize, Vec<f64>>,
}

impl WeightTable {
    /// Build a table, validating every entry.
    ///
    /// Each vector must have one positive weight per round and sum to 1.
    pub fn new(weights: BTreeMap<usize, Vec<f64>>) -> Result<Self> {
        for (&rounds, entry) in &weights {
            if entry.len() != rounds {
                return Err(Error::UnsupportedConfiguration(format!(
                    "weights for {rounds} rounds have {} entries",
                    entry.len()
                )));
            }
            if entry.iter().any(|&w| !(w > 0.0)) {
                return Err(Error::UnsupportedConfiguration(format!(
                    "weights for {rounds} rounds must all be positive"
                )));
            }
            let sum: f64 = entry.iter().sum();
            if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
                return Err(Error::UnsupportedConfiguration(format!(
                    "weights for {rounds} rounds sum to {sum}, expected 1"
                )));
            }
        }
        Ok(Self { weights })
    }

    /// Weights for 8- to 128-player brackets (3 to 7 rounds)
    pub fn standard() -> Self {
        let weights = BTreeMap::from([
            (3, vec![0.33, 0.33, 0.34]),
            (4, vec![0.28, 0.24, 0.24, 0.24]),
            (5, vec![0.25, 0.20, 0.20, 0.18, 0.17]),
            (6, vec![0.22, 0.18, 0.16, 0.16, 0.14, 0.14]),
            (7, vec![0.20, 0.16, 0.14, 0.14, 0.13, 0.12, 0.11]),
        ]);
        Self { weights }
    }

    pub fn get(&self, rounds: usize) -> Option<&[f64]> {
        self.weights.get(&rounds).map(Vec::as_slice)
    }

    pub fn round_counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.weights.keys().copied()
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<BTreeMap<usize, Vec<f64>>> for WeightTable {
    type Error = Error;

    fn try_from(weights: BTreeMap<usize, Vec<f64>>) -> Result<Self> {
        Self::new(weights)
    }
}

impl From<WeightTable> for BTreeMap<usize, Vec<f64>> {
    fn from(table: WeightTable) -> Self {
        table.weights
    }
}

// ============================================================================
// Strategy dispatch
// ============================================================================

/// Deadlines for `num_rounds` rounds between `start` and `end`
///
/// # Arguments
/// * `start` - First day of play
/// * `end` - Last day of play, must be after `start`
/// * `num_rounds` - Number of rounds to schedule
/// * `strategy` - How days are shared between rounds
/// * `table` - Weights used by the progressive strategy
///
/// # Returns
/// One strictly increasing deadline per round
pub fn calculate_deadlines(
    start: NaiveDate,
    end: NaiveDate,
    num_rounds: usize,
    strategy: DeadlineStrategy,
    table: &WeightTable,
) -> Result<Vec<NaiveDate>> {
    match strategy {
        DeadlineStrategy::Linear => linear_deadlines(start, end, num_rounds),
        DeadlineStrategy::Progressive => progressive_deadlines(start, end, num_rounds, table),
        DeadlineStrategy::Balanced => balanced_deadlines(start, end, num_rounds),
    }
}

/// Equal share of the range per round, each deadline measured from `start`.
///
/// When the range has fewer days than rounds, a deadline is pushed to the
/// day after the previous one.
pub fn linear_deadlines(start: NaiveDate, end: NaiveDate, num_rounds: usize) -> Result<Vec<NaiveDate>> {
    let total_days = total_days(start, end)?;
    if num_rounds == 0 {
        return Ok(Vec::new());
    }

    let days_per_round = total_days as f64 / num_rounds as f64;
    let mut previous = 0u64;
    (0..num_rounds)
        .map(|i| {
            let offset = (days_per_round * (i + 1) as f64).ceil() as u64;
            let offset = offset.max(previous + 1);
            previous = offset;
            add_days(start, offset)
        })
        .collect()
}

/// Weighted share per round from the table; rounds without an entry fall
/// back to linear deadlines
pub fn progressive_deadlines(
    start: NaiveDate,
    end: NaiveDate,
    num_rounds: usize,
    table: &WeightTable,
) -> Result<Vec<NaiveDate>> {
    let total_days = total_days(start, end)?;

    match table.get(num_rounds) {
        Some(weights) => cumulative_deadlines(start, total_days, weights),
        None => {
            tracing::warn!(
                "No progressive weights for {} rounds, using linear deadlines",
                num_rounds
            );
            linear_deadlines(start, end, num_rounds)
        }
    }
}

/// Share per round proportional to its match count, scaled by a round
/// importance that grows from 1.0 (first round) to 1.5 (final)
pub fn balanced_deadlines(start: NaiveDate, end: NaiveDate, num_rounds: usize) -> Result<Vec<NaiveDate>> {
    let total_days = total_days(start, end)?;
    if num_rounds == 0 {
        return Ok(Vec::new());
    }

    let weights = balanced_weights(num_rounds);
    cumulative_deadlines(start, total_days, &weights)
}

// ============================================================================
// Level 4 - Utilities
// ============================================================================

/// Normalized balanced weights for a knockout of `num_rounds` rounds
///
/// Match counts are taken relative to the first round (1, 1/2, 1/4, ...) so
/// long brackets underflow towards zero instead of overflowing.
fn balanced_weights(num_rounds: usize) -> Vec<f64> {
    let mut matches = 1.0f64;
    let raw: Vec<f64> = (0..num_rounds)
        .map(|i| {
            let importance = if num_rounds > 1 {
                1.0 + (i as f64 / (num_rounds - 1) as f64) * 0.5
            } else {
                1.0
            };
            let weight = matches * importance;
            matches *= 0.5;
            weight
        })
        .collect();

    let sum: f64 = raw.iter().sum();
    raw.into_iter().map(|w| w / sum).collect()
}

/// Each round takes `ceil(total_days * weight)` days after the previous one,
/// and never less than a day
fn cumulative_deadlines(start: NaiveDate, total_days: u64, weights: &[f64]) -> Result<Vec<NaiveDate>> {
    let mut offset = 0u64;
    weights
        .iter()
        .map(|&weight| {
            let days = (total_days as f64 * weight).ceil().max(1.0) as u64;
            offset = offset
                .checked_add(days)
                .ok_or_else(|| Error::invalid("deadline offset is out of range"))?;
            add_days(start, offset)
        })
        .collect()
}

/// Whole days from `start` to `end`, which must be later
fn total_days(start: NaiveDate, end: NaiveDate) -> Result<u64> {
    if end <= start {
        return Err(Error::invalid(format!(
            "end date {end} must be after start date {start}"
        )));
    }
    Ok((end - start).num_days() as u64)
}

fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| Error::invalid(format!("{date} plus {days} days is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn strictly_increasing(dates: &[NaiveDate]) -> bool {
        dates.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn test_linear_deadlines() {
        let deadlines = linear_deadlines(date(2026, 1, 1), date(2026, 1, 31), 3).unwrap();
        assert_eq!(
            deadlines,
            vec![date(2026, 1, 11), date(2026, 1, 21), date(2026, 1, 31)]
        );
    }

    #[test]
    fn test_linear_short_range_still_increases() {
        let start = date(2026, 1, 1);
        let deadlines = linear_deadlines(start, date(2026, 1, 4), 7).unwrap();
        assert_eq!(deadlines.len(), 7);
        assert_eq!(deadlines[0], date(2026, 1, 2));
        assert!(strictly_increasing(&deadlines));
    }

    #[test]
    fn test_progressive_rounding_can_pass_end_date() {
        // 30 days: ceil(9.9) + ceil(9.9) + ceil(10.2) = 31
        let end = date(2026, 1, 31);
        let deadlines = progressive_deadlines(date(2026, 1, 1), end, 3, &WeightTable::standard()).unwrap();
        assert_eq!(
            deadlines,
            vec![date(2026, 1, 11), date(2026, 1, 21), date(2026, 2, 1)]
        );
        assert!(deadlines[2] > end);
    }

    #[test]
    fn test_progressive_falls_back_to_linear() {
        let start = date(2026, 3, 1);
        let end = date(2026, 9, 1);
        let table = WeightTable::standard();
        assert_eq!(
            progressive_deadlines(start, end, 9, &table).unwrap(),
            linear_deadlines(start, end, 9).unwrap()
        );
        assert_eq!(
            progressive_deadlines(start, end, 2, &table).unwrap(),
            linear_deadlines(start, end, 2).unwrap()
        );
    }

    #[test]
    fn test_balanced_deadlines() {
        // Weights 4 x 1.0, 2 x 1.25, 1 x 1.5 normalize to 1/2, 5/16, 3/16
        let deadlines = balanced_deadlines(date(2026, 1, 1), date(2026, 2, 2), 3).unwrap();
        assert_eq!(
            deadlines,
            vec![date(2026, 1, 17), date(2026, 1, 27), date(2026, 2, 2)]
        );
    }

    #[test]
    fn test_long_brackets_still_increase() {
        let start = date(2026, 1, 1);
        let end = date(2030, 1, 1);
        let table = WeightTable::standard();
        for strategy in [
            DeadlineStrategy::Linear,
            DeadlineStrategy::Progressive,
            DeadlineStrategy::Balanced,
        ] {
            let deadlines = calculate_deadlines(start, end, 1100, strategy, &table).unwrap();
            assert_eq!(deadlines.len(), 1100);
            assert!(deadlines[0] > start, "{strategy:?}");
            assert!(strictly_increasing(&deadlines), "{strategy:?}");
        }
    }

    #[test]
    fn test_balanced_weights_stay_finite() {
        let weights = balanced_weights(2000);
        assert!(weights.iter().all(|w| w.is_finite() && *w >= 0.0));
        let sum: f64 = weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_balanced_single_round() {
        let deadlines = balanced_deadlines(date(2026, 1, 1), date(2026, 1, 8), 1).unwrap();
        assert_eq!(deadlines, vec![date(2026, 1, 8)]);
    }

    #[test]
    fn test_all_strategies_increasing_for_one_to_seven_rounds() {
        let start = date(2026, 1, 1);
        let end = date(2026, 3, 1);
        let table = WeightTable::standard();
        for strategy in [
            DeadlineStrategy::Linear,
            DeadlineStrategy::Progressive,
            DeadlineStrategy::Balanced,
        ] {
            for rounds in 1..=7 {
                let deadlines = calculate_deadlines(start, end, rounds, strategy, &table).unwrap();
                assert_eq!(deadlines.len(), rounds, "{strategy:?} with {rounds} rounds");
                assert!(deadlines[0] > start);
                assert!(strictly_increasing(&deadlines), "{strategy:?} with {rounds} rounds");
            }
        }
    }

    #[test]
    fn test_rejects_inverted_range() {
        let day = date(2026, 5, 5);
        for strategy in [
            DeadlineStrategy::Linear,
            DeadlineStrategy::Progressive,
            DeadlineStrategy::Balanced,
        ] {
            let result = calculate_deadlines(day, day, 3, strategy, &WeightTable::standard());
            assert!(matches!(result, Err(Error::InvalidInput(_))));
        }
    }

    #[test]
    fn test_zero_rounds() {
        let deadlines = linear_deadlines(date(2026, 1, 1), date(2026, 1, 2), 0).unwrap();
        assert!(deadlines.is_empty());
    }

    #[test]
    fn test_standard_table_is_valid() {
        let table = WeightTable::standard();
        let rebuilt = WeightTable::new(table.clone().into()).unwrap();
        assert_eq!(rebuilt, table);
        assert_eq!(table.round_counts().collect::<Vec<_>>(), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_weight_table_validation() {
        let wrong_len = BTreeMap::from([(3, vec![0.5, 0.5])]);
        assert!(matches!(
            WeightTable::new(wrong_len),
            Err(Error::UnsupportedConfiguration(_))
        ));

        let wrong_sum = BTreeMap::from([(2, vec![0.5, 0.6])]);
        assert!(WeightTable::new(wrong_sum).is_err());

        let negative = BTreeMap::from([(2, vec![1.5, -0.5])]);
        assert!(WeightTable::new(negative).is_err());
    }

    #[test]
    fn test_weight_table_from_json() {
        let table: WeightTable = serde_json::from_str(r#"{"2": [0.6, 0.4]}"#).unwrap();
        assert_eq!(table.get(2), Some(&[0.6, 0.4][..]));

        let invalid = serde_json::from_str::<WeightTable>(r#"{"2": [0.6, 0.6]}"#);
        assert!(invalid.is_err());
    }
}
