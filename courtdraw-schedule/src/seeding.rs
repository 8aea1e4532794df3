//! Seed and bye placement
//!
//! Level 3 - Steps
//!
//! Seeds go to conventional slots (top of the first quarter, bottom of the
//! last, then the tops of the inner quarters and eighths). Byes go first to
//! the seeds' first-round opponents, then are spread evenly over what is left.

use courtdraw_core::{Error, Result};
use serde::Serialize;

use crate::sizing::ensure_bracket_size;

/// Seeds beyond this rank have no conventional slot and are drawn unseeded
pub const MAX_SEEDS: usize = 8;

/// Slot indices reserved for seeds (in rank order) and byes
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Placement {
    pub seed_positions: Vec<usize>,
    pub bye_positions: Vec<usize>,
}

/// Conventional slot for the seed at 0-based `rank`, `None` beyond `MAX_SEEDS`
pub fn conventional_slot(bracket_size: usize, rank: usize) -> Option<usize> {
    let slot = match rank {
        0 => 0,
        1 => bracket_size - 1,
        2 => bracket_size / 4,
        3 => bracket_size / 2,
        4 => bracket_size / 8,
        5 => bracket_size * 7 / 8,
        6 => bracket_size * 5 / 8,
        7 => bracket_size * 3 / 8,
        _ => return None,
    };
    Some(slot)
}

/// Compute seed slots and bye slots for a bracket
///
/// # Arguments
/// * `bracket_size` - Power-of-two number of slots
/// * `seed_count` - Number of seeds (only the first `MAX_SEEDS` are placed)
/// * `bye_count` - Number of byes to hand out
///
/// # Returns
/// Disjoint seed and bye positions, each within `0..bracket_size`
pub fn seed_and_bye_positions(
    bracket_size: usize,
    seed_count: usize,
    bye_count: usize,
) -> Result<Placement> {
    ensure_bracket_size(bracket_size)?;

    let seed_count = seed_count.min(MAX_SEEDS);
    if seed_count + bye_count > bracket_size {
        return Err(Error::invalid(format!(
            "{seed_count} seeds and {bye_count} byes do not fit in a bracket of {bracket_size}"
        )));
    }

    let mut taken = vec![false; bracket_size];
    let mut seeded_pairs = vec![false; bracket_size / 2];

    let seed_positions: Vec<usize> = (0..seed_count)
        .filter_map(|rank| conventional_slot(bracket_size, rank))
        .map(|conventional| {
            let slot = place_seed(conventional, &taken, &seeded_pairs);
            taken[slot] = true;
            seeded_pairs[slot / 2] = true;
            slot
        })
        .collect();

    let mut bye_positions = Vec::with_capacity(bye_count);

    // Seeds' first-round opponents get the byes first
    for &seed_slot in seed_positions.iter().take(bye_count) {
        let opponent = opponent_slot(seed_slot);
        if !taken[opponent] {
            taken[opponent] = true;
            bye_positions.push(opponent);
        }
    }

    let remaining = bye_count - bye_positions.len();
    if remaining > 0 {
        let available: Vec<usize> = (0..bracket_size).filter(|&slot| !taken[slot]).collect();
        let spacing = available.len() / remaining;
        bye_positions.extend((0..remaining).map(|i| available[i * spacing]));
    }

    Ok(Placement {
        seed_positions,
        bye_positions,
    })
}

/// Slot paired with `slot` in round one
pub fn opponent_slot(slot: usize) -> usize {
    if slot % 2 == 0 {
        slot + 1
    } else {
        slot - 1
    }
}

/// Pick the slot for one seed given the seeds already placed.
///
/// The conventional slot wins when its first-round pair has no seed yet.
/// Otherwise the seed moves to the nearest seed-free pair, keeping the
/// conventional slot's parity. With every pair already seeded, it takes the
/// conventional slot or the nearest free one.
fn place_seed(conventional: usize, taken: &[bool], seeded_pairs: &[bool]) -> usize {
    let pair = conventional / 2;
    if !seeded_pairs[pair] {
        return conventional;
    }

    let parity = conventional % 2;
    let pairs = seeded_pairs.len();
    for distance in 1..pairs {
        let lower = pair.checked_sub(distance);
        let upper = Some(pair + distance).filter(|&p| p < pairs);
        for candidate in [lower, upper].into_iter().flatten() {
            if !seeded_pairs[candidate] {
                return candidate * 2 + parity;
            }
        }
    }

    if !taken[conventional] {
        return conventional;
    }
    nearest_free_slot(conventional, taken)
}

fn nearest_free_slot(from: usize, taken: &[bool]) -> usize {
    for distance in 1..taken.len() {
        if let Some(slot) = from.checked_sub(distance) {
            if !taken[slot] {
                return slot;
            }
        }
        let slot = from + distance;
        if slot < taken.len() && !taken[slot] {
            return slot;
        }
    }
    // Callers guarantee a free slot exists
    from
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_conventional_slots_32() {
        let placement = seed_and_bye_positions(32, 8, 0).unwrap();
        assert_eq!(placement.seed_positions, vec![0, 31, 8, 16, 4, 28, 20, 12]);
        assert!(placement.bye_positions.is_empty());
    }

    #[test]
    fn test_conventional_slot_beyond_eight() {
        assert_eq!(conventional_slot(64, 0), Some(0));
        assert_eq!(conventional_slot(64, 7), Some(24));
        assert_eq!(conventional_slot(64, MAX_SEEDS), None);
        assert_eq!(conventional_slot(64, 100), None);
    }

    #[test]
    fn test_seed_positions_progressive() {
        for seeds in 0..=8 {
            let placement = seed_and_bye_positions(64, seeds, 0).unwrap();
            assert_eq!(placement.seed_positions.len(), seeds);
        }
    }

    #[test]
    fn test_seeds_capped_at_eight() {
        let placement = seed_and_bye_positions(64, 12, 0).unwrap();
        assert_eq!(placement.seed_positions.len(), MAX_SEEDS);
    }

    #[test]
    fn test_byes_go_to_seeds_first() {
        // 13 players in 16 slots: three byes, four seeds
        let placement = seed_and_bye_positions(16, 4, 3).unwrap();
        assert_eq!(placement.seed_positions, vec![0, 15, 4, 8]);
        assert_eq!(placement.bye_positions, vec![1, 14, 5]);
    }

    #[test]
    fn test_remaining_byes_are_spread() {
        // 10 players in 16 slots: six byes, two seeds
        let placement = seed_and_bye_positions(16, 2, 6).unwrap();
        assert_eq!(placement.bye_positions[..2], [1, 14]);

        // 12 unused slots, 4 byes left: every third unused slot
        let available: Vec<usize> = (2..14).collect();
        assert_eq!(
            placement.bye_positions[2..],
            [available[0], available[3], available[6], available[9]]
        );
    }

    #[test]
    fn test_sixth_seed_avoids_second_seed_pair_in_16() {
        // The conventional 7/8 slot (14) shares a pair with seed 2 (15)
        let placement = seed_and_bye_positions(16, 8, 8).unwrap();
        assert_eq!(placement.seed_positions, vec![0, 15, 4, 8, 2, 12, 10, 6]);

        let pairs: FxHashSet<usize> = placement.seed_positions.iter().map(|s| s / 2).collect();
        assert_eq!(pairs.len(), 8, "every seed should open against a bye");
        for (&seed, &bye) in placement.seed_positions.iter().zip(&placement.bye_positions) {
            assert_eq!(opponent_slot(seed), bye);
        }
    }

    #[test]
    fn test_tiny_bracket_with_more_seeds_than_pairs() {
        // 3 players, all seeded, one bye
        let placement = seed_and_bye_positions(4, 3, 1).unwrap();
        assert_eq!(placement.seed_positions, vec![0, 3, 1]);
        assert_eq!(placement.bye_positions, vec![2]);
    }

    #[test]
    fn test_rejects_overfull_bracket() {
        assert!(matches!(
            seed_and_bye_positions(8, 4, 5),
            Err(Error::InvalidInput(_))
        ));
        assert!(seed_and_bye_positions(8, 0, 9).is_err());
        assert!(seed_and_bye_positions(6, 0, 0).is_err());
    }

    #[test]
    fn test_opponent_slot() {
        assert_eq!(opponent_slot(0), 1);
        assert_eq!(opponent_slot(1), 0);
        assert_eq!(opponent_slot(14), 15);
    }

    fn placement_inputs() -> impl Strategy<Value = (usize, usize, usize)> {
        (1u32..=7, 0usize..=8).prop_flat_map(|(k, seeds)| {
            let size = 1usize << k;
            let seeds = seeds.min(size);
            (Just(size), Just(seeds), 0..=(size - seeds))
        })
    }

    proptest! {
        #[test]
        fn test_positions_disjoint_and_in_range((size, seeds, byes) in placement_inputs()) {
            let placement = seed_and_bye_positions(size, seeds, byes).unwrap();

            prop_assert_eq!(placement.seed_positions.len(), seeds.min(MAX_SEEDS));
            prop_assert_eq!(placement.bye_positions.len(), byes);

            let mut seen = FxHashSet::default();
            for &slot in placement.seed_positions.iter().chain(&placement.bye_positions) {
                prop_assert!(slot < size, "slot {} out of range for {}", slot, size);
                prop_assert!(seen.insert(slot), "slot {} used twice", slot);
            }
        }
    }
}
