//! Single-elimination draw - filling round one
//!
//! Level 2 - Phases

use courtdraw_core::{ensure_unique_ids, Error, Match, Player, PlayerId, Result, Slot};
use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::seeding::{seed_and_bye_positions, MAX_SEEDS};
use crate::sizing::ensure_bracket_size;

/// Generate round-one matches for a knockout bracket
///
/// Seeds (ranked by their order in `seeded_ids`) go to their conventional
/// slots, byes are placed next, and the remaining players fill the leftover
/// slots in a random order drawn from `rng`.
///
/// # Arguments
/// * `players` - Every entrant, in registration order
/// * `seeded_ids` - Seeded entrants, best first
/// * `bracket_size` - Power-of-two number of slots, at least `players.len()`
/// * `rng` - Source of the unseeded shuffle
///
/// # Returns
/// `bracket_size / 2` matches for round one, numbered from 1
pub fn generate_draw<R: Rng>(
    players: &[Player],
    seeded_ids: &[PlayerId],
    bracket_size: usize,
    rng: &mut R,
) -> Result<Vec<Match>> {
    validate_entries(players, bracket_size)?;
    let by_id = validate_seeds(players, seeded_ids)?;

    if seeded_ids.len() > MAX_SEEDS {
        tracing::warn!(
            "{} seeds requested, only the top {} get seed slots; the rest are drawn unseeded",
            seeded_ids.len(),
            MAX_SEEDS
        );
    }

    let bye_count = bracket_size - players.len();
    let placement = seed_and_bye_positions(bracket_size, seeded_ids.len(), bye_count)?;

    let mut slots = vec![Slot::Pending; bracket_size];

    let placed_seeds: FxHashSet<&PlayerId> = seeded_ids
        .iter()
        .take(placement.seed_positions.len())
        .collect();
    for (rank, (&slot, id)) in placement.seed_positions.iter().zip(seeded_ids).enumerate() {
        slots[slot] = Slot::Player(by_id[id].seeded(rank as u32 + 1));
    }

    for &slot in &placement.bye_positions {
        slots[slot] = Slot::Bye;
    }

    let mut open_slots: Vec<usize> = (0..bracket_size).filter(|&i| slots[i].is_pending()).collect();
    open_slots.shuffle(rng);

    let unseeded = players.iter().filter(|p| !placed_seeds.contains(&p.id));
    for (slot, player) in open_slots.into_iter().zip(unseeded) {
        slots[slot] = Slot::Player(player.unseeded());
    }

    tracing::debug!(
        "Drew {} players into {} slots ({} seeds, {} byes)",
        players.len(),
        bracket_size,
        placement.seed_positions.len(),
        bye_count
    );

    Ok(pair_slots(&slots))
}

/// Pair slots `2i` and `2i + 1` into round-one match `i + 1`
fn pair_slots(slots: &[Slot]) -> Vec<Match> {
    slots
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| Match::new(1, i as u32 + 1, pair[0].clone(), pair[1].clone()))
        .collect()
}

fn validate_entries(players: &[Player], bracket_size: usize) -> Result<()> {
    if players.is_empty() {
        return Err(Error::invalid("cannot draw a bracket without players"));
    }
    ensure_bracket_size(bracket_size)?;
    if players.len() > bracket_size {
        return Err(Error::invalid(format!(
            "{} players do not fit in a bracket of {}",
            players.len(),
            bracket_size
        )));
    }
    ensure_unique_ids(players)
}

/// Index players by id, checking every seed is a known, distinct player
fn validate_seeds<'a>(
    players: &'a [Player],
    seeded_ids: &[PlayerId],
) -> Result<FxHashMap<&'a PlayerId, &'a Player>> {
    let by_id: FxHashMap<&PlayerId, &Player> = players.iter().map(|p| (&p.id, p)).collect();

    let mut seen = FxHashSet::default();
    for id in seeded_ids {
        if !by_id.contains_key(id) {
            return Err(Error::invalid(format!("seeded player {id} is not in the draw")));
        }
        if !seen.insert(id) {
            return Err(Error::invalid(format!("player {id} is seeded twice")));
        }
    }
    Ok(by_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn roster(n: usize) -> Vec<Player> {
        (1..=n)
            .map(|i| Player::new(format!("p{i}"), "Player", &i.to_string()))
            .collect()
    }

    fn ids(raw: &[&str]) -> Vec<PlayerId> {
        raw.iter().map(|&id| PlayerId::from(id)).collect()
    }

    fn slots(matches: &[Match]) -> Vec<&Slot> {
        matches.iter().flat_map(|m| [&m.player1, &m.player2]).collect()
    }

    #[test]
    fn test_full_bracket_without_byes() {
        let players = roster(8);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let matches = generate_draw(&players, &ids(&["p3", "p5"]), 8, &mut rng).unwrap();

        assert_eq!(matches.len(), 4);
        for (i, m) in matches.iter().enumerate() {
            assert_eq!(m.round, 1);
            assert_eq!(m.match_number, i as u32 + 1);
        }

        let first = matches[0].player1.player().unwrap();
        assert_eq!(first.id, PlayerId::from("p3"));
        assert_eq!(first.seed_number, Some(1));

        let last = matches[3].player2.player().unwrap();
        assert_eq!(last.id, PlayerId::from("p5"));
        assert_eq!(last.seed_number, Some(2));
    }

    #[test]
    fn test_seeds_receive_byes() {
        let players = roster(5);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let matches = generate_draw(&players, &ids(&["p1", "p2"]), 8, &mut rng).unwrap();

        assert_eq!(matches[0].player1.player().unwrap().id, PlayerId::from("p1"));
        assert!(matches[0].player2.is_bye());
        assert!(matches[3].player1.is_bye());
        assert_eq!(matches[3].player2.player().unwrap().id, PlayerId::from("p2"));

        let byes = slots(&matches).iter().filter(|s| s.is_bye()).count();
        assert_eq!(byes, 3);
    }

    #[test]
    fn test_every_player_placed_once() {
        let players = roster(11);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let matches = generate_draw(&players, &ids(&["p4", "p9", "p1"]), 16, &mut rng).unwrap();

        assert_eq!(matches.len(), 8);
        let all = slots(&matches);
        assert!(all.iter().all(|s| !s.is_pending()));

        let mut placed: Vec<&str> = all.iter().filter_map(|s| s.player()).map(|p| p.id.as_str()).collect();
        placed.sort_unstable();
        let mut expected: Vec<&str> = players.iter().map(|p| p.id.as_str()).collect();
        expected.sort_unstable();
        assert_eq!(placed, expected);
        assert_eq!(all.iter().filter(|s| s.is_bye()).count(), 5);
    }

    #[test]
    fn test_same_seed_same_draw() {
        let players = roster(13);
        let seeds = ids(&["p2", "p7"]);
        let a = generate_draw(&players, &seeds, 16, &mut ChaCha8Rng::seed_from_u64(77)).unwrap();
        let b = generate_draw(&players, &seeds, 16, &mut ChaCha8Rng::seed_from_u64(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unseeded_players_are_untagged() {
        let mut players = roster(4);
        players[2].is_seeded = true;
        players[2].seed_number = Some(9);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let matches = generate_draw(&players, &[], 4, &mut rng).unwrap();

        for slot in slots(&matches) {
            let player = slot.player().unwrap();
            assert!(!player.is_seeded);
            assert_eq!(player.seed_number, None);
        }
    }

    #[test]
    fn test_seeds_beyond_eight_drawn_unseeded() {
        let players = roster(16);
        let seeds: Vec<PlayerId> = players.iter().take(10).map(|p| p.id.clone()).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let matches = generate_draw(&players, &seeds, 16, &mut rng).unwrap();

        let all = slots(&matches);
        let seeded = all.iter().filter_map(|s| s.player()).filter(|p| p.is_seeded).count();
        assert_eq!(seeded, 8);

        let ninth = all
            .iter()
            .filter_map(|s| s.player())
            .find(|p| p.id == PlayerId::from("p9"))
            .unwrap();
        assert!(!ninth.is_seeded);
    }

    #[test]
    fn test_single_player_bracket() {
        let players = roster(1);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let matches = generate_draw(&players, &ids(&["p1"]), 2, &mut rng).unwrap();
        assert_eq!(matches.len(), 1);
        assert!(matches[0].player1.player().is_some());
        assert!(matches[0].player2.is_bye());
    }

    #[test]
    fn test_invalid_draws() {
        let players = roster(6);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        assert!(matches!(
            generate_draw(&players, &ids(&["nobody"]), 8, &mut rng),
            Err(Error::InvalidInput(_))
        ));
        assert!(generate_draw(&players, &ids(&["p1", "p1"]), 8, &mut rng).is_err());
        assert!(generate_draw(&players, &[], 4, &mut rng).is_err());
        assert!(generate_draw(&players, &[], 12, &mut rng).is_err());
        assert!(generate_draw(&[], &[], 8, &mut rng).is_err());

        let mut duplicated = roster(3);
        duplicated.push(duplicated[0].clone());
        assert!(generate_draw(&duplicated, &[], 4, &mut rng).is_err());
    }
}
