//! Group standings
//!
//! Level 2 - Phases

use courtdraw_core::{ensure_unique_ids, Error, Match, Outcome, Player, PlayerId, Result, Side, Standing};
use rustc_hash::FxHashMap;

/// Points for a match win
pub const POINTS_PER_WIN: u32 = 2;

/// Rank a group from its matches
///
/// Only completed matches and walkovers count. Players are ordered by points,
/// then set difference, then game difference (all descending); players still
/// level keep their order in `players`.
///
/// # Arguments
/// * `matches` - The group's matches, any status
/// * `players` - Group members in group order
///
/// # Returns
/// One standing per player, best first
pub fn calculate_standings(matches: &[Match], players: &[Player]) -> Result<Vec<Standing>> {
    ensure_unique_ids(players)?;

    let index: FxHashMap<&PlayerId, usize> = players
        .iter()
        .enumerate()
        .map(|(i, p)| (&p.id, i))
        .collect();
    let mut standings: Vec<Standing> = players.iter().cloned().map(Standing::new).collect();

    for m in matches {
        let Some(outcome) = m.outcome()? else {
            continue;
        };
        let one = member_index(m, Side::Player1, &index)?;
        let two = member_index(m, Side::Player2, &index)?;
        record_outcome(&mut standings, one, two, outcome)?;
    }

    // Stable: residual ties keep group order
    standings.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.set_difference().cmp(&a.set_difference()))
            .then_with(|| b.game_difference().cmp(&a.game_difference()))
    });

    Ok(standings)
}

/// Fold one decided match into both players' standings
fn record_outcome(standings: &mut [Standing], one: usize, two: usize, outcome: Outcome) -> Result<()> {
    standings[one].matches += 1;
    standings[two].matches += 1;

    if let Outcome::Played { sets, games, .. } = outcome {
        let first = &mut standings[one];
        add(&mut first.sets_won, sets.0)?;
        add(&mut first.sets_lost, sets.1)?;
        add(&mut first.games_won, games.0)?;
        add(&mut first.games_lost, games.1)?;

        let second = &mut standings[two];
        add(&mut second.sets_won, sets.1)?;
        add(&mut second.sets_lost, sets.0)?;
        add(&mut second.games_won, games.1)?;
        add(&mut second.games_lost, games.0)?;
    }

    let (winner, loser) = match outcome.winner() {
        Side::Player1 => (one, two),
        Side::Player2 => (two, one),
    };
    standings[winner].wins += 1;
    standings[winner].points += POINTS_PER_WIN;
    standings[loser].losses += 1;
    Ok(())
}

fn add(total: &mut u32, amount: u32) -> Result<()> {
    *total = total
        .checked_add(amount)
        .ok_or_else(|| Error::invalid("set or game totals are out of range"))?;
    Ok(())
}

fn member_index(m: &Match, side: Side, index: &FxHashMap<&PlayerId, usize>) -> Result<usize> {
    let player = m.slot(side).player().ok_or_else(|| {
        Error::invalid(format!(
            "decided match in round {} match {} has no player on one side",
            m.round, m.match_number
        ))
    })?;
    index.get(&player.id).copied().ok_or_else(|| {
        Error::invalid(format!(
            "player {} in round {} match {} is not in the group",
            player.id, m.round, m.match_number
        ))
    })
}
