//! Winner advancement contract
//!
//! The engine only builds empty later rounds. Whoever stores results calls
//! `record_result` when a match is decided and writes the returned winner
//! into the returned slot of the next round.

use courtdraw_core::{Error, Match, Result, Side, Slot};
use serde::Serialize;

/// Address of one side of one bracket match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SlotRef {
    pub round: u32,
    pub match_number: u32,
    pub side: Side,
}

/// Winner of a match and where it goes next
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Advancement {
    /// Occupant to write into `target`
    pub winner: Slot,
    /// Next-round slot; `None` when the match was the final
    pub target: Option<SlotRef>,
}

/// Slot fed by the winner of `match_number` in `round`
pub fn next_slot(round: u32, match_number: u32, total_rounds: u32) -> Option<SlotRef> {
    if round >= total_rounds || !in_bracket(round, match_number, total_rounds) {
        return None;
    }
    let side = if match_number % 2 == 1 {
        Side::Player1
    } else {
        Side::Player2
    };
    Some(SlotRef {
        round: round + 1,
        match_number: match_number.div_ceil(2),
        side,
    })
}

/// Work out the advancement for a bracket match
///
/// Round-one byes advance their opponent straight away; other matches advance
/// once completed or awarded as a walkover.
///
/// # Returns
/// `None` while the match is undecided
pub fn record_result(m: &Match, total_rounds: u32) -> Result<Option<Advancement>> {
    if !in_bracket(m.round, m.match_number, total_rounds) {
        return Err(Error::invalid(format!(
            "round {} match {} is outside a bracket of {} rounds",
            m.round, m.match_number, total_rounds
        )));
    }

    let winner = match (&m.player1, &m.player2) {
        (Slot::Bye, Slot::Bye) => Slot::Bye,
        (Slot::Bye, Slot::Player(p)) | (Slot::Player(p), Slot::Bye) => Slot::Player(p.clone()),
        _ => match m.outcome()? {
            Some(outcome) => m.slot(outcome.winner()).clone(),
            None => return Ok(None),
        },
    };

    Ok(Some(Advancement {
        winner,
        target: next_slot(m.round, m.match_number, total_rounds),
    }))
}

/// Whether `match_number` exists in `round` of a bracket with `total_rounds`
fn in_bracket(round: u32, match_number: u32, total_rounds: u32) -> bool {
    if round == 0 || round > total_rounds || match_number == 0 {
        return false;
    }
    let matches_in_round = 1u64.checked_shl(total_rounds - round).unwrap_or(u64::MAX);
    u64::from(match_number) <= matches_in_round
}
