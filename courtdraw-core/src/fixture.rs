//! Matches and the slots they are played between

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::player::{Player, PlayerId};

/// Occupant of one bracket position
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "player", rename_all = "snake_case")]
pub enum Slot {
    /// A registered competitor
    Player(Player),
    /// Automatic advance for the opposite side
    Bye,
    /// Not decided yet (empty during the draw, winner-to-be in later rounds)
    Pending,
}

impl Slot {
    pub fn player(&self) -> Option<&Player> {
        match self {
            Slot::Player(player) => Some(player),
            _ => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Slot::Bye)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Slot::Pending)
    }
}

/// One side of a match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player1,
    Player2,
}

/// Match status as stored by the tournament's owner.
///
/// Only `Completed` and `Walkover` carry a result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    AwaitingDate,
    Scheduled,
    Overdue,
    Completed,
    Walkover,
}

impl MatchStatus {
    /// Whether the match has a result that counts
    pub fn is_decided(self) -> bool {
        matches!(self, MatchStatus::Completed | MatchStatus::Walkover)
    }
}

/// Games won by each side in one set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore {
    pub player1: u32,
    pub player2: u32,
}

impl SetScore {
    pub fn new(player1: u32, player2: u32) -> Self {
        Self { player1, player2 }
    }

    /// Side that took the set, `None` when the games are level
    pub fn winner(&self) -> Option<Side> {
        if self.player1 > self.player2 {
            Some(Side::Player1)
        } else if self.player2 > self.player1 {
            Some(Side::Player2)
        } else {
            None
        }
    }
}

/// Result of a decided match
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Played out; set and game totals are (player1, player2)
    Played {
        winner: Side,
        sets: (u32, u32),
        games: (u32, u32),
    },
    /// Awarded without play
    Walkover { winner: Side },
}

impl Outcome {
    pub fn winner(&self) -> Side {
        match *self {
            Outcome::Played { winner, .. } | Outcome::Walkover { winner } => winner,
        }
    }
}

/// A single fixture in a bracket or group
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// 1-based round number
    pub round: u32,
    /// 1-based position within the round
    pub match_number: u32,
    pub player1: Slot,
    pub player2: Slot,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub status: MatchStatus,
    /// Per-set game scores, filled in by whoever records results
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub score: Vec<SetScore>,
    /// Recorded winner (walkovers)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<PlayerId>,
}

impl Match {
    /// Create a pending match with no deadline
    pub fn new(round: u32, match_number: u32, player1: Slot, player2: Slot) -> Self {
        Self {
            round,
            match_number,
            player1,
            player2,
            deadline: None,
            status: MatchStatus::Pending,
            score: Vec::new(),
            winner: None,
        }
    }

    /// Create an empty later-round match
    pub fn placeholder(round: u32, match_number: u32) -> Self {
        Self::new(round, match_number, Slot::Pending, Slot::Pending)
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn slot(&self, side: Side) -> &Slot {
        match side {
            Side::Player1 => &self.player1,
            Side::Player2 => &self.player2,
        }
    }

    /// Side the given player occupies, if any
    pub fn side_of(&self, id: &PlayerId) -> Option<Side> {
        if self.player1.player().is_some_and(|p| &p.id == id) {
            Some(Side::Player1)
        } else if self.player2.player().is_some_and(|p| &p.id == id) {
            Some(Side::Player2)
        } else {
            None
        }
    }

    /// Result of the match, `None` while it is not decided.
    ///
    /// Fails when a decided match is malformed: a walkover whose winner is not
    /// one of its players, or a completed match without sets, with a level set,
    /// or with both sides on the same number of sets.
    pub fn outcome(&self) -> Result<Option<Outcome>> {
        if !self.status.is_decided() {
            return Ok(None);
        }

        if self.status == MatchStatus::Walkover {
            let winner = self
                .winner
                .as_ref()
                .and_then(|id| self.side_of(id))
                .ok_or_else(|| {
                    Error::invalid(format!(
                        "walkover in round {} match {} has no winner among its players",
                        self.round, self.match_number
                    ))
                })?;
            return Ok(Some(Outcome::Walkover { winner }));
        }

        self.played_outcome().map(Some)
    }

    fn played_outcome(&self) -> Result<Outcome> {
        if self.score.is_empty() {
            return Err(Error::invalid(format!(
                "completed match in round {} match {} has no set scores",
                self.round, self.match_number
            )));
        }

        let mut sets = (0u32, 0u32);
        let mut games = (0u32, 0u32);
        for set in &self.score {
            match set.winner() {
                Some(Side::Player1) => sets.0 += 1,
                Some(Side::Player2) => sets.1 += 1,
                None => {
                    return Err(Error::invalid(format!(
                        "set score {}-{} in round {} match {} is level",
                        set.player1, set.player2, self.round, self.match_number
                    )))
                }
            }
            games.0 = self.add_games(games.0, set.player1)?;
            games.1 = self.add_games(games.1, set.player2)?;
        }

        let winner = if sets.0 > sets.1 {
            Side::Player1
        } else if sets.1 > sets.0 {
            Side::Player2
        } else {
            return Err(Error::invalid(format!(
                "completed match in round {} match {} has no majority of sets",
                self.round, self.match_number
            )));
        };

        Ok(Outcome::Played { winner, sets, games })
    }

    fn add_games(&self, total: u32, games: u32) -> Result<u32> {
        total.checked_add(games).ok_or_else(|| {
            Error::invalid(format!(
                "game total in round {} match {} is out of range",
                self.round, self.match_number
            ))
        })
    }
}
