//! Group - a round-robin pool

use serde::{Deserialize, Serialize};

use crate::fixture::Match;
use crate::player::Player;

/// Players drawn into one round-robin pool, with their fixtures
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// 1-based group number
    pub number: usize,
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<Match>,
}

impl Group {
    pub fn new(number: usize, players: Vec<Player>) -> Self {
        Self {
            number,
            players,
            matches: Vec::new(),
        }
    }

    /// Highest round number among the group's matches
    pub fn round_count(&self) -> u32 {
        self.matches.iter().map(|m| m.round).max().unwrap_or(0)
    }

    /// Matches scheduled for one round
    pub fn round(&self, round: u32) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(move |m| m.round == round)
    }
}
