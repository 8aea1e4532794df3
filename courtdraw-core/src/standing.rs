//! Standing - one player's record within a group

use serde::{Deserialize, Serialize};

use crate::player::Player;

/// Aggregated record of a player in a round-robin group
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: Player,
    /// Decided matches played
    pub matches: u32,
    pub wins: u32,
    pub losses: u32,
    /// Two per win
    pub points: u32,
    pub sets_won: u32,
    pub sets_lost: u32,
    pub games_won: u32,
    pub games_lost: u32,
}

impl Standing {
    /// Zeroed standing for a player
    pub fn new(player: Player) -> Self {
        Self {
            player,
            matches: 0,
            wins: 0,
            losses: 0,
            points: 0,
            sets_won: 0,
            sets_lost: 0,
            games_won: 0,
            games_lost: 0,
        }
    }

    pub fn set_difference(&self) -> i64 {
        self.sets_won as i64 - self.sets_lost as i64
    }

    pub fn game_difference(&self) -> i64 {
        self.games_won as i64 - self.games_lost as i64
    }

    /// Win rate
    pub fn win_rate(&self) -> f32 {
        if self.matches == 0 {
            0.0
        } else {
            self.wins as f32 / self.matches as f32
        }
    }
}
