//! Player - a registered competitor

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Opaque player identity
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A competitor as handed to the engine
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Set by the draw when the player occupies a seed slot
    #[serde(default)]
    pub is_seeded: bool,
    /// 1-based rank among seeds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_number: Option<u32>,
}

impl Player {
    /// Create an unseeded player
    pub fn new(id: impl Into<PlayerId>, first_name: &str, last_name: &str) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            is_seeded: false,
            seed_number: None,
        }
    }

    /// "First Last", or the id when no name was registered
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.id.to_string()
        } else {
            name.to_string()
        }
    }

    /// Copy of this player tagged with a seed rank
    pub fn seeded(&self, rank: u32) -> Self {
        Self {
            is_seeded: true,
            seed_number: Some(rank),
            ..self.clone()
        }
    }

    /// Copy of this player with any seed tag cleared
    pub fn unseeded(&self) -> Self {
        Self {
            is_seeded: false,
            seed_number: None,
            ..self.clone()
        }
    }
}

/// Fail if two players share an id
pub fn ensure_unique_ids(players: &[Player]) -> Result<()> {
    let mut seen = FxHashSet::default();
    for player in players {
        if !seen.insert(&player.id) {
            return Err(Error::invalid(format!("duplicate player id: {}", player.id)));
        }
    }
    Ok(())
}
