//! Courtdraw Core - Tournament data model
//!
//! This crate provides the types shared by the scheduling engine and its
//! collaborators:
//! - Players and their identities
//! - Bracket slots and matches (with per-set scores)
//! - Round-robin groups and standings
//! - Tournament lifecycle (status transitions, registration rules)
//! - The error type every engine operation returns

pub mod error;
pub mod fixture;
pub mod group;
pub mod lifecycle;
pub mod player;
pub mod standing;

// Re-exports for convenient access
pub use error::{Error, Result};
pub use fixture::{Match, MatchStatus, Outcome, SetScore, Side, Slot};
pub use group::Group;
pub use lifecycle::{RegistrationType, TournamentStatus};
pub use player::{ensure_unique_ids, Player, PlayerId};
pub use standing::Standing;
