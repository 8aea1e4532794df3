//! Error type shared by every engine operation

use crate::lifecycle::TournamentStatus;

/// Errors returned by the scheduling engine
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    #[error("cannot move tournament from {from} to {to}")]
    InvalidTransition {
        from: TournamentStatus,
        to: TournamentStatus,
    },
}

impl Error {
    /// Shorthand for an `InvalidInput` error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
