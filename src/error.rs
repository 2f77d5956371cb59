//! Error types for table and lead operations.

use thiserror::Error;

use crate::game::{Action, Phase};

/// Errors that can occur when validating a wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WagerError {
    /// Bet input does not start with a number.
    #[error("bet is not a number")]
    NotANumber,
    /// Wager is under the table minimum.
    #[error("bet is below the table minimum of {minimum}")]
    BelowMinimum {
        /// The table minimum.
        minimum: usize,
    },
    /// Wager is more than the player holds.
    #[error("bet exceeds the balance of {balance}")]
    ExceedsBalance {
        /// The balance at the time of the bet.
        balance: usize,
    },
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// The wager was rejected.
    #[error("invalid wager: {0}")]
    InvalidWager(#[from] WagerError),
    /// A round is still being played.
    #[error("cannot start a round during {0}")]
    RoundInProgress(Phase),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not legal in the current phase.
    #[error("cannot {action} during {phase}")]
    IllegalTransition {
        /// The attempted action.
        action: Action,
        /// The phase the round was in.
        phase: Phase,
    },
}

/// Errors raised by a key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Stored data could not be encoded or decoded.
    #[cfg(feature = "std")]
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),
    /// Stored data could not be encoded or decoded.
    #[cfg(not(feature = "std"))]
    #[error("codec error: {0}")]
    Codec(serde_json::Error),
    /// The backing file could not be read or written.
    #[cfg(feature = "std")]
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while editing leads.
#[derive(Debug, Error)]
pub enum LeadError {
    /// Nothing to save: the required text was blank.
    #[error("lead has neither a url nor a note")]
    Empty,
    /// No lead at the given index.
    #[error("no lead at index {index} (have {len})")]
    NotFound {
        /// The requested index.
        index: usize,
        /// Number of leads.
        len: usize,
    },
    /// Persisting the list failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

// serde_json only implements `Error` with std, so the source link is std-only.
#[cfg(not(feature = "std"))]
impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Codec(err)
    }
}
