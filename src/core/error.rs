//! Error kinds surfaced by core operations.
//!
//! Every gameplay error is recoverable: the operation that returned it left
//! the game state untouched, and the caller decides how to present it.

use thiserror::Error;

use super::state::Phase;

/// A refused operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The action is not allowed in the current phase.
    #[error("cannot do that during the {actual} phase (requires {expected})")]
    InvalidPhase { expected: Phase, actual: Phase },

    /// A purchase costs more credit than is available.
    #[error("need {cost} credit (have {available})")]
    InsufficientFunds { cost: u32, available: u32 },

    /// A referenced card, hand position, market slot or catalog key does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A draw was requested with both deck and discard empty.
    #[error("no cards to draw")]
    EmptySource,

    /// The session configuration is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GameError {
    pub(crate) fn not_found(what: impl std::fmt::Display) -> Self {
        Self::NotFound(what.to_string())
    }
}

/// Convenience alias for core results.
pub type GameResult<T> = Result<T, GameError>;
