use thiserror::Error;

use crate::rules::DRAW_SIZE;

/// Reasons an operation was rejected. A rejected operation leaves table, selection and
/// score untouched, so callers that only need no-op semantics may discard the error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("No card at index {index} (table has {len} cards)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Card was already removed from play")]
    CardRemoved,
    #[error("Card is part of the evaluated triple and cannot be selected")]
    CardLocked,
    #[error("Deck cannot supply {draw} cards ({remaining} remaining)", draw = DRAW_SIZE)]
    DeckExhausted { remaining: usize },
    #[error("Card appears more than once")]
    DuplicateCard,
    #[error("Game state is inconsistent: {0}")]
    InvariantViolated(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
