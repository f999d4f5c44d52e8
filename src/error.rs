//! Error types for rules-engine operations.

use thiserror::Error;

/// Errors that can occur when constructing card values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The numeral does not name one of the ten truco ranks.
    #[error("rank {0} is not a truco rank")]
    InvalidRank(u8),
}

/// Errors that can occur when resolving a trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrickError {
    /// No card has been played; there is no winner to name.
    #[error("trick has no played cards")]
    Empty,
    /// The played cards do not all carry the same trump derivation.
    #[error("played cards were derived under different viras")]
    StaleDerivation,
}

/// Errors that can occur when dealing a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Truco seats two to four players.
    #[error("cannot deal to {0} players")]
    InvalidPlayerCount(usize),
}
