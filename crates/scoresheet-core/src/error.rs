//! Core error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoresheetError {
    #[error("Invalid FEN '{0}': {1}")]
    InvalidFen(String, String),

    #[error("Invalid position '{0}': {1}")]
    InvalidPosition(String, String),
}

/// Why the rules oracle refused to play a move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    #[error("Invalid notation: {0}")]
    InvalidNotation(String),

    #[error("Illegal move: {0}")]
    Illegal(String),

    #[error("Ambiguous move: {0}")]
    Ambiguous(String),
}
