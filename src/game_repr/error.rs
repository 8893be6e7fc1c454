use thiserror::Error;

use super::{Color, Move};

/// Errors produced by the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    /// The move is not among the legal moves of the position it was applied to.
    #[error("illegal move {0}")]
    IllegalMove(Move),

    /// The position has no king for the given color, so check cannot be decided.
    #[error("corrupt position: no {0:?} king on the board")]
    CorruptState(Color),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    #[error("invalid move text: {0:?}")]
    InvalidMoveText(String),

    #[error("invalid board tensor: {0}")]
    InvalidTensor(String),
}
