//! Error types
//!
//! Move generation has exactly one way to fail: being asked about a square
//! that holds nothing. Board builders can additionally reject off-board
//! coordinates and malformed placement strings.

use crate::core::position::Position;
use thiserror::Error;

/// Errors raised by move generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveGenError {
    #[error("no piece at {0}: moves can only be generated for an occupied square")]
    EmptySquare(Position),
    #[error("origin {0} is off the board")]
    OffBoard(Position),
}

/// Errors raised by the checked board builders
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("position {0} is off the board")]
    OffBoard(Position),
    #[error("invalid placement: {0}")]
    InvalidPlacement(String),
}

pub type Result<T, E = MoveGenError> = std::result::Result<T, E>;
