//! Piece identity: team color, piece type and the colored piece

pub mod piece;

pub use piece::{Piece, PieceType, TeamColor};
