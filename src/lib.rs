pub mod chess_piece;
pub mod core;
pub mod engine;
pub mod error;
pub mod interop;

pub use chess_piece::{Piece, PieceType, TeamColor};
pub use crate::core::{Board, Move, MoveSet, Position};
pub use engine::{MoveGen, Rule, StepKind};
pub use error::{BoardError, MoveGenError};
pub use shakmaty;
