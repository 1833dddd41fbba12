//! Core chess types and representations
//!
//! This module contains the value layer the engine is built on:
//! - Board positions
//! - Move encoding
//! - The board itself

pub mod board;
pub mod moves;
pub mod position;

pub use board::{Board, STANDARD_PLACEMENT};
pub use moves::{Move, MoveSet};
pub use position::Position;
