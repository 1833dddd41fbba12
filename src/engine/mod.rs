//! Move generation engine
//!
//! This module contains the geometry of piece movement:
//! - The per-piece rule table (step kind and offsets)
//! - Ray walking for sliding pieces
//! - Pawn pushes, captures and promotions

pub mod movegen;
pub mod rules;

pub use movegen::{MoveGen, Occupancy, Ray};
pub use rules::{Rule, StepKind};
