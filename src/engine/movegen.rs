//! Move generation
//!
//! This module turns a rule's offset table into destination squares:
//! - Stepping pieces (king, knight) test each offset once
//! - Sliding pieces (rook, bishop, queen) walk a `Ray` per direction
//! - Pawns push forward, double-step from their start row, capture
//!   diagonally and promote on the far row
//!
//! Everything here is a pure read of the board. Moves are pseudo-legal:
//! check, pins, castling and en passant are left to the game-state layer.

use super::rules::Rule;
use crate::chess_piece::{PieceType, TeamColor};
use crate::core::board::Board;
use crate::core::moves::{Move, MoveSet};
use crate::core::position::Position;
use crate::error::{MoveGenError, Result};
use std::collections::BTreeSet;

/// What a candidate square holds, seen from the mover
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Occupancy {
    Empty,
    Enemy,
    Friend,
}

/// Classify an on-board square relative to `mover`
#[inline]
pub fn occupancy(board: &Board, position: Position, mover: TeamColor) -> Occupancy {
    match board.piece_at(position) {
        None => Occupancy::Empty,
        Some(piece) if piece.color == mover => Occupancy::Friend,
        Some(_) => Occupancy::Enemy,
    }
}

/// Squares a slider reaches along one direction.
///
/// Yields empty squares, then the first enemy square (a capture) and stops.
/// A friendly piece or the board edge ends the ray without being yielded.
#[derive(Clone, Debug)]
pub struct Ray<'a> {
    board: &'a Board,
    mover: TeamColor,
    next: Position,
    delta: (i8, i8),
    done: bool,
}

impl<'a> Ray<'a> {
    /// `delta` is a unit direction: both components in -1..=1.
    pub fn new(board: &'a Board, origin: Position, mover: TeamColor, delta: (i8, i8)) -> Self {
        debug_assert!(
            (-1..=1).contains(&delta.0) && (-1..=1).contains(&delta.1),
            "ray direction {delta:?} is not a unit step"
        );
        Ray {
            board,
            mover,
            next: origin.offset(delta.0, delta.1),
            delta,
            done: delta == (0, 0),
        }
    }
}

impl Iterator for Ray<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.done || !self.next.is_on_board() {
            self.done = true;
            return None;
        }
        let current = self.next;
        match occupancy(self.board, current, self.mover) {
            Occupancy::Empty => {
                self.next = current.offset(self.delta.0, self.delta.1);
                Some(current)
            }
            Occupancy::Enemy => {
                self.done = true;
                Some(current)
            }
            Occupancy::Friend => {
                self.done = true;
                None
            }
        }
    }
}

impl std::iter::FusedIterator for Ray<'_> {}

pub(crate) fn step_moves(
    board: &Board,
    origin: Position,
    mover: TeamColor,
    offsets: &[(i8, i8)],
    moves: &mut MoveSet,
) {
    for &(dr, dc) in offsets {
        let target = origin.offset(dr, dc);
        if target.is_on_board() && occupancy(board, target, mover) != Occupancy::Friend {
            moves.insert(Move::new(origin, target));
        }
    }
}

pub(crate) fn slide_moves(
    board: &Board,
    origin: Position,
    mover: TeamColor,
    offsets: &[(i8, i8)],
    moves: &mut MoveSet,
) {
    for &delta in offsets {
        moves.extend(Ray::new(board, origin, mover, delta).map(|target| Move::new(origin, target)));
    }
}

pub(crate) fn pawn_moves(
    board: &Board,
    origin: Position,
    mover: TeamColor,
    offsets: &[(i8, i8)],
    moves: &mut MoveSet,
) {
    let Some((&(push_dr, push_dc), captures)) = offsets.split_first() else {
        unreachable!("pawn rule has no push offset");
    };
    let forward = mover.pawn_direction();

    // Pushes never capture
    let single = origin.offset(push_dr * forward, push_dc);
    if single.is_on_board() && board.is_empty(single) {
        push_pawn_move(moves, origin, single, mover);

        if origin.row() == mover.pawn_start_row() {
            let double = single.offset(push_dr * forward, push_dc);
            if double.is_on_board() && board.is_empty(double) {
                push_pawn_move(moves, origin, double, mover);
            }
        }
    }

    // Diagonals only ever capture
    for &(dr, dc) in captures {
        let target = origin.offset(dr * forward, dc);
        if target.is_on_board() && occupancy(board, target, mover) == Occupancy::Enemy {
            push_pawn_move(moves, origin, target, mover);
        }
    }
}

/// Add a pawn move, expanding it into one move per promotion piece when it
/// lands on the promotion row
fn push_pawn_move(moves: &mut MoveSet, from: Position, to: Position, mover: TeamColor) {
    if to.row() == mover.promotion_row() {
        for piece in PieceType::PROMOTIONS {
            moves.insert(Move::with_promotion(from, to, piece));
        }
    } else {
        moves.insert(Move::new(from, to));
    }
}

/// Entry points for the game-state layer
pub struct MoveGen;

impl MoveGen {
    /// Pseudo-legal moves for whatever piece stands on `origin`
    pub fn moves_from(board: &Board, origin: Position) -> Result<MoveSet> {
        if !origin.is_on_board() {
            return Err(MoveGenError::OffBoard(origin));
        }
        let piece = board
            .piece_at(origin)
            .ok_or(MoveGenError::EmptySquare(origin))?;
        Rule::for_piece(piece.piece_type).moves(board, origin)
    }

    /// Pseudo-legal moves for every piece of `color`
    pub fn all_moves(board: &Board, color: TeamColor) -> Result<MoveSet> {
        let mut moves = MoveSet::new();
        for (position, piece) in board.pieces() {
            if piece.color == color {
                moves.extend(Self::moves_from(board, position)?);
            }
        }
        Ok(moves)
    }

    /// Destination squares reachable from `origin`, promotions collapsed
    pub fn destinations(board: &Board, origin: Position) -> Result<BTreeSet<Position>> {
        Ok(Self::moves_from(board, origin)?
            .into_iter()
            .map(Move::to)
            .collect())
    }
}
