//! Movement rules
//!
//! Every piece type maps to one `Rule`: a step kind plus a table of
//! (row, column) offsets. Kings and knights apply each offset once, rooks,
//! bishops and queens repeat it until blocked, pawns read their table
//! relative to their color's forward direction.

use super::movegen;
use crate::chess_piece::PieceType;
use crate::core::board::Board;
use crate::core::moves::MoveSet;
use crate::core::position::Position;
use crate::error::{MoveGenError, Result};
use log::{debug, trace};

/// How a rule's offsets are applied
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepKind {
    /// Each offset is a single hop
    Step,
    /// Each offset is a direction, repeated until blocked or off the board
    Slide,
    /// Forward pushes and diagonal captures, oriented by color
    Pawn,
}

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, -1),
    (2, 1),
    (1, -2),
    (1, 2),
    (-1, -2),
    (-1, 2),
    (-2, -1),
    (-2, 1),
];

pub const ROOK_OFFSETS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_OFFSETS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const QUEEN_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// White-relative pawn table: the push first, then the two captures.
/// Row deltas are multiplied by the mover's pawn direction.
pub const PAWN_OFFSETS: [(i8, i8); 3] = [(1, 0), (1, -1), (1, 1)];

/// A movement pattern descriptor
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rule {
    kind: StepKind,
    offsets: &'static [(i8, i8)],
}

impl Rule {
    /// The rule a piece type moves by
    pub const fn for_piece(piece_type: PieceType) -> Self {
        match piece_type {
            PieceType::King => Rule::new(StepKind::Step, &KING_OFFSETS),
            PieceType::Knight => Rule::new(StepKind::Step, &KNIGHT_OFFSETS),
            PieceType::Rook => Rule::new(StepKind::Slide, &ROOK_OFFSETS),
            PieceType::Bishop => Rule::new(StepKind::Slide, &BISHOP_OFFSETS),
            PieceType::Queen => Rule::new(StepKind::Slide, &QUEEN_OFFSETS),
            PieceType::Pawn => Rule::new(StepKind::Pawn, &PAWN_OFFSETS),
        }
    }

    const fn new(kind: StepKind, offsets: &'static [(i8, i8)]) -> Self {
        Rule { kind, offsets }
    }

    #[inline]
    pub const fn kind(self) -> StepKind {
        self.kind
    }

    #[inline]
    pub const fn offsets(self) -> &'static [(i8, i8)] {
        self.offsets
    }

    /// Pseudo-legal moves for the piece on `origin`, moving by this rule.
    ///
    /// The mover's color is read from the board. An off-board or empty origin
    /// is a caller bug and comes back as an error.
    pub fn moves(self, board: &Board, origin: Position) -> Result<MoveSet> {
        if !origin.is_on_board() {
            debug!("move generation requested for off-board origin {:?}", origin);
            return Err(MoveGenError::OffBoard(origin));
        }
        let mover = match board.piece_at(origin) {
            Some(piece) => piece,
            None => {
                debug!("move generation requested for empty square {}", origin);
                return Err(MoveGenError::EmptySquare(origin));
            }
        };

        let mut moves = MoveSet::new();
        match self.kind {
            StepKind::Step => movegen::step_moves(board, origin, mover.color, self.offsets, &mut moves),
            StepKind::Slide => movegen::slide_moves(board, origin, mover.color, self.offsets, &mut moves),
            StepKind::Pawn => movegen::pawn_moves(board, origin, mover.color, self.offsets, &mut moves),
        }

        trace!(
            "{:?} {:?} on {}: {} moves",
            mover.color,
            mover.piece_type,
            origin,
            moves.len()
        );
        Ok(moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_step_kinds() {
        assert_eq!(Rule::for_piece(PieceType::King).kind(), StepKind::Step);
        assert_eq!(Rule::for_piece(PieceType::Knight).kind(), StepKind::Step);
        assert_eq!(Rule::for_piece(PieceType::Rook).kind(), StepKind::Slide);
        assert_eq!(Rule::for_piece(PieceType::Bishop).kind(), StepKind::Slide);
        assert_eq!(Rule::for_piece(PieceType::Queen).kind(), StepKind::Slide);
        assert_eq!(Rule::for_piece(PieceType::Pawn).kind(), StepKind::Pawn);
    }

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        let queen: HashSet<_> = QUEEN_OFFSETS.iter().copied().collect();
        let union: HashSet<_> = ROOK_OFFSETS
            .iter()
            .chain(BISHOP_OFFSETS.iter())
            .copied()
            .collect();
        assert_eq!(queen, union);
    }

    #[test]
    fn test_offset_tables_have_no_duplicates() {
        for piece_type in PieceType::ALL {
            let offsets = Rule::for_piece(piece_type).offsets();
            let unique: HashSet<_> = offsets.iter().collect();
            assert_eq!(unique.len(), offsets.len(), "{:?}", piece_type);
            assert!(!offsets.contains(&(0, 0)), "{:?}", piece_type);
        }
    }

    #[test]
    fn test_knight_offsets_are_leaps() {
        for (dr, dc) in KNIGHT_OFFSETS {
            let mut lengths = [dr.abs(), dc.abs()];
            lengths.sort();
            assert_eq!(lengths, [1, 2]);
        }
    }
}
