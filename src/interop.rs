//! Conversions to and from `shakmaty`
//!
//! The game-state layer around this engine runs on `shakmaty` (legality,
//! check detection, FEN). These conversions let it hand boards in and take
//! moves out without going through strings.

use crate::chess_piece::{Piece, PieceType, TeamColor};
use crate::core::board::Board;
use crate::core::moves::Move;
use crate::core::position::Position;
use crate::error::BoardError;
use shakmaty::uci::UciMove;

impl From<TeamColor> for shakmaty::Color {
    fn from(color: TeamColor) -> Self {
        match color {
            TeamColor::White => shakmaty::Color::White,
            TeamColor::Black => shakmaty::Color::Black,
        }
    }
}

impl From<shakmaty::Color> for TeamColor {
    fn from(color: shakmaty::Color) -> Self {
        match color {
            shakmaty::Color::White => TeamColor::White,
            shakmaty::Color::Black => TeamColor::Black,
        }
    }
}

impl From<PieceType> for shakmaty::Role {
    fn from(piece_type: PieceType) -> Self {
        match piece_type {
            PieceType::King => shakmaty::Role::King,
            PieceType::Queen => shakmaty::Role::Queen,
            PieceType::Bishop => shakmaty::Role::Bishop,
            PieceType::Knight => shakmaty::Role::Knight,
            PieceType::Rook => shakmaty::Role::Rook,
            PieceType::Pawn => shakmaty::Role::Pawn,
        }
    }
}

impl From<shakmaty::Role> for PieceType {
    fn from(role: shakmaty::Role) -> Self {
        match role {
            shakmaty::Role::King => PieceType::King,
            shakmaty::Role::Queen => PieceType::Queen,
            shakmaty::Role::Bishop => PieceType::Bishop,
            shakmaty::Role::Knight => PieceType::Knight,
            shakmaty::Role::Rook => PieceType::Rook,
            shakmaty::Role::Pawn => PieceType::Pawn,
        }
    }
}

impl From<Piece> for shakmaty::Piece {
    fn from(piece: Piece) -> Self {
        shakmaty::Piece {
            color: piece.color.into(),
            role: piece.piece_type.into(),
        }
    }
}

impl From<shakmaty::Piece> for Piece {
    fn from(piece: shakmaty::Piece) -> Self {
        Piece::new(piece.color.into(), piece.role.into())
    }
}

impl TryFrom<Position> for shakmaty::Square {
    type Error = BoardError;

    fn try_from(position: Position) -> Result<Self, Self::Error> {
        // Both sides index a1 = 0, b1 = 1, ..., h8 = 63
        let index = position.index().ok_or(BoardError::OffBoard(position))?;
        Ok(shakmaty::Square::new(index as u32))
    }
}

impl From<shakmaty::Square> for Position {
    fn from(square: shakmaty::Square) -> Self {
        Position::from_index(u32::from(square) as usize)
    }
}

impl From<&Board> for shakmaty::Board {
    fn from(board: &Board) -> Self {
        let mut out = shakmaty::Board::empty();
        for (position, piece) in board.pieces() {
            let square = shakmaty::Square::new(u32::from(position_index(position)));
            out.set_piece_at(square, piece.into());
        }
        out
    }
}

impl From<&shakmaty::Board> for Board {
    fn from(board: &shakmaty::Board) -> Self {
        let mut out = Board::new();
        for position in Position::all() {
            let square = shakmaty::Square::new(u32::from(position_index(position)));
            if let Some(piece) = board.piece_at(square) {
                out.place(position, piece.into());
            }
        }
        out
    }
}

impl TryFrom<Move> for UciMove {
    type Error = BoardError;

    fn try_from(mv: Move) -> Result<Self, Self::Error> {
        Ok(UciMove::Normal {
            from: mv.from().try_into()?,
            to: mv.to().try_into()?,
            promotion: mv.promotion().map(Into::into),
        })
    }
}

/// Index of a position known to be on the board
#[inline]
fn position_index(position: Position) -> u8 {
    match position.index() {
        Some(index) => index as u8,
        None => unreachable!("board iteration yielded off-board {position:?}"),
    }
}
