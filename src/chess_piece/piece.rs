//! Piece identity
//!
//! A piece is nothing more than a color and a type. Its movement lives in the
//! rule table (`engine::rules`), which `Piece::moves_from` dispatches into.

use crate::core::board::Board;
use crate::core::moves::MoveSet;
use crate::core::position::Position;
use crate::engine::rules::Rule;
use crate::error::{MoveGenError, Result};

/// Team color
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TeamColor {
    White = 0,
    Black = 1,
}

impl TeamColor {
    pub const ALL: [TeamColor; 2] = [TeamColor::White, TeamColor::Black];

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            TeamColor::White => TeamColor::Black,
            TeamColor::Black => TeamColor::White,
        }
    }

    /// Row delta of a single pawn step
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            TeamColor::White => 1,
            TeamColor::Black => -1,
        }
    }

    /// Row pawns start on (and may double-step from)
    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            TeamColor::White => 2,
            TeamColor::Black => 7,
        }
    }

    /// Row where pawns promote
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            TeamColor::White => 8,
            TeamColor::Black => 1,
        }
    }

    /// Back rank row of the standard layout
    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            TeamColor::White => 1,
            TeamColor::Black => 8,
        }
    }
}

impl std::ops::Not for TeamColor {
    type Output = TeamColor;
    fn not(self) -> Self::Output {
        self.opposite()
    }
}

/// Piece type
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PieceType {
    King = 0,
    Queen = 1,
    Bishop = 2,
    Knight = 3,
    Rook = 4,
    Pawn = 5,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
        PieceType::Pawn,
    ];

    /// The pieces a pawn may promote to
    pub const PROMOTIONS: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];

    /// Get the character representation of the piece type
    pub const fn to_char(self) -> char {
        match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            PieceType::Rook => 'r',
            PieceType::Pawn => 'p',
        }
    }

    /// Parse piece type from character
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'k' => Some(PieceType::King),
            'q' => Some(PieceType::Queen),
            'b' => Some(PieceType::Bishop),
            'n' => Some(PieceType::Knight),
            'r' => Some(PieceType::Rook),
            'p' => Some(PieceType::Pawn),
            _ => None,
        }
    }
}

/// A colored piece
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub color: TeamColor,
    pub piece_type: PieceType,
}

impl Piece {
    #[inline]
    pub const fn new(color: TeamColor, piece_type: PieceType) -> Self {
        Piece { color, piece_type }
    }

    /// Get the character representation (uppercase for white, lowercase for black)
    pub fn to_char(self) -> char {
        let c = self.piece_type.to_char();
        match self.color {
            TeamColor::White => c.to_ascii_uppercase(),
            TeamColor::Black => c,
        }
    }

    /// Parse a piece from character
    pub fn from_char(c: char) -> Option<Self> {
        let piece_type = PieceType::from_char(c)?;
        let color = if c.is_uppercase() {
            TeamColor::White
        } else {
            TeamColor::Black
        };
        Some(Piece::new(color, piece_type))
    }

    /// The movement rule for this piece's type
    #[inline]
    pub fn rule(self) -> Rule {
        Rule::for_piece(self.piece_type)
    }

    /// Pseudo-legal moves for this piece standing on `position`.
    ///
    /// The board is the source of truth: the mover is whatever occupies
    /// `position`, and it must be this piece. Asking about an empty square is
    /// an error.
    pub fn moves_from(self, board: &Board, position: Position) -> Result<MoveSet> {
        if !position.is_on_board() {
            return Err(MoveGenError::OffBoard(position));
        }
        match board.piece_at(position) {
            Some(occupant) => {
                debug_assert_eq!(occupant, self, "piece does not match the board at {position}");
                self.rule().moves(board, position)
            }
            None => Err(MoveGenError::EmptySquare(position)),
        }
    }
}
