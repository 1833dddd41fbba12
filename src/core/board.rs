//! Chess board representation
//!
//! The board is a plain 64-entry mailbox of optional pieces. It knows nothing
//! about turns, castling rights or history; the game-state layer owns the
//! board and mutates it, move generation only reads it.

use super::position::{BOARD_SIZE, Position};
use crate::chess_piece::{Piece, PieceType, TeamColor};
use crate::error::BoardError;
use log::debug;
use std::fmt;

/// Back rank from the queenside file outward
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Piece placement of the standard starting position
pub const STANDARD_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// The chess board state
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Piece lookup table, row-major from a1 (None if empty)
    squares: [Option<Piece>; 64],
}

impl Board {
    /// Create a new empty board
    pub const fn new() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Create a board set up in the standard starting position
    pub fn standard() -> Self {
        let mut board = Board::new();
        board.reset_to_standard_starting_position();
        board
    }

    #[inline]
    fn slot(position: Position) -> usize {
        match position.index() {
            Some(index) => index,
            None => panic!("position {position:?} is off the board"),
        }
    }

    /// Put `piece` on `position`, replacing whatever stood there.
    ///
    /// Panics if `position` is off the board.
    #[inline]
    pub fn place(&mut self, position: Position, piece: Piece) {
        self.squares[Self::slot(position)] = Some(piece);
    }

    /// Checked variant of `place`
    pub fn try_place(&mut self, position: Position, piece: Piece) -> Result<(), BoardError> {
        let index = position.index().ok_or(BoardError::OffBoard(position))?;
        self.squares[index] = Some(piece);
        Ok(())
    }

    /// Take the piece off `position`, returning it.
    ///
    /// Panics if `position` is off the board.
    #[inline]
    pub fn remove(&mut self, position: Position) -> Option<Piece> {
        self.squares[Self::slot(position)].take()
    }

    /// The piece on `position`, if any.
    ///
    /// Panics if `position` is off the board.
    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<Piece> {
        self.squares[Self::slot(position)]
    }

    /// Check if a square holds no piece
    #[inline]
    pub fn is_empty(&self, position: Position) -> bool {
        self.piece_at(position).is_none()
    }

    /// Remove every piece
    pub fn clear(&mut self) {
        self.squares = [None; 64];
    }

    /// Clear the board and set up the standard starting position
    pub fn reset_to_standard_starting_position(&mut self) {
        self.clear();
        for color in TeamColor::ALL {
            let back = color.back_row();
            let pawns = color.pawn_start_row();
            for (column, piece_type) in (1..=BOARD_SIZE).zip(BACK_RANK) {
                self.place(Position::new(back, column), Piece::new(color, piece_type));
                self.place(Position::new(pawns, column), Piece::new(color, PieceType::Pawn));
            }
        }
        debug!("board reset to the standard starting position");
    }

    /// Iterate occupied squares in row-major order, a1 first
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|piece| (Position::from_index(index), piece)))
    }

    /// Number of pieces on the board
    pub fn count(&self) -> usize {
        self.squares.iter().filter(|slot| slot.is_some()).count()
    }

    /// Parse the piece-placement field of a FEN string
    /// (e.g. "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
    pub fn from_placement(placement: &str) -> Result<Self, BoardError> {
        let mut board = Board::new();
        let ranks: Vec<&str> = placement.split('/').collect();

        if ranks.len() != BOARD_SIZE as usize {
            return Err(BoardError::InvalidPlacement(format!(
                "expected 8 ranks, found {}",
                ranks.len()
            )));
        }

        for (i, rank) in ranks.iter().enumerate() {
            let row = BOARD_SIZE - i as i8;
            let mut column: i8 = 1;
            let mut after_digit = false;
            for c in rank.chars() {
                match c {
                    '1'..='8' => {
                        if after_digit {
                            return Err(BoardError::InvalidPlacement(format!(
                                "rank {} has adjacent digits",
                                row
                            )));
                        }
                        after_digit = true;
                        column += (c as i8) - ('0' as i8);
                        if column > BOARD_SIZE + 1 {
                            return Err(BoardError::InvalidPlacement(format!(
                                "rank {} is too long",
                                row
                            )));
                        }
                    }
                    _ => {
                        after_digit = false;
                        let piece = Piece::from_char(c).ok_or_else(|| {
                            BoardError::InvalidPlacement(format!("unknown piece '{}'", c))
                        })?;
                        if column > BOARD_SIZE {
                            return Err(BoardError::InvalidPlacement(format!(
                                "rank {} is too long",
                                row
                            )));
                        }
                        board.place(Position::new(row, column), piece);
                        column += 1;
                    }
                }
            }
            if column != BOARD_SIZE + 1 {
                return Err(BoardError::InvalidPlacement(format!(
                    "rank {} covers {} squares",
                    row,
                    column - 1
                )));
            }
        }

        Ok(board)
    }

    /// Convert the board to the piece-placement field of FEN
    pub fn to_placement(&self) -> String {
        let mut placement = String::new();

        for row in (1..=BOARD_SIZE).rev() {
            let mut empty = 0;
            for column in 1..=BOARD_SIZE {
                if let Some(piece) = self.piece_at(Position::new(row, column)) {
                    if empty > 0 {
                        placement.push_str(&empty.to_string());
                        empty = 0;
                    }
                    placement.push(piece.to_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if row > 1 {
                placement.push('/');
            }
        }

        placement
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=BOARD_SIZE).rev() {
            write!(f, "  {} ", row)?;
            for column in 1..=BOARD_SIZE {
                match self.piece_at(Position::new(row, column)) {
                    Some(piece) => write!(f, "{} ", piece.to_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "    a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}
