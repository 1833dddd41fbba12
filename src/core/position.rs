//! Board coordinates
//!
//! A `Position` is a 1-indexed (row, column) pair. Row 1 is white's back
//! rank, column 1 is the a-file. Positions computed while walking a ray may
//! fall outside 1..=8; callers check `is_on_board` before using them.

use std::fmt;

/// Number of rows and columns on the board
pub const BOARD_SIZE: i8 = 8;

/// A square on the board, addressed by row and column (both 1..=8)
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    row: i8,
    column: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, column: i8) -> Self {
        Position { row, column }
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn column(self) -> i8 {
        self.column
    }

    /// True when both coordinates lie in 1..=8
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 1 && self.row <= BOARD_SIZE && self.column >= 1 && self.column <= BOARD_SIZE
    }

    /// Shift by a (row, column) delta. The result may be off the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_column: i8) -> Self {
        Position::new(self.row + d_row, self.column + d_column)
    }

    /// Row-major index into a 64-square array, or `None` when off the board
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(((self.row - 1) * BOARD_SIZE + (self.column - 1)) as usize)
        } else {
            None
        }
    }

    /// Inverse of `index`. `index` must be below 64.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        debug_assert!(index < 64, "square index out of range");
        let i = index as i8;
        Position::new(i / BOARD_SIZE + 1, i % BOARD_SIZE + 1)
    }

    /// Iterate all 64 squares in row-major order, a1 first
    pub fn all() -> impl Iterator<Item = Position> {
        (0..64).map(Position::from_index)
    }

    /// Parse a square from algebraic notation (e.g., "e4")
    pub fn from_algebraic(s: &str) -> Option<Self> {
        if s.len() != 2 {
            return None;
        }
        let bytes = s.as_bytes();
        let column = bytes[0].wrapping_sub(b'a');
        let row = bytes[1].wrapping_sub(b'1');
        if column < 8 && row < 8 {
            Some(Position::new(row as i8 + 1, column as i8 + 1))
        } else {
            None
        }
    }

    /// Convert to algebraic notation. Off-board positions render as "(row,col)".
    pub fn to_algebraic(self) -> String {
        if !self.is_on_board() {
            return format!("({},{})", self.row, self.column);
        }
        let file = (b'a' + (self.column - 1) as u8) as char;
        let rank = (b'0' + self.row as u8) as char;
        format!("{}{}", file, rank)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.row, self.column)
    }
}
