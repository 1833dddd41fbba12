//! Move representation
//!
//! A move is an origin, a destination and, for pawns reaching the far rank,
//! the piece type being promoted to. Moves compare and hash by value so that
//! generation can collect them into a `MoveSet`.

use super::position::Position;
use crate::chess_piece::PieceType;
use std::collections::HashSet;
use std::fmt;

/// Unordered, deduplicated collection of moves
pub type MoveSet = HashSet<Move>;

/// A chess move
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    from: Position,
    to: Position,
    promotion: Option<PieceType>,
}

impl Move {
    /// Create a plain move
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a promotion move
    #[inline]
    pub const fn with_promotion(from: Position, to: Position, piece: PieceType) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
        }
    }

    /// Get the source square
    #[inline]
    pub const fn from(self) -> Position {
        self.from
    }

    /// Get the destination square
    #[inline]
    pub const fn to(self) -> Position {
        self.to
    }

    /// Get the promotion piece type (if any)
    #[inline]
    pub const fn promotion(self) -> Option<PieceType> {
        self.promotion
    }

    /// Check if this is a promotion
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Convert to UCI notation (e.g., "e2e4", "e7e8q")
    pub fn to_uci(self) -> String {
        let promo = match self.promotion {
            Some(piece) => piece.to_char().to_string(),
            None => String::new(),
        };
        format!("{}{}{}", self.from.to_algebraic(), self.to.to_algebraic(), promo)
    }

    /// Parse from UCI notation
    pub fn from_uci(s: &str) -> Option<Self> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return None;
        }

        let from = Position::from_algebraic(&s[0..2])?;
        let to = Position::from_algebraic(&s[2..4])?;

        match s[4..].chars().next() {
            Some(c) => {
                let piece = PieceType::from_char(c)?;
                if !PieceType::PROMOTIONS.contains(&piece) {
                    return None;
                }
                Some(Move::with_promotion(from, to, piece))
            }
            None => Some(Move::new(from, to)),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uci_notation() {
        let mv = Move::new(Position::new(2, 5), Position::new(4, 5));
        assert_eq!(mv.to_uci(), "e2e4");
        let promo = Move::with_promotion(Position::new(7, 1), Position::new(8, 1), PieceType::Queen);
        assert_eq!(promo.to_uci(), "a7a8q");
        assert_eq!(Move::from_uci("a7a8q"), Some(promo));
        assert_eq!(Move::from_uci("e2e4"), Some(mv));
    }

    #[test]
    fn test_uci_rejects_bad_input() {
        assert_eq!(Move::from_uci("e2"), None);
        assert_eq!(Move::from_uci("e2e9"), None);
        assert_eq!(Move::from_uci("a7a8k"), None);
        assert_eq!(Move::from_uci("a7a8x"), None);
    }

    #[test]
    fn test_promotion_distinguishes_moves() {
        let from = Position::new(7, 1);
        let to = Position::new(8, 1);
        let mut set = MoveSet::new();
        set.insert(Move::new(from, to));
        set.insert(Move::with_promotion(from, to, PieceType::Rook));
        set.insert(Move::with_promotion(from, to, PieceType::Rook));
        assert_eq!(set.len(), 2);
    }
}
