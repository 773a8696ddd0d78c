//! Move representation and long-algebraic formatting.

use std::fmt;

use crate::board::bitboard::algebraic_from_square;
use crate::board::types::{PieceKind, Square};

/// Distinguishes moves that need special make/undo handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    DoublePawnPush,
    CastleKingside,
    CastleQueenside,
    Promotion,
    EnPassant,
}

/// A single move, carrying enough to apply and undo it without re-deriving
/// anything from the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub kind: MoveKind,
    /// Promotion target; set exactly when `kind` is `Promotion`.
    pub promotion: Option<PieceKind>,
    /// Captured piece kind, if any. En passant records `Pawn` here even
    /// though the captured pawn does not stand on `to`.
    pub captured: Option<PieceKind>,
}

impl Move {
    pub fn normal(from: Square, to: Square, piece: PieceKind, captured: Option<PieceKind>) -> Self {
        Self {
            from,
            to,
            piece,
            kind: MoveKind::Normal,
            promotion: None,
            captured,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

fn promotion_letter(piece: PieceKind) -> char {
    match piece {
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        _ => 'q',
    }
}

/// Long algebraic: origin square, destination square, optional promotion
/// letter (`e2e4`, `e7e8q`). Castling is rendered by the king's travel.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            algebraic_from_square(self.from),
            algebraic_from_square(self.to)
        )?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion_letter(promotion))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::bitboard::square_from_algebraic;

    fn sq(text: &str) -> Square {
        square_from_algebraic(text).expect("square should parse")
    }

    #[test]
    fn formats_long_algebraic_text() {
        let mv = Move::normal(sq("e2"), sq("e4"), PieceKind::Pawn, None);
        assert_eq!(mv.to_string(), "e2e4");

        let mv = Move {
            from: sq("e7"),
            to: sq("e8"),
            piece: PieceKind::Pawn,
            kind: MoveKind::Promotion,
            promotion: Some(PieceKind::Queen),
            captured: None,
        };
        assert_eq!(mv.to_string(), "e7e8q");

        let mv = Move {
            from: sq("a7"),
            to: sq("b8"),
            piece: PieceKind::Pawn,
            kind: MoveKind::Promotion,
            promotion: Some(PieceKind::Knight),
            captured: Some(PieceKind::Rook),
        };
        assert_eq!(mv.to_string(), "a7b8n");
        assert!(mv.is_capture());
    }
}
