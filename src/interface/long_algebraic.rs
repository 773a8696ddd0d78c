//! Long-algebraic move input (`e2e4`, `e7e8q`), resolved against the legal
//! move list so the caller gets back a fully populated move or a precise
//! error.

use crate::board::bitboard::square_from_algebraic;
use crate::board::position::Position;
use crate::board::types::{PieceKind, Square};
use crate::errors::EngineError;
use crate::movegen::generator::MoveGenerator;
use crate::movegen::moves::Move;

fn promotion_from_char(c: char) -> Option<PieceKind> {
    match c.to_ascii_lowercase() {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}

fn parse_squares(text: &str) -> Option<(Square, Square, Option<PieceKind>)> {
    if text.len() < 4 || text.len() > 5 {
        return None;
    }
    let from = square_from_algebraic(text.get(0..2)?)?;
    let to = square_from_algebraic(text.get(2..4)?)?;
    let promotion = match text.get(4..5) {
        Some(letter) => Some(promotion_from_char(letter.chars().next()?)?),
        None => None,
    };
    Some((from, to, promotion))
}

/// Resolves move text against the position's legal moves.
///
/// A promotion without an explicit letter defaults to the queen, matching
/// how most interfaces abbreviate.
pub fn parse_move(
    text: &str,
    position: &mut Position,
    generator: &MoveGenerator,
) -> Result<Move, EngineError> {
    let (from, to, promotion) = parse_squares(text)
        .ok_or_else(|| EngineError::InvalidMoveText(text.to_string()))?;

    let legal = generator.legal_moves(position);
    legal
        .into_iter()
        .find(|mv| {
            mv.from == from
                && mv.to == to
                && match (promotion, mv.promotion) {
                    (Some(requested), Some(actual)) => requested == actual,
                    (None, Some(actual)) => actual == PieceKind::Queen,
                    (None, None) => true,
                    (Some(_), None) => false,
                }
        })
        .ok_or_else(|| EngineError::IllegalMove(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fen::parse_fen;
    use crate::board::position::Position;
    use crate::movegen::moves::MoveKind;
    use crate::tables::engine_tables::shared_test_tables;

    fn parse_in(fen: &str, text: &str) -> Result<Move, EngineError> {
        let mut position = parse_fen(fen).expect("FEN should parse");
        let generator = MoveGenerator::new(shared_test_tables());
        parse_move(text, &mut position, &generator)
    }

    #[test]
    fn legal_moves_resolve_with_full_details() {
        let mut position = Position::start_position();
        let generator = MoveGenerator::new(shared_test_tables());
        let mv = parse_move("e2e4", &mut position, &generator).expect("e2e4 is legal");
        assert_eq!(mv.kind, MoveKind::DoublePawnPush);
        assert_eq!(mv.piece, PieceKind::Pawn);
    }

    #[test]
    fn promotions_honor_the_suffix_and_default_to_queen() {
        let fen = "4k3/P7/8/8/8/8/8/4K3 w - - 0 1";
        let mv = parse_in(fen, "a7a8r").expect("rook promotion is legal");
        assert_eq!(mv.promotion, Some(PieceKind::Rook));
        let mv = parse_in(fen, "a7a8").expect("bare promotion is legal");
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn malformed_text_is_distinguished_from_illegal_moves() {
        let fen = "4k3/8/8/8/8/8/8/4K3 w - - 0 1";
        assert!(matches!(
            parse_in(fen, "e2"),
            Err(EngineError::InvalidMoveText(_))
        ));
        assert!(matches!(
            parse_in(fen, "x9e4"),
            Err(EngineError::InvalidMoveText(_))
        ));
        assert!(matches!(
            parse_in(fen, "e2e4"),
            Err(EngineError::IllegalMove(_))
        ));
    }

    #[test]
    fn castling_parses_as_the_king_move() {
        let mv = parse_in("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1g1")
            .expect("castling is legal");
        assert_eq!(mv.kind, MoveKind::CastleKingside);
    }
}
