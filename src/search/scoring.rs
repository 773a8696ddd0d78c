//! Static evaluation. Scores are centipawns from White's point of view:
//! positive favors White, negative favors Black.

use crate::board::bitboard::population_count;
use crate::board::position::Position;
use crate::board::types::{Color, PieceKind};

/// Conventional centipawn value of a piece kind. The king carries no
/// material value; losing it ends the game instead.
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

/// Static position evaluation, pluggable under the search.
pub trait BoardScorer {
    /// White-positive centipawn score of the position as it stands.
    fn score(&self, position: &Position) -> i32;
}

/// Pure material count.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, position: &Position) -> i32 {
        let mut total = 0;
        for kind in PieceKind::ALL {
            let value = piece_value(kind);
            total += value * population_count(position.pieces(Color::White, kind)) as i32;
            total -= value * population_count(position.pieces(Color::Black, kind)) as i32;
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fen::parse_fen;

    #[test]
    fn the_start_position_is_balanced() {
        let position = Position::start_position();
        assert_eq!(MaterialScorer.score(&position), 0);
    }

    #[test]
    fn missing_material_shifts_the_score() {
        // Black is short a knight.
        let position = parse_fen("r1bqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect("FEN should parse");
        assert_eq!(MaterialScorer.score(&position), 300);

        // White is short a queen and a pawn.
        let position = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/1PPPPPPP/RNB1KBNR w KQkq - 0 1")
            .expect("FEN should parse");
        assert_eq!(MaterialScorer.score(&position), -1000);
    }

    #[test]
    fn bare_kings_score_zero() {
        let position = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(MaterialScorer.score(&position), 0);
    }
}
