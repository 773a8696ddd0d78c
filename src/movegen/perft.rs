//! Perft: exhaustive legal-move-tree node counting, the ground truth for
//! move generator correctness.
//!
//! Reference vectors use the common semicolon format, one position per
//! line: `<FEN> ;D1 <nodes> ;D2 <nodes> ...`.

use crate::board::fen::parse_fen;
use crate::board::position::Position;
use crate::errors::EngineError;
use crate::movegen::generator::MoveGenerator;
use crate::movegen::moves::MoveKind;

/// Node totals plus a breakdown of the leaf moves by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
}

impl PerftCounts {
    pub fn merge(&mut self, other: &PerftCounts) {
        self.nodes += other.nodes;
        self.captures += other.captures;
        self.en_passant += other.en_passant;
        self.castles += other.castles;
        self.promotions += other.promotions;
        self.checks += other.checks;
    }
}

/// Counts the legal move tree to the given depth. The position is restored
/// before returning.
pub fn perft(generator: &MoveGenerator, position: &mut Position, depth: u32) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }

    let enemy = position.side_to_move().opposite();
    for mv in generator.legal_moves(position) {
        position.make_move(mv);
        if depth == 1 {
            counts.nodes += 1;
            if mv.is_capture() {
                counts.captures += 1;
            }
            match mv.kind {
                MoveKind::EnPassant => counts.en_passant += 1,
                MoveKind::CastleKingside | MoveKind::CastleQueenside => counts.castles += 1,
                MoveKind::Promotion => counts.promotions += 1,
                _ => {}
            }
            if position.in_check(enemy, generator.tables()) {
                counts.checks += 1;
            }
        } else {
            let below = perft(generator, position, depth - 1);
            counts.merge(&below);
        }
        position
            .undo_move()
            .expect("history cannot be empty after make_move");
    }
    counts
}

/// One reference position with its expected node counts per depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerftVector {
    pub fen: String,
    pub expectations: Vec<(u32, u64)>,
}

impl PerftVector {
    /// Runs every depth of the vector and reports the first mismatch.
    pub fn verify(&self, generator: &MoveGenerator) -> Result<(), EngineError> {
        let mut position = parse_fen(&self.fen)?;
        for &(depth, expected) in &self.expectations {
            let got = perft(generator, &mut position, depth).nodes;
            if got != expected {
                return Err(EngineError::PerftVector(format!(
                    "{}: depth {depth} expected {expected} nodes, got {got}",
                    self.fen
                )));
            }
        }
        Ok(())
    }
}

/// Parses semicolon-format vectors. Blank lines and `#` comments are
/// skipped.
pub fn parse_perft_vectors(text: &str) -> Result<Vec<PerftVector>, EngineError> {
    let mut vectors = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let bad = || EngineError::PerftVector(line.to_string());

        let mut parts = line.split(';');
        let fen = parts.next().ok_or_else(bad)?.trim().to_string();
        if fen.is_empty() {
            return Err(bad());
        }

        let mut expectations = Vec::new();
        for part in parts {
            let part = part.trim();
            let rest = part.strip_prefix('D').ok_or_else(bad)?;
            let (depth_text, nodes_text) = rest.split_once(' ').ok_or_else(bad)?;
            let depth = depth_text.parse::<u32>().map_err(|_| bad())?;
            let nodes = nodes_text.trim().parse::<u64>().map_err(|_| bad())?;
            expectations.push((depth, nodes));
        }
        if expectations.is_empty() {
            return Err(bad());
        }
        vectors.push(PerftVector { fen, expectations });
    }
    Ok(vectors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::engine_tables::shared_test_tables;

    fn counts(fen: &str, depth: u32) -> PerftCounts {
        let mut position = parse_fen(fen).expect("FEN should parse");
        let generator = MoveGenerator::new(shared_test_tables());
        perft(&generator, &mut position, depth)
    }

    #[test]
    fn start_position_node_counts() {
        let generator = MoveGenerator::new(shared_test_tables());
        let mut position = Position::start_position();
        assert_eq!(perft(&generator, &mut position, 1).nodes, 20);
        assert_eq!(perft(&generator, &mut position, 2).nodes, 400);

        let deep = perft(&generator, &mut position, 3);
        assert_eq!(deep.nodes, 8_902);
        assert_eq!(deep.captures, 34);
        assert_eq!(deep.checks, 12);
        // The traversal restores the position.
        assert_eq!(position.hash(), Position::start_position().hash());
    }

    #[test]
    fn start_position_depth_four() {
        let generator = MoveGenerator::new(shared_test_tables());
        let mut position = Position::start_position();
        let deep = perft(&generator, &mut position, 4);
        assert_eq!(deep.nodes, 197_281);
        assert_eq!(deep.captures, 1_576);
        assert_eq!(deep.en_passant, 0);
        assert_eq!(deep.castles, 0);
    }

    #[test]
    fn kiwipete_counts_cover_castles_and_en_passant() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let shallow = counts(fen, 1);
        assert_eq!(shallow.nodes, 48);
        assert_eq!(shallow.captures, 8);
        assert_eq!(shallow.castles, 2);

        let deep = counts(fen, 2);
        assert_eq!(deep.nodes, 2_039);
        assert_eq!(deep.captures, 351);
        assert_eq!(deep.en_passant, 1);
        assert_eq!(deep.castles, 91);
        assert_eq!(deep.checks, 3);
    }

    #[test]
    fn endgame_position_counts() {
        let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
        assert_eq!(counts(fen, 1).nodes, 14);
        assert_eq!(counts(fen, 2).nodes, 191);
        let deep = counts(fen, 3);
        assert_eq!(deep.nodes, 2_812);
        assert_eq!(deep.en_passant, 2);
    }

    #[test]
    fn vectors_parse_and_verify() {
        let text = "\
# standard openings
rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 ;D1 20 ;D2 400

8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1 ;D1 14 ;D2 191
";
        let vectors = parse_perft_vectors(text).expect("vectors should parse");
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].expectations, vec![(1, 20), (2, 400)]);

        let generator = MoveGenerator::new(shared_test_tables());
        for vector in &vectors {
            vector.verify(&generator).expect("vector should verify");
        }
    }

    #[test]
    fn mismatched_vectors_report_the_failure() {
        let vectors = parse_perft_vectors(
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 ;D1 21",
        )
        .expect("vector should parse");
        let generator = MoveGenerator::new(shared_test_tables());
        assert!(matches!(
            vectors[0].verify(&generator),
            Err(EngineError::PerftVector(_))
        ));
    }

    #[test]
    fn malformed_vector_lines_are_rejected() {
        for text in [";D1 20", "4k3/8/8/8/8/8/8/4K3 w - - 0 1", "fen ;X1 20", "fen ;D1"] {
            assert!(
                matches!(parse_perft_vectors(text), Err(EngineError::PerftVector(_))),
                "expected rejection of {text:?}"
            );
        }
    }
}
