//! Fixed-depth minimax with alpha-beta pruning under cooperative
//! cancellation.
//!
//! White is the maximizing side throughout, matching the White-positive
//! scorer convention. The stop flag is polled at every node; on a stop the
//! current subtree collapses to its static evaluation and the root loop
//! breaks, leaving the last fully evaluated root move as the result.

use crate::board::position::Position;
use crate::board::types::Color;
use crate::movegen::generator::MoveGenerator;
use crate::movegen::moves::Move;
use crate::search::control::SearchControl;
use crate::search::scoring::BoardScorer;

/// Window bound, well inside `i32` so the arithmetic cannot overflow.
const INFINITY: i32 = 1_000_000;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Search depth in plies.
    pub depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { depth: 3 }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchOutcome {
    pub best_move: Option<Move>,
    /// White-positive score of the chosen line.
    pub score: i32,
    /// Interior and leaf nodes visited.
    pub nodes: u64,
}

pub struct Searcher<'a> {
    generator: &'a MoveGenerator<'a>,
    scorer: &'a dyn BoardScorer,
    control: &'a SearchControl,
    nodes: u64,
}

impl<'a> Searcher<'a> {
    pub fn new(
        generator: &'a MoveGenerator<'a>,
        scorer: &'a dyn BoardScorer,
        control: &'a SearchControl,
    ) -> Self {
        Self {
            generator,
            scorer,
            control,
            nodes: 0,
        }
    }

    /// Searches the position to the configured depth. Each root improvement
    /// is published through the control record as it is found, so a stopped
    /// search still leaves its best-so-far visible.
    pub fn run(&mut self, position: &mut Position, config: SearchConfig) -> SearchOutcome {
        let maximizing = position.side_to_move() == Color::White;
        let mut alpha = -INFINITY;
        let mut beta = INFINITY;
        let mut best_move = None;
        let mut best_score = if maximizing { -INFINITY } else { INFINITY };

        let moves = self.generator.legal_moves(position);
        if moves.is_empty() {
            // Mate or stalemate at the root: a leaf, scored statically.
            return SearchOutcome {
                best_move: None,
                score: self.scorer.score(position),
                nodes: self.nodes,
            };
        }

        for mv in moves {
            if self.control.should_stop() {
                break;
            }
            position.make_move(mv);
            let depth = u32::from(config.depth).saturating_sub(1);
            let score = self.alpha_beta(position, depth, alpha, beta);
            position
                .undo_move()
                .expect("history cannot be empty after make_move");

            // A stop raised inside the subtree truncates it to shallow
            // static evaluations; that score must not displace a fully
            // evaluated best line.
            if self.control.should_stop() {
                break;
            }

            let improved = if maximizing {
                score > best_score
            } else {
                score < best_score
            };
            if best_move.is_none() || improved {
                best_move = Some(mv);
                best_score = score;
                self.control.record_best(mv, score);
            }
            if maximizing {
                alpha = alpha.max(best_score);
            } else {
                beta = beta.min(best_score);
            }
        }

        let score = match best_move {
            Some(_) => best_score,
            // Stopped before the first root move finished.
            None => self.scorer.score(position),
        };
        SearchOutcome {
            best_move,
            score,
            nodes: self.nodes,
        }
    }

    fn alpha_beta(&mut self, position: &mut Position, depth: u32, alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;
        if self.control.should_stop() || depth == 0 {
            return self.scorer.score(position);
        }

        let moves = self.generator.legal_moves(position);
        if moves.is_empty() {
            return self.scorer.score(position);
        }

        let maximizing = position.side_to_move() == Color::White;
        let mut alpha = alpha;
        let mut beta = beta;
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mv in moves {
            position.make_move(mv);
            let score = self.alpha_beta(position, depth - 1, alpha, beta);
            position
                .undo_move()
                .expect("history cannot be empty after make_move");

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if alpha >= beta {
                break;
            }
        }
        best
    }

}

/// Convenience entry point for a single search.
pub fn run_search(
    generator: &MoveGenerator,
    position: &mut Position,
    scorer: &dyn BoardScorer,
    control: &SearchControl,
    config: SearchConfig,
) -> SearchOutcome {
    Searcher::new(generator, scorer, control).run(position, config)
}
