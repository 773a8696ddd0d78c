//! Shared search control: cancellation flag and best-result record.
//!
//! One mutex guards both, so a reader never observes a stop request paired
//! with a stale best move. The stop flag is level-triggered; the search
//! polls it at every node and unwinds without clearing it.

use std::sync::{Arc, Mutex};

use crate::movegen::moves::Move;

#[derive(Debug, Default)]
struct ControlState {
    stop: bool,
    best_move: Option<Move>,
    best_score: Option<i32>,
}

#[derive(Debug, Default)]
pub struct SearchControl {
    state: Mutex<ControlState>,
}

impl SearchControl {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Clears the stop flag and the recorded result ahead of a new search.
    pub fn begin_search(&self) {
        let mut state = self.lock();
        state.stop = false;
        state.best_move = None;
        state.best_score = None;
    }

    pub fn request_stop(&self) {
        self.lock().stop = true;
    }

    pub fn should_stop(&self) -> bool {
        self.lock().stop
    }

    /// Records a new best line; called whenever the root improves.
    pub fn record_best(&self, best_move: Move, score: i32) {
        let mut state = self.lock();
        state.best_move = Some(best_move);
        state.best_score = Some(score);
    }

    /// The best move and score recorded so far, if any.
    pub fn best(&self) -> (Option<Move>, Option<i32>) {
        let state = self.lock();
        (state.best_move, state.best_score)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ControlState> {
        self.state.lock().expect("search control mutex poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::bitboard::square_from_algebraic;
    use crate::board::types::PieceKind;

    fn sample_move() -> Move {
        Move::normal(
            square_from_algebraic("e2").expect("square should parse"),
            square_from_algebraic("e4").expect("square should parse"),
            PieceKind::Pawn,
            None,
        )
    }

    #[test]
    fn stop_is_level_triggered_until_reset() {
        let control = SearchControl::new();
        assert!(!control.should_stop());
        control.request_stop();
        assert!(control.should_stop());
        assert!(control.should_stop());
        control.begin_search();
        assert!(!control.should_stop());
    }

    #[test]
    fn begin_search_clears_the_recorded_best() {
        let control = SearchControl::new();
        control.record_best(sample_move(), 42);
        assert_eq!(control.best(), (Some(sample_move()), Some(42)));
        control.begin_search();
        assert_eq!(control.best(), (None, None));
    }

    #[test]
    fn later_records_overwrite_earlier_ones() {
        let control = SearchControl::new();
        control.record_best(sample_move(), -10);
        control.record_best(sample_move(), 25);
        assert_eq!(control.best().1, Some(25));
    }
}
