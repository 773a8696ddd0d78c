//! Position state: twelve piece bitboards plus the scalar game state, with
//! reversible move application.
//!
//! `make_move` edits the bitboards and maintains the Zobrist hash
//! incrementally; `undo_move` reverses the board edits and restores the
//! scalar state (hash included) saved on the history stack, so a
//! make/undo pair is an exact round trip.

use crate::board::bitboard::{square_bb, square_from_bb, RANK_2, RANK_7};
use crate::board::types::{
    castle_right, castle_rights_of, Bitboard, CastleSide, CastlingRights, Color, PieceKind, Square,
    CASTLE_ALL, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE,
    CASTLE_WHITE_QUEENSIDE,
};
use crate::board::zobrist;
use crate::errors::EngineError;
use crate::movegen::moves::{Move, MoveKind};
use crate::tables::engine_tables::EngineTables;

/// Scalar position state, saved verbatim on the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub hash: u64,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
    pub king_has_moved: [bool; 2],
}

#[derive(Debug, Clone)]
struct HistoryEntry {
    mv: Move,
    /// State as it was before the move was applied.
    state: State,
}

#[derive(Debug, Clone)]
pub struct Position {
    pieces: [[Bitboard; 6]; 2],
    state: State,
    history: Vec<HistoryEntry>,
}

impl Position {
    /// The standard starting position.
    pub fn start_position() -> Self {
        let mut pieces = [[0; 6]; 2];

        pieces[Color::White.index()][PieceKind::Pawn.index()] = RANK_2;
        pieces[Color::White.index()][PieceKind::Rook.index()] = square_bb(56) | square_bb(63);
        pieces[Color::White.index()][PieceKind::Knight.index()] = square_bb(57) | square_bb(62);
        pieces[Color::White.index()][PieceKind::Bishop.index()] = square_bb(58) | square_bb(61);
        pieces[Color::White.index()][PieceKind::Queen.index()] = square_bb(59);
        pieces[Color::White.index()][PieceKind::King.index()] = square_bb(60);

        pieces[Color::Black.index()][PieceKind::Pawn.index()] = RANK_7;
        pieces[Color::Black.index()][PieceKind::Rook.index()] = square_bb(0) | square_bb(7);
        pieces[Color::Black.index()][PieceKind::Knight.index()] = square_bb(1) | square_bb(6);
        pieces[Color::Black.index()][PieceKind::Bishop.index()] = square_bb(2) | square_bb(5);
        pieces[Color::Black.index()][PieceKind::Queen.index()] = square_bb(3);
        pieces[Color::Black.index()][PieceKind::King.index()] = square_bb(4);

        Self::from_parts(
            pieces,
            State {
                hash: 0,
                side_to_move: Color::White,
                castling_rights: CASTLE_ALL,
                en_passant_square: None,
                halfmove_clock: 0,
                fullmove_number: 1,
                king_has_moved: [false, false],
            },
        )
    }

    /// Assembles a position from piece boards and scalar state, computing the
    /// hash from scratch. The `hash` field of the passed state is ignored.
    pub(crate) fn from_parts(pieces: [[Bitboard; 6]; 2], mut state: State) -> Self {
        state.hash = compute_hash(&pieces, &state);
        Self {
            pieces,
            state,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> &State {
        &self.state
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    #[inline]
    pub fn hash(&self) -> u64 {
        self.state.hash
    }

    #[inline]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    #[inline]
    pub fn occupied_by_side(&self, color: Color) -> Bitboard {
        self.pieces[color.index()].iter().fold(0, |acc, bb| acc | bb)
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupied_by_side(Color::White) | self.occupied_by_side(Color::Black)
    }

    pub fn piece_on_square(&self, square: Square) -> Option<(Color, PieceKind)> {
        let bb = square_bb(square);
        for color in [Color::White, Color::Black] {
            for kind in PieceKind::ALL {
                if self.pieces(color, kind) & bb != 0 {
                    return Some((color, kind));
                }
            }
        }
        None
    }

    pub fn king_square(&self, color: Color) -> Square {
        square_from_bb(self.pieces(color, PieceKind::King)).expect("king must be on the board")
    }

    /// Number of moves applied since this position was set up.
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Applies a pseudo-legal move. Legality (own king safety) is the move
    /// generator's responsibility.
    pub fn make_move(&mut self, mv: Move) {
        let before = self.state;
        self.history.push(HistoryEntry { mv, state: before });

        let mover = before.side_to_move;
        let enemy = mover.opposite();
        let from_bb = square_bb(mv.from);
        let to_bb = square_bb(mv.to);
        let mut hash = before.hash;

        self.state.side_to_move = enemy;
        hash ^= zobrist::side_to_move_key();

        if let Some(old_ep) = before.en_passant_square {
            hash ^= zobrist::en_passant_key(old_ep);
        }
        self.state.en_passant_square = if mv.kind == MoveKind::DoublePawnPush {
            let ep = match mover {
                Color::White => mv.from - 8,
                Color::Black => mv.from + 8,
            };
            hash ^= zobrist::en_passant_key(ep);
            Some(ep)
        } else {
            None
        };

        self.state.halfmove_clock += 1;
        if mover == Color::White && before.fullmove_number != 1 {
            self.state.fullmove_number += 1;
        }

        let mut rights = before.castling_rights;
        if mv.piece == PieceKind::King {
            rights &= !castle_rights_of(mover);
            self.state.king_has_moved[mover.index()] = true;
        }
        if mv.piece == PieceKind::Rook {
            rights &= !rook_home_right(mover, mv.from);
        }
        if mv.captured == Some(PieceKind::Rook) {
            rights &= !rook_home_right(enemy, mv.to);
        }
        hash ^= zobrist::castling_key(before.castling_rights) ^ zobrist::castling_key(rights);
        self.state.castling_rights = rights;

        if let Some(kind) = mv.captured {
            let capture_square = match mv.kind {
                MoveKind::EnPassant => match mover {
                    Color::White => mv.to + 8,
                    Color::Black => mv.to - 8,
                },
                _ => mv.to,
            };
            self.pieces[enemy.index()][kind.index()] &= !square_bb(capture_square);
            hash ^= zobrist::piece_square_key(enemy, kind, capture_square);
        }

        self.pieces[mover.index()][mv.piece.index()] ^= from_bb | to_bb;
        hash ^= zobrist::piece_square_key(mover, mv.piece, mv.from)
            ^ zobrist::piece_square_key(mover, mv.piece, mv.to);

        if let Some(promotion) = mv.promotion {
            self.pieces[mover.index()][PieceKind::Pawn.index()] &= !to_bb;
            self.pieces[mover.index()][promotion.index()] |= to_bb;
            hash ^= zobrist::piece_square_key(mover, PieceKind::Pawn, mv.to)
                ^ zobrist::piece_square_key(mover, promotion, mv.to);
        }

        if let Some(castle) = castle_side_of(mv.kind) {
            let (rook_from, rook_to) = rook_castle_squares(mover, castle);
            self.pieces[mover.index()][PieceKind::Rook.index()] ^=
                square_bb(rook_from) | square_bb(rook_to);
            hash ^= zobrist::piece_square_key(mover, PieceKind::Rook, rook_from)
                ^ zobrist::piece_square_key(mover, PieceKind::Rook, rook_to);
        }

        self.state.hash = hash;
    }

    /// Reverses the most recent move and restores the saved state verbatim.
    pub fn undo_move(&mut self) -> Result<Move, EngineError> {
        let entry = self.history.pop().ok_or(EngineError::EmptyHistory)?;
        let mv = entry.mv;
        let mover = entry.state.side_to_move;
        let enemy = mover.opposite();
        let from_bb = square_bb(mv.from);
        let to_bb = square_bb(mv.to);

        if let Some(castle) = castle_side_of(mv.kind) {
            let (rook_from, rook_to) = rook_castle_squares(mover, castle);
            self.pieces[mover.index()][PieceKind::Rook.index()] ^=
                square_bb(rook_from) | square_bb(rook_to);
        }

        if let Some(promotion) = mv.promotion {
            self.pieces[mover.index()][promotion.index()] &= !to_bb;
            self.pieces[mover.index()][PieceKind::Pawn.index()] |= to_bb;
        }

        self.pieces[mover.index()][mv.piece.index()] ^= from_bb | to_bb;

        if let Some(kind) = mv.captured {
            let capture_square = match mv.kind {
                MoveKind::EnPassant => match mover {
                    Color::White => mv.to + 8,
                    Color::Black => mv.to - 8,
                },
                _ => mv.to,
            };
            self.pieces[enemy.index()][kind.index()] |= square_bb(capture_square);
        }

        self.state = entry.state;
        Ok(mv)
    }

    /// True when any piece of `by` attacks `square` on the current board.
    pub fn square_attacked(&self, square: Square, by: Color, tables: &EngineTables) -> bool {
        let occupied = self.occupied();

        // A pawn of `by` attacks `square` exactly when a pawn of the other
        // color standing on `square` would attack the pawn's square.
        if tables.pawn_attacks(by.opposite(), square) & self.pieces(by, PieceKind::Pawn) != 0 {
            return true;
        }
        if tables.knight_attacks(square) & self.pieces(by, PieceKind::Knight) != 0 {
            return true;
        }
        if tables.king_attacks(square) & self.pieces(by, PieceKind::King) != 0 {
            return true;
        }

        let diagonal = self.pieces(by, PieceKind::Bishop) | self.pieces(by, PieceKind::Queen);
        if tables.bishop_attacks(square, occupied) & diagonal != 0 {
            return true;
        }
        let orthogonal = self.pieces(by, PieceKind::Rook) | self.pieces(by, PieceKind::Queen);
        tables.rook_attacks(square, occupied) & orthogonal != 0
    }

    pub fn in_check(&self, color: Color, tables: &EngineTables) -> bool {
        self.square_attacked(self.king_square(color), color.opposite(), tables)
    }

    /// Full castle-legality test: rights intact, king unmoved, rook home,
    /// path empty, and neither the king's square nor its transit squares
    /// attacked.
    pub fn can_castle(&self, side: Color, castle: CastleSide, tables: &EngineTables) -> bool {
        if self.state.castling_rights & castle_right(side, castle) == 0 {
            return false;
        }
        if self.state.king_has_moved[side.index()] {
            return false;
        }
        let (rook_home, _) = rook_castle_squares(side, castle);
        if self.pieces(side, PieceKind::Rook) & square_bb(rook_home) == 0 {
            return false;
        }
        if self.occupied() & castle_between_mask(side, castle) != 0 {
            return false;
        }
        if self.in_check(side, tables) {
            return false;
        }
        let enemy = side.opposite();
        castle_transit_squares(side, castle)
            .iter()
            .all(|&square| !self.square_attacked(square, enemy, tables))
    }
}

/// King origin and destination for a castle.
pub fn king_castle_squares(side: Color, castle: CastleSide) -> (Square, Square) {
    match (side, castle) {
        (Color::White, CastleSide::Kingside) => (60, 62),
        (Color::White, CastleSide::Queenside) => (60, 58),
        (Color::Black, CastleSide::Kingside) => (4, 6),
        (Color::Black, CastleSide::Queenside) => (4, 2),
    }
}

/// Rook origin and destination for a castle.
pub fn rook_castle_squares(side: Color, castle: CastleSide) -> (Square, Square) {
    match (side, castle) {
        (Color::White, CastleSide::Kingside) => (63, 61),
        (Color::White, CastleSide::Queenside) => (56, 59),
        (Color::Black, CastleSide::Kingside) => (7, 5),
        (Color::Black, CastleSide::Queenside) => (0, 3),
    }
}

/// Squares between king and rook that must be empty.
fn castle_between_mask(side: Color, castle: CastleSide) -> Bitboard {
    match (side, castle) {
        (Color::White, CastleSide::Kingside) => square_bb(61) | square_bb(62),
        (Color::White, CastleSide::Queenside) => square_bb(57) | square_bb(58) | square_bb(59),
        (Color::Black, CastleSide::Kingside) => square_bb(5) | square_bb(6),
        (Color::Black, CastleSide::Queenside) => square_bb(1) | square_bb(2) | square_bb(3),
    }
}

/// Squares the king passes through or lands on; none may be attacked.
fn castle_transit_squares(side: Color, castle: CastleSide) -> [Square; 2] {
    match (side, castle) {
        (Color::White, CastleSide::Kingside) => [61, 62],
        (Color::White, CastleSide::Queenside) => [59, 58],
        (Color::Black, CastleSide::Kingside) => [5, 6],
        (Color::Black, CastleSide::Queenside) => [3, 2],
    }
}

fn castle_side_of(kind: MoveKind) -> Option<CastleSide> {
    match kind {
        MoveKind::CastleKingside => Some(CastleSide::Kingside),
        MoveKind::CastleQueenside => Some(CastleSide::Queenside),
        _ => None,
    }
}

/// Castling-rights bit forfeited when a rook leaves (or is captured on) the
/// given square.
fn rook_home_right(color: Color, square: Square) -> CastlingRights {
    match (color, square) {
        (Color::White, 63) => CASTLE_WHITE_KINGSIDE,
        (Color::White, 56) => CASTLE_WHITE_QUEENSIDE,
        (Color::Black, 7) => CASTLE_BLACK_KINGSIDE,
        (Color::Black, 0) => CASTLE_BLACK_QUEENSIDE,
        _ => 0,
    }
}

fn compute_hash(pieces: &[[Bitboard; 6]; 2], state: &State) -> u64 {
    let mut hash = 0;
    for color in [Color::White, Color::Black] {
        for kind in PieceKind::ALL {
            let mut bb = pieces[color.index()][kind.index()];
            while bb != 0 {
                let square = crate::board::bitboard::pop_lsb(&mut bb);
                hash ^= zobrist::piece_square_key(color, kind, square);
            }
        }
    }
    if state.side_to_move == Color::Black {
        hash ^= zobrist::side_to_move_key();
    }
    hash ^= zobrist::castling_key(state.castling_rights);
    if let Some(square) = state.en_passant_square {
        hash ^= zobrist::en_passant_key(square);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::bitboard::{population_count, square_from_algebraic};
    use crate::board::fen::parse_fen;
    use crate::tables::engine_tables::shared_test_tables;

    fn sq(text: &str) -> Square {
        square_from_algebraic(text).expect("square should parse")
    }

    fn double_push(from: &str, to: &str) -> Move {
        Move {
            from: sq(from),
            to: sq(to),
            piece: PieceKind::Pawn,
            kind: MoveKind::DoublePawnPush,
            promotion: None,
            captured: None,
        }
    }

    fn knight_hop(from: &str, to: &str) -> Move {
        Move::normal(sq(from), sq(to), PieceKind::Knight, None)
    }

    #[test]
    fn start_position_has_the_expected_shape() {
        let position = Position::start_position();
        assert_eq!(population_count(position.occupied()), 32);
        assert_eq!(position.side_to_move(), Color::White);
        assert_eq!(position.state().castling_rights, CASTLE_ALL);
        assert_eq!(position.state().en_passant_square, None);
        assert_eq!(position.state().fullmove_number, 1);
        assert_eq!(position.king_square(Color::White), sq("e1"));
        assert_eq!(position.king_square(Color::Black), sq("e8"));
        assert_eq!(
            position.piece_on_square(sq("d1")),
            Some((Color::White, PieceKind::Queen))
        );
        assert_eq!(position.piece_on_square(sq("e4")), None);
        assert_ne!(position.hash(), 0);
    }

    #[test]
    fn make_and_undo_round_trip_exactly() {
        let mut position = Position::start_position();
        let pieces_before = position.pieces;
        let state_before = *position.state();

        position.make_move(double_push("e2", "e4"));
        assert_eq!(position.side_to_move(), Color::Black);
        assert_eq!(position.state().en_passant_square, Some(sq("e3")));
        assert_eq!(position.state().halfmove_clock, 1);
        assert_ne!(position.hash(), state_before.hash);

        let undone = position.undo_move().expect("history is non-empty");
        assert_eq!(undone.to_string(), "e2e4");
        assert_eq!(position.pieces, pieces_before);
        assert_eq!(*position.state(), state_before);
    }

    #[test]
    fn undo_on_empty_history_is_an_error() {
        let mut position = Position::start_position();
        assert_eq!(position.undo_move(), Err(EngineError::EmptyHistory));
    }

    #[test]
    fn incremental_hash_matches_a_full_recompute() {
        let mut position = Position::start_position();
        for mv in [
            double_push("e2", "e4"),
            double_push("c7", "c5"),
            knight_hop("g1", "f3"),
            knight_hop("b8", "c6"),
        ] {
            position.make_move(mv);
            let recomputed = compute_hash(&position.pieces, position.state());
            assert_eq!(position.hash(), recomputed);
        }
    }

    #[test]
    fn transposing_move_orders_reach_the_same_hash() {
        let start = Position::start_position();
        let mut position = start.clone();
        // Knights out and back: placement, rights, and side all return to
        // the initial values, and the hash ignores the move clocks.
        position.make_move(knight_hop("g1", "f3"));
        position.make_move(knight_hop("g8", "f6"));
        position.make_move(knight_hop("f3", "g1"));
        position.make_move(knight_hop("f6", "g8"));
        assert_eq!(position.hash(), start.hash());
        assert_ne!(position.state().halfmove_clock, 0);
    }

    #[test]
    fn castling_moves_the_rook_and_clears_rights() {
        let mut position =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let state_before = *position.state();
        let pieces_before = position.pieces;

        position.make_move(Move {
            from: sq("e1"),
            to: sq("g1"),
            piece: PieceKind::King,
            kind: MoveKind::CastleKingside,
            promotion: None,
            captured: None,
        });
        assert_eq!(
            position.piece_on_square(sq("g1")),
            Some((Color::White, PieceKind::King))
        );
        assert_eq!(
            position.piece_on_square(sq("f1")),
            Some((Color::White, PieceKind::Rook))
        );
        assert_eq!(position.piece_on_square(sq("h1")), None);
        assert_eq!(
            position.state().castling_rights,
            CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE
        );
        assert!(position.state().king_has_moved[Color::White.index()]);

        position.undo_move().expect("history is non-empty");
        assert_eq!(position.pieces, pieces_before);
        assert_eq!(*position.state(), state_before);
    }

    #[test]
    fn rook_moves_and_rook_captures_forfeit_the_matching_right() {
        let mut position =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");

        // Rook leaves its home square.
        position.make_move(Move::normal(sq("h1"), sq("h8"), PieceKind::Rook, Some(PieceKind::Rook)));
        // White loses kingside by moving; Black loses kingside by capture.
        assert_eq!(
            position.state().castling_rights,
            CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_QUEENSIDE
        );
    }

    #[test]
    fn en_passant_capture_removes_the_bypassed_pawn() {
        let mut position =
            parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let state_before = *position.state();
        let pieces_before = position.pieces;

        position.make_move(Move {
            from: sq("e5"),
            to: sq("d6"),
            piece: PieceKind::Pawn,
            kind: MoveKind::EnPassant,
            promotion: None,
            captured: Some(PieceKind::Pawn),
        });
        assert_eq!(position.piece_on_square(sq("d5")), None);
        assert_eq!(
            position.piece_on_square(sq("d6")),
            Some((Color::White, PieceKind::Pawn))
        );
        assert_eq!(position.state().en_passant_square, None);

        position.undo_move().expect("history is non-empty");
        assert_eq!(position.pieces, pieces_before);
        assert_eq!(*position.state(), state_before);
    }

    #[test]
    fn promotion_swaps_the_pawn_for_the_chosen_piece() {
        let mut position = parse_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let pieces_before = position.pieces;

        position.make_move(Move {
            from: sq("a7"),
            to: sq("a8"),
            piece: PieceKind::Pawn,
            kind: MoveKind::Promotion,
            promotion: Some(PieceKind::Queen),
            captured: None,
        });
        assert_eq!(
            position.piece_on_square(sq("a8")),
            Some((Color::White, PieceKind::Queen))
        );
        assert_eq!(position.pieces(Color::White, PieceKind::Pawn), 0);

        position.undo_move().expect("history is non-empty");
        assert_eq!(position.pieces, pieces_before);
    }

    #[test]
    fn square_attacked_sees_all_piece_families() {
        let tables = shared_test_tables();
        let position = Position::start_position();
        // f3 is covered by the g1-knight and the e2/g2 pawns.
        assert!(position.square_attacked(sq("f3"), Color::White, tables));
        // e4 is covered by nothing at the start.
        assert!(!position.square_attacked(sq("e4"), Color::White, tables));
        assert!(!position.in_check(Color::White, tables));
        assert!(!position.in_check(Color::Black, tables));

        let position =
            parse_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(position.in_check(Color::White, tables));
    }

    #[test]
    fn castling_is_refused_through_and_out_of_check() {
        let tables = shared_test_tables();

        // Black to move, in check: no castling either way.
        let position =
            parse_fen("r3k2r/8/8/8/8/8/4R3/4K3 b kq - 0 1").expect("FEN should parse");
        assert!(!position.can_castle(Color::Black, CastleSide::Kingside, tables));
        assert!(!position.can_castle(Color::Black, CastleSide::Queenside, tables));

        // Rook covers f8: the kingside transit is attacked, queenside is not.
        let position =
            parse_fen("r3k2r/8/8/8/8/8/5R2/4K3 b kq - 0 1").expect("FEN should parse");
        assert!(!position.can_castle(Color::Black, CastleSide::Kingside, tables));
        assert!(position.can_castle(Color::Black, CastleSide::Queenside, tables));
    }

    #[test]
    fn a_king_trip_voids_castling_rights_for_good() {
        let tables = shared_test_tables();
        let mut position =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").expect("FEN should parse");

        // Black walks the king off e8 and straight back.
        position.make_move(Move::normal(sq("e8"), sq("d8"), PieceKind::King, None));
        position.make_move(Move::normal(sq("a1"), sq("a2"), PieceKind::Rook, None));
        position.make_move(Move::normal(sq("d8"), sq("e8"), PieceKind::King, None));

        assert_eq!(position.state().castling_rights & castle_rights_of(Color::Black), 0);
        assert!(position.state().king_has_moved[Color::Black.index()]);
        assert!(!position.can_castle(Color::Black, CastleSide::Kingside, tables));
        assert!(!position.can_castle(Color::Black, CastleSide::Queenside, tables));
    }

    #[test]
    fn castling_requires_an_empty_path_and_a_home_rook() {
        let tables = shared_test_tables();

        let position = Position::start_position();
        assert!(!position.can_castle(Color::White, CastleSide::Kingside, tables));

        let position =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        assert!(position.can_castle(Color::White, CastleSide::Kingside, tables));
        assert!(position.can_castle(Color::White, CastleSide::Queenside, tables));

        // Same placement but the FEN grants no rights.
        let position =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").expect("FEN should parse");
        assert!(!position.can_castle(Color::White, CastleSide::Kingside, tables));

        // Rook missing from h1.
        let position =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K3 w KQkq - 0 1").expect("FEN should parse");
        assert!(!position.can_castle(Color::White, CastleSide::Kingside, tables));
        assert!(position.can_castle(Color::White, CastleSide::Queenside, tables));
    }
}
