//! Move generation: pseudo-legal generation over the attack tables plus the
//! make/undo legality filter.
//!
//! Generation is parameterized by the side to move; the same code path
//! serves both colors. Castles are emitted fully legal (path, rights, and
//! attack checks included); everything else is filtered by applying the move
//! and testing whether the mover's own king is left attacked.

use crate::board::bitboard::{pop_lsb, square_bb, RANK_1, RANK_2, RANK_7, RANK_8};
use crate::board::position::{king_castle_squares, Position};
use crate::board::types::{Bitboard, CastleSide, Color, PieceKind, Square};
use crate::movegen::moves::{Move, MoveKind};
use crate::tables::engine_tables::EngineTables;

pub struct MoveGenerator<'a> {
    tables: &'a EngineTables,
}

impl<'a> MoveGenerator<'a> {
    pub fn new(tables: &'a EngineTables) -> Self {
        Self { tables }
    }

    #[inline]
    pub fn tables(&self) -> &'a EngineTables {
        self.tables
    }

    /// All moves for the side to move, ignoring whether the mover's king is
    /// left in check. Castles are the exception and are emitted fully legal.
    pub fn pseudo_legal_moves(&self, position: &Position) -> Vec<Move> {
        let side = position.side_to_move();
        let mut moves = Vec::with_capacity(64);
        self.pawn_moves(position, side, &mut moves);
        self.knight_moves(position, side, &mut moves);
        self.slider_moves(position, side, &mut moves);
        self.king_moves(position, side, &mut moves);
        moves
    }

    /// Moves that leave the mover's own king safe. Needs `&mut` access to
    /// apply and undo each candidate; the position is unchanged on return.
    pub fn legal_moves(&self, position: &mut Position) -> Vec<Move> {
        let side = position.side_to_move();
        let mut legal = Vec::new();
        for mv in self.pseudo_legal_moves(position) {
            position.make_move(mv);
            if !position.in_check(side, self.tables) {
                legal.push(mv);
            }
            position
                .undo_move()
                .expect("history cannot be empty after make_move");
        }
        legal
    }

    fn pawn_moves(&self, position: &Position, side: Color, moves: &mut Vec<Move>) {
        let enemy = side.opposite();
        let occupied = position.occupied();
        let enemy_occupied = position.occupied_by_side(enemy);
        let (last_rank, start_rank) = match side {
            Color::White => (RANK_8, RANK_2),
            Color::Black => (RANK_1, RANK_7),
        };

        let mut pawns = position.pieces(side, PieceKind::Pawn);
        while pawns != 0 {
            let from = pop_lsb(&mut pawns);
            let from_bb = square_bb(from);
            if from_bb & last_rank != 0 {
                continue;
            }

            let forward = pawn_forward(side, from);
            if occupied & square_bb(forward) == 0 {
                if square_bb(forward) & last_rank != 0 {
                    push_promotions(moves, from, forward, None);
                } else {
                    moves.push(Move::normal(from, forward, PieceKind::Pawn, None));
                    if from_bb & start_rank != 0 {
                        let double = pawn_forward(side, forward);
                        if occupied & square_bb(double) == 0 {
                            moves.push(Move {
                                from,
                                to: double,
                                piece: PieceKind::Pawn,
                                kind: MoveKind::DoublePawnPush,
                                promotion: None,
                                captured: None,
                            });
                        }
                    }
                }
            }

            let mut captures = self.tables.pawn_attacks(side, from) & enemy_occupied;
            while captures != 0 {
                let to = pop_lsb(&mut captures);
                let captured = enemy_piece_on(position, enemy, to);
                if square_bb(to) & last_rank != 0 {
                    push_promotions(moves, from, to, captured);
                } else {
                    moves.push(Move::normal(from, to, PieceKind::Pawn, captured));
                }
            }

            if let Some(ep) = position.state().en_passant_square {
                if self.tables.pawn_attacks(side, from) & square_bb(ep) != 0 {
                    moves.push(Move {
                        from,
                        to: ep,
                        piece: PieceKind::Pawn,
                        kind: MoveKind::EnPassant,
                        promotion: None,
                        captured: Some(PieceKind::Pawn),
                    });
                }
            }
        }
    }

    fn knight_moves(&self, position: &Position, side: Color, moves: &mut Vec<Move>) {
        let own = position.occupied_by_side(side);
        let mut knights = position.pieces(side, PieceKind::Knight);
        while knights != 0 {
            let from = pop_lsb(&mut knights);
            let targets = self.tables.knight_attacks(from) & !own;
            self.push_targets(position, side, from, PieceKind::Knight, targets, moves);
        }
    }

    fn slider_moves(&self, position: &Position, side: Color, moves: &mut Vec<Move>) {
        let own = position.occupied_by_side(side);
        let occupied = position.occupied();

        for kind in [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen] {
            let mut sliders = position.pieces(side, kind);
            while sliders != 0 {
                let from = pop_lsb(&mut sliders);
                let attacks = match kind {
                    PieceKind::Bishop => self.tables.bishop_attacks(from, occupied),
                    PieceKind::Rook => self.tables.rook_attacks(from, occupied),
                    _ => self.tables.queen_attacks(from, occupied),
                };
                self.push_targets(position, side, from, kind, attacks & !own, moves);
            }
        }
    }

    fn king_moves(&self, position: &Position, side: Color, moves: &mut Vec<Move>) {
        let own = position.occupied_by_side(side);
        let from = position.king_square(side);
        let targets = self.tables.king_attacks(from) & !own;
        self.push_targets(position, side, from, PieceKind::King, targets, moves);

        for (castle, kind) in [
            (CastleSide::Kingside, MoveKind::CastleKingside),
            (CastleSide::Queenside, MoveKind::CastleQueenside),
        ] {
            if position.can_castle(side, castle, self.tables) {
                let (king_from, king_to) = king_castle_squares(side, castle);
                moves.push(Move {
                    from: king_from,
                    to: king_to,
                    piece: PieceKind::King,
                    kind,
                    promotion: None,
                    captured: None,
                });
            }
        }
    }

    fn push_targets(
        &self,
        position: &Position,
        side: Color,
        from: Square,
        piece: PieceKind,
        mut targets: Bitboard,
        moves: &mut Vec<Move>,
    ) {
        let enemy = side.opposite();
        while targets != 0 {
            let to = pop_lsb(&mut targets);
            let captured = enemy_piece_on(position, enemy, to);
            moves.push(Move::normal(from, to, piece, captured));
        }
    }
}

#[inline]
fn pawn_forward(side: Color, square: Square) -> Square {
    match side {
        Color::White => square - 8,
        Color::Black => square + 8,
    }
}

fn push_promotions(moves: &mut Vec<Move>, from: Square, to: Square, captured: Option<PieceKind>) {
    for promotion in PieceKind::PROMOTIONS {
        moves.push(Move {
            from,
            to,
            piece: PieceKind::Pawn,
            kind: MoveKind::Promotion,
            promotion: Some(promotion),
            captured,
        });
    }
}

fn enemy_piece_on(position: &Position, enemy: Color, square: Square) -> Option<PieceKind> {
    let bb = square_bb(square);
    PieceKind::ALL
        .into_iter()
        .find(|&kind| position.pieces(enemy, kind) & bb != 0)
}
