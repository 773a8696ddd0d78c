//! Precomputed per-square attack masks for the non-sliding pieces and the
//! unblocked (edge-excluded) ray masks the magic tables hash against.
//!
//! Everything here is computed once, eagerly, before any move generation or
//! search touches it, and is immutable afterward.

use crate::board::bitboard::{
    edge_mask, shift_direction, square_bb, Direction, FILE_A, FILE_B, FILE_G, FILE_H, RANK_1,
    RANK_2, RANK_7, RANK_8,
};
use crate::board::types::{Bitboard, Color, Square, NUM_SQUARES};

#[derive(Debug, Clone)]
pub struct AttackTables {
    white_pawn: [Bitboard; NUM_SQUARES],
    black_pawn: [Bitboard; NUM_SQUARES],
    knight: [Bitboard; NUM_SQUARES],
    king: [Bitboard; NUM_SQUARES],
    bishop: [Bitboard; NUM_SQUARES],
    rook: [Bitboard; NUM_SQUARES],
    queen: [Bitboard; NUM_SQUARES],
}

impl AttackTables {
    pub fn new() -> Self {
        let bishop = slider_masks(&Direction::BISHOP_RAYS);
        let rook = slider_masks(&Direction::ROOK_RAYS);
        let mut queen = [0; NUM_SQUARES];
        for square in 0..NUM_SQUARES {
            queen[square] = bishop[square] | rook[square];
        }

        Self {
            white_pawn: pawn_attacks(Color::White),
            black_pawn: pawn_attacks(Color::Black),
            knight: knight_attacks(),
            king: king_attacks(),
            bishop,
            rook,
            queen,
        }
    }

    /// Squares a pawn of the given color attacks from `square`.
    #[inline]
    pub fn pawn(&self, color: Color, square: Square) -> Bitboard {
        match color {
            Color::White => self.white_pawn[square as usize],
            Color::Black => self.black_pawn[square as usize],
        }
    }

    #[inline]
    pub fn knight(&self, square: Square) -> Bitboard {
        self.knight[square as usize]
    }

    #[inline]
    pub fn king(&self, square: Square) -> Bitboard {
        self.king[square as usize]
    }

    /// Relevant-occupancy mask for bishop magic hashing (edges excluded).
    #[inline]
    pub fn bishop_mask(&self, square: Square) -> Bitboard {
        self.bishop[square as usize]
    }

    /// Relevant-occupancy mask for rook magic hashing (edges excluded).
    #[inline]
    pub fn rook_mask(&self, square: Square) -> Bitboard {
        self.rook[square as usize]
    }

    /// Union of the bishop and rook masks.
    #[inline]
    pub fn queen_mask(&self, square: Square) -> Bitboard {
        self.queen[square as usize]
    }
}

impl Default for AttackTables {
    fn default() -> Self {
        Self::new()
    }
}

fn pawn_attacks(color: Color) -> [Bitboard; NUM_SQUARES] {
    let mut table = [0; NUM_SQUARES];
    for (square, entry) in table.iter_mut().enumerate() {
        let bb = square_bb(square as Square);
        match color {
            Color::White => {
                // No attacks from the last rank; a pawn there has promoted.
                if bb & RANK_8 != 0 {
                    continue;
                }
                if bb & FILE_H == 0 {
                    *entry |= bb >> 7;
                }
                if bb & FILE_A == 0 {
                    *entry |= bb >> 9;
                }
            }
            Color::Black => {
                if bb & RANK_1 != 0 {
                    continue;
                }
                if bb & FILE_H == 0 {
                    *entry |= bb << 9;
                }
                if bb & FILE_A == 0 {
                    *entry |= bb << 7;
                }
            }
        }
    }
    table
}

fn knight_attacks() -> [Bitboard; NUM_SQUARES] {
    let mut table = [0; NUM_SQUARES];
    for (square, entry) in table.iter_mut().enumerate() {
        let bb = square_bb(square as Square);

        if bb & (RANK_8 | RANK_7) == 0 {
            if bb & FILE_A == 0 {
                *entry |= bb >> 17;
            }
            if bb & FILE_H == 0 {
                *entry |= bb >> 15;
            }
        }
        if bb & RANK_8 == 0 {
            if bb & (FILE_A | FILE_B) == 0 {
                *entry |= bb >> 10;
            }
            if bb & (FILE_G | FILE_H) == 0 {
                *entry |= bb >> 6;
            }
        }
        if bb & RANK_1 == 0 {
            if bb & (FILE_A | FILE_B) == 0 {
                *entry |= bb << 6;
            }
            if bb & (FILE_G | FILE_H) == 0 {
                *entry |= bb << 10;
            }
        }
        if bb & (RANK_1 | RANK_2) == 0 {
            if bb & FILE_A == 0 {
                *entry |= bb << 15;
            }
            if bb & FILE_H == 0 {
                *entry |= bb << 17;
            }
        }
    }
    table
}

fn king_attacks() -> [Bitboard; NUM_SQUARES] {
    let mut table = [0; NUM_SQUARES];
    for (square, entry) in table.iter_mut().enumerate() {
        let bb = square_bb(square as Square);

        if bb & RANK_8 == 0 {
            *entry |= bb >> 8;
            if bb & FILE_A == 0 {
                *entry |= bb >> 9;
            }
            if bb & FILE_H == 0 {
                *entry |= bb >> 7;
            }
        }
        if bb & RANK_1 == 0 {
            *entry |= bb << 8;
            if bb & FILE_A == 0 {
                *entry |= bb << 7;
            }
            if bb & FILE_H == 0 {
                *entry |= bb << 9;
            }
        }
        if bb & FILE_A == 0 {
            *entry |= bb >> 1;
        }
        if bb & FILE_H == 0 {
            *entry |= bb << 1;
        }
    }
    table
}

/// Unblocked rays to the board edge, excluding the edge square itself: a
/// blocker on the edge can never be jumped, so it is never relevant to the
/// magic hash.
fn slider_masks(rays: &[Direction; 4]) -> [Bitboard; NUM_SQUARES] {
    let mut table = [0; NUM_SQUARES];
    for (square, entry) in table.iter_mut().enumerate() {
        let bb = square_bb(square as Square);
        for &direction in rays {
            let edge = edge_mask(direction);
            if bb & edge != 0 {
                continue;
            }
            let mut current = shift_direction(bb, direction, 1);
            while current & edge == 0 {
                *entry |= current;
                current = shift_direction(current, direction, 1);
            }
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::bitboard::{square_from_algebraic, EDGES};

    fn sq(text: &str) -> Square {
        square_from_algebraic(text).expect("square should parse")
    }

    #[test]
    fn no_entry_contains_its_own_square() {
        let tables = AttackTables::new();
        for square in 0..64u8 {
            let own = square_bb(square);
            assert_eq!(tables.knight(square) & own, 0);
            assert_eq!(tables.king(square) & own, 0);
            assert_eq!(tables.bishop_mask(square) & own, 0);
            assert_eq!(tables.rook_mask(square) & own, 0);
            assert_eq!(tables.pawn(Color::White, square) & own, 0);
            assert_eq!(tables.pawn(Color::Black, square) & own, 0);
        }
    }

    #[test]
    fn knight_attacks_do_not_wrap_between_files() {
        let tables = AttackTables::new();
        // A knight on the h-file must never attack the a- or b-file.
        for rank in 1..=8 {
            let square = sq(&format!("h{rank}"));
            assert_eq!(tables.knight(square) & (FILE_A | FILE_B), 0);
            let square = sq(&format!("a{rank}"));
            assert_eq!(tables.knight(square) & (FILE_G | FILE_H), 0);
        }
        assert_eq!(tables.knight(sq("a1")).count_ones(), 2);
        assert_eq!(tables.knight(sq("d4")).count_ones(), 8);
    }

    #[test]
    fn king_attacks_are_clipped_to_the_board() {
        let tables = AttackTables::new();
        assert_eq!(tables.king(sq("a1")).count_ones(), 3);
        assert_eq!(tables.king(sq("e1")).count_ones(), 5);
        assert_eq!(tables.king(sq("e4")).count_ones(), 8);
        for rank in 1..=8 {
            assert_eq!(tables.king(sq(&format!("a{rank}"))) & FILE_H, 0);
            assert_eq!(tables.king(sq(&format!("h{rank}"))) & FILE_A, 0);
        }
    }

    #[test]
    fn pawn_attacks_are_color_specific_and_edge_safe() {
        let tables = AttackTables::new();
        let expected = square_bb(sq("d3")) | square_bb(sq("f3"));
        assert_eq!(tables.pawn(Color::White, sq("e2")), expected);
        let expected = square_bb(sq("d6")) | square_bb(sq("f6"));
        assert_eq!(tables.pawn(Color::Black, sq("e7")), expected);
        // Single capture square on the rim, and nothing from the last rank.
        assert_eq!(tables.pawn(Color::White, sq("a2")), square_bb(sq("b3")));
        assert_eq!(tables.pawn(Color::White, sq("h2")), square_bb(sq("g3")));
        assert_eq!(tables.pawn(Color::White, sq("e8")), 0);
        assert_eq!(tables.pawn(Color::Black, sq("e1")), 0);
    }

    #[test]
    fn slider_masks_exclude_edge_squares() {
        let tables = AttackTables::new();
        // Rook on a1: a2..a7 plus b1..g1, never the edge terminators a8/h1.
        let mask = tables.rook_mask(sq("a1"));
        assert_eq!(mask.count_ones(), 12);
        assert_eq!(mask & square_bb(sq("a8")), 0);
        assert_eq!(mask & square_bb(sq("h1")), 0);
        // Bishop on d4 keeps the inner diagonals only.
        let mask = tables.bishop_mask(sq("d4"));
        assert_eq!(mask.count_ones(), 9);
        assert_eq!(mask & EDGES, 0);
        // Queen mask is the union of the two families.
        assert_eq!(
            tables.queen_mask(sq("d4")),
            tables.bishop_mask(sq("d4")) | tables.rook_mask(sq("d4"))
        );
    }
}
