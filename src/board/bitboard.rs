//! Bitboard primitives: square conversions, rank/file masks, directional
//! shifts, edge masks, and blocker-ray walks.
//!
//! These are pure functions over 64-bit masks. Out-of-range squares are
//! debug-asserted preconditions; callers validate before use.

use crate::board::types::{Bitboard, Square};

pub const RANK_8: Bitboard = 0x0000_0000_0000_00FF;
pub const RANK_7: Bitboard = RANK_8 << 8;
pub const RANK_6: Bitboard = RANK_7 << 8;
pub const RANK_5: Bitboard = RANK_6 << 8;
pub const RANK_4: Bitboard = RANK_5 << 8;
pub const RANK_3: Bitboard = RANK_4 << 8;
pub const RANK_2: Bitboard = RANK_3 << 8;
pub const RANK_1: Bitboard = RANK_2 << 8;

pub const FILE_A: Bitboard = 0x0101_0101_0101_0101;
pub const FILE_B: Bitboard = FILE_A << 1;
pub const FILE_C: Bitboard = FILE_B << 1;
pub const FILE_D: Bitboard = FILE_C << 1;
pub const FILE_E: Bitboard = FILE_D << 1;
pub const FILE_F: Bitboard = FILE_E << 1;
pub const FILE_G: Bitboard = FILE_F << 1;
pub const FILE_H: Bitboard = FILE_G << 1;

pub const EDGES: Bitboard = RANK_1 | RANK_8 | FILE_A | FILE_H;

/// Compass direction over the square grid. North points toward rank 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ROOK_RAYS: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub const BISHOP_RAYS: [Direction; 4] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];
}

/// Returns a bitboard with only the given square set.
#[inline]
pub fn square_bb(square: Square) -> Bitboard {
    debug_assert!((square as usize) < 64, "square out of range");
    1u64 << square
}

/// File index of a square, `0` = file a.
#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

/// Rank index of a square, `0` = rank 1.
#[inline]
pub const fn rank_of(square: Square) -> u8 {
    7 - square / 8
}

/// Returns the square of the only set bit, or `None` for an empty board.
#[inline]
pub fn square_from_bb(board: Bitboard) -> Option<Square> {
    if board == 0 {
        return None;
    }
    debug_assert!(board.count_ones() == 1, "more than one bit set");
    Some(board.trailing_zeros() as Square)
}

/// Number of set bits on the board.
#[inline]
pub fn population_count(board: Bitboard) -> u32 {
    board.count_ones()
}

/// Clears the least significant set bit and returns its square.
/// Precondition: `board` is non-empty.
#[inline]
pub fn pop_lsb(board: &mut Bitboard) -> Square {
    debug_assert!(*board != 0, "pop_lsb on empty bitboard");
    let square = board.trailing_zeros() as Square;
    *board &= *board - 1;
    square
}

/// Shifts the board `amount` steps in the given direction.
///
/// Raw bit shifts: file wraparound is the caller's concern and is normally
/// prevented with the per-direction edge masks below.
#[inline]
pub fn shift_direction(board: Bitboard, direction: Direction, amount: u32) -> Bitboard {
    let (step, toward_lsb) = match direction {
        Direction::North => (8, true),
        Direction::South => (8, false),
        Direction::East => (1, false),
        Direction::West => (1, true),
        Direction::NorthEast => (7, true),
        Direction::NorthWest => (9, true),
        Direction::SouthEast => (9, false),
        Direction::SouthWest => (7, false),
    };
    let bits = step * amount;
    if bits >= 64 {
        return 0;
    }
    if toward_lsb {
        board >> bits
    } else {
        board << bits
    }
}

/// Bitboard of the edge squares terminating rays in the given direction.
#[inline]
pub fn edge_mask(direction: Direction) -> Bitboard {
    match direction {
        Direction::North => RANK_8,
        Direction::South => RANK_1,
        Direction::East => FILE_H,
        Direction::West => FILE_A,
        Direction::NorthEast => RANK_8 | FILE_H,
        Direction::NorthWest => RANK_8 | FILE_A,
        Direction::SouthEast => RANK_1 | FILE_H,
        Direction::SouthWest => RANK_1 | FILE_A,
    }
}

/// Ray from the square toward the first blocker (or the board edge).
///
/// The start square is excluded; the blocking square is included, which lets
/// slider targets distinguish captures from quiet moves downstream.
pub fn blocker_ray(square_bb: Bitboard, direction: Direction, blockers: Bitboard) -> Bitboard {
    debug_assert!(square_bb.count_ones() == 1);
    let edge = edge_mask(direction);
    if square_bb & edge != 0 {
        return 0;
    }

    let mut result = 0;
    let mut current = shift_direction(square_bb, direction, 1);
    loop {
        result |= current;
        if current & (blockers | edge) != 0 {
            break;
        }
        current = shift_direction(current, direction, 1);
    }
    result
}

/// Returns the square named by two-character algebraic text such as `e4`.
pub fn square_from_algebraic(text: &str) -> Option<Square> {
    let mut chars = text.chars();
    let file_char = chars.next()?.to_ascii_lowercase();
    let rank_char = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if !('a'..='h').contains(&file_char) || !('1'..='8').contains(&rank_char) {
        return None;
    }
    let file = file_char as u8 - b'a';
    let rank = rank_char as u8 - b'1';
    Some((7 - rank) * 8 + file)
}

/// Formats a square as two-character algebraic text.
pub fn algebraic_from_square(square: Square) -> String {
    debug_assert!((square as usize) < 64);
    let file = (b'a' + file_of(square)) as char;
    let rank = (b'1' + rank_of(square)) as char;
    format!("{file}{rank}")
}
