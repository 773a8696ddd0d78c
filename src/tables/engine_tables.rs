//! Bundles the immutable lookup tables the move generator depends on.
//!
//! Built once at startup and shared by reference (or `Arc`) from there on;
//! nothing mutates these after construction.

use crate::board::types::{Bitboard, Color, Square};
use crate::errors::EngineError;
use crate::tables::attacks::AttackTables;
use crate::tables::magics::MagicTables;

/// Default seed for the magic-multiplier search.
pub const DEFAULT_MAGIC_SEED: u64 = 0x5EED_1E55_B0A7_D00D;

/// Immutable attack and slider-lookup tables.
#[derive(Debug, Clone)]
pub struct EngineTables {
    attacks: AttackTables,
    magics: MagicTables,
}

impl EngineTables {
    pub fn new() -> Result<Self, EngineError> {
        Self::with_seed(DEFAULT_MAGIC_SEED)
    }

    pub fn with_seed(seed: u64) -> Result<Self, EngineError> {
        let attacks = AttackTables::new();
        let magics = MagicTables::new(&attacks, seed)?;
        Ok(Self { attacks, magics })
    }

    #[inline]
    pub fn pawn_attacks(&self, color: Color, square: Square) -> Bitboard {
        self.attacks.pawn(color, square)
    }

    #[inline]
    pub fn knight_attacks(&self, square: Square) -> Bitboard {
        self.attacks.knight(square)
    }

    #[inline]
    pub fn king_attacks(&self, square: Square) -> Bitboard {
        self.attacks.king(square)
    }

    #[inline]
    pub fn bishop_attacks(&self, square: Square, occupied: Bitboard) -> Bitboard {
        self.magics.bishop_attacks(square, occupied)
    }

    #[inline]
    pub fn rook_attacks(&self, square: Square, occupied: Bitboard) -> Bitboard {
        self.magics.rook_attacks(square, occupied)
    }

    #[inline]
    pub fn queen_attacks(&self, square: Square, occupied: Bitboard) -> Bitboard {
        self.magics.queen_attacks(square, occupied)
    }
}

/// Shared tables for tests. Magic generation is the slow part of table
/// construction, so tests amortize it across the whole run.
#[cfg(test)]
pub(crate) fn shared_test_tables() -> &'static EngineTables {
    use std::sync::OnceLock;
    static TABLES: OnceLock<EngineTables> = OnceLock::new();
    TABLES.get_or_init(|| EngineTables::new().expect("table construction should succeed"))
}
