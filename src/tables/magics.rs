//! Magic-multiplier lookup tables for slider attacks.
//!
//! For each square the relevant occupancy bits are hashed with a fixed
//! multiplier into a dense table holding the precomputed attack set for that
//! blocker arrangement. Multipliers are searched at startup with a seeded
//! RNG, so the tables are reproducible run to run; the search is bounded and
//! reports failure as an error instead of spinning forever.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::bitboard::{blocker_ray, population_count, pop_lsb, square_bb, Direction};
use crate::board::types::{Bitboard, Square, NUM_SQUARES};
use crate::errors::EngineError;
use crate::tables::attacks::AttackTables;

/// Retry budget per square before magic generation is declared failed.
/// Back-rank rook squares routinely need several hundred thousand draws
/// before a sparse candidate survives the high-byte screen, so the budget
/// leaves generous headroom above the worst square observed.
const MAX_ATTEMPTS: u32 = 50_000_000;

/// One square's hash parameters plus its dense attack table.
#[derive(Debug, Clone)]
pub struct MagicEntry {
    mask: Bitboard,
    magic: u64,
    shift: u32,
    attacks: Vec<Bitboard>,
}

impl MagicEntry {
    #[inline]
    fn lookup(&self, occupied: Bitboard) -> Bitboard {
        let relevant = occupied & self.mask;
        let index = (relevant.wrapping_mul(self.magic) >> self.shift) as usize;
        self.attacks[index]
    }
}

/// Slider lookup tables for all 64 squares of both families.
#[derive(Debug, Clone)]
pub struct MagicTables {
    bishop: Vec<MagicEntry>,
    rook: Vec<MagicEntry>,
}

impl MagicTables {
    /// Builds both families from the given relevant-occupancy masks using a
    /// deterministic seed.
    pub fn new(attacks: &AttackTables, seed: u64) -> Result<Self, EngineError> {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut bishop = Vec::with_capacity(NUM_SQUARES);
        let mut rook = Vec::with_capacity(NUM_SQUARES);
        for square in 0..NUM_SQUARES as Square {
            bishop.push(find_magic(
                square,
                attacks.bishop_mask(square),
                &Direction::BISHOP_RAYS,
                &mut rng,
            )?);
            rook.push(find_magic(
                square,
                attacks.rook_mask(square),
                &Direction::ROOK_RAYS,
                &mut rng,
            )?);
        }

        Ok(Self { bishop, rook })
    }

    /// Bishop attack set from `square` given full-board occupancy.
    #[inline]
    pub fn bishop_attacks(&self, square: Square, occupied: Bitboard) -> Bitboard {
        self.bishop[square as usize].lookup(occupied)
    }

    /// Rook attack set from `square` given full-board occupancy.
    #[inline]
    pub fn rook_attacks(&self, square: Square, occupied: Bitboard) -> Bitboard {
        self.rook[square as usize].lookup(occupied)
    }

    /// Queen attack set: union of the bishop and rook lookups.
    #[inline]
    pub fn queen_attacks(&self, square: Square, occupied: Bitboard) -> Bitboard {
        self.bishop_attacks(square, occupied) | self.rook_attacks(square, occupied)
    }
}

/// Expands subset index `index` over the set bits of `mask`: bit `i` of the
/// index decides whether the `i`-th lowest set bit of the mask is occupied.
fn occupancy_subset(mask: Bitboard, index: u32) -> Bitboard {
    let mut remaining = mask;
    let mut subset = 0;
    let mut bit = 0;
    while remaining != 0 {
        let square = pop_lsb(&mut remaining);
        if index & (1 << bit) != 0 {
            subset |= square_bb(square);
        }
        bit += 1;
    }
    subset
}

/// Reference slider attacks computed by walking each ray to the first
/// blocker. Only used at table-build time; lookups replace it afterward.
fn slider_attacks_slow(square: Square, rays: &[Direction; 4], blockers: Bitboard) -> Bitboard {
    let bb = square_bb(square);
    rays.iter()
        .fold(0, |acc, &direction| acc | blocker_ray(bb, direction, blockers))
}

/// Searches for a collision-free magic multiplier for one square.
fn find_magic(
    square: Square,
    mask: Bitboard,
    rays: &[Direction; 4],
    rng: &mut StdRng,
) -> Result<MagicEntry, EngineError> {
    let relevant_bits = population_count(mask);
    let shift = 64 - relevant_bits;
    let table_size = 1usize << relevant_bits;

    // Every blocker arrangement over the mask, paired with its attack set.
    let mut occupancies = Vec::with_capacity(table_size);
    let mut reference = Vec::with_capacity(table_size);
    for index in 0..table_size as u32 {
        let subset = occupancy_subset(mask, index);
        occupancies.push(subset);
        reference.push(slider_attacks_slow(square, rays, subset));
    }

    for _ in 0..MAX_ATTEMPTS {
        // Sparse candidates collide far less often than uniform ones.
        let magic = rng.random::<u64>() & rng.random::<u64>() & rng.random::<u64>();

        // A usable multiplier must spread the mask into the high byte.
        if population_count(mask.wrapping_mul(magic) >> 56) < 6 {
            continue;
        }

        let mut attacks = vec![0u64; table_size];
        let mut collided = false;
        for (subset, attack) in occupancies.iter().zip(reference.iter()) {
            let index = (subset.wrapping_mul(magic) >> shift) as usize;
            // Zero doubles as the empty sentinel: constructive collisions
            // (same attack set) are allowed, destructive ones are not.
            if attacks[index] == 0 {
                attacks[index] = *attack;
            } else if attacks[index] != *attack {
                collided = true;
                break;
            }
        }
        if !collided {
            return Ok(MagicEntry {
                mask,
                magic,
                shift,
                attacks,
            });
        }
    }

    Err(EngineError::MagicGeneration {
        square,
        attempts: MAX_ATTEMPTS,
    })
}
