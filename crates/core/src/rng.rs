//! RNG module - seeded square sampling
//!
//! Random placement of the queen and the blocked square draws from the set of
//! board squares minus one excluded square. Sampling indexes directly into that
//! complement, so every draw terminates after a single RNG step and a fixed seed
//! replays the same game.
//!
//! Also provides a simple LCG for deterministic testing.

use crate::board::BoardSize;
use crate::types::Square;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of a power-of-two LCG cycle with
    /// short periods and would repeat on small boards.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Pick a square uniformly among all squares of `size` except `excluded`.
    ///
    /// A board always has at least four squares, so the complement is never empty.
    /// An `excluded` square off the board excludes nothing.
    pub fn pick_square_excluding(&mut self, size: BoardSize, excluded: Square) -> Square {
        let cells = size.cell_count() as u32;
        if !size.contains(excluded) {
            return size.square_at(self.next_range(cells) as u16);
        }
        let skip = size.index_of(excluded);
        let index = self.next_range(cells - 1) as u16;
        size.square_at(if index >= skip { index + 1 } else { index })
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
