//! Deterministic per-cell RNG for safe-interval generation.
//!
//! # Determinism strategy
//!
//! Each grid cell gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (cell_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive cell indices uniformly across the seed space.
//! A cell's safe intervals therefore depend only on the run seed and the
//! cell itself, not on the order in which cells are visited or on how many
//! other cells are free.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-cell deterministic RNG.
pub struct CellRng(SmallRng);

impl CellRng {
    /// Seed deterministically from the run's global seed and a cell index.
    pub fn new(global_seed: u64, cell: usize) -> Self {
        let seed = global_seed ^ (cell as u64).wrapping_mul(MIXING_CONSTANT);
        CellRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform `f64` in `[low, high)`; returns `low` when the range is empty.
    #[inline]
    pub fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high > low { self.0.gen_range(low..high) } else { low }
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
