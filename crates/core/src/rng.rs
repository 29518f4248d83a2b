//! RNG module - seeded piece randomizer
//!
//! Every spawn picks one of the seven kinds independently. The generator is a
//! small LCG so a seed fully determines a session, which keeps tests and
//! benchmarks reproducible.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    seed: u32,
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { seed, state }
    }

    /// Seed this generator was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // low bits of an LCG have short periods
        (self.next_u32() >> 16) % max.max(1)
    }

    /// Draw the next piece kind, each of the seven equally likely
    pub fn next_kind(&mut self) -> PieceKind {
        let n = PieceKind::ALL.len() as u32;
        PieceKind::ALL[self.next_range(n) as usize]
    }
}
