//! RNG module - uniform random piece generation
//!
//! Every draw is an independent uniform pick over the seven kinds, so the same
//! kind can come up many times in a row. The generator is a 32-bit LCG and is
//! fully determined by its seed.

use crate::pieces::Piece;
use crate::types::PieceKind;

/// 32-bit linear congruential generator (Numerical Recipes constants)
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed 0 is treated as 1
    pub fn new(seed: u32) -> Self {
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform value in `[0, max)`
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Uniform piece generator
#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    rng: SimpleRng,
}

impl PieceRandomizer {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw a kind uniformly at random
    pub fn draw_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// Draw a kind and place it at the spawn position
    pub fn random_piece(&mut self) -> Piece {
        Piece::new(self.draw_kind())
    }

    /// Current RNG state; seeding a new randomizer with it continues the sequence
    pub fn seed(&self) -> u32 {
        self.rng.state
    }
}

impl Default for PieceRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}
