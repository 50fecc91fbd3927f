//! RNG module - injectable shape selection
//!
//! The game draws every lookahead piece from a [`ShapeSource`]. The default
//! source picks uniformly over the seven catalog entries with a small seeded
//! LCG, so the same seed always replays the same game. Tests inject a
//! [`SequenceSource`] (or any closure) to script exact piece orders.

use crate::config::ConfigError;
use crate::types::PieceKind;

/// Supplier of the next piece kind
pub trait ShapeSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<F> ShapeSource for F
where
    F: FnMut() -> PieceKind,
{
    fn next_kind(&mut self) -> PieceKind {
        self()
    }
}

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
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Uniform pick over the whole catalog
#[derive(Debug, Clone)]
pub struct UniformSource {
    rng: SimpleRng,
}

impl UniformSource {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for UniformSource {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ShapeSource for UniformSource {
    fn next_kind(&mut self) -> PieceKind {
        let i = self.rng.next_range(PieceKind::COUNT as u32) as usize;
        PieceKind::ALL[i]
    }
}

/// Scripted source that repeats a fixed list of kinds forever
#[derive(Debug, Clone)]
pub struct SequenceSource {
    kinds: Vec<PieceKind>,
    pos: usize,
}

impl SequenceSource {
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Result<Self, ConfigError> {
        let kinds = kinds.into();
        if kinds.is_empty() {
            return Err(ConfigError::EmptySequence);
        }
        Ok(Self { kinds, pos: 0 })
    }

    /// Source that only ever yields `kind`
    pub fn repeat(kind: PieceKind) -> Self {
        Self {
            kinds: vec![kind],
            pos: 0,
        }
    }
}

impl ShapeSource for SequenceSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.pos];
        self.pos = (self.pos + 1) % self.kinds.len();
        kind
    }
}
