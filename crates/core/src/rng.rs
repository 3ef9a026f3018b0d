//! RNG module - injectable randomness for board generation
//!
//! Board generation draws one uniform value in `[0, 1)` per cell through the
//! [`RandomSource`] trait, so callers can plug in a seeded generator, a
//! scripted sequence, or a closure.
//!
//! [`SimpleRng`] is the default: a small LCG that makes games reproducible
//! from a seed.

/// A stream of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Next value, always `>= 0.0` and `< 1.0`.
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
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
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_unit(&mut self) -> f64 {
        // Low LCG bits have short periods; use the top 24.
        (self.next_u32() >> 8) as f64 / (1u32 << 24) as f64
    }
}
