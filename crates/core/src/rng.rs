//! RNG module - injectable randomness for token spawning
//!
//! The grid never touches process-global randomness. It draws columns and
//! labels through the [`RandomSource`] it was built with, so the same seed
//! replays the same game and tests can script exact spawn sequences.

/// A source of uniformly distributed indices.
pub trait RandomSource {
    /// Return a value in `[0, bound)`. `bound` is always at least 1.
    fn next(&mut self, bound: usize) -> usize;
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

    /// Current state, usable as a seed to replay from this point.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next(&mut self, bound: usize) -> usize {
        // High bits of an LCG are far better distributed than the low ones.
        let hi = (self.next_u32() >> 16) as usize;
        hi % bound.max(1)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Values are reduced modulo the requested bound, so a script written for one
/// grid stays in range on a smaller one.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next(&mut self, bound: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v % bound.max(1)
    }
}
