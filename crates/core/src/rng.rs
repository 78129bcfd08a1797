//! RNG module - deterministic shuffling for board generation
//!
//! Provides a small seeded LCG and an in-place Fisher-Yates shuffle on top of
//! it. Seeding makes every deal reproducible in tests; the binary seeds from
//! the wall clock for visually unpredictable boards.

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

    /// Generate a value uniformly in `[0, bound)`.
    ///
    /// Uses multiply-shift on the full 32-bit output so the result depends on
    /// the high bits; the low bits of a power-of-two LCG cycle with short periods.
    pub fn next_below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0);
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }

    /// Shuffle a slice in place using Fisher-Yates.
    ///
    /// Walks `i` from the last index down to 1, swapping with a uniform `j`
    /// in `[0, i]`. Slices of length 0 or 1 are left untouched.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_below((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current generator state (reseeding with it continues the same stream).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
