//! Seeded pseudo-random number generator (mulberry32).

/// Deterministic PRNG producing floats in `[0, 1)`.
///
/// Holds a single 32-bit word of state. The same seed always yields the same
/// sequence, across runs and platforms. Cheap to construct; intended to be
/// created fresh for each use rather than shared.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

/// Additive stream constant for mulberry32.
const INCREMENT: u32 = 0x6D2B79F5;

impl SeededRng {
    /// Create a generator from a seed, truncated to 32 bits.
    pub fn new(seed: i64) -> Self {
        Self { state: seed as u32 }
    }

    /// Advance the state and return the next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }

    /// Next value scaled to an index in `[0, bound)`.
    pub fn next_index(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64) as usize
    }
}
