//! Seedable randomness behind the `random` color constructors.
//!
//! Channel sampling only needs a small, reproducible source of uniform
//! values, so the generator is a single-word xorshift rather than a crate
//! dependency. The same seed draws the same sequence of colors on every
//! platform, which the fuzz and sanity tests rely on.

use serde::{Deserialize, Serialize};

/// Single-word xorshift generator feeding the `random` constructors on both
/// component types.
///
/// Uses the classic 13/7/17 shift triple. Not suitable for cryptography or
/// statistics-grade simulation; colors sampled for tests and demos are the
/// intended use. The state serializes, so an interrupted sampling sequence
/// can resume where it left off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Stand-in state for seed 0, which the xorshift step would never leave.
    /// Arbitrary odd constant (the 64-bit golden-ratio word).
    const SEED_FOR_ZERO: u64 = 0x9E37_79B9_7F4A_7C15;

    /// Seeds the generator. A seed of 0 is replaced by a fixed non-zero
    /// constant so the sequence cannot degenerate.
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { Self::SEED_FOR_ZERO } else { seed };
        Self { state }
    }

    /// Advances the generator one step and returns the raw 64-bit word.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Draws one channel sample, uniform over [0, 1).
    ///
    /// The top 52 bits of the next word fill the mantissa of a float in
    /// [1, 2), which shifts down to [0, 1) without ever rounding up to 1.
    pub fn next_channel(&mut self) -> f64 {
        const ONE_BITS: u64 = 0x3FF0_0000_0000_0000;
        f64::from_bits(ONE_BITS | (self.next_u64() >> 12)) - 1.0
    }
}
