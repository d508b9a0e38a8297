//! Deterministic linear congruential generator
//!
//! `x_{n+1} = (a·x_n + c) mod 2^32` with the Numerical Recipes constants.
//! `a - 1` is divisible by 4 and `c` is odd, so by the Hull–Dobell theorem
//! the generator visits all 2^32 states before repeating.
//!
//! Used to draw stone keys and to drive reproducible tests. Not suitable for
//! anything cryptographic.
//!
//! # Example
//!
//! ```
//! use tsumego::rng::Lcg;
//!
//! let mut a = Lcg::new(42);
//! let mut b = Lcg::new(42);
//! assert_eq!(a.next_u32(), b.next_u32());
//! assert!((0.0..1.0).contains(&a.next_f64()));
//! ```

use rand::{RngCore, SeedableRng};

/// Multiplier (`a`)
pub const MULTIPLIER: u32 = 1_664_525;
/// Increment (`c`)
pub const INCREMENT: u32 = 1_013_904_223;

/// 32-bit LCG
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current state (the last value returned, or the seed)
    #[inline]
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Advance and return the new state.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        self.state
    }

    /// Advance and map the new state into [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

impl Iterator for Lcg {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        Some(self.next_u32())
    }
}

impl RngCore for Lcg {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Lcg::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(Lcg::next_u32(self));
        let lo = u64::from(Lcg::next_u32(self));
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = Lcg::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
