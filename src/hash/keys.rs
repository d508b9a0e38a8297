//! Stone keys and board fingerprints
//!
//! Every (point, color) pair gets a fixed invertible quaternion. The
//! fingerprint of a board is the product of the keys of all its stones,
//! kept separately for black and white stones. Because the product is
//! commutative and every key is invertible, placing a stone is one
//! multiplication and removing it (undo or capture) is one division.
//!
//! # Example
//!
//! ```
//! use tsumego::board::{Board, Pos, Stone};
//! use tsumego::hash::Fingerprint;
//!
//! let mut board = Board::new(9).unwrap();
//! let empty = board.fingerprint();
//! assert_eq!(empty, Fingerprint::EMPTY);
//!
//! let record = board.play(Pos::new(4, 4), Stone::Black).unwrap();
//! assert_ne!(board.fingerprint(), empty);
//!
//! board.undo(&record);
//! assert_eq!(board.fingerprint(), empty);
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock};

use super::Quaternion;
use crate::board::{Pos, Stone, TOTAL_CELLS};
use crate::rng::Lcg;

/// Per-(point, color) quaternion table.
pub struct StoneKeys {
    /// Keys for black stones at each position
    black: [Quaternion; TOTAL_CELLS],
    /// Keys for white stones at each position
    white: [Quaternion; TOTAL_CELLS],
    seed: u32,
}

impl StoneKeys {
    /// Seed of the shared table
    pub const DEFAULT_SEED: u32 = 0x9e37_79b9;

    /// Table drawn from the default seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(Self::DEFAULT_SEED)
    }

    /// Table drawn from an explicit seed. Same seed, same keys.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        let mut rng = Lcg::new(seed);
        let mut next_key = || loop {
            let q = Quaternion::from_bits(rng.next_u32());
            // the identity would make a stone invisible
            if q.is_invertible() && q != Quaternion::ONE {
                return q;
            }
        };

        let mut black = [Quaternion::ONE; TOTAL_CELLS];
        let mut white = [Quaternion::ONE; TOTAL_CELLS];
        for i in 0..TOTAL_CELLS {
            black[i] = next_key();
            white[i] = next_key();
        }

        Self { black, white, seed }
    }

    /// Process-wide table built from [`StoneKeys::DEFAULT_SEED`] on first use.
    pub fn shared() -> Arc<StoneKeys> {
        static SHARED: OnceLock<Arc<StoneKeys>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(StoneKeys::new())))
    }

    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Key of a stone; `Stone::Empty` maps to the identity.
    #[inline]
    pub fn key(&self, pos: Pos, stone: Stone) -> Quaternion {
        match stone {
            Stone::Black => self.black[pos.to_index()],
            Stone::White => self.white[pos.to_index()],
            Stone::Empty => Quaternion::ONE,
        }
    }

    /// Full fingerprint of the given black and white stones.
    #[must_use]
    pub fn fingerprint(
        &self,
        black: impl IntoIterator<Item = Pos>,
        white: impl IntoIterator<Item = Pos>,
    ) -> Fingerprint {
        let mut fp = Fingerprint::EMPTY;
        for pos in black {
            fp.add(self.key(pos, Stone::Black), Stone::Black);
        }
        for pos in white {
            fp.add(self.key(pos, Stone::White), Stone::White);
        }
        fp
    }
}

impl Default for StoneKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StoneKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoneKeys")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

/// Fingerprint of a board: one running product per color.
///
/// Whose turn it is is not part of the fingerprint; tables that care key on
/// the side to move separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    pub black: Quaternion,
    pub white: Quaternion,
}

impl Fingerprint {
    /// Fingerprint of the empty board
    pub const EMPTY: Self = Self {
        black: Quaternion::ONE,
        white: Quaternion::ONE,
    };

    #[inline]
    fn layer(&mut self, stone: Stone) -> Option<&mut Quaternion> {
        match stone {
            Stone::Black => Some(&mut self.black),
            Stone::White => Some(&mut self.white),
            Stone::Empty => None,
        }
    }

    /// Account for a stone of `stone` color whose key is `key`.
    #[inline]
    pub fn add(&mut self, key: Quaternion, stone: Stone) {
        if let Some(q) = self.layer(stone) {
            *q *= key;
        }
    }

    /// Remove a stone previously added with [`Fingerprint::add`].
    #[inline]
    pub fn remove(&mut self, key: Quaternion, stone: Stone) {
        if let Some(q) = self.layer(stone) {
            *q /= key;
        }
    }

    /// `(hi, lo)` key pair: black product, white product.
    #[inline]
    pub fn key(self) -> (u32, u32) {
        (self.black.to_bits(), self.white.to_bits())
    }
}

impl Default for Fingerprint {
    fn default() -> Self {
        Self::EMPTY
    }
}
