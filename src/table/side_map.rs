//! Pair of maps selected by the side to move

use super::PairMap;
use crate::board::Stone;
use crate::hash::Fingerprint;

/// Two independent [`PairMap`]s, one per side to move, keyed by the
/// `(black, white)` fingerprint pair.
///
/// The fingerprint does not say whose turn it is, so "black to move in X"
/// and "white to move in X" live in different maps instead of sharing a key.
#[derive(Debug, Clone)]
pub struct SideMap<V> {
    maps: [PairMap<V>; 2],
}

impl<V: Copy> SideMap<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            maps: [PairMap::new(), PairMap::new()],
        }
    }

    /// Map for `side`. Panics on `Stone::Empty`.
    #[inline]
    pub fn side(&self, side: Stone) -> &PairMap<V> {
        &self.maps[side.side()]
    }

    #[inline]
    pub fn get(&self, side: Stone, fp: Fingerprint) -> Option<V> {
        let (hi, lo) = fp.key();
        self.maps[side.side()].get(hi, lo)
    }

    #[inline]
    pub fn set(&mut self, side: Stone, fp: Fingerprint, value: V) -> Option<V> {
        let (hi, lo) = fp.key();
        self.maps[side.side()].set(hi, lo, value)
    }

    #[inline]
    pub fn get_or_insert(&mut self, side: Stone, fp: Fingerprint, default: V) -> (V, bool) {
        let (hi, lo) = fp.key();
        self.maps[side.side()].get_or_insert(hi, lo, default)
    }

    pub fn len(&self) -> usize {
        self.maps.iter().map(PairMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        for map in &mut self.maps {
            map.clear();
        }
    }
}

impl<V: Copy> Default for SideMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
