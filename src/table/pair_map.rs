//! Map keyed by a pair of 32-bit words

use super::shard::ShardSet;

/// Map from `(hi, lo)` to `V`.
///
/// The shard is chosen by the two low bits of each half, interleaved
/// (`hi0 lo0 hi1 lo1`); the remaining 30 bits of `hi` and of `lo` form the
/// key inside the shard. Both halves are bit patterns, never arithmetic
/// values.
#[derive(Debug, Clone)]
pub struct PairMap<V> {
    shards: ShardSet<V>,
}

/// Shard selector and in-shard key for `(hi, lo)`.
#[inline]
fn split(hi: u32, lo: u32) -> (usize, u64) {
    let shard = (hi & 1) | (lo & 1) << 1 | (hi & 2) << 1 | (lo & 2) << 2;
    let key = u64::from(hi >> 2) << 30 | u64::from(lo >> 2);
    (shard as usize, key)
}

impl<V: Copy> PairMap<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shards: ShardSet::new(),
        }
    }

    /// Stored value, or `None` if `(hi, lo)` was never written.
    #[inline]
    pub fn get(&self, hi: u32, lo: u32) -> Option<V> {
        let (shard, key) = split(hi, lo);
        self.shards.get(shard, key)
    }

    /// Store `value`, returning the value it replaced.
    #[inline]
    pub fn set(&mut self, hi: u32, lo: u32, value: V) -> Option<V> {
        let (shard, key) = split(hi, lo);
        self.shards.insert(shard, key, value)
    }

    /// Stored value, or `default` after storing it. The flag tells whether
    /// the key was already present.
    #[inline]
    pub fn get_or_insert(&mut self, hi: u32, lo: u32, default: V) -> (V, bool) {
        let (shard, key) = split(hi, lo);
        self.shards.get_or_insert(shard, key, default)
    }

    pub fn len(&self) -> usize {
        self.shards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.shards.clear();
    }
}

impl<V: Copy> Default for PairMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
