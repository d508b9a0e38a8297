//! Map keyed by a single 32-bit word

use super::shard::ShardSet;

/// Bits of the key left after the 4-bit shard selector
const INDEX_BITS: u32 = 28;
const INDEX_MASK: u32 = (1 << INDEX_BITS) - 1;

/// Map from `u32` to `V`: the top 4 bits pick the shard, the low 28 bits
/// index inside it.
#[derive(Debug, Clone)]
pub struct IntMap<V> {
    shards: ShardSet<V>,
}

#[inline]
fn split(key: u32) -> (usize, u64) {
    ((key >> INDEX_BITS) as usize, u64::from(key & INDEX_MASK))
}

impl<V: Copy> IntMap<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shards: ShardSet::new(),
        }
    }

    #[inline]
    pub fn get(&self, key: u32) -> Option<V> {
        let (shard, idx) = split(key);
        self.shards.get(shard, idx)
    }

    #[inline]
    pub fn set(&mut self, key: u32, value: V) -> Option<V> {
        let (shard, idx) = split(key);
        self.shards.insert(shard, idx, value)
    }

    /// Stored value, or `default` after storing it.
    #[inline]
    pub fn get_or_insert_with(&mut self, key: u32, default: impl FnOnce() -> V) -> V {
        if let Some(v) = self.get(key) {
            return v;
        }
        let v = default();
        self.set(key, v);
        v
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

impl<V: Copy> Default for IntMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
