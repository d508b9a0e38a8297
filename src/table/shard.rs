//! Open-addressed slot array backing every map shard

/// Initial slot count of a shard (power of two)
const INITIAL_BITS: u32 = 10;

/// Fibonacci hashing multiplier (2^64 / golden ratio)
const FIB: u64 = 0x9E37_79B9_7F4A_7C15;

/// Linearly probed table of `(key, value)` slots.
///
/// Kept at most half full, so probe sequences stay short and every lookup
/// terminates at an empty slot.
#[derive(Debug, Clone)]
pub(crate) struct Shard<V> {
    slots: Vec<Option<(u64, V)>>,
    len: usize,
    /// `64 - log2(slots.len())`
    shift: u32,
}

impl<V: Copy> Shard<V> {
    pub(crate) fn new() -> Self {
        Self {
            slots: vec![None; 1 << INITIAL_BITS],
            len: 0,
            shift: 64 - INITIAL_BITS,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn mask(&self) -> usize {
        self.slots.len() - 1
    }

    #[inline]
    fn home(&self, key: u64) -> usize {
        (key.wrapping_mul(FIB) >> self.shift) as usize
    }

    /// Slot holding `key`, or the empty slot where it would go.
    #[inline]
    fn probe(&self, key: u64) -> usize {
        let mask = self.mask();
        let mut idx = self.home(key);
        loop {
            match &self.slots[idx] {
                Some((k, _)) if *k != key => idx = (idx + 1) & mask,
                _ => return idx,
            }
        }
    }

    #[inline]
    pub(crate) fn get(&self, key: u64) -> Option<V> {
        self.slots[self.probe(key)].map(|(_, v)| v)
    }

    /// Store `value`, returning the previous value if any.
    pub(crate) fn insert(&mut self, key: u64, value: V) -> Option<V> {
        let idx = self.probe(key);
        let old = self.slots[idx].replace((key, value)).map(|(_, v)| v);
        if old.is_none() {
            self.len += 1;
            if self.len * 2 > self.slots.len() {
                self.grow();
            }
        }
        old
    }

    /// Stored value, or `default` after storing it.
    pub(crate) fn get_or_insert(&mut self, key: u64, default: V) -> (V, bool) {
        let idx = self.probe(key);
        if let Some((_, v)) = self.slots[idx] {
            return (v, true);
        }
        self.slots[idx] = Some((key, default));
        self.len += 1;
        if self.len * 2 > self.slots.len() {
            self.grow();
        }
        (default, false)
    }

    fn grow(&mut self) {
        let doubled = vec![None; self.slots.len() * 2];
        let old = std::mem::replace(&mut self.slots, doubled);
        self.shift -= 1;
        for (key, value) in old.into_iter().flatten() {
            let idx = self.probe(key);
            self.slots[idx] = Some((key, value));
        }
    }
}

/// Number of shards in every map
pub const SHARDS: usize = 16;

/// Sixteen lazily allocated shards; a shard exists once something was
/// written to it.
#[derive(Debug, Clone)]
pub(crate) struct ShardSet<V> {
    shards: [Option<Box<Shard<V>>>; SHARDS],
}

impl<V: Copy> ShardSet<V> {
    pub(crate) fn new() -> Self {
        Self {
            shards: std::array::from_fn(|_| None),
        }
    }

    #[inline]
    pub(crate) fn get(&self, shard: usize, key: u64) -> Option<V> {
        self.shards[shard].as_ref().and_then(|s| s.get(key))
    }

    #[inline]
    fn shard_mut(&mut self, shard: usize) -> &mut Shard<V> {
        self.shards[shard].get_or_insert_with(|| Box::new(Shard::new()))
    }

    #[inline]
    pub(crate) fn insert(&mut self, shard: usize, key: u64, value: V) -> Option<V> {
        self.shard_mut(shard).insert(key, value)
    }

    #[inline]
    pub(crate) fn get_or_insert(&mut self, shard: usize, key: u64, default: V) -> (V, bool) {
        self.shard_mut(shard).get_or_insert(key, default)
    }

    pub(crate) fn len(&self) -> usize {
        self.shards.iter().flatten().map(|s| s.len()).sum()
    }

    /// Shards allocated so far
    #[cfg(test)]
    pub(crate) fn allocated(&self) -> usize {
        self.shards.iter().filter(|s| s.is_some()).count()
    }

    pub(crate) fn clear(&mut self) {
        self.shards = std::array::from_fn(|_| None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get() {
        let mut shard = Shard::new();
        assert_eq!(shard.get(5), None);
        assert_eq!(shard.insert(5, 50u32), None);
        assert_eq!(shard.insert(5, 51), Some(50));
        assert_eq!(shard.get(5), Some(51));
        assert_eq!(shard.len(), 1);
    }

    #[test]
    fn test_grows_past_initial_capacity() {
        let mut shard = Shard::new();
        for k in 0..10_000u64 {
            shard.insert(k * 7919, k);
        }
        assert_eq!(shard.len(), 10_000);
        assert!(shard.slots.len() >= 20_000);
        for k in 0..10_000u64 {
            assert_eq!(shard.get(k * 7919), Some(k));
        }
    }

    #[test]
    fn test_get_or_insert() {
        let mut shard = Shard::new();
        assert_eq!(shard.get_or_insert(9, 1u8), (1, false));
        assert_eq!(shard.get_or_insert(9, 2), (1, true));
        assert_eq!(shard.len(), 1);
    }

    #[test]
    fn test_shards_allocated_lazily() {
        let mut set = ShardSet::new();
        assert_eq!(set.allocated(), 0);
        assert_eq!(set.get(3, 1), None);
        assert_eq!(set.allocated(), 0);
        set.insert(3, 1, 'a');
        set.insert(3, 2, 'b');
        set.insert(15, 1, 'c');
        assert_eq!(set.allocated(), 2);
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(3, 1), Some('a'));
        assert_eq!(set.get(15, 1), Some('c'));
        set.clear();
        assert_eq!(set.allocated(), 0);
    }

    #[test]
    fn test_zero_key_and_value_are_ordinary() {
        let mut shard = Shard::new();
        shard.insert(0, 0u32);
        assert_eq!(shard.get(0), Some(0));
    }
}
