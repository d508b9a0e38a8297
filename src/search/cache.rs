//! Proof-number cache
//!
//! Maps (fingerprint, side to move) to the proof / disproof numbers the
//! search last computed for that position, so a subtree reached again
//! through a transposition is not expanded from scratch.
//!
//! # Example
//!
//! ```
//! use tsumego::board::Stone;
//! use tsumego::hash::Fingerprint;
//! use tsumego::search::{DfpnCache, DfpnEntry};
//!
//! let mut cache = DfpnCache::new();
//! let fp = Fingerprint::EMPTY;
//!
//! // first lookup stores and returns the default
//! let e = cache.get(fp, Stone::Black, DfpnEntry::new(1, 1, 0));
//! assert_eq!(e, DfpnEntry::new(1, 1, 0));
//!
//! cache.set(fp, Stone::Black, DfpnEntry::new(0, DfpnEntry::INFINITY, 3));
//! assert_eq!(cache.get(fp, Stone::Black, DfpnEntry::new(1, 1, 0)).pn, 0);
//! ```

use crate::board::Stone;
use crate::hash::Fingerprint;
use crate::table::SideMap;

/// Proof number, disproof number and move distance of one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DfpnEntry {
    /// Work left to prove the position won for the attacker
    pub pn: u32,
    /// Work left to prove it lost
    pub dn: u32,
    /// Moves to the proven outcome; 0 while unproven
    pub md: u32,
}

impl DfpnEntry {
    /// Proof / disproof number of a settled position
    pub const INFINITY: u32 = 100_000_000;

    #[inline]
    pub const fn new(pn: u32, dn: u32, md: u32) -> Self {
        Self { pn, dn, md }
    }

    /// Fresh leaf estimate
    pub const UNKNOWN: Self = Self::new(1, 1, 0);

    /// Attacker wins
    #[inline]
    pub const fn proven(md: u32) -> Self {
        Self::new(0, Self::INFINITY, md)
    }

    /// Attacker loses
    #[inline]
    pub const fn disproven(md: u32) -> Self {
        Self::new(Self::INFINITY, 0, md)
    }

    #[inline]
    pub const fn is_proven(&self) -> bool {
        self.pn == 0
    }

    #[inline]
    pub const fn is_disproven(&self) -> bool {
        self.dn == 0
    }

    #[inline]
    pub const fn is_solved(&self) -> bool {
        self.is_proven() || self.is_disproven()
    }
}

/// Counters kept by a [`ProofTable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups through `get`
    pub lookups: u64,
    /// Lookups that found an entry
    pub hits: u64,
    /// Lookups that stored the default
    pub misses: u64,
    /// Writes through `set`
    pub stores: u64,
}

impl CacheStats {
    /// Hit rate in percent
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            self.hits as f64 / self.lookups as f64 * 100.0
        }
    }
}

/// Storage the df-pn driver reads and writes proof numbers through.
pub trait ProofTable {
    /// Stored entry, or `default` (which an implementation may remember).
    fn get(&mut self, fp: Fingerprint, to_move: Stone, default: DfpnEntry) -> DfpnEntry;

    fn set(&mut self, fp: Fingerprint, to_move: Stone, entry: DfpnEntry);

    fn stats(&self) -> CacheStats;
}

/// Unbounded proof-number cache for one solve session.
#[derive(Debug, Clone, Default)]
pub struct DfpnCache {
    entries: SideMap<DfpnEntry>,
    stats: CacheStats,
}

impl DfpnCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry for (fp, to_move). On the first lookup `default` is stored and
    /// returned; later lookups return the stored entry whatever default they
    /// pass.
    pub fn get(&mut self, fp: Fingerprint, to_move: Stone, default: DfpnEntry) -> DfpnEntry {
        let (entry, hit) = self.entries.get_or_insert(to_move, fp, default);
        self.stats.lookups += 1;
        if hit {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        entry
    }

    /// Read without inserting or counting.
    pub fn peek(&self, fp: Fingerprint, to_move: Stone) -> Option<DfpnEntry> {
        self.entries.get(to_move, fp)
    }

    /// Overwrite the entry for (fp, to_move).
    pub fn set(&mut self, fp: Fingerprint, to_move: Stone, entry: DfpnEntry) {
        self.stats.stores += 1;
        self.entries.set(to_move, fp, entry);
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }
}

impl ProofTable for DfpnCache {
    #[inline]
    fn get(&mut self, fp: Fingerprint, to_move: Stone, default: DfpnEntry) -> DfpnEntry {
        DfpnCache::get(self, fp, to_move, default)
    }

    #[inline]
    fn set(&mut self, fp: Fingerprint, to_move: Stone, entry: DfpnEntry) {
        DfpnCache::set(self, fp, to_move, entry);
    }

    fn stats(&self) -> CacheStats {
        self.stats
    }
}

/// Table that remembers nothing: every lookup misses and returns its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache {
    stats: CacheStats,
}

impl ProofTable for NoCache {
    #[inline]
    fn get(&mut self, _fp: Fingerprint, _to_move: Stone, default: DfpnEntry) -> DfpnEntry {
        self.stats.lookups += 1;
        self.stats.misses += 1;
        default
    }

    #[inline]
    fn set(&mut self, _fp: Fingerprint, _to_move: Stone, _entry: DfpnEntry) {
        self.stats.stores += 1;
    }

    fn stats(&self) -> CacheStats {
        self.stats
    }
}
