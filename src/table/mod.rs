//! Sharded hash tables
//!
//! Search code performs tens of millions of lookups per solve, so instead of
//! a general-purpose map these tables slice the key: a few bits pick one of
//! [`SHARDS`] shards, the rest index an open-addressed slot array inside it.
//! Shards are allocated on first write and grow without bound; nothing is
//! ever evicted.
//!
//! Absence is `None`. Any value, zero included, can be stored.
//!
//! - [`PairMap`]: `(hi, lo)` pair of 32-bit words
//! - [`IntMap`]: single 32-bit word
//! - [`SideMap`]: one [`PairMap`] per side to move
//!
//! # Example
//!
//! ```
//! use tsumego::table::PairMap;
//!
//! let mut map = PairMap::new();
//! assert_eq!(map.get(0xdead_beef, 42), None);
//! map.set(0xdead_beef, 42, 7u32);
//! assert_eq!(map.get(0xdead_beef, 42), Some(7));
//! ```
//!
//! There is no internal locking; writes take `&mut self`, so a table shared
//! between search threads needs external synchronisation.

pub mod int_map;
pub mod pair_map;
mod shard;
pub mod side_map;

pub use int_map::IntMap;
pub use pair_map::PairMap;
pub use shard::SHARDS;
pub use side_map::SideMap;
