//! Search module for tsumego solving
//!
//! Contains:
//! - Proof-number cache keyed by board fingerprint and side to move
//! - Depth-first proof-number search driver

pub mod cache;
pub mod dfpn;

pub use cache::{CacheStats, DfpnCache, DfpnEntry, NoCache, ProofTable};
pub use dfpn::{Dfpn, SolveResult, SolveStatus, Tsumego};
