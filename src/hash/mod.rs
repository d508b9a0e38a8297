//! Position hashing over GF(2^8)
//!
//! - [`gf256`]: field arithmetic
//! - [`quaternion`]: quaternions over the field, the fingerprint update primitive
//! - [`keys`]: per-stone keys and the board [`Fingerprint`]

pub mod gf256;
pub mod keys;
pub mod quaternion;

pub use keys::{Fingerprint, StoneKeys};
pub use quaternion::Quaternion;
