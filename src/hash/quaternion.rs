//! Quaternions over GF(2^8)
//!
//! A quaternion is four field elements `(a0, a1, a2, a3)` standing for
//! `a0 + a1·i + a2·j + a3·k`. The product follows the Hamilton table; since
//! the field has characteristic 2 every sign in that table is `+`, so each
//! output component is four field products folded with XOR.
//!
//! In characteristic 2 the anticommuting terms cancel and the product is
//! commutative as well as associative. Board fingerprints rely on that: the
//! running product of stone keys does not depend on the order the stones
//! were placed in, so a stone can be removed (captured) with one division no
//! matter when it was added.
//!
//! A pair with `A·B != B·A`, as in the real quaternions, cannot exist here;
//! the tests check that products commute instead.
//!
//! A quaternion is invertible iff its norm `a0² + a1² + a2² + a3²` is
//! nonzero, and then `A⁻¹ = A · norm⁻¹` because `A · A = (norm, 0, 0, 0)`.

use std::fmt;
use std::ops::{Div, DivAssign, Mul, MulAssign};

use super::gf256;
use crate::error::AlgebraError;

/// Quaternion with GF(2^8) components
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Quaternion(pub [u8; 4]);

impl Quaternion {
    /// Additive identity
    pub const ZERO: Self = Self([0, 0, 0, 0]);
    /// Multiplicative identity
    pub const ONE: Self = Self([1, 0, 0, 0]);

    #[inline]
    pub const fn new(a0: u8, a1: u8, a2: u8, a3: u8) -> Self {
        Self([a0, a1, a2, a3])
    }

    /// Pack the components into a 32-bit pattern, `a0` in the top byte.
    #[inline]
    pub const fn to_bits(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits.to_be_bytes())
    }

    /// Quaternion product.
    #[inline]
    pub fn multiply(self, rhs: Self) -> Self {
        let [a0, a1, a2, a3] = self.0;
        let [b0, b1, b2, b3] = rhs.0;
        let m = gf256::multiply;
        Self([
            m(a0, b0) ^ m(a1, b1) ^ m(a2, b2) ^ m(a3, b3),
            m(a0, b1) ^ m(a1, b0) ^ m(a2, b3) ^ m(a3, b2),
            m(a0, b2) ^ m(a2, b0) ^ m(a3, b1) ^ m(a1, b3),
            m(a0, b3) ^ m(a3, b0) ^ m(a1, b2) ^ m(a2, b1),
        ])
    }

    /// `a0² + a1² + a2² + a3²`
    #[inline]
    pub fn norm(self) -> u8 {
        self.0.iter().fold(0, |acc, &a| acc ^ gf256::multiply(a, a))
    }

    #[inline]
    pub fn is_invertible(self) -> bool {
        self.norm() != 0
    }

    /// Scale every component by a field element.
    #[inline]
    pub fn scale(self, s: u8) -> Self {
        Self(self.0.map(|a| gf256::multiply(a, s)))
    }

    /// Multiplicative inverse.
    ///
    /// # Panics
    ///
    /// Panics on a zero-norm quaternion. Use [`Quaternion::try_invert`] when
    /// the argument is not known to be invertible.
    #[inline]
    pub fn invert(self) -> Self {
        match self.try_invert() {
            Ok(inv) => inv,
            Err(e) => panic!("{e}"),
        }
    }

    #[inline]
    pub fn try_invert(self) -> Result<Self, AlgebraError> {
        let norm = self.norm();
        if norm == 0 {
            return Err(AlgebraError::SingularQuaternion(self.0));
        }
        Ok(self.scale(gf256::invert(norm)))
    }

    /// `self · rhs⁻¹`. Panics when `rhs` has zero norm.
    #[inline]
    pub fn divide(self, rhs: Self) -> Self {
        self.multiply(rhs.invert())
    }

    #[inline]
    pub fn try_divide(self, rhs: Self) -> Result<Self, AlgebraError> {
        Ok(self.multiply(rhs.try_invert()?))
    }
}

impl Mul for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl MulAssign for Quaternion {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(rhs);
    }
}

impl Div for Quaternion {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.divide(rhs)
    }
}

impl DivAssign for Quaternion {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = self.divide(rhs);
    }
}

impl fmt::Debug for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quaternion({:08x})", self.to_bits())
    }
}
