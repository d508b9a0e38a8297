//! Arithmetic in GF(2^8)
//!
//! Field elements are plain `u8` values. Addition is XOR; multiplication is
//! reduced modulo the polynomial x^8 + x^4 + x^3 + x + 1 (0x11b).
//!
//! Multiplication and inversion go through a discrete log / exponential table
//! pair built against the generator 0x03. Both tables are evaluated at compile
//! time and are read-only, so they can be shared freely between threads.
//!
//! # Example
//!
//! ```
//! use tsumego::hash::gf256;
//!
//! let a = 0x57;
//! let b = 0x83;
//! assert_eq!(gf256::multiply(a, b), 0xc1);
//! assert_eq!(gf256::multiply(a, gf256::invert(a)), 1);
//! assert_eq!(gf256::divide(gf256::multiply(a, b), b), a);
//! ```

use crate::error::AlgebraError;

/// Reduction polynomial
pub const MODULUS: u16 = 0x11b;

/// Generator of the multiplicative group used to build the tables
pub const GENERATOR: u8 = 0x03;

/// Order of the multiplicative group
const ORDER: usize = 255;

struct Tables {
    /// exp[i] = GENERATOR^i, stored twice so log sums never need a modulo
    exp: [u8; 2 * ORDER + 2],
    /// log[x] = i such that GENERATOR^i = x (log[0] is unused)
    log: [u8; 256],
}

impl Tables {
    const fn build() -> Self {
        let mut exp = [0u8; 2 * ORDER + 2];
        let mut log = [0u8; 256];
        let mut x: u16 = 1;
        let mut i = 0;
        while i < ORDER {
            exp[i] = x as u8;
            exp[i + ORDER] = x as u8;
            log[x as usize] = i as u8;
            // x *= 3, i.e. x * 2 + x
            x ^= x << 1;
            if x & 0x100 != 0 {
                x ^= MODULUS;
            }
            i += 1;
        }
        Self { exp, log }
    }
}

static TABLES: Tables = Tables::build();

/// Field addition (and subtraction).
#[inline]
pub const fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Field multiplication. `multiply(a, 0) == multiply(0, a) == 0`.
#[inline]
pub fn multiply(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    TABLES.exp[TABLES.log[a as usize] as usize + TABLES.log[b as usize] as usize]
}

/// Multiplicative inverse.
///
/// # Panics
///
/// `a` must be nonzero. Use [`try_invert`] when the argument is not known to
/// be valid.
#[inline]
pub fn invert(a: u8) -> u8 {
    assert!(a != 0, "GF(2^8): zero has no inverse");
    TABLES.exp[ORDER - TABLES.log[a as usize] as usize]
}

/// Checked inverse
#[inline]
pub fn try_invert(a: u8) -> Result<u8, AlgebraError> {
    if a == 0 {
        return Err(AlgebraError::ZeroInverse);
    }
    Ok(invert(a))
}

/// Field division `a / b`.
///
/// # Panics
///
/// `b` must be nonzero.
#[inline]
pub fn divide(a: u8, b: u8) -> u8 {
    assert!(b != 0, "GF(2^8): division by zero");
    if a == 0 {
        return 0;
    }
    TABLES.exp[TABLES.log[a as usize] as usize + ORDER - TABLES.log[b as usize] as usize]
}

/// Checked division
#[inline]
pub fn try_divide(a: u8, b: u8) -> Result<u8, AlgebraError> {
    if b == 0 {
        return Err(AlgebraError::ZeroInverse);
    }
    Ok(divide(a, b))
}

/// Carry-less shift-and-add multiplication, used to cross-check the tables.
#[cfg(test)]
fn multiply_slow(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= (MODULUS & 0xff) as u8;
        }
        b >>= 1;
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_match_slow_multiply() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(multiply(a, b), multiply_slow(a, b), "{a} * {b}");
            }
        }
    }

    #[test]
    fn test_generator_spans_group() {
        let mut seen = [false; 256];
        for i in 0..ORDER {
            seen[TABLES.exp[i] as usize] = true;
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|&s| s), "0x03 must generate all 255 units");
    }

    #[test]
    fn test_multiply_by_zero() {
        for a in 0..=255u8 {
            assert_eq!(multiply(a, 0), 0);
            assert_eq!(multiply(0, a), 0);
        }
    }

    #[test]
    fn test_inverse() {
        for a in 1..=255u8 {
            assert_eq!(multiply(a, invert(a)), 1, "a = {a}");
        }
        assert_eq!(invert(1), 1);
    }

    #[test]
    fn test_commutative_and_associative() {
        for a in 0..=255u8 {
            for b in 0..=255u8 {
                assert_eq!(multiply(a, b), multiply(b, a));
            }
        }
        // associativity on a strided sample of triples
        for a in (0..=255u8).step_by(7) {
            for b in (0..=255u8).step_by(5) {
                for c in (0..=255u8).step_by(3) {
                    assert_eq!(
                        multiply(multiply(a, b), c),
                        multiply(a, multiply(b, c))
                    );
                }
            }
        }
    }

    #[test]
    fn test_distributive() {
        for a in (0..=255u8).step_by(3) {
            for b in (0..=255u8).step_by(11) {
                for c in (0..=255u8).step_by(13) {
                    assert_eq!(
                        multiply(a, add(b, c)),
                        add(multiply(a, b), multiply(a, c))
                    );
                }
            }
        }
    }

    #[test]
    fn test_divide_undoes_multiply() {
        for a in 0..=255u8 {
            for b in 1..=255u8 {
                assert_eq!(divide(multiply(a, b), b), a);
            }
        }
    }

    #[test]
    fn test_checked_variants() {
        assert_eq!(try_invert(0), Err(AlgebraError::ZeroInverse));
        assert_eq!(try_divide(5, 0), Err(AlgebraError::ZeroInverse));
        assert_eq!(try_invert(0x53), Ok(0xca));
        assert_eq!(try_divide(0, 7), Ok(0));
    }

    #[test]
    #[should_panic(expected = "zero has no inverse")]
    fn test_invert_zero_panics() {
        let _ = invert(0);
    }
}
