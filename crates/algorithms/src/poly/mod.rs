//! Bit-polynomial representation
//!
//! A polynomial over GF(2) is stored as a [`Word`] bitmask: bit `i` is the
//! coefficient of `x^i`. A field element of GF(2^n) uses the low `n` bits and
//! a modulus of degree `n` has bit `n` set. The helpers here only give access
//! to bits; field semantics live in [`crate::field`].

use core::fmt;

pub use gf2n_api::Word;

/// Degree of `poly`, or `None` for the zero polynomial
#[inline]
pub const fn degree(poly: Word) -> Option<u32> {
    if poly == 0 {
        None
    } else {
        Some(Word::BITS - 1 - poly.leading_zeros())
    }
}

/// Coefficient of `x^i` in `poly`
#[inline]
pub const fn coefficient(poly: Word, i: u32) -> bool {
    i < Word::BITS && (poly >> i) & 1 == 1
}

/// Mask covering every bit below position `n`
///
/// Saturates to all ones once `n` reaches the word width.
#[inline]
pub const fn low_mask(n: u32) -> Word {
    if n >= Word::BITS {
        Word::MAX
    } else {
        (1 << n) - 1
    }
}

/// Number of elements of GF(2^n), if it is addressable
#[inline]
pub fn element_count(n: u32) -> Option<usize> {
    1usize.checked_shl(n)
}

/// Builds a polynomial from the exponents of its non-zero terms
///
/// `from_exponents(&[4, 1, 0])` is `x^4 + x + 1`. Repeated exponents cancel,
/// exponents outside the word are ignored.
pub fn from_exponents(exponents: &[u32]) -> Word {
    exponents
        .iter()
        .filter(|&&e| e < Word::BITS)
        .fold(0, |acc: Word, &e| acc ^ (1 << e))
}

/// Remainder of `dividend` modulo `divisor` in GF(2)[x]
///
/// Used to test candidate moduli for factors. Returns `dividend` unchanged
/// when `divisor` is zero.
pub fn rem(mut dividend: Word, divisor: Word) -> Word {
    let divisor_degree = match degree(divisor) {
        Some(d) => d,
        None => return dividend,
    };
    while let Some(d) = degree(dividend) {
        if d < divisor_degree {
            break;
        }
        dividend ^= divisor << (d - divisor_degree);
    }
    dividend
}

/// Display adapter rendering a bitmask as `x^4 + x + 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Poly(pub Word);

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top = match degree(self.0) {
            Some(d) => d,
            None => return f.write_str("0"),
        };
        let mut first = true;
        for i in (0..=top).rev() {
            if !coefficient(self.0, i) {
                continue;
            }
            if !first {
                f.write_str(" + ")?;
            }
            first = false;
            match i {
                0 => f.write_str("1")?,
                1 => f.write_str("x")?,
                _ => write!(f, "x^{}", i)?,
            }
        }
        Ok(())
    }
}
