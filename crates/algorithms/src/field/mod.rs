//! Arithmetic in GF(2^n)
//!
//! Addition and subtraction are both a bitwise XOR. Multiplication is a
//! shift-and-add carry-less product where every `f * x` step is reduced on
//! the fly against the modulus, so the working register never holds more
//! than `n + 1` significant bits.
//!
//! The free functions [`add`], [`subtract`] and [`multiply`] are total: they
//! never fail and never panic, whatever integers they are given. Parameters
//! that violate the field's preconditions give well-defined but meaningless
//! results. [`checked_multiply`] and [`FieldConfig`] reject such input up front.
//!
//! ## Constant-Time Guarantees
//!
//! [`multiply`] always runs exactly `n` rounds and selects the conditional
//! XORs with [`subtle::ConditionallySelectable`], so its running time does not
//! depend on the operand bits.

use subtle::{Choice, ConditionallySelectable};

use crate::error::{validate, Result};
use crate::poly::{low_mask, Word};

pub mod config;

pub use config::FieldConfig;

/// Sum of two polynomials over GF(2)
///
/// Inputs are opaque bit patterns; the result carries the bits set in exactly
/// one of them.
#[inline]
pub const fn add(f: Word, g: Word) -> Word {
    f ^ g
}

/// Difference of two polynomials over GF(2), identical to [`add`]
#[inline]
pub const fn subtract(f: Word, g: Word) -> Word {
    add(f, g)
}

/// Product of `f` and `g` in GF(2^n) defined by the modulus `ip`
///
/// Performs `n` rounds, one per coefficient of `g` from `x^0` upward:
///
/// 1. if the coefficient is set, XOR the current `f` into the product;
/// 2. remember the `x^(n-1)` coefficient of `f`;
/// 3. shift `f` one place (multiply by `x`) and clear every bit at `>= n`;
/// 4. if the remembered coefficient was set, XOR the low `n` bits of `ip`
///    into `f`, which replaces the dropped `x^n` by its residue.
///
/// The result is always below `2^n`. It equals `f * g mod ip` when `ip` has
/// degree `n` and `f`, `g` are field elements; bits of `f` at `>= n` are
/// discarded and bits of `g` at `>= n` are never read.
pub fn multiply(f: Word, g: Word, ip: Word, n: u32) -> Word {
    let mask = low_mask(n);
    let top = n
        .checked_sub(1)
        .and_then(|shift| (1 as Word).checked_shl(shift))
        .unwrap_or(0);
    let reduction = ip & mask;

    let mut f = f & mask;
    let mut g = g;
    let mut product: Word = 0;

    for _ in 0..n {
        let take = Choice::from((g & 1) as u8);
        product.conditional_assign(&(product ^ f), take);

        let carry = Choice::from(((f & top) != 0) as u8);
        f = (f << 1) & mask;
        f.conditional_assign(&(f ^ reduction), carry);

        g >>= 1;
    }

    product
}

/// [`multiply`] with its preconditions checked
///
/// Fails when `n` is outside `1..=MAX_GRADE`, when `ip` is not of degree
/// exactly `n`, or when either operand has a coefficient at `x^n` or above.
/// Irreducibility of `ip` is trusted.
pub fn checked_multiply(f: Word, g: Word, ip: Word, n: u32) -> Result<Word> {
    validate::grade(n)?;
    validate::modulus(n, ip)?;
    validate::element(n, f)?;
    validate::element(n, g)?;
    Ok(multiply(f, g, ip, n))
}
