//! Core types shared across the gf2n crates

/// Native register holding a GF(2)[x] polynomial as a bitmask
///
/// Bit `i` is the coefficient of `x^i`. Field elements of GF(2^n) occupy the
/// low `n` bits; a modulus of degree `n` additionally has bit `n` set.
pub type Word = u64;
