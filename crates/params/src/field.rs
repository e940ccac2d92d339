//! Register-width limits for field elements

/// Width in bits of the native word that stores a field element
pub const WORD_BITS: u32 = u64::BITS;

/// Largest supported grade `n` for GF(2^n)
///
/// Two bits of headroom are kept above the top coefficient so the
/// intermediate `f << 1` during multiplication never leaves the register.
pub const MAX_GRADE: u32 = WORD_BITS - 2;

/// Smallest supported grade (GF(2))
pub const MIN_GRADE: u32 = 1;

/// Size in bytes of one stored field element
pub const WORD_BYTES: usize = (WORD_BITS / 8) as usize;

/// Largest grade whose full multiplication table fits an allocation on this target
///
/// A table of grade `n` holds `2^(2n)` cells of [`WORD_BYTES`] bytes each, and
/// a single allocation may span at most `isize::MAX` bytes.
pub const MAX_TABLE_GRADE: u32 = (usize::BITS - 2 - WORD_BYTES.trailing_zeros()) / 2;
