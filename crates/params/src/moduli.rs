//! Well-known irreducible reduction polynomials

/// GF(2): x + 1
pub const GF2_MODULUS: u64 = 0x3;

/// GF(2^4): x^4 + x + 1
pub const GF16_MODULUS: u64 = 0x13;

/// GF(2^8) used by AES (Rijndael): x^8 + x^4 + x^3 + x + 1
pub const AES_MODULUS: u64 = 0x11B;

/// GF(2^8) used by CCSDS / QR Reed-Solomon codes: x^8 + x^4 + x^3 + x^2 + 1
pub const REED_SOLOMON_MODULUS: u64 = 0x11D;

/// GF(2^16): x^16 + x^12 + x^3 + x + 1
pub const GF65536_MODULUS: u64 = 0x1100B;
