//! Arithmetic in binary extension fields GF(2^n)
//!
//! This crate implements the computational core of the gf2n library:
//!
//! - [`poly`]: polynomials over GF(2) stored as [`Word`] bitmasks
//! - [`field`]: addition, subtraction and reduced carry-less multiplication,
//!   plus the validated [`FieldConfig`] surface
//! - [`irreducible`]: reduction polynomial providers and checkers
//! - [`table`]: full multiplication tables
//!
//! Elements fit in a single machine word, so grades are limited to
//! [`gf2n_params::field::MAX_GRADE`].
//!
//! # Example
//!
//! ```
//! use gf2n_algorithms::{multiply, irreducible_polynomial, build_multiplication_table};
//!
//! let ip = irreducible_polynomial(4);
//! assert_eq!(ip, 0x13);
//! assert_eq!(multiply(0xD, 0x6, ip, 4), 0x8);
//!
//! let table = build_multiplication_table(4).unwrap();
//! assert_eq!(table[0xD][0x6], 0x8);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Bit-polynomial representation
pub mod poly;
pub use poly::{Poly, Word};

// Field arithmetic
pub mod field;
pub use field::{add, checked_multiply, multiply, subtract, FieldConfig};

// Modulus selection
pub mod irreducible;
pub use irreducible::{
    irreducible_polynomial, FirstIrreducible, Heuristic, TrialDivision, Unchecked,
};

// Multiplication tables
pub mod table;
pub use table::{build_multiplication_table, build_table, MultiplicationTable};

// Capability traits
pub use gf2n_api::{IrreducibilityChecker, ModulusProvider};
