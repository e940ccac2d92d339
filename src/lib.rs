//! # gf2n
//!
//! Arithmetic in binary extension fields GF(2^n) with elements held in a
//! single machine word.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gf2n = "0.3"
//! ```
//!
//! ```
//! use gf2n::prelude::*;
//!
//! let field = FieldConfig::aes();
//! assert_eq!(field.mul(0x57, 0x83).unwrap(), 0xC1);
//! assert_eq!(add(0x5, 0x3), 0x6);
//! ```
//!
//! ## Features
//!
//! - `parallel`: fill multiplication tables row by row on the rayon pool
//! - `serde`: serialize and deserialize [`algorithms::FieldConfig`]
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`gf2n-api`]: Error type and capability traits
//! - [`gf2n-params`]: Grade limits and well-known moduli
//! - [`gf2n-algorithms`]: Field arithmetic, modulus providers and tables

pub use gf2n_algorithms as algorithms;
pub use gf2n_api as api;
pub use gf2n_params as params;

/// Common imports for gf2n users
pub mod prelude {
    pub use gf2n_algorithms::{
        add, build_multiplication_table, build_table, checked_multiply, irreducible_polynomial,
        multiply, subtract, FieldConfig, FirstIrreducible, Heuristic, MultiplicationTable, Poly,
        TrialDivision, Unchecked, Word,
    };
    pub use gf2n_api::{Error, IrreducibilityChecker, ModulusProvider, Result};
}
