//! Public API traits and types for the gf2n library
//!
//! This crate provides the public API surface shared by the gf2n crates:
//! the error type, the word type that carries field elements, and the
//! capability traits used to pick a reduction polynomial.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::Word;

pub use traits::{IrreducibilityChecker, ModulusProvider};
