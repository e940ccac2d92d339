//! Capability traits for choosing a reduction polynomial

pub mod modulus;

pub use modulus::{IrreducibilityChecker, ModulusProvider};
