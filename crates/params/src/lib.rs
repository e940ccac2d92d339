//! Constant values for gf2n field operations
//!
//! This library provides the word-size limits and the well-known reduction
//! polynomials shared by the other gf2n crates.

#![no_std]

pub mod field;
pub mod moduli;
