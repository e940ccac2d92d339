//! Error type definitions for field operations

use thiserror::Error;

use crate::types::Word;

/// Primary error type for gf2n operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Grade outside `[MIN_GRADE, MAX_GRADE]`
    #[error("invalid grade {grade}: expected 1..={max}")]
    InvalidGrade {
        /// Requested grade
        grade: u32,
        /// Largest supported grade
        max: u32,
    },

    /// Modulus whose degree does not match the grade
    #[error("invalid modulus {modulus:#x} for grade {grade}: {reason}")]
    InvalidModulus {
        /// Grade the modulus was supplied for
        grade: u32,
        /// Offending modulus
        modulus: Word,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Operand with coefficients at or above the grade
    #[error("element {element:#x} is not in GF(2^{grade})")]
    ElementOutOfRange {
        /// Offending operand
        element: Word,
        /// Grade of the field
        grade: u32,
    },

    /// Table of `2^n x 2^n` cells cannot be allocated
    #[error("multiplication table for grade {grade} does not fit in memory")]
    TableTooLarge {
        /// Requested grade
        grade: u32,
    },

    /// Search exhausted every candidate of the requested degree
    #[error("no irreducible polynomial of degree {grade} accepted by the checker")]
    NoIrreducible {
        /// Requested degree
        grade: u32,
    },
}

/// Result type for gf2n operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Grade the failing request was made for
    pub fn grade(&self) -> u32 {
        match *self {
            Self::InvalidGrade { grade, .. }
            | Self::InvalidModulus { grade, .. }
            | Self::ElementOutOfRange { grade, .. }
            | Self::TableTooLarge { grade }
            | Self::NoIrreducible { grade } => grade,
        }
    }
}
