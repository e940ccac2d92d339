//! Validation utilities for field parameters

use gf2n_params::field::{MAX_GRADE, MIN_GRADE};

use super::{Error, Result};
use crate::types::Word;

/// Validate that a grade lies in `[MIN_GRADE, MAX_GRADE]`
#[inline(always)]
pub fn grade(grade: u32) -> Result<()> {
    if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
        return Err(Error::InvalidGrade {
            grade,
            max: MAX_GRADE,
        });
    }
    Ok(())
}

/// Validate that `modulus` has degree exactly `grade`
///
/// Only the degree is checked. Irreducibility is the caller's concern.
#[inline(always)]
pub fn modulus(grade: u32, modulus: Word) -> Result<()> {
    if modulus == 0 {
        return Err(Error::InvalidModulus {
            grade,
            modulus,
            reason: "zero polynomial",
        });
    }
    let degree = Word::BITS - 1 - modulus.leading_zeros();
    if degree < grade {
        return Err(Error::InvalidModulus {
            grade,
            modulus,
            reason: "degree-n coefficient is not set",
        });
    }
    if degree > grade {
        return Err(Error::InvalidModulus {
            grade,
            modulus,
            reason: "coefficients above degree n are set",
        });
    }
    Ok(())
}

/// Validate that `element` has no coefficient at position `>= grade`
#[inline(always)]
pub fn element(grade: u32, element: Word) -> Result<()> {
    if grade < Word::BITS && element >> grade != 0 {
        return Err(Error::ElementOutOfRange { element, grade });
    }
    Ok(())
}
