//! Reduction polynomial selection
//!
//! Two providers share the [`ModulusProvider`] interface:
//!
//! - [`Heuristic`] returns `x^n + x + 1` without looking at it. This is
//!   irreducible for many small grades but not all of them (5, 8, 10 and 11
//!   fail), so it suits callers that only need a fixed, predictable modulus.
//! - [`FirstIrreducible`] scans degree-`n` candidates in increasing order and
//!   returns the first one its [`IrreducibilityChecker`] accepts.

use tracing::{debug, trace};

use gf2n_api::{IrreducibilityChecker, ModulusProvider};

use crate::error::{validate, Error, Result};
use crate::poly::{Poly, Word};

pub mod checker;

pub use checker::{TrialDivision, Unchecked};

/// The polynomial `x + 1`, the starting point of the heuristic
const LINEAR_TERMS: Word = 0b11;

/// Heuristic modulus `x^n + x + 1` for grade `n`
///
/// Grade 1 yields `x + 1` itself. The result is not checked for
/// irreducibility. Total over all inputs: grades beyond the word width leave
/// only `x + 1`.
#[inline]
pub fn irreducible_polynomial(n: u32) -> Word {
    if n > 1 {
        LINEAR_TERMS | (1 as Word).checked_shl(n).unwrap_or(0)
    } else {
        LINEAR_TERMS
    }
}

/// Provider returning the `x^n + x + 1` heuristic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Heuristic;

impl ModulusProvider for Heuristic {
    fn name(&self) -> &'static str {
        "x^n + x + 1"
    }

    fn modulus(&self, grade: u32) -> Result<Word> {
        validate::grade(grade)?;
        Ok(irreducible_polynomial(grade))
    }
}

/// Provider returning the smallest degree-`n` polynomial accepted by `C`
///
/// Only candidates with a constant term are tried; anything else is a
/// multiple of `x`. With [`TrialDivision`] this yields the numerically
/// smallest irreducible polynomial of the grade, e.g. `0x25` for grade 5 and
/// the AES modulus `0x11B` for grade 8.
#[derive(Debug, Clone, Default)]
pub struct FirstIrreducible<C = TrialDivision> {
    checker: C,
}

impl<C: IrreducibilityChecker> FirstIrreducible<C> {
    /// Search provider backed by `checker`
    pub fn new(checker: C) -> Self {
        Self { checker }
    }

    /// The checker deciding each candidate
    pub fn checker(&self) -> &C {
        &self.checker
    }
}

impl<C: IrreducibilityChecker> ModulusProvider for FirstIrreducible<C> {
    fn name(&self) -> &'static str {
        "first irreducible"
    }

    fn modulus(&self, grade: u32) -> Result<Word> {
        validate::grade(grade)?;
        let leading: Word = 1 << grade;
        let mut candidate = leading | 1;
        while candidate < leading << 1 {
            if self.checker.is_irreducible(candidate) {
                debug!(
                    grade,
                    modulus = %Poly(candidate),
                    checker = self.checker.name(),
                    "irreducible modulus found"
                );
                return Ok(candidate);
            }
            trace!(grade, candidate = %Poly(candidate), "candidate rejected");
            candidate += 2;
        }
        Err(Error::NoIrreducible { grade })
    }
}
