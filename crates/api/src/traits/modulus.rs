// File: crates/api/src/traits/modulus.rs

//! Traits for deciding and producing reduction polynomials.

use crate::{Result, Word};

/// Decides whether a polynomial may serve as a field modulus.
///
/// Implementations range from trusting any polynomial of the right degree to
/// a full factor search. The polynomial is given in bitmask form with its
/// leading coefficient set.
pub trait IrreducibilityChecker {
    /// Returns a short name for the checking strategy.
    fn name(&self) -> &'static str;

    /// Returns `true` if `poly` is accepted as irreducible over GF(2).
    fn is_irreducible(&self, poly: Word) -> bool;
}

/// Produces the reduction polynomial for a given grade.
pub trait ModulusProvider {
    /// Returns a short name for the provider.
    fn name(&self) -> &'static str;

    /// Returns a polynomial of degree exactly `grade`.
    fn modulus(&self, grade: u32) -> Result<Word>;
}

impl<C: IrreducibilityChecker + ?Sized> IrreducibilityChecker for &C {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn is_irreducible(&self, poly: Word) -> bool {
        (**self).is_irreducible(poly)
    }
}

impl<P: ModulusProvider + ?Sized> ModulusProvider for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn modulus(&self, grade: u32) -> Result<Word> {
        (**self).modulus(grade)
    }
}
