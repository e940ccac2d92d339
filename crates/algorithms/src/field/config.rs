//! Immutable field parameters
//!
//! A [`FieldConfig`] pins the grade `n` and the reduction polynomial of one
//! GF(2^n). It is validated once at construction and then passed by reference
//! (or copied, it is two words) to every operation.

use rand::RngCore;
use tracing::{debug, warn};

use gf2n_api::{IrreducibilityChecker, ModulusProvider};
use gf2n_params::moduli::AES_MODULUS;

use super::{add, multiply};
use crate::error::{validate, Error, Result};
use crate::irreducible::Heuristic;
use crate::poly::{low_mask, Poly, Word};

/// Parameters of GF(2^n): the grade and the modulus of degree `n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawFieldConfig")
)]
pub struct FieldConfig {
    grade: u32,
    modulus: Word,
}

/// Unvalidated wire form, checked through [`FieldConfig::new`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFieldConfig {
    grade: u32,
    modulus: Word,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFieldConfig> for FieldConfig {
    type Error = Error;

    fn try_from(raw: RawFieldConfig) -> Result<Self> {
        FieldConfig::new(raw.grade, raw.modulus)
    }
}

impl FieldConfig {
    /// Field of grade `grade` reduced by an explicit `modulus`
    ///
    /// The modulus must have degree exactly `grade`. Its irreducibility is
    /// trusted; use [`FieldConfig::verified`] to have it checked.
    pub fn new(grade: u32, modulus: Word) -> Result<Self> {
        validate::grade(grade)?;
        validate::modulus(grade, modulus)?;
        debug!(grade, modulus = %Poly(modulus), "field configured");
        Ok(Self { grade, modulus })
    }

    /// Field reduced by the `x^n + x + 1` heuristic
    ///
    /// The heuristic modulus is reducible for some grades (5 and 8 among
    /// them); the result is then a ring with zero divisors, not a field.
    pub fn heuristic(grade: u32) -> Result<Self> {
        Self::with_provider(grade, &Heuristic)
    }

    /// Field reduced by whatever `provider` returns for `grade`
    pub fn with_provider<P: ModulusProvider + ?Sized>(grade: u32, provider: &P) -> Result<Self> {
        validate::grade(grade)?;
        let modulus = provider.modulus(grade)?;
        Self::new(grade, modulus)
    }

    /// Field reduced by `modulus`, rejected unless `checker` accepts it
    pub fn verified<C: IrreducibilityChecker + ?Sized>(
        grade: u32,
        modulus: Word,
        checker: &C,
    ) -> Result<Self> {
        validate::grade(grade)?;
        validate::modulus(grade, modulus)?;
        if !checker.is_irreducible(modulus) {
            warn!(
                grade,
                modulus = %Poly(modulus),
                checker = checker.name(),
                "modulus rejected as reducible"
            );
            return Err(Error::InvalidModulus {
                grade,
                modulus,
                reason: "polynomial is reducible",
            });
        }
        Self::new(grade, modulus)
    }

    /// GF(2^8) with the AES (Rijndael) modulus `x^8 + x^4 + x^3 + x + 1`
    pub fn aes() -> Self {
        Self {
            grade: 8,
            modulus: AES_MODULUS,
        }
    }

    /// Grade `n` of the field
    #[inline]
    pub fn grade(&self) -> u32 {
        self.grade
    }

    /// Reduction polynomial, with bit `n` set
    #[inline]
    pub fn modulus(&self) -> Word {
        self.modulus
    }

    /// Number of field elements, `2^n`
    #[inline]
    pub fn order(&self) -> Word {
        1 << self.grade
    }

    /// Whether `element` is a member of the field
    #[inline]
    pub fn contains(&self, element: Word) -> bool {
        element & !low_mask(self.grade) == 0
    }

    /// Field sum `f + g`
    pub fn add(&self, f: Word, g: Word) -> Result<Word> {
        self.check(f)?;
        self.check(g)?;
        Ok(add(f, g))
    }

    /// Field difference `f - g`, the same as the sum
    pub fn sub(&self, f: Word, g: Word) -> Result<Word> {
        self.add(f, g)
    }

    /// Field product `f * g`
    pub fn mul(&self, f: Word, g: Word) -> Result<Word> {
        self.check(f)?;
        self.check(g)?;
        Ok(multiply(f, g, self.modulus, self.grade))
    }

    /// `base` raised to `exponent` by square-and-multiply
    ///
    /// `pow(0, 0)` is 1.
    pub fn pow(&self, base: Word, mut exponent: u64) -> Result<Word> {
        self.check(base)?;
        let mut result: Word = 1;
        let mut square = base;
        while exponent != 0 {
            if exponent & 1 == 1 {
                result = multiply(result, square, self.modulus, self.grade);
            }
            square = multiply(square, square, self.modulus, self.grade);
            exponent >>= 1;
        }
        Ok(result)
    }

    /// Uniformly distributed field element
    pub fn random_element<R: RngCore + ?Sized>(&self, rng: &mut R) -> Word {
        rng.next_u64() & low_mask(self.grade)
    }

    #[inline(always)]
    fn check(&self, element: Word) -> Result<()> {
        validate::element(self.grade, element)
    }
}
