//! Irreducibility checkers

use gf2n_api::IrreducibilityChecker;

use crate::poly::{degree, rem, Word};

/// The polynomial `x`
const X: Word = 0b10;

/// Exhaustive factor search by polynomial remainder
///
/// A polynomial of degree `d` is reducible exactly when it has a factor of
/// degree `1..=d/2`, so every such divisor is tried. Divisors without a
/// constant term are skipped except `x` itself: if one of them divided the
/// candidate, `x` would too. Cost grows as `2^(d/2)` remainders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrialDivision;

impl IrreducibilityChecker for TrialDivision {
    fn name(&self) -> &'static str {
        "trial division"
    }

    fn is_irreducible(&self, poly: Word) -> bool {
        let d = match degree(poly) {
            Some(0) | None => return false,
            Some(d) => d,
        };
        let bound: Word = 1 << (d / 2 + 1);
        (X..bound)
            .filter(|&divisor| divisor == X || divisor & 1 == 1)
            .all(|divisor| rem(poly, divisor) != 0)
    }
}

/// Accepts every non-constant polynomial
///
/// Models trusting a modulus on its degree alone, as the heuristic does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unchecked;

impl IrreducibilityChecker for Unchecked {
    fn name(&self) -> &'static str {
        "unchecked"
    }

    fn is_irreducible(&self, poly: Word) -> bool {
        matches!(degree(poly), Some(d) if d > 0)
    }
}
