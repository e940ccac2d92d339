//! Multiplication (Cayley) tables of GF(2^n)
//!
//! A table of grade `n` has `2^n` rows and columns indexed by the integer
//! form of the operands, and holds `4^n` products. Grades above
//! [`MAX_TABLE_GRADE`](gf2n_params::field::MAX_TABLE_GRADE) are refused with
//! [`Error::TableTooLarge`], as is any request the allocator cannot satisfy.
//! In practice that means `n` around 10 or below.
//!
//! With the `parallel` feature the rows are filled concurrently. Every cell
//! depends only on its indices and the shared modulus, so the output is the
//! same either way.

use core::fmt;
use core::ops::Index;

use gf2n_params::field::WORD_BYTES;
use tracing::debug;

use crate::error::{validate, Error, Result};
use crate::field::{multiply, FieldConfig};
use crate::irreducible::irreducible_polynomial;
use crate::poly::{element_count, Poly, Word};

/// Square matrix of products, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplicationTable {
    grade: u32,
    modulus: Word,
    size: usize,
    cells: Vec<Word>,
}

impl MultiplicationTable {
    /// Grade `n` of the field
    pub fn grade(&self) -> u32 {
        self.grade
    }

    /// Modulus the products were reduced by
    pub fn modulus(&self) -> Word {
        self.modulus
    }

    /// Number of rows (and of columns), `2^n`
    pub fn size(&self) -> usize {
        self.size
    }

    /// Product of `row` and `column`, if both are field elements
    pub fn get(&self, row: usize, column: usize) -> Option<Word> {
        if row < self.size && column < self.size {
            Some(self.cells[row * self.size + column])
        } else {
            None
        }
    }

    /// All products with `row` as left operand
    pub fn row(&self, row: usize) -> Option<&[Word]> {
        if row < self.size {
            Some(&self.cells[row * self.size..(row + 1) * self.size])
        } else {
            None
        }
    }

    /// Iterator over the rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[Word]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Whether `T[r][c] == T[c][r]` everywhere
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|r| (r + 1..self.size).all(|c| self[r][c] == self[c][r]))
    }

    /// Row-major cells, `size * size` long
    pub fn into_inner(self) -> Vec<Word> {
        self.cells
    }
}

impl Index<usize> for MultiplicationTable {
    type Output = [Word];

    /// Row `row` of the table
    ///
    /// # Panics
    /// Panics if `row >= self.size()`.
    fn index(&self, row: usize) -> &[Word] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }
}

/// Hexadecimal rendering, one `|`-delimited row per line
impl fmt::Display for MultiplicationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            f.write_str("|")?;
            for cell in row {
                write!(f, "{:#x}|", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Multiplication table of GF(2^n) reduced by the `x^n + x + 1` heuristic
///
/// Every cell equals `multiply(r, c, irreducible_polynomial(n), n)`.
pub fn build_multiplication_table(grade: u32) -> Result<MultiplicationTable> {
    validate::grade(grade)?;
    fill(grade, irreducible_polynomial(grade))
}

/// Multiplication table of the field described by `config`
pub fn build_table(config: &FieldConfig) -> Result<MultiplicationTable> {
    fill(config.grade(), config.modulus())
}

fn fill(grade: u32, modulus: Word) -> Result<MultiplicationTable> {
    let too_large = Error::TableTooLarge { grade };
    let size = element_count(grade).ok_or(too_large)?;
    let len = size.checked_mul(size).ok_or(too_large)?;
    let bytes = len.checked_mul(WORD_BYTES).ok_or(too_large)?;
    if bytes > isize::MAX as usize {
        return Err(too_large);
    }
    debug!(grade, modulus = %Poly(modulus), cells = len, "building multiplication table");

    let mut cells = Vec::new();
    cells.try_reserve_exact(len).map_err(|_| too_large)?;
    cells.resize(len, 0);
    fill_rows(&mut cells, size, grade, modulus);

    debug!(grade, "multiplication table complete");
    Ok(MultiplicationTable {
        grade,
        modulus,
        size,
        cells,
    })
}

#[cfg(not(feature = "parallel"))]
fn fill_rows(cells: &mut [Word], size: usize, grade: u32, modulus: Word) {
    for (r, row) in cells.chunks_mut(size).enumerate() {
        fill_row(row, r as Word, grade, modulus);
    }
}

#[cfg(feature = "parallel")]
fn fill_rows(cells: &mut [Word], size: usize, grade: u32, modulus: Word) {
    use rayon::prelude::*;

    cells
        .par_chunks_mut(size)
        .enumerate()
        .for_each(|(r, row)| fill_row(row, r as Word, grade, modulus));
}

#[inline]
fn fill_row(row: &mut [Word], r: Word, grade: u32, modulus: Word) {
    for (c, cell) in row.iter_mut().enumerate() {
        *cell = multiply(r, c as Word, modulus, grade);
    }
}
