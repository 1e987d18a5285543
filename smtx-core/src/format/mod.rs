//! Line-oriented text format for sparse matrices
//!
//! ```text
//! rows=<integer>
//! cols=<integer>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! Entries are written in ascending `(row, col)` order so that output is
//! reproducible. Reading accepts any order, skips blank lines and applies
//! repeated coordinates in file order.

pub mod constants;

use alloc::string::{String, ToString};
use core::fmt::Write;

use crate::validation::{parse_entry, parse_header};
use crate::{MatrixElement, MatrixError, Result, SparseMatrix};
use constants::{COLS_KEY, ROWS_KEY};

/// Parse a matrix from its text form
pub fn load<T: MatrixElement>(text: &str) -> Result<SparseMatrix<T>> {
    let mut lines = text.lines().enumerate().map(|(index, line)| (index + 1, line));

    let (line_number, line) = lines
        .next()
        .ok_or_else(|| MatrixError::format(0, "", "missing `rows=<integer>` header"))?;
    let rows = parse_header(line_number, line, ROWS_KEY)?;

    let (line_number, line) = lines
        .next()
        .ok_or_else(|| MatrixError::format(0, "", "missing `cols=<integer>` header"))?;
    let cols = parse_header(line_number, line, COLS_KEY)?;

    let mut matrix = SparseMatrix::<T>::new(rows, cols);
    for (line_number, line) in lines {
        if line.trim().is_empty() {
            continue;
        }

        let (row, col, value) = parse_entry::<T>(line_number, line)?;
        matrix.set_element(row, col, value).map_err(|_| {
            MatrixError::format(line_number, line, "entry outside the declared dimensions")
        })?;
    }

    log::debug!("loaded {rows}x{cols} matrix with {} non-zeros", matrix.nnz());

    Ok(matrix)
}

/// Render a matrix in its canonical text form
///
/// Lines are separated by `\n` with no trailing newline.
pub fn render<T: MatrixElement>(matrix: &SparseMatrix<T>) -> String {
    matrix.to_string()
}

/// Write the canonical text form of `matrix` into `out`
pub fn write_matrix<W: Write, T: MatrixElement>(
    out: &mut W,
    matrix: &SparseMatrix<T>,
) -> core::fmt::Result {
    write!(out, "{ROWS_KEY}={}\n{COLS_KEY}={}", matrix.rows(), matrix.cols())?;
    for (row, col, value) in matrix.sorted_entries() {
        write!(out, "\n({row}, {col}, {value})")?;
    }
    Ok(())
}
