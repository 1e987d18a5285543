//! Addition, subtraction and multiplication of sparse matrices
//!
//! Results are built only through [`SparseMatrix::get_element`] and
//! [`SparseMatrix::set_element`], so entries that cancel to zero are dropped.
//! All arithmetic is checked; an overflow fails the whole operation with
//! [`MatrixError::Overflow`].
//!
//! The `+`, `-` and `*` operators are implemented on references and return a
//! [`Result`], since shapes are only known at runtime:
//!
//! ```
//! use smtx_core::SparseMatrix;
//!
//! let a = SparseMatrix::from_entries(2, 2, [(0, 1, 2)]).unwrap();
//! let b = SparseMatrix::from_entries(2, 2, [(1, 0, 3)]).unwrap();
//!
//! let product = (&a * &b).unwrap();
//! assert_eq!(product.get_element(0, 0), 6);
//! assert_eq!(product.nnz(), 1);
//! ```

use alloc::vec::Vec;
use core::ops::{Add, Mul, Sub};
use hashbrown::HashMap;

use crate::shape::Operation;
use crate::validation::validate_operands;
use crate::{MatrixElement, MatrixError, Result, SparseMatrix};

/// `a + b`; both operands must have the same shape
pub fn add<T: MatrixElement>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    elementwise(Operation::Addition, a, b, T::checked_add, Some)
}

/// `a - b`; both operands must have the same shape
pub fn subtract<T: MatrixElement>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    elementwise(Operation::Subtraction, a, b, T::checked_sub, T::checked_neg)
}

/// Shared body of addition and subtraction
///
/// `both` combines the two values at a coordinate stored in `a`; `right_only`
/// maps a value stored in `b` but not in `a`.
fn elementwise<T: MatrixElement>(
    operation: Operation,
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    both: impl Fn(T, T) -> Option<T>,
    right_only: impl Fn(T) -> Option<T>,
) -> Result<SparseMatrix<T>> {
    let shape = validate_operands(operation, a.shape(), b.shape())?;
    log::debug!(
        "{operation} of {shape} matrices with {} and {} non-zeros",
        a.nnz(),
        b.nnz()
    );

    let overflow = |row, col| MatrixError::Overflow {
        operation,
        row,
        col,
    };

    let mut result = SparseMatrix::<T>::new(shape.rows, shape.cols);
    for (row, col, left) in a {
        let value = both(left, b.get_element(row, col)).ok_or_else(|| overflow(row, col))?;
        result.set_element(row, col, value)?;
    }
    for (row, col, right) in b {
        if !a.contains(row, col) {
            let value = right_only(right).ok_or_else(|| overflow(row, col))?;
            result.set_element(row, col, value)?;
        }
    }

    Ok(result)
}

/// `a * b`; requires `a.cols() == b.rows()`
///
/// The non-zeros of `b` are grouped by row first, so each non-zero
/// `a[i][k]` only visits the non-zeros of row `k` of `b`. The cost is
/// proportional to `nnz(a)` times the average row fan-out of `b` rather
/// than to the dense dimensions.
///
/// The terms of each result entry are summed in ascending `k`, so whether
/// an intermediate sum overflows depends only on the operand values.
pub fn multiply<T: MatrixElement>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    let operation = Operation::Multiplication;
    let shape = validate_operands(operation, a.shape(), b.shape())?;
    log::debug!(
        "{operation} of {} by {} matrices with {} and {} non-zeros",
        a.shape(),
        b.shape(),
        a.nnz(),
        b.nnz()
    );

    // `b_rows[k]` = non-zeros of row `k` of `b` as (col, value)
    let mut b_rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
    for (k, j, value) in b {
        b_rows.entry(k).or_default().push((j, value));
    }
    log::trace!("indexed {} non-empty rows of right operand", b_rows.len());

    let overflow = |row, col| MatrixError::Overflow {
        operation,
        row,
        col,
    };

    let mut result = SparseMatrix::<T>::new(shape.rows, shape.cols);
    // Partial sums of the current result row, keyed by column
    let mut row_sums: HashMap<usize, T> = HashMap::new();
    let mut left = a.sorted_entries().into_iter().peekable();

    while let Some((i, k, value)) = left.next() {
        if let Some(row_k) = b_rows.get(&k) {
            for &(j, right) in row_k {
                let sum = row_sums.get(&j).copied().unwrap_or(T::ZERO);
                let sum = value
                    .checked_mul(right)
                    .and_then(|product| sum.checked_add(product))
                    .ok_or_else(|| overflow(i, j))?;
                row_sums.insert(j, sum);
            }
        }

        let row_done = left.peek().map_or(true, |&(next, _, _)| next != i);
        if row_done {
            for (j, sum) in row_sums.drain() {
                result.set_element(i, j, sum)?;
            }
        }
    }

    log::debug!("{operation} produced {} non-zeros", result.nnz());
    Ok(result)
}

impl<'a, T: MatrixElement> Add<&'a SparseMatrix<T>> for &'a SparseMatrix<T> {
    type Output = Result<SparseMatrix<T>>;

    fn add(self, rhs: &'a SparseMatrix<T>) -> Self::Output {
        add(self, rhs)
    }
}

impl<'a, T: MatrixElement> Sub<&'a SparseMatrix<T>> for &'a SparseMatrix<T> {
    type Output = Result<SparseMatrix<T>>;

    fn sub(self, rhs: &'a SparseMatrix<T>) -> Self::Output {
        subtract(self, rhs)
    }
}

impl<'a, T: MatrixElement> Mul<&'a SparseMatrix<T>> for &'a SparseMatrix<T> {
    type Output = Result<SparseMatrix<T>>;

    fn mul(self, rhs: &'a SparseMatrix<T>) -> Self::Output {
        multiply(self, rhs)
    }
}
