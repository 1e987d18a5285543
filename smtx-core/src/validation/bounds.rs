//! Coordinate and shape validation
//!
//! Pure checks with no allocation beyond the error value.

use crate::shape::{Operation, Shape};
use crate::{MatrixError, Result};

/// Validate that `(row, col)` lies inside `shape`
pub fn validate_index(shape: Shape, row: usize, col: usize) -> Result<()> {
    if shape.contains(row, col) {
        Ok(())
    } else {
        Err(MatrixError::IndexOutOfBounds { row, col, shape })
    }
}

/// Validate that two operand shapes are compatible for `operation`
///
/// Returns the shape of the result.
pub fn validate_operands(operation: Operation, left: Shape, right: Shape) -> Result<Shape> {
    left.result_of(operation, &right)
        .ok_or(MatrixError::DimensionMismatch {
            operation,
            left,
            right,
        })
}
