//! Error types for sparse matrix operations

use alloc::string::String;

use crate::shape::{Operation, Shape};

/// Errors that can occur while building, loading or combining matrices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A header or entry line of the text format could not be parsed
    Format {
        /// 1-based line number, 0 when the input ended early
        line: usize,
        /// The offending line, trimmed
        content: String,
        /// What the line was expected to look like
        reason: &'static str,
    },
    /// Operand shapes are incompatible for the operation
    DimensionMismatch {
        operation: Operation,
        left: Shape,
        right: Shape,
    },
    /// A coordinate lies outside the matrix
    IndexOutOfBounds { row: usize, col: usize, shape: Shape },
    /// A checked sum, difference or product left the element range
    Overflow {
        operation: Operation,
        row: usize,
        col: usize,
    },
}

impl MatrixError {
    pub(crate) fn format(line: usize, content: &str, reason: &'static str) -> Self {
        MatrixError::Format {
            line,
            content: String::from(content.trim()),
            reason,
        }
    }

    /// Operation the error was raised by, if it came from arithmetic
    pub fn operation(&self) -> Option<Operation> {
        match self {
            MatrixError::DimensionMismatch { operation, .. }
            | MatrixError::Overflow { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::Format { line: 0, reason, .. } => {
                write!(f, "input has wrong format: {reason}")
            }
            MatrixError::Format {
                line,
                content,
                reason,
            } => write!(
                f,
                "input has wrong format: line {line}: {reason} (got `{content}`)"
            ),
            MatrixError::DimensionMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "matrices dimensions do not match for {operation}: {left} and {right}"
            ),
            MatrixError::IndexOutOfBounds { row, col, shape } => {
                write!(f, "index ({row}, {col}) out of bounds for {shape} matrix")
            }
            MatrixError::Overflow {
                operation,
                row,
                col,
            } => write!(f, "integer overflow during {operation} at ({row}, {col})"),
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_names_operation_and_shapes() {
        let err = MatrixError::DimensionMismatch {
            operation: Operation::Multiplication,
            left: Shape::new(2, 3),
            right: Shape::new(2, 3),
        };
        assert_eq!(
            err.to_string(),
            "matrices dimensions do not match for multiplication: 2x3 and 2x3"
        );
        assert_eq!(err.operation(), Some(Operation::Multiplication));
    }

    #[test]
    fn test_format_error_names_line() {
        let err = MatrixError::format(3, "  (0,0)  ", "expected (row,col,value)");
        assert_eq!(
            err.to_string(),
            "input has wrong format: line 3: expected (row,col,value) (got `(0,0)`)"
        );
        assert_eq!(err.operation(), None);
    }
}
