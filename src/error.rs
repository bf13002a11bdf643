//! Errors raised by the matrix engine.
//!
//! All errors are detected synchronously and are recoverable by the caller. The estimator never reinterprets them,
//! so a failing predict or update reports the error raised by the offending matrix operation.

use std::fmt;

use thiserror::Error;

/// Result type of fallible matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;

/// The axis of a matrix index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

/// Error type for matrix construction, access and algebra.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MatrixError {
    /// Supplied data does not fill the requested shape exactly.
    ///
    /// Raised by the flat and nested constructors, including ragged nested rows.
    #[error("construction size mismatch: {rows}x{columns} matrix given {actual} elements")]
    ConstructionSizeMismatch {
        rows: usize,
        columns: usize,
        /// Number of elements actually supplied
        actual: usize,
    },

    /// Element access outside the matrix bounds.
    #[error("{axis} index {index} out of range for {axis} count {size}")]
    IndexOutOfRange {
        /// Which part of the index was invalid
        axis: Axis,
        index: usize,
        size: usize,
    },

    /// Determinant, inverse, minor expansion and identity-minus require a square matrix.
    #[error("{operation} requires a square matrix, got {rows}x{columns}")]
    NotSquare {
        operation: &'static str,
        rows: usize,
        columns: usize,
    },

    /// Elementwise operation on operands of differing shape.
    #[error("dimension mismatch: {lhs:?} and {rhs:?}")]
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// Matrix product whose inner dimensions disagree.
    #[error("incompatible multiplication: {lhs:?} by {rhs:?}")]
    IncompatibleMultiplication {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// Opt-in singularity check rejected the matrix.
    ///
    /// Only [`Matrix::checked_inverse`](crate::Matrix::checked_inverse) produces this error.
    #[error("matrix is singular, determinant {determinant}")]
    Singular { determinant: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let e = MatrixError::IndexOutOfRange {
            axis: Axis::Column,
            index: 3,
            size: 2,
        };
        assert_eq!(e.to_string(), "column index 3 out of range for column count 2");

        let e = MatrixError::ConstructionSizeMismatch {
            rows: 2,
            columns: 3,
            actual: 5,
        };
        assert_eq!(
            e.to_string(),
            "construction size mismatch: 2x3 matrix given 5 elements"
        );

        let e = MatrixError::IncompatibleMultiplication {
            lhs: (2, 3),
            rhs: (2, 3),
        };
        assert_eq!(e.to_string(), "incompatible multiplication: (2, 3) by (2, 3)");
    }
}
