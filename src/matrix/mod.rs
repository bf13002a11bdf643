//! Dense real matrices.
//!
//! A [`Matrix`] is an immutable row major container of real numbers. Every transformation produces a new matrix.
//! Elements are only ever set through a [`MatrixBuilder`], which is exclusively owned until it is converted into a matrix.
//!
//! All element access is bounds checked. There is no unchecked indexing.

use std::fmt::{Debug, Display};

use num_traits::Float;

use crate::error::{Axis, MatrixError, Result};

mod approx_eq;
mod builder;
mod display;
mod ops;

pub use builder::MatrixBuilder;

/// Real numbers usable as matrix elements.
pub trait Real: Float + Debug + Display + Send + Sync + 'static {}

impl<N: Float + Debug + Display + Send + Sync + 'static> Real for N {}

/// A (row, column) position in a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Index {
    pub row: usize,
    pub column: usize,
}

impl Index {
    pub fn new(row: usize, column: usize) -> Self {
        Index { row, column }
    }
}

impl From<(usize, usize)> for Index {
    fn from((row, column): (usize, usize)) -> Self {
        Index { row, column }
    }
}

/// Dense row major matrix.
///
/// Invariant: `data.len() == rows * columns`.
/// Two matrices are equal iff their shapes match and their elements are equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<N: Real = f64> {
    rows: usize,
    columns: usize,
    data: Vec<N>,
}

impl<N: Real> Matrix<N> {
    /// A zero filled `rows` x `columns` matrix.
    ///
    /// # Panics
    ///
    /// Panics if `rows * columns` overflows `usize`.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Matrix {
            rows,
            columns,
            data: vec![N::zero(); element_count(rows, columns)],
        }
    }

    /// A zero filled `n` x `n` matrix.
    pub fn zeros_square(n: usize) -> Self {
        Self::zeros(n, n)
    }

    /// A zero column vector of length `n`.
    pub fn zero_vector(n: usize) -> Self {
        Self::zeros(n, 1)
    }

    /// The `n` x `n` identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n * n` overflows `usize`.
    pub fn identity(n: usize) -> Self {
        let mut data = vec![N::zero(); element_count(n, n)];
        for i in 0..n {
            data[i * n + i] = N::one();
        }
        Matrix {
            rows: n,
            columns: n,
            data,
        }
    }

    /// A matrix from row major `data`.
    ///
    /// Fails with [`MatrixError::ConstructionSizeMismatch`] unless `data.len() == rows * columns`,
    /// including when `rows * columns` is not representable.
    pub fn from_vec(rows: usize, columns: usize, data: Vec<N>) -> Result<Self> {
        if rows.checked_mul(columns) != Some(data.len()) {
            return Err(MatrixError::ConstructionSizeMismatch {
                rows,
                columns,
                actual: data.len(),
            });
        }
        Ok(Matrix {
            rows,
            columns,
            data,
        })
    }

    /// Caller guarantees `data.len() == rows * columns`.
    pub(crate) fn from_parts(rows: usize, columns: usize, data: Vec<N>) -> Self {
        debug_assert_eq!(rows.checked_mul(columns), Some(data.len()));
        Matrix {
            rows,
            columns,
            data,
        }
    }

    /// A column vector holding `values`.
    pub fn column_vector(values: &[N]) -> Self {
        Matrix {
            rows: values.len(),
            columns: 1,
            data: values.to_vec(),
        }
    }

    /// A square matrix with `values` on the diagonal.
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` squared overflows `usize`.
    pub fn from_diagonal(values: &[N]) -> Self {
        let n = values.len();
        let mut data = vec![N::zero(); element_count(n, n)];
        for (i, v) in values.iter().enumerate() {
            data[i * n + i] = *v;
        }
        Matrix {
            rows: n,
            columns: n,
            data,
        }
    }

    /// A matrix from nested row data.
    ///
    /// The column count is taken from the first row, every other row must have the same length.
    /// An empty slice gives a 0 x 0 matrix.
    pub fn from_rows<R: AsRef<[N]>>(rows: &[R]) -> Result<Self> {
        let columns = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.iter().map(|r| r.as_ref().len()).sum());
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        if rows.iter().any(|r| r.as_ref().len() != columns) {
            return Err(MatrixError::ConstructionSizeMismatch {
                rows: rows.len(),
                columns,
                actual: data.len(),
            });
        }
        Self::from_vec(rows.len(), columns, data)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// The row major elements.
    pub fn as_slice(&self) -> &[N] {
        &self.data
    }

    /// Checks `at` against the bounds, returning its offset into the row major storage.
    pub(crate) fn offset(&self, at: Index) -> Result<usize> {
        check_index(self.rows, self.columns, at)
    }

    /// The element at `at`.
    ///
    /// Fails with [`MatrixError::IndexOutOfRange`] naming the offending axis.
    pub fn value<I: Into<Index>>(&self, at: I) -> Result<N> {
        let offset = self.offset(at.into())?;
        Ok(self.data[offset])
    }

    /// A copy of row `row`.
    pub fn row(&self, row: usize) -> Result<Vec<N>> {
        if row >= self.rows {
            return Err(MatrixError::IndexOutOfRange {
                axis: Axis::Row,
                index: row,
                size: self.rows,
            });
        }
        let start = row * self.columns;
        Ok(self.data[start..start + self.columns].to_vec())
    }

    /// A copy of column `column`.
    pub fn column(&self, column: usize) -> Result<Vec<N>> {
        if column >= self.columns {
            return Err(MatrixError::IndexOutOfRange {
                axis: Axis::Column,
                index: column,
                size: self.columns,
            });
        }
        Ok(self
            .data
            .iter()
            .skip(column)
            .step_by(self.columns)
            .copied()
            .collect())
    }

    /// A builder initialised with a copy of this matrix.
    pub fn to_builder(&self) -> MatrixBuilder<N> {
        MatrixBuilder::from_matrix(self.clone())
    }

    /// The `columns` x `rows` transpose.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.columns {
            for i in 0..self.rows {
                data.push(self.data[i * self.columns + j]);
            }
        }
        Matrix {
            rows: self.columns,
            columns: self.rows,
            data,
        }
    }
}

/// Element count of a `rows` x `columns` matrix, for the infallible constructors.
pub(crate) fn element_count(rows: usize, columns: usize) -> usize {
    match rows.checked_mul(columns) {
        Some(count) => count,
        None => panic!("{}x{} matrix element count overflows usize", rows, columns),
    }
}

pub(crate) fn check_index(rows: usize, columns: usize, at: Index) -> Result<usize> {
    if at.row >= rows {
        return Err(MatrixError::IndexOutOfRange {
            axis: Axis::Row,
            index: at.row,
            size: rows,
        });
    }
    if at.column >= columns {
        return Err(MatrixError::IndexOutOfRange {
            axis: Axis::Column,
            index: at.column,
            size: columns,
        });
    }
    Ok(at.row * columns + at.column)
}
