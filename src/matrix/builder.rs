use crate::error::Result;

use super::{check_index, element_count, Index, Matrix, Real};

/// Exclusively owned, mutable storage for a matrix under construction.
///
/// Derived results are populated element by element through a builder and only then converted into an immutable [`Matrix`].
/// A half built matrix can therefore never be observed elsewhere.
#[derive(Debug, Clone)]
pub struct MatrixBuilder<N: Real = f64> {
    rows: usize,
    columns: usize,
    data: Vec<N>,
}

impl<N: Real> MatrixBuilder<N> {
    /// A zero filled builder.
    ///
    /// # Panics
    ///
    /// Panics if `rows * columns` overflows `usize`.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        MatrixBuilder {
            rows,
            columns,
            data: vec![N::zero(); element_count(rows, columns)],
        }
    }

    pub fn from_matrix(matrix: Matrix<N>) -> Self {
        MatrixBuilder {
            rows: matrix.rows,
            columns: matrix.columns,
            data: matrix.data,
        }
    }

    pub fn value<I: Into<Index>>(&self, at: I) -> Result<N> {
        let offset = check_index(self.rows, self.columns, at.into())?;
        Ok(self.data[offset])
    }

    /// Set the element at `at`, failing with `IndexOutOfRange` if `at` is outside the bounds.
    pub fn set<I: Into<Index>>(&mut self, value: N, at: I) -> Result<()> {
        let offset = check_index(self.rows, self.columns, at.into())?;
        self.data[offset] = value;
        Ok(())
    }

    /// Freeze into a matrix.
    pub fn build(self) -> Matrix<N> {
        Matrix {
            rows: self.rows,
            columns: self.columns,
            data: self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Axis, MatrixError};

    #[test]
    fn set_then_build() {
        let mut b = MatrixBuilder::<f64>::zeros(2, 3);
        b.set(4.0, (1, 2)).unwrap();
        b.set(-1.0, Index::new(0, 0)).unwrap();
        assert_eq!(b.value((1, 2)).unwrap(), 4.0);

        let m = b.build();
        assert_eq!(m.as_slice(), &[-1.0, 0.0, 0.0, 0.0, 0.0, 4.0]);
    }

    #[test]
    fn set_out_of_range_names_axis() {
        let mut b = MatrixBuilder::<f64>::zeros(2, 3);
        assert_eq!(
            b.set(1.0, (2, 0)),
            Err(MatrixError::IndexOutOfRange {
                axis: Axis::Row,
                index: 2,
                size: 2
            })
        );
        assert_eq!(
            b.set(1.0, (0, 3)),
            Err(MatrixError::IndexOutOfRange {
                axis: Axis::Column,
                index: 3,
                size: 3
            })
        );
        // Nothing was written by the failed calls
        assert!(b.build().as_slice().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn builder_from_matrix_does_not_alias() {
        let m = Matrix::<f64>::identity(2);
        let mut b = m.to_builder();
        b.set(7.0, (0, 1)).unwrap();
        let changed = b.build();
        assert_eq!(m, Matrix::identity(2));
        assert_eq!(changed.value((0, 1)).unwrap(), 7.0);
    }
}
