//! Conversions between [`Matrix`] and nalgebra's dynamically sized `DMatrix`.

use nalgebra::DMatrix;

use crate::matrix::{Matrix, Real};

impl<N: Real + nalgebra::Scalar> From<&DMatrix<N>> for Matrix<N> {
    fn from(m: &DMatrix<N>) -> Self {
        // nalgebra is column major, the transpose's storage is our row major order
        Matrix::from_parts(m.nrows(), m.ncols(), m.transpose().as_slice().to_vec())
    }
}

impl<N: Real + nalgebra::Scalar> From<&Matrix<N>> for DMatrix<N> {
    fn from(m: &Matrix<N>) -> Self {
        DMatrix::from_row_slice(m.rows(), m.columns(), m.as_slice())
    }
}
