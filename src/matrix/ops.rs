//! Matrix arithmetic.
//!
//! Shape checks happen before any element is computed, a failing operation never returns a partial result.

use std::ops::Mul;

use crate::error::{MatrixError, Result};

use super::{Index, Matrix, MatrixBuilder, Real};

impl<N: Real> Matrix<N> {
    /// Apply `f` to every element.
    pub fn map<F: Fn(N) -> N>(&self, f: F) -> Self {
        Matrix {
            rows: self.rows,
            columns: self.columns,
            data: self.data.iter().map(|v| f(*v)).collect(),
        }
    }

    /// Combine elementwise with `rhs` using `f`.
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] unless both shapes are identical.
    pub fn combine<F: Fn(N, N) -> N>(&self, rhs: &Matrix<N>, f: F) -> Result<Self> {
        if self.shape() != rhs.shape() {
            return Err(MatrixError::DimensionMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(Matrix {
            rows: self.rows,
            columns: self.columns,
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| f(*a, *b))
                .collect(),
        })
    }

    /// Elementwise `self + rhs`.
    pub fn add(&self, rhs: &Matrix<N>) -> Result<Self> {
        self.combine(rhs, |a, b| a + b)
    }

    /// Elementwise `self - rhs`.
    pub fn subtract(&self, rhs: &Matrix<N>) -> Result<Self> {
        self.combine(rhs, |a, b| a - b)
    }

    /// Matrix product `self * rhs`.
    ///
    /// Fails with [`MatrixError::IncompatibleMultiplication`] unless `self.columns() == rhs.rows()`.
    pub fn multiply(&self, rhs: &Matrix<N>) -> Result<Self> {
        if self.columns != rhs.rows {
            return Err(MatrixError::IncompatibleMultiplication {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        let mut product = MatrixBuilder::zeros(self.rows, rhs.columns);
        for i in 0..self.rows {
            for j in 0..rhs.columns {
                let mut sum = N::zero();
                for k in 0..self.columns {
                    sum = sum + self.data[i * self.columns + k] * rhs.data[k * rhs.columns + j];
                }
                product.set(sum, Index::new(i, j))?;
            }
        }
        Ok(product.build())
    }

    /// Every element scaled by `k`.
    pub fn scalar_mul(&self, k: N) -> Self {
        self.map(|v| v * k)
    }
}

impl<N: Real> Mul<N> for &Matrix<N> {
    type Output = Matrix<N>;

    fn mul(self, k: N) -> Matrix<N> {
        self.scalar_mul(k)
    }
}

impl<N: Real> Mul<N> for Matrix<N> {
    type Output = Matrix<N>;

    fn mul(self, k: N) -> Matrix<N> {
        self.scalar_mul(k)
    }
}

macro_rules! impl_scalar_left_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, m: &Matrix<$t>) -> Matrix<$t> {
                    m.scalar_mul(self)
                }
            }

            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;

                fn mul(self, m: Matrix<$t>) -> Matrix<$t> {
                    m.scalar_mul(self)
                }
            }
        )*
    };
}

impl_scalar_left_mul!(f32, f64);
