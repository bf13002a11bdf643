//! Determinant and inverse by cofactor expansion.
//!
//! Determinants use Laplace expansion along the first column and inverses use the adjugate method.
//! Cost grows factorially with the matrix size, so these are only suitable for the small state dimensions
//! of typical estimation problems. A factorisation based replacement would slot in behind the same methods.

use crate::error::{MatrixError, Result};
use crate::matrix::{Index, Matrix, MatrixBuilder, Real};

fn require_square<N: Real>(m: &Matrix<N>, operation: &'static str) -> Result<usize> {
    if m.is_square() {
        Ok(m.rows())
    } else {
        Err(MatrixError::NotSquare {
            operation,
            rows: m.rows(),
            columns: m.columns(),
        })
    }
}

fn warn_if_singular<N: Real>(det: N, n: usize) {
    if det == N::zero() {
        log::warn!("inverting a singular {}x{} matrix, result is not finite", n, n);
    }
}

impl<N: Real> Matrix<N> {
    /// The matrix with row `row` and column `column` removed.
    pub fn minor(&self, row: usize, column: usize) -> Result<Matrix<N>> {
        self.offset(Index::new(row, column))?;
        let data = self
            .as_slice()
            .iter()
            .enumerate()
            .filter(|(k, _)| k / self.columns() != row && k % self.columns() != column)
            .map(|(_, v)| *v)
            .collect();
        Matrix::from_vec(self.rows() - 1, self.columns() - 1, data)
    }

    /// Determinant by Laplace expansion along the first column.
    ///
    /// `det(A) = sum_i (-1)^i * A[i][0] * det(minor(A, i, 0))`.
    /// A 0 x 0 matrix has determinant 1, the empty product.
    pub fn determinant(&self) -> Result<N> {
        let n = require_square(self, "determinant")?;
        match n {
            0 => Ok(N::one()),
            1 => self.value((0, 0)),
            _ => {
                let mut det = N::zero();
                for i in 0..n {
                    let cofactor = self.value((i, 0))? * self.minor(i, 0)?.determinant()?;
                    det = if i % 2 == 0 { det + cofactor } else { det - cofactor };
                }
                Ok(det)
            }
        }
    }

    /// Inverse by the adjugate method.
    ///
    /// `inverse(A)[i][j] = (-1)^(i+j) * det(minor(transpose(A), i, j)) / det(A)`.
    ///
    /// Precondition: `A` is non singular. No check is made before dividing by the determinant,
    /// a singular matrix yields infinite or NaN elements rather than an error. Use [`Matrix::checked_inverse`]
    /// to reject singular matrices instead.
    pub fn inverse(&self) -> Result<Matrix<N>> {
        let n = require_square(self, "inverse")?;
        match n {
            0 => Ok(self.clone()),
            1 => {
                let det = self.value((0, 0))?;
                warn_if_singular(det, n);
                Matrix::from_vec(1, 1, vec![N::one() / det])
            }
            _ => {
                let det = self.determinant()?;
                warn_if_singular(det, n);
                let t = self.transpose();
                let mut inv = MatrixBuilder::zeros(n, n);
                for i in 0..n {
                    for j in 0..n {
                        let minor_det = t.minor(i, j)?.determinant()?;
                        let cofactor = if (i + j) % 2 == 0 { minor_det } else { -minor_det };
                        inv.set(cofactor / det, (i, j))?;
                    }
                }
                Ok(inv.build())
            }
        }
    }

    /// `I - self`.
    pub fn identity_minus(&self) -> Result<Matrix<N>> {
        let n = require_square(self, "identity_minus")?;
        Matrix::identity(n).subtract(self)
    }
}
