//! Opt-in singularity validation.
//!
//! The default [`Matrix::inverse`] never checks for singularity. These checks let a caller reject
//! ill conditioned models explicitly before inverting.

use num_traits::ToPrimitive;

use crate::error::{MatrixError, Result};
use crate::matrix::{Matrix, Real};

/// Checks a determinant is clear of zero by more than `tolerance`.
///
/// IEC 559 NaN values are never clear.
pub fn check_nonsingular<N: Real>(determinant: N, tolerance: N) -> Result<N> {
    if determinant.abs() > tolerance && determinant.is_finite() {
        Ok(determinant)
    } else {
        log::debug!("rejecting singular matrix, determinant {}", determinant);
        Err(MatrixError::Singular {
            determinant: determinant.to_f64().unwrap_or(f64::NAN),
        })
    }
}

impl<N: Real> Matrix<N> {
    /// True if `|det(self)| <= tolerance` or the determinant is not finite.
    ///
    /// Fails with `NotSquare` for a non square matrix.
    pub fn is_singular(&self, tolerance: N) -> Result<bool> {
        let det = self.determinant()?;
        Ok(!(det.abs() > tolerance && det.is_finite()))
    }

    /// Inverse that fails with [`MatrixError::Singular`] instead of producing non finite elements.
    pub fn checked_inverse(&self, tolerance: N) -> Result<Matrix<N>> {
        check_nonsingular(self.determinant()?, tolerance)?;
        self.inverse()
    }
}
