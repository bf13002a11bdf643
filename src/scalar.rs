//! The algebraic capabilities an estimator needs from its state type.
//!
//! A linear estimator only adds, subtracts, multiplies, transposes and inverts its state and model values.
//! [`EstimatorScalar`] names exactly those operations so the estimator can be written once.
//! Real numbers and [`Matrix`] implement it.

use std::convert::Infallible;
use std::fmt::Debug;

use crate::error::MatrixError;
use crate::matrix::{Matrix, Real};

/// Values usable as estimator state, models and noise.
///
/// Every operation returns a `Result`. For matrices the error reports the shape problem,
/// for real numbers the operations are total and the error type is [`Infallible`].
pub trait EstimatorScalar: Clone + Debug + Sized {
    type Error: std::error::Error;

    fn add(&self, rhs: &Self) -> Result<Self, Self::Error>;
    fn sub(&self, rhs: &Self) -> Result<Self, Self::Error>;
    fn mul(&self, rhs: &Self) -> Result<Self, Self::Error>;
    fn transpose(&self) -> Result<Self, Self::Error>;
    /// Inverse, not checked for singularity.
    fn invert(&self) -> Result<Self, Self::Error>;
    /// "1 - self" for numbers, "I - self" for matrices.
    fn identity_minus(&self) -> Result<Self, Self::Error>;
}

// Real numbers: transpose(x) = x, invert(x) = 1/x.
// Inverting exactly zero gives an infinite result, not an error.
macro_rules! impl_real_estimator_scalar {
    ($($t:ty),*) => {
        $(
            impl EstimatorScalar for $t {
                type Error = Infallible;

                fn add(&self, rhs: &Self) -> Result<Self, Infallible> {
                    Ok(*self + *rhs)
                }

                fn sub(&self, rhs: &Self) -> Result<Self, Infallible> {
                    Ok(*self - *rhs)
                }

                fn mul(&self, rhs: &Self) -> Result<Self, Infallible> {
                    Ok(*self * *rhs)
                }

                fn transpose(&self) -> Result<Self, Infallible> {
                    Ok(*self)
                }

                fn invert(&self) -> Result<Self, Infallible> {
                    Ok(1.0 / *self)
                }

                fn identity_minus(&self) -> Result<Self, Infallible> {
                    Ok(1.0 - *self)
                }
            }
        )*
    };
}

impl_real_estimator_scalar!(f32, f64);

impl<N: Real> EstimatorScalar for Matrix<N> {
    type Error = MatrixError;

    fn add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        Matrix::add(self, rhs)
    }

    fn sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.subtract(rhs)
    }

    fn mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.multiply(rhs)
    }

    fn transpose(&self) -> Result<Self, MatrixError> {
        Ok(Matrix::transpose(self))
    }

    fn invert(&self) -> Result<Self, MatrixError> {
        self.inverse()
    }

    fn identity_minus(&self) -> Result<Self, MatrixError> {
        Matrix::identity_minus(self)
    }
}
