#![allow(non_snake_case)]

//! Estimation noise models.
//!
//! Linear noise models are represented as structs.

use crate::matrix::{Matrix, Real};
use crate::scalar::EstimatorScalar;

/// Additive noise.
///
/// Noise represented as the noise variances. For a matrix system `q` holds one variance per element.
#[derive(Clone, Debug)]
pub struct UncorrelatedNoise<T: EstimatorScalar> {
    /// Noise variance
    pub q: T,
}

/// Additive noise.
///
/// Noise represented as the noise covariance.
#[derive(Clone, Debug)]
pub struct CorrelatedNoise<T: EstimatorScalar> {
    /// Noise covariance
    pub Q: T,
}

impl<N: Real> CorrelatedNoise<Matrix<N>> {
    /// Creates a CorrelatedNoise from an UncorrelatedNoise.
    ///
    /// The covariance is diagonal with the elements of `q`, taken in row major order, as its diagonal.
    pub fn from_uncorrelated(uncorrelated: &UncorrelatedNoise<Matrix<N>>) -> Self {
        CorrelatedNoise {
            Q: Matrix::from_diagonal(uncorrelated.q.as_slice()),
        }
    }
}

macro_rules! impl_real_from_uncorrelated {
    ($($t:ty),*) => {
        $(
            impl CorrelatedNoise<$t> {
                /// Creates a CorrelatedNoise from an UncorrelatedNoise, a single variance is its own covariance.
                pub fn from_uncorrelated(uncorrelated: &UncorrelatedNoise<$t>) -> Self {
                    CorrelatedNoise { Q: uncorrelated.q }
                }
            }
        )*
    };
}

impl_real_from_uncorrelated!(f32, f64);
