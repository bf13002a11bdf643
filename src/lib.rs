//! Linear+Estimate, dense matrix algebra and a generic discrete linear estimator.
//!
//! A discrete linear estimator such as the Kalman filter only needs a handful of algebraic operations on its state:
//! addition, subtraction, multiplication, transpose, inversion and "identity minus". Those operations are captured by the
//! [`EstimatorScalar`] trait. The estimator in [`estimators::covariance`] is written once against that trait and can therefore
//! be used with a plain real number as state or with the dense [`Matrix`] provided by this crate.
//!
//! The matrix engine is deliberately simple. Determinants are computed by Laplace expansion and inverses by the adjugate method.
//! Both are exponential in the matrix size and are only suitable for the small state dimensions typical of filtering problems.
//! Inversion of a singular matrix is not checked; see [`Matrix::inverse`] and the opt-in [`Matrix::checked_inverse`].
//!
//! Prediction and observation operations are represented by traits in [`models`]. The state representation, [`KalmanState`],
//! is a struct. Every operation consumes a state and returns a new one.
//!
//! # Licensing
//!
//! The source code is released under the conditions of the MIT license.
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the "Software"), to deal in the Software without restriction,
//! including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software,
//! and to permit persons to whom the Software is furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NON INFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY,
//! WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

pub mod error;
pub mod estimators;
pub mod interop;
pub mod linalg;
pub mod matrix;
pub mod models;
pub mod noise;
pub mod scalar;

pub use error::{Axis, MatrixError, Result};
pub use matrix::{Index, Matrix, MatrixBuilder, Real};
pub use models::KalmanState;
pub use scalar::EstimatorScalar;
