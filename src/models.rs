#![allow(non_snake_case)]

//! Linear estimation models.
//!
//! The state representation is modeled as a struct.
//! The discrete estimation operations, prediction and observation, are defined as traits.
//!
//! All types are generic over an [`EstimatorScalar`], so the same model describes a scalar system or a matrix system.

use crate::noise::CorrelatedNoise;
use crate::scalar::EstimatorScalar;

/// Kalman State.
///
/// Linear representation as a state estimate and the error covariance.
/// For a matrix system `x` is a column vector and `X` a square matrix of matching dimension.
#[derive(PartialEq, Clone, Debug)]
pub struct KalmanState<T: EstimatorScalar> {
    /// State estimate
    pub x: T,
    /// Error covariance
    pub X: T,
}

/// A state estimator.
pub trait Estimator<T: EstimatorScalar> {
    /// The estimator's estimate of the system's state.
    fn state(&self) -> T;
}

/// A linear predictor.
///
/// Uses a linear model with a control input and additive noise.
pub trait LinearPredictor<T: EstimatorScalar>: Sized {
    /// State prediction with a linear prediction model, control vector `u` and additive noise.
    ///
    /// Consumes the current state and returns the predicted one.
    fn predict(
        self,
        pred: &LinearPredictModel<T>,
        u: &T,
        noise: &CorrelatedNoise<T>,
    ) -> Result<Self, T::Error>;
}

/// A linear observer with correlated observation noise.
///
/// Uses a linear observation model with additive observation noise.
pub trait LinearObserver<T: EstimatorScalar>: Sized {
    /// Observation update given the measurement `z`.
    fn update(
        self,
        z: &T,
        obs: &LinearObserveModel<T>,
        noise: &CorrelatedNoise<T>,
    ) -> Result<Self, T::Error>;

    /// Observation update given an already computed innovation `s`.
    fn observe_innovation(
        self,
        s: &T,
        obs: &LinearObserveModel<T>,
        noise: &CorrelatedNoise<T>,
    ) -> Result<Self, T::Error>;
}

/// Linear prediction model.
///
/// Prediction is represented by a state transition model and a control input model.
#[derive(Clone, Debug)]
pub struct LinearPredictModel<T: EstimatorScalar> {
    /// State transition model
    pub Fx: T,
    /// Control input model
    pub B: T,
}

/// Linear observation model.
///
/// Observation is represented by an observation matrix.
#[derive(Clone, Debug)]
pub struct LinearObserveModel<T: EstimatorScalar> {
    /// Observation model
    pub Hx: T,
}
