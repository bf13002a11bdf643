#![allow(non_snake_case)]

//! Covariance state estimation.
//!
//! A discrete linear estimator, the Kalman filter, that uses a Kalman state representation [`KalmanState`] of the system.
//! The Kalman state is simply the x,X pair, the state estimate and its error covariance.
//!
//! The estimator is written only in terms of [`EstimatorScalar`] operations. It is oblivious to whether it operates
//! on real numbers or on matrices. Any error raised by those operations, such as a misshaped model matrix,
//! is returned unchanged.
//!
//! [`KalmanState`]: ../../models/struct.KalmanState.html

use crate::models::{Estimator, KalmanState, LinearObserveModel, LinearObserver, LinearPredictModel, LinearPredictor};
use crate::noise::CorrelatedNoise;
use crate::scalar::EstimatorScalar;

impl<T: EstimatorScalar> KalmanState<T> {
    /// A state from an initial state estimate and its error covariance.
    pub fn new(x: T, X: T) -> KalmanState<T> {
        KalmanState { x, X }
    }

    /// The innovation `z - Hx.x`, the discrepancy between a measurement and its prediction from the state.
    pub fn innovation(&self, z: &T, obs: &LinearObserveModel<T>) -> Result<T, T::Error> {
        z.sub(&obs.Hx.mul(&self.x)?)
    }
}

impl<T: EstimatorScalar> Estimator<T> for KalmanState<T> {
    fn state(&self) -> T {
        self.x.clone()
    }
}

impl<T: EstimatorScalar> LinearPredictor<T> for KalmanState<T> {
    fn predict(
        self,
        pred: &LinearPredictModel<T>,
        u: &T,
        noise: &CorrelatedNoise<T>,
    ) -> Result<Self, T::Error> {
        log::trace!("predict from x {:?}", self.x);
        // x = Fx.x + B.u
        let x = pred.Fx.mul(&self.x)?.add(&pred.B.mul(u)?)?;
        // X = Fx.X.Fx' + Q
        let X = pred
            .Fx
            .mul(&self.X)?
            .mul(&pred.Fx.transpose()?)?
            .add(&noise.Q)?;

        Ok(KalmanState { x, X })
    }
}

impl<T: EstimatorScalar> LinearObserver<T> for KalmanState<T> {
    fn update(
        self,
        z: &T,
        obs: &LinearObserveModel<T>,
        noise: &CorrelatedNoise<T>,
    ) -> Result<Self, T::Error> {
        let s = self.innovation(z, obs)?;
        self.observe_innovation(&s, obs, noise)
    }

    fn observe_innovation(
        self,
        s: &T,
        obs: &LinearObserveModel<T>,
        noise: &CorrelatedNoise<T>,
    ) -> Result<Self, T::Error> {
        log::trace!("observe innovation {:?}", s);
        let XHt = self.X.mul(&obs.Hx.transpose()?)?;
        // S = Hx.X.Hx' + R
        let S = obs.Hx.mul(&XHt)?.add(&noise.Q)?;
        // Kalman gain, X.Hx'.inv(S), S is not checked for singularity
        let K = XHt.mul(&S.invert()?)?;

        // State update
        let x = self.x.add(&K.mul(s)?)?;
        // X = (I - K.Hx).X
        let X = K.mul(&obs.Hx)?.identity_minus()?.mul(&self.X)?;

        Ok(KalmanState { x, X })
    }
}
