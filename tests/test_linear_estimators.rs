#![allow(non_snake_case)]

//! Test the numerical operations of the linear estimator.
//!
//! A position and velocity system is estimated through several predict and observe steps.
//! The result is compared with the same equations evaluated with nalgebra.

use nalgebra::{DMatrix, DVector};

use linear_estimate::models::{
    KalmanState, LinearObserveModel, LinearObserver, LinearPredictModel, LinearPredictor,
};
use linear_estimate::noise::CorrelatedNoise;
use linear_estimate::Matrix;

const DT: f64 = 0.01;
const V_NOISE: f64 = 0.1; // Velocity noise, giving mean squared error bound
const V_GAMMA: f64 = 1.; // Velocity correlation, giving velocity change time constant
                         // Filter's Initial state uncertainty: System state is unknown
const I_P_NOISE: f64 = 1000.;
const I_V_NOISE: f64 = 10.;
// Noise on observing system state
const OBS_NOISE: f64 = 0.001;

fn sqr(x: f64) -> f64 {
    x * x
}

struct Models {
    pred: LinearPredictModel<Matrix>,
    pred_noise: CorrelatedNoise<Matrix>,
    obs: LinearObserveModel<Matrix>,
    obs_noise: CorrelatedNoise<Matrix>,
}

fn models() -> Models {
    let f_vv: f64 = (-DT * V_GAMMA).exp();

    // Noise coupled into velocity only, Q = G.q.G'
    let G = Matrix::column_vector(&[0.0, 1.0]);
    let q = Matrix::from_rows(&[[DT * sqr((1. - f_vv) * V_NOISE)]]).unwrap();
    let Q = G.multiply(&q).unwrap().multiply(&G.transpose()).unwrap();

    Models {
        pred: LinearPredictModel {
            Fx: Matrix::from_rows(&[[1., DT], [0., f_vv]]).unwrap(),
            B: Matrix::zeros(2, 1),
        },
        pred_noise: CorrelatedNoise { Q },
        obs: LinearObserveModel {
            Hx: Matrix::from_rows(&[[1.0, 0.0]]).unwrap(),
        },
        obs_noise: CorrelatedNoise {
            Q: Matrix::from_rows(&[[sqr(OBS_NOISE)]]).unwrap(),
        },
    }
}

/// The Kalman equations evaluated with nalgebra.
struct Reference {
    x: DVector<f64>,
    X: DMatrix<f64>,
}

impl Reference {
    fn predict(&mut self, m: &Models) {
        let Fx = DMatrix::from(&m.pred.Fx);
        self.x = &Fx * &self.x;
        self.X = &Fx * &self.X * Fx.transpose() + DMatrix::from(&m.pred_noise.Q);
    }

    fn observe(&mut self, m: &Models, z: f64) {
        let Hx = DMatrix::from(&m.obs.Hx);
        let s = DVector::from_element(1, z) - &Hx * &self.x;
        let S = &Hx * &self.X * Hx.transpose() + DMatrix::from(&m.obs_noise.Q);
        let W = &self.X * Hx.transpose() * S.try_inverse().unwrap();
        self.x += &W * s;
        self.X = (DMatrix::identity(2, 2) - &W * &Hx) * &self.X;
    }
}

#[test]
fn test_matches_reference() {
    let m = models();
    let z = 1000.;
    let u = Matrix::zero_vector(1);

    let init_x = [900., 1.5];
    let init_X = [sqr(I_P_NOISE), sqr(I_V_NOISE)];
    let mut est = KalmanState::new(Matrix::column_vector(&init_x), Matrix::from_diagonal(&init_X));
    let mut reference = Reference {
        x: DVector::from_column_slice(&init_x),
        X: DMatrix::from_diagonal(&DVector::from_column_slice(&init_X)),
    };

    for _c in 0..2 {
        est = est.predict(&m.pred, &u, &m.pred_noise).unwrap();
        reference.predict(&m);

        est = est
            .update(&Matrix::column_vector(&[z]), &m.obs, &m.obs_noise)
            .unwrap();
        reference.observe(&m, z);
    }
    est = est
        .update(&Matrix::column_vector(&[z]), &m.obs, &m.obs_noise)
        .unwrap();
    reference.observe(&m, z);

    println!("final={:.6}\n{:.6}", est.x, est.X);

    approx::assert_relative_eq!(est.x.value((0, 0)).unwrap(), z, max_relative = 1e-6);
    approx::assert_abs_diff_eq!(est.X.value((0, 0)).unwrap(), 0.0, epsilon = 1e-6);

    let expect_x = Matrix::from(&DMatrix::from_column_slice(2, 1, reference.x.as_slice()));
    approx::assert_relative_eq!(est.x, expect_x, epsilon = 1e-9, max_relative = 1e-6);
    approx::assert_relative_eq!(est.X, Matrix::from(&reference.X), epsilon = 1e-9, max_relative = 1e-6);
}

#[test]
fn test_covariance_stays_square() {
    let m = models();
    let u = Matrix::zero_vector(1);
    let mut est = KalmanState::new(Matrix::zero_vector(2), Matrix::identity(2));
    for c in 0..10 {
        est = est.predict(&m.pred, &u, &m.pred_noise).unwrap();
        est = est
            .update(&Matrix::column_vector(&[c as f64]), &m.obs, &m.obs_noise)
            .unwrap();
        assert_eq!(est.x.shape(), (2, 1));
        assert_eq!(est.X.shape(), (2, 2));
    }
}
