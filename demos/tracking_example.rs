//! Operation of a linear estimator tracking a moving object.
//!
//! A constant velocity model with position observations. Observations are simulated with Gaussian noise.
//! Run with `RUST_LOG=trace` to see each estimation step.

use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use linear_estimate::models::{
    Estimator, KalmanState, LinearObserveModel, LinearObserver, LinearPredictModel,
    LinearPredictor,
};
use linear_estimate::noise::{CorrelatedNoise, UncorrelatedNoise};
use linear_estimate::{Matrix, MatrixError};

const OBS_NOISE: f64 = 0.5;
const TRUE_VELOCITY: f64 = 1.5;

fn main() -> Result<(), MatrixError> {
    env_logger::init();

    // We need random numbers, seeded so runs are repeatable
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let measurement_noise = Normal::new(0., OBS_NOISE).unwrap();

    // Position and velocity with a unit time step
    let pred = LinearPredictModel {
        Fx: Matrix::from_rows(&[[1., 1.], [0., 1.]])?,
        B: Matrix::identity(2),
    };
    let u = Matrix::zero_vector(2);
    let pred_noise = CorrelatedNoise::<Matrix>::from_uncorrelated(&UncorrelatedNoise {
        q: Matrix::column_vector(&[0.01, 0.01]),
    });
    // Only position is observed
    let obs = LinearObserveModel {
        Hx: Matrix::from_rows(&[[1., 0.]])?,
    };
    let obs_noise = CorrelatedNoise {
        Q: Matrix::from_rows(&[[OBS_NOISE * OBS_NOISE]])?,
    };

    // Initially the object could be anywhere
    let mut estimate = KalmanState::new(
        Matrix::zero_vector(2),
        Matrix::from_diagonal(&[1000., 1000.]),
    );

    let mut position = 0.;
    for step in 1..=20 {
        position += TRUE_VELOCITY;
        let z = Matrix::column_vector(&[position + measurement_noise.sample(&mut rng)]);

        estimate = estimate.predict(&pred, &u, &pred_noise)?;
        estimate = estimate.update(&z, &obs, &obs_noise)?;

        let x = estimate.state();
        println!(
            "step {:2} true {:6.2} estimate {:6.2} velocity {:5.2}",
            step,
            position,
            x.value((0, 0))?,
            x.value((1, 0))?
        );
    }
    println!("Covariance\n{:.4}", estimate.X);

    Ok(())
}
