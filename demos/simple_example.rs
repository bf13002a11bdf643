//! Operation of a linear estimator in a simple example.
//!
//! A Kalman filter (estimator) with one real valued state and constant noises.

use linear_estimate::models::{KalmanState, LinearObserveModel, LinearObserver, LinearPredictModel, LinearPredictor};
use linear_estimate::noise::CorrelatedNoise;

fn main() {
    // Construct simple linear prediction and observation models
    let my_predict_model = LinearPredictModel { Fx: 1., B: 0. };
    let my_predict_noise = CorrelatedNoise { Q: 1. };
    let my_observe_model = LinearObserveModel { Hx: 1. };
    let my_observe_noise = CorrelatedNoise { Q: 1. };

    // Setup the initial state and covariance
    let estimate = KalmanState::new(
        10.0_f64, // initialy at 10
        0.,       // with no uncertainty
    );
    println!("Initial x{:.1} X{:.2}", estimate.x, estimate.X);

    // Make a state prediction, there is no control input
    let estimate = estimate
        .predict(&my_predict_model, &0., &my_predict_noise)
        .unwrap();
    println!("Predict x{:.1} X{:.2}", estimate.x, estimate.X);

    // Make an observation that we appear to be at 11
    let estimate = estimate
        .update(&11., &my_observe_model, &my_observe_noise)
        .unwrap();
    println!("Observe x{:.1} X{:.2}", estimate.x, estimate.X);
}
