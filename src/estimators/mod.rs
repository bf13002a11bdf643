//! Linear state estimators.

pub mod covariance;
