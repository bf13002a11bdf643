//! Linear algebra on [`Matrix`](crate::Matrix): determinant, minors, inverse and singularity checks.

mod cofactor;
pub mod singular;

pub use singular::check_nonsingular;
