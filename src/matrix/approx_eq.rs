use approx::{AbsDiffEq, RelativeEq};

use super::{Matrix, Real};

impl<N: Real + AbsDiffEq<Epsilon = N>> AbsDiffEq for Matrix<N> {
    type Epsilon = N;

    fn default_epsilon() -> N {
        N::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: N) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<N: Real + RelativeEq<Epsilon = N>> RelativeEq for Matrix<N> {
    fn default_max_relative() -> N {
        N::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: N, max_relative: N) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
