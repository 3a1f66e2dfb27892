//! Normal Distribution Arithmetic
//!
//! ## Overview
//!
//! The scalar Kalman filter carries its state and velocity as normal
//! distributions and moves them forward with two combinators:
//!
//! ```text
//! add(X, C)       = N(μx + c, σx²)                 C constant (σ² = 0)
//! add(X, Y)       = N(μx + μy, σx² + σy²)
//! multiply(X, C)  = N(μx·c, σx²·c²)                C constant (σ² = 0)
//! multiply(X, Y)  = N((μx·σy² + μy·σx²) / (σx² + σy²),
//!                     (σx²·σy²) / (σx² + σy²))
//! ```
//!
//! A zero variance on the right-hand operand marks it as a constant. The
//! fusion branch of `multiply` is the precision-weighted product of two
//! Gaussian densities: the result is never less certain than either input,
//! which is how the filter suppresses noise.
//!
//! ## Division
//!
//! Only the fusion branch divides, by `σx² + σy²`. That branch is taken only
//! when `σy² != 0`; callers that fuse measurements construct them with a
//! strictly positive variance (see `KalmanConfig`) so the denominator is
//! never zero.

use core::ops::{Add, Mul};

/// Normal distribution described by mean and variance
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Normal {
    /// Expected value
    pub mean: f64,
    /// Variance (σ²), never negative
    pub variance: f64,
}

impl Normal {
    /// Distribution with the given mean and variance
    pub const fn new(mean: f64, variance: f64) -> Self {
        Self { mean, variance }
    }

    /// Degenerate distribution: a known constant
    pub const fn constant(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// Distribution from mean and standard deviation
    pub fn from_std_dev(mean: f64, std_dev: f64) -> Self {
        Self::new(mean, std_dev * std_dev)
    }

    /// Standard deviation (σ)
    pub fn std_dev(&self) -> f64 {
        libm::sqrt(self.variance)
    }

    /// True when the variance is exactly zero
    pub fn is_constant(&self) -> bool {
        self.variance == 0.0
    }
}

/// Sum of a distribution and a constant or an independent distribution
pub fn add(x: Normal, y: Normal) -> Normal {
    if y.is_constant() {
        Normal::new(x.mean + y.mean, x.variance)
    } else {
        Normal::new(x.mean + y.mean, x.variance + y.variance)
    }
}

/// Scale a distribution by a constant, or fuse it with another distribution
pub fn multiply(x: Normal, y: Normal) -> Normal {
    if y.is_constant() {
        Normal::new(x.mean * y.mean, x.variance * y.mean * y.mean)
    } else {
        let denominator = x.variance + y.variance;
        Normal::new(
            (x.mean * y.variance + y.mean * x.variance) / denominator,
            (x.variance * y.variance) / denominator,
        )
    }
}

impl Add for Normal {
    type Output = Normal;

    fn add(self, rhs: Normal) -> Normal {
        add(self, rhs)
    }
}

impl Mul for Normal {
    type Output = Normal;

    fn mul(self, rhs: Normal) -> Normal {
        multiply(self, rhs)
    }
}

impl From<(f64, f64)> for Normal {
    fn from((mean, variance): (f64, f64)) -> Self {
        Self::new(mean, variance)
    }
}

impl From<Normal> for (f64, f64) {
    fn from(n: Normal) -> Self {
        (n.mean, n.variance)
    }
}
