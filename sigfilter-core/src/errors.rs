//! Error Types for Degenerate Filter Configurations
//!
//! ## Design Philosophy
//!
//! Every estimator in this crate is a pure, single-pass producer over its
//! input. The only thing that can go wrong is the configuration it was built
//! from, so the error system is small:
//!
//! 1. **Inline Data**: variants carry `&'static str` parameter names and the
//!    offending `f64`, never a `String`. Errors stay `Copy` and need no heap.
//!
//! 2. **Raised Up Front**: constructors validate everything. Once a filter
//!    value exists, iterating it cannot fail, so a failing run never emits a
//!    partial estimate sequence.
//!
//! 3. **Actionable**: each variant names the parameter so a front end can
//!    tell the user exactly which flag to fix.
//!
//! ## Error Categories
//!
//! ### Division Hazards
//! - `ZeroTimeStep`: the alpha-beta velocity correction divides by the time unit
//! - `ZeroKernelSum`: kernel normalization divides by the weight sum
//! - `NonPositiveVariance`: Kalman fusion divides by the summed variances
//!
//! ### Shape Violations
//! - `EmptyKernel`, `KernelTooLong`
//!
//! ### Invalid Numbers
//! - `NonFinite`: NaN or infinity in any parameter
//! - `NegativeDeviation`: a standard deviation below zero
//!
//! ## Handling Strategy
//!
//! ```rust
//! use sigfilter_core::{AlphaBetaConfig, AlphaBetaFilter, FilterError};
//!
//! let config = AlphaBetaConfig { time_step: 0.0, ..Default::default() };
//! match AlphaBetaFilter::new(config) {
//!     Ok(_) => unreachable!(),
//!     Err(FilterError::ZeroTimeStep) => {
//!         // report "--time must be non-zero" and exit
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for filter construction
pub type FilterResult<T> = Result<T, FilterError>;

/// Configuration errors detected before any estimate is produced
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FilterError {
    /// Alpha-beta time unit of zero
    #[error("time unit must be non-zero")]
    ZeroTimeStep,

    /// Kernel weights sum to exactly zero and cannot be normalized
    #[error("kernel weights sum to zero")]
    ZeroKernelSum,

    /// Kernel without any weights
    #[error("kernel must contain at least one weight")]
    EmptyKernel,

    /// Kernel longer than the fixed kernel capacity
    #[error("kernel has {len} weights, at most {max} are supported")]
    KernelTooLong {
        /// Number of weights supplied
        len: usize,
        /// Capacity of the kernel buffer
        max: usize,
    },

    /// Variance that must be strictly positive was not
    #[error("{parameter} must be positive, got {value}")]
    NonPositiveVariance {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Value supplied
        value: f64,
    },

    /// Standard deviation below zero
    #[error("{parameter} must not be negative, got {value}")]
    NegativeDeviation {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Value supplied
        value: f64,
    },

    /// NaN or infinite parameter
    #[error("{parameter} must be a finite number, got {value}")]
    NonFinite {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Value supplied
        value: f64,
    },
}

impl FilterError {
    /// Name of the parameter at fault
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::ZeroTimeStep => "time",
            Self::ZeroKernelSum | Self::EmptyKernel | Self::KernelTooLong { .. } => "kernel",
            Self::NonPositiveVariance { parameter, .. }
            | Self::NegativeDeviation { parameter, .. }
            | Self::NonFinite { parameter, .. } => *parameter,
        }
    }
}

/// Reject NaN and infinities, naming the parameter
pub(crate) fn ensure_finite(parameter: &'static str, value: f64) -> FilterResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FilterError::NonFinite { parameter, value })
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FilterError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ZeroTimeStep =>
                defmt::write!(fmt, "time unit is zero"),
            Self::ZeroKernelSum =>
                defmt::write!(fmt, "kernel sums to zero"),
            Self::EmptyKernel =>
                defmt::write!(fmt, "empty kernel"),
            Self::KernelTooLong { len, max } =>
                defmt::write!(fmt, "kernel of {} exceeds {}", len, max),
            Self::NonPositiveVariance { parameter, value } =>
                defmt::write!(fmt, "{} not positive: {}", parameter, value),
            Self::NegativeDeviation { parameter, value } =>
                defmt::write!(fmt, "{} negative: {}", parameter, value),
            Self::NonFinite { parameter, value } =>
                defmt::write!(fmt, "{} not finite: {}", parameter, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values_pass_through() {
        assert_eq!(ensure_finite("alpha", 0.5), Ok(0.5));
    }

    #[test]
    fn nan_is_rejected_with_its_name() {
        let err = ensure_finite("beta", f64::NAN).unwrap_err();
        assert_eq!(err.parameter(), "beta");
        assert!(matches!(err, FilterError::NonFinite { .. }));
    }

    #[test]
    fn messages_name_the_parameter() {
        let err = FilterError::NonPositiveVariance { parameter: "variance", value: -1.0 };
        assert_eq!(err.to_string(), "variance must be positive, got -1");
        assert_eq!(FilterError::ZeroTimeStep.parameter(), "time");
        assert_eq!(FilterError::ZeroKernelSum.parameter(), "kernel");
    }
}
