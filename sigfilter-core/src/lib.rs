//! Scalar signal smoothing for sigfilter
//!
//! Turns a sequence of noisy measurements into one estimate per measurement
//! using one of three methods: a fixed-gain alpha-beta filter, a scalar
//! Kalman filter over normal distributions, or a circular convolution.
//!
//! Key constraints:
//! - No heap allocation: estimates stream lazily from borrowed input
//! - Parameters are validated once, when a filter is built
//! - Output order always matches input order
//!
//! ```
//! use sigfilter_core::{Filter, FilterConfig, KalmanConfig, RecursiveEstimator, KalmanFilter};
//!
//! let filter = KalmanFilter::new(KalmanConfig::default()).unwrap();
//! let last = filter.estimates(&[4.0, 4.0, 4.0]).last().unwrap();
//! assert!(last.mean > 2.9 && last.variance < 0.3);
//!
//! // Or pick the method at runtime
//! let filter = Filter::from_config(&FilterConfig::Kalman(KalmanConfig::default())).unwrap();
//! # let _ = filter;
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

// Logging compiles away entirely without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

pub mod constants;
pub mod distribution;
pub mod errors;
pub mod filters;
pub mod motion;
pub mod report;
pub mod traits;

// Public API
pub use distribution::Normal;
pub use errors::{FilterError, FilterResult};
pub use filters::{
    AlphaBetaConfig, AlphaBetaFilter, ConvolutionConfig, ConvolutionFilter, Filter, FilterConfig,
    KalmanConfig, KalmanFilter, Kernel, Method,
};
pub use motion::{Acceleration, ConstantVelocity, Motion};
pub use report::{write_estimates, Style};
pub use traits::RecursiveEstimator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
