//! Smoothing estimators
//!
//! ## Overview
//!
//! Three estimators turn a sequence of noisy scalar measurements into one
//! estimate per measurement, in input order:
//!
//! | Method        | Carries              | Emits              |
//! |---------------|----------------------|--------------------|
//! | Alpha-beta    | state, velocity      | state              |
//! | Kalman        | N(state), N(velocity)| (mean, variance)   |
//! | Convolution   | nothing              | weighted window    |
//!
//! The two recursive filters share the [`Motion`](crate::motion::Motion)
//! prediction and differ only in how they correct it. The convolution filter
//! is a pure window function of the input.
//!
//! ## Selecting a Method at Runtime
//!
//! ```rust
//! use sigfilter_core::filters::{Filter, FilterConfig, Method};
//!
//! let method: Method = "kalman".parse().unwrap();
//! let filter = Filter::from_config(&FilterConfig::default_for(method)).unwrap();
//! assert_eq!(filter.method(), Method::Kalman);
//! ```

pub mod alpha_beta;
pub mod convolution;
pub mod kalman;

pub use alpha_beta::{AlphaBetaConfig, AlphaBetaFilter};
pub use convolution::{ConvolutionConfig, ConvolutionFilter, Convolved, Kernel};
pub use kalman::{KalmanConfig, KalmanFilter};

use core::fmt;
use core::str::FromStr;

use crate::errors::FilterResult;

/// Available smoothing methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Method {
    /// Fixed-gain alpha-beta filter
    AlphaBeta,
    /// Scalar Kalman filter
    Kalman,
    /// Circular convolution
    Convolution,
}

impl Method {
    /// Every method, in listing order
    pub const ALL: [Method; 3] = [Method::AlphaBeta, Method::Kalman, Method::Convolution];

    /// Short name used on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Method::AlphaBeta => "ab",
            Method::Kalman => "kalman",
            Method::Convolution => "convolve",
        }
    }

    /// Human readable title
    pub const fn title(self) -> &'static str {
        match self {
            Method::AlphaBeta => "Alpha-beta filter",
            Method::Kalman => "Kalman filter",
            Method::Convolution => "Convolution filter",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name that matches no method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownMethod;

impl fmt::Display for UnknownMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid methodology")
    }
}

impl FromStr for Method {
    type Err = UnknownMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ab" | "alpha-beta" => Ok(Method::AlphaBeta),
            "kalman" => Ok(Method::Kalman),
            "convolve" | "convolution" => Ok(Method::Convolution),
            _ => Err(UnknownMethod),
        }
    }
}

/// Parameters for any one method
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "method", rename_all = "kebab-case")
)]
pub enum FilterConfig {
    /// Alpha-beta parameters
    #[cfg_attr(feature = "serde", serde(alias = "ab"))]
    AlphaBeta(AlphaBetaConfig),
    /// Kalman parameters
    Kalman(KalmanConfig),
    /// Convolution kernel
    #[cfg_attr(feature = "serde", serde(alias = "convolve"))]
    Convolution(ConvolutionConfig),
}

impl FilterConfig {
    /// Default parameters for `method`
    pub fn default_for(method: Method) -> Self {
        match method {
            Method::AlphaBeta => FilterConfig::AlphaBeta(AlphaBetaConfig::default()),
            Method::Kalman => FilterConfig::Kalman(KalmanConfig::default()),
            Method::Convolution => FilterConfig::Convolution(ConvolutionConfig::default()),
        }
    }

    /// Method these parameters belong to
    pub fn method(&self) -> Method {
        match self {
            FilterConfig::AlphaBeta(_) => Method::AlphaBeta,
            FilterConfig::Kalman(_) => Method::Kalman,
            FilterConfig::Convolution(_) => Method::Convolution,
        }
    }

    /// Check the parameters without building a filter
    pub fn validate(&self) -> FilterResult<()> {
        match self {
            FilterConfig::AlphaBeta(c) => c.validate(),
            FilterConfig::Kalman(c) => c.validate(),
            FilterConfig::Convolution(c) => c.validate(),
        }
    }
}

impl From<AlphaBetaConfig> for FilterConfig {
    fn from(config: AlphaBetaConfig) -> Self {
        FilterConfig::AlphaBeta(config)
    }
}

impl From<KalmanConfig> for FilterConfig {
    fn from(config: KalmanConfig) -> Self {
        FilterConfig::Kalman(config)
    }
}

impl From<ConvolutionConfig> for FilterConfig {
    fn from(config: ConvolutionConfig) -> Self {
        FilterConfig::Convolution(config)
    }
}

/// Validated constant-velocity filter for any method
#[derive(Debug, Clone)]
pub enum Filter {
    /// Alpha-beta filter
    AlphaBeta(AlphaBetaFilter),
    /// Kalman filter
    Kalman(KalmanFilter),
    /// Convolution filter
    Convolution(ConvolutionFilter),
}

impl Filter {
    /// Build the filter described by `config`
    ///
    /// All configuration errors surface here; a `Filter` value can always
    /// run to completion.
    pub fn from_config(config: &FilterConfig) -> FilterResult<Self> {
        Ok(match config {
            FilterConfig::AlphaBeta(c) => Filter::AlphaBeta(AlphaBetaFilter::new(*c)?),
            FilterConfig::Kalman(c) => Filter::Kalman(KalmanFilter::new(*c)?),
            FilterConfig::Convolution(c) => Filter::Convolution(ConvolutionFilter::new(c)?),
        })
    }

    /// Method of this filter
    pub fn method(&self) -> Method {
        match self {
            Filter::AlphaBeta(_) => Method::AlphaBeta,
            Filter::Kalman(_) => Method::Kalman,
            Filter::Convolution(_) => Method::Convolution,
        }
    }
}
