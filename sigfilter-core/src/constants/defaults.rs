//! Default Filter Parameters
//!
//! Values applied when a parameter is not supplied. They match the
//! documented defaults of the command line tool.

// ===== ALPHA-BETA =====

/// Position correction gain.
///
/// Small gain: the estimate trusts its own prediction and moves 5% of the
/// way toward each measurement.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Velocity correction gain.
///
/// An order of magnitude below alpha so velocity reacts slowly to noise.
pub const DEFAULT_BETA: f64 = 0.005;

/// Initial state estimate before the first measurement.
pub const DEFAULT_INITIAL_STATE: f64 = 0.0;

/// Initial velocity (change of state per time unit).
pub const DEFAULT_INITIAL_VELOCITY: f64 = 0.0;

/// Length of one time step.
pub const DEFAULT_TIME_STEP: f64 = 1.0;

// ===== KALMAN =====

/// Variance of every measurement.
pub const DEFAULT_MEASUREMENT_VARIANCE: f64 = 1.0;

/// Standard deviation of the initial state distribution.
pub const DEFAULT_INITIAL_STD_DEV: f64 = 1.0;

// ===== CONVOLUTION =====

/// Identity kernel: reproduces the input unchanged.
pub const DEFAULT_KERNEL: [f64; 1] = [1.0];
