//! Constants for sigfilter Core
//!
//! Centralized numeric values used by the estimators and the report
//! formatter. Front ends should take their defaults from here rather than
//! repeating magic numbers.
//!
//! ## Organization
//!
//! - **Defaults**: parameter values used when the caller supplies none
//! - **Buffers**: fixed capacities for heap-free storage
//! - **Report**: column layout of the annotated table

/// Default filter parameters.
pub mod defaults;

/// Fixed buffer capacities.
pub mod buffers;

/// Report column layout.
pub mod report;

pub use defaults::{
    DEFAULT_ALPHA, DEFAULT_BETA, DEFAULT_INITIAL_STATE, DEFAULT_INITIAL_VELOCITY,
    DEFAULT_TIME_STEP, DEFAULT_MEASUREMENT_VARIANCE, DEFAULT_INITIAL_STD_DEV,
    DEFAULT_KERNEL,
};

pub use buffers::MAX_KERNEL_LEN;

pub use report::{FIELD_WIDTH, PRECISION};
