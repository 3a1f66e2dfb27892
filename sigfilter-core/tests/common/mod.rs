//! Common test utilities for integration tests
//!
//! This module provides:
//! - Deterministic signal generators (seeded, so failures replay)
//! - Assertion helpers for floating point sequences

#![allow(dead_code)]

pub mod generators;

pub use generators::SignalGenerator;

/// Assert two sequences agree element-wise within `tolerance`
pub fn assert_close(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tolerance,
            "index {i}: {a} differs from {e} by more than {tolerance}"
        );
    }
}

/// Mean absolute deviation of `values` from `reference`
pub fn mean_abs_error(values: &[f64], reference: &[f64]) -> f64 {
    let total = values
        .iter()
        .zip(reference)
        .fold(0.0, |acc, (v, r)| acc + (v - r).abs());
    total / values.len() as f64
}
