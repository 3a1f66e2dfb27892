//! Report Layout
//!
//! Column geometry shared by every annotated report.

/// Width of every numeric column, right-justified.
pub const FIELD_WIDTH: usize = 8;

/// Digits after the decimal point for every printed value.
pub const PRECISION: usize = 4;
