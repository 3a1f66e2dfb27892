//! Buffer Sizes
//!
//! The core never allocates. Anything variable-length that a filter owns is
//! stored in a fixed-capacity `heapless` buffer sized here.

/// Maximum number of weights in a convolution kernel.
///
/// Sizing:
/// - 32 weights × 8 bytes = 256 bytes per kernel
/// - Each output point costs one multiply-add per weight
pub const MAX_KERNEL_LEN: usize = 32;
