//! Circular convolution filter
//!
//! Each output is a weighted window over the input centred on the same
//! index. The window wraps around both ends of the data instead of being
//! clipped or zero-padded, so the first and last outputs blend with the
//! opposite end of the sequence.
//!
//! ```text
//! offset = K / 2
//! y[i]   = Σ_{j=-offset}^{K-1-offset} w[j + offset] · x[(i + j) mod N]
//! ```
//!
//! For even `K` the extra weight falls on the lower-index side. Nothing is
//! carried between output points.

use core::iter::FusedIterator;

use heapless::Vec;

use crate::{
    constants::{buffers::MAX_KERNEL_LEN, defaults},
    errors::{ensure_finite, FilterError, FilterResult},
};

/// Raw kernel weights as supplied by the caller
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct ConvolutionConfig {
    /// Weights before normalization
    pub weights: Vec<f64, MAX_KERNEL_LEN>,
}

impl Default for ConvolutionConfig {
    fn default() -> Self {
        let mut weights = Vec::new();
        weights.extend_from_slice(&defaults::DEFAULT_KERNEL).ok();
        Self { weights }
    }
}

impl ConvolutionConfig {
    /// Config from a slice of weights
    pub fn new(weights: &[f64]) -> FilterResult<Self> {
        let weights = Vec::from_slice(weights).map_err(|_| FilterError::KernelTooLong {
            len: weights.len(),
            max: MAX_KERNEL_LEN,
        })?;
        Ok(Self { weights })
    }

    /// Check every weight before a filter is built
    pub fn validate(&self) -> FilterResult<()> {
        Kernel::normalize(&self.weights).map(drop)
    }
}

/// Kernel whose weights sum to one
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    weights: Vec<f64, MAX_KERNEL_LEN>,
}

impl Kernel {
    /// Normalize raw weights
    ///
    /// Weights that already sum to exactly 1 are kept as they are; otherwise
    /// each weight is divided by the sum.
    pub fn normalize(raw: &[f64]) -> FilterResult<Self> {
        if raw.is_empty() {
            return Err(FilterError::EmptyKernel);
        }
        let mut weights: Vec<f64, MAX_KERNEL_LEN> =
            Vec::from_slice(raw).map_err(|_| FilterError::KernelTooLong {
                len: raw.len(),
                max: MAX_KERNEL_LEN,
            })?;

        for &w in weights.iter() {
            ensure_finite("kernel", w)?;
        }

        let sum = weights.iter().fold(0.0, |acc, w| acc + w);
        if sum == 0.0 {
            return Err(FilterError::ZeroKernelSum);
        }
        ensure_finite("kernel", sum)?;

        if sum != 1.0 {
            // A near-cancelling sum can push the quotients past f64::MAX
            for w in weights.iter_mut() {
                *w = ensure_finite("kernel", *w / sum)?;
            }
        }
        Ok(Self { weights })
    }

    /// Normalized weights
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of weights
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false: construction rejects empty kernels
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Position of the centre weight
    pub fn offset(&self) -> usize {
        self.weights.len() / 2
    }

    /// Weighted window around `index`, wrapping at both ends of `data`
    fn apply(&self, data: &[f64], index: usize) -> f64 {
        let len = data.len() as isize;
        let start = index as isize - self.offset() as isize;

        self.weights
            .iter()
            .enumerate()
            .fold(0.0, |acc, (j, w)| {
                let target = (start + j as isize).rem_euclid(len) as usize;
                acc + data[target] * w
            })
    }
}

/// Circular convolution over a fixed kernel
#[derive(Debug, Clone)]
pub struct ConvolutionFilter {
    kernel: Kernel,
}

impl ConvolutionFilter {
    /// Build a filter, normalizing the configured weights
    pub fn new(config: &ConvolutionConfig) -> FilterResult<Self> {
        let kernel = Kernel::normalize(&config.weights)?;
        log_debug!("convolution filter: kernel={:?}", kernel.weights());
        Ok(Self { kernel })
    }

    /// Kernel in use
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Lazily convolve every point of `data`
    pub fn estimates<'a>(&'a self, data: &'a [f64]) -> Convolved<'a> {
        Convolved {
            kernel: &self.kernel,
            data,
            index: 0,
        }
    }

    /// Output for a single index of `data`, `None` past the end
    pub fn at(&self, data: &[f64], index: usize) -> Option<f64> {
        (index < data.len()).then(|| self.kernel.apply(data, index))
    }
}

/// Iterator returned by [`ConvolutionFilter::estimates`]
pub struct Convolved<'a> {
    kernel: &'a Kernel,
    data: &'a [f64],
    index: usize,
}

impl<'a> Iterator for Convolved<'a> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.data.len() {
            return None;
        }
        let value = self.kernel.apply(self.data, self.index);
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Convolved<'a> {}

impl<'a> FusedIterator for Convolved<'a> {}
