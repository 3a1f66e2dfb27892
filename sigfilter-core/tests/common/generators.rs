//! Signal generators for estimator tests
//!
//! Every generator draws from a seeded `StdRng`, so a failing case produces
//! the same data on every run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded source of synthetic measurement sequences
pub struct SignalGenerator {
    rng: StdRng,
}

impl SignalGenerator {
    /// Generator with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Straight line `start + slope · i` without noise
    pub fn ramp(start: f64, slope: f64, len: usize) -> Vec<f64> {
        (0..len).map(|i| start + slope * i as f64).collect()
    }

    /// Constant signal
    pub fn constant(value: f64, len: usize) -> Vec<f64> {
        vec![value; len]
    }

    /// Ramp with uniform noise in `[-amplitude, amplitude]`
    ///
    /// Returns `(noisy, truth)`.
    pub fn noisy_ramp(
        &mut self,
        start: f64,
        slope: f64,
        amplitude: f64,
        len: usize,
    ) -> (Vec<f64>, Vec<f64>) {
        let truth = Self::ramp(start, slope, len);
        let noisy = truth
            .iter()
            .map(|&t| t + self.rng.gen_range(-amplitude..=amplitude))
            .collect();
        (noisy, truth)
    }

    /// Constant level with uniform noise
    pub fn noisy_constant(&mut self, value: f64, amplitude: f64, len: usize) -> Vec<f64> {
        (0..len)
            .map(|_| value + self.rng.gen_range(-amplitude..=amplitude))
            .collect()
    }

    /// Arbitrary values in `[low, high)`
    pub fn uniform(&mut self, low: f64, high: f64, len: usize) -> Vec<f64> {
        (0..len).map(|_| self.rng.gen_range(low..high)).collect()
    }
}
