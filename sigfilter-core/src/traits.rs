//! Core traits for estimators
//!
//! A recursive estimator is a pure fold: it never mutates itself while
//! filtering. The carried value (state, velocity, ...) is handed into each
//! step and handed back out, so nothing survives past one pass and the same
//! filter can be replayed over any number of inputs.

use core::iter::FusedIterator;
use core::slice;

/// Estimator that carries state from one measurement to the next
pub trait RecursiveEstimator {
    /// Value carried between steps
    type Carry: Copy;

    /// Value emitted for each measurement
    type Estimate;

    /// Carry before the first measurement
    fn initial(&self) -> Self::Carry;

    /// Consume one measurement, returning the next carry and the estimate
    fn step(&self, carry: Self::Carry, measurement: f64) -> (Self::Carry, Self::Estimate);

    /// Lazily estimate every measurement in order
    ///
    /// The iterator yields exactly `data.len()` items. Calling this again
    /// restarts from [`initial`](Self::initial).
    fn estimates<'a>(&'a self, data: &'a [f64]) -> Estimates<'a, Self>
    where
        Self: Sized,
    {
        Estimates {
            estimator: self,
            carry: self.initial(),
            data: data.iter(),
        }
    }
}

/// Iterator returned by [`RecursiveEstimator::estimates`]
pub struct Estimates<'a, E: RecursiveEstimator> {
    estimator: &'a E,
    carry: E::Carry,
    data: slice::Iter<'a, f64>,
}

impl<'a, E: RecursiveEstimator> Estimates<'a, E> {
    /// Carry after the most recent measurement
    pub fn carry(&self) -> E::Carry {
        self.carry
    }
}

impl<'a, E: RecursiveEstimator> Iterator for Estimates<'a, E> {
    type Item = E::Estimate;

    fn next(&mut self) -> Option<Self::Item> {
        let &measurement = self.data.next()?;
        let (carry, estimate) = self.estimator.step(self.carry, measurement);
        self.carry = carry;
        Some(estimate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.data.size_hint()
    }
}

impl<'a, E: RecursiveEstimator> ExactSizeIterator for Estimates<'a, E> {}

impl<'a, E: RecursiveEstimator> FusedIterator for Estimates<'a, E> {}
