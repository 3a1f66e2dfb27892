//! State Evolution Model
//!
//! Both recursive estimators share one motion model: a scalar state moving
//! with a velocity, where the velocity itself evolves through a pluggable
//! acceleration function between steps.
//!
//! ```text
//! predicted_state    = state + dt · velocity
//! predicted_velocity = accelerate(velocity)
//! ```
//!
//! The alpha-beta filter runs this on plain `f64`; the Kalman filter runs it
//! on [`Normal`] distributions. Each filter then applies its own correction
//! to the prediction.

use crate::distribution::{self, Normal};

/// Maps the current velocity to the next step's velocity
///
/// Implemented for any `Fn(T) -> T`, so a closure can stand in for a
/// dedicated type:
///
/// ```rust
/// use sigfilter_core::motion::Acceleration;
///
/// let damped = |v: f64| v * 0.5;
/// assert_eq!(damped.accelerate(4.0), 2.0);
/// ```
pub trait Acceleration<T> {
    /// Next-step velocity
    fn accelerate(&self, velocity: T) -> T;
}

/// Identity acceleration: velocity carries over unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstantVelocity;

impl<T> Acceleration<T> for ConstantVelocity {
    #[inline]
    fn accelerate(&self, velocity: T) -> T {
        velocity
    }
}

impl<T, F> Acceleration<T> for F
where
    F: Fn(T) -> T,
{
    #[inline]
    fn accelerate(&self, velocity: T) -> T {
        self(velocity)
    }
}

/// Quantity that can be moved forward by a velocity over a time step
pub trait Advance: Copy {
    /// `self + dt · velocity`
    fn advance(self, velocity: Self, dt: f64) -> Self;
}

impl Advance for f64 {
    #[inline]
    fn advance(self, velocity: f64, dt: f64) -> f64 {
        self + dt * velocity
    }
}

impl Advance for Normal {
    /// Velocity scaled by the constant `dt`, then added to the state. With a
    /// zero-variance velocity the state variance is unchanged.
    #[inline]
    fn advance(self, velocity: Normal, dt: f64) -> Normal {
        distribution::add(self, distribution::multiply(velocity, Normal::constant(dt)))
    }
}

/// State and velocity carried between steps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion<T> {
    /// Current state estimate
    pub state: T,
    /// Current velocity estimate
    pub velocity: T,
}

impl<T: Advance> Motion<T> {
    /// Start from a known state and velocity
    pub const fn new(state: T, velocity: T) -> Self {
        Self { state, velocity }
    }

    /// Project one step ahead without looking at a measurement
    #[inline]
    pub fn predict<A: Acceleration<T>>(self, dt: f64, acceleration: &A) -> Self {
        Self {
            state: self.state.advance(self.velocity, dt),
            velocity: acceleration.accelerate(self.velocity),
        }
    }
}
