//! Alpha-beta filter
//!
//! Fixed-gain recursive estimator over the constant-velocity motion model.
//! Each step predicts, measures the residual, and corrects both halves of
//! the prediction by a constant fraction of it:
//!
//! ```text
//! x̂ = x + dt·v          v̂ = accelerate(v)
//! r = z - x̂
//! x = x̂ + α·r           v = v̂ + β·r / dt
//! ```

use crate::{
    constants::defaults,
    errors::{ensure_finite, FilterError, FilterResult},
    motion::{Acceleration, ConstantVelocity, Motion},
    traits::RecursiveEstimator,
};

/// Alpha-beta filter parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct AlphaBetaConfig {
    /// Correction applied to the predicted state
    pub alpha: f64,
    /// Correction applied to the predicted velocity
    pub beta: f64,
    /// State before the first measurement
    pub initial_state: f64,
    /// Velocity before the first measurement
    pub initial_velocity: f64,
    /// Length of one time step, must be non-zero
    pub time_step: f64,
}

impl Default for AlphaBetaConfig {
    fn default() -> Self {
        Self {
            alpha: defaults::DEFAULT_ALPHA,
            beta: defaults::DEFAULT_BETA,
            initial_state: defaults::DEFAULT_INITIAL_STATE,
            initial_velocity: defaults::DEFAULT_INITIAL_VELOCITY,
            time_step: defaults::DEFAULT_TIME_STEP,
        }
    }
}

impl AlphaBetaConfig {
    /// Check every parameter before a filter is built
    pub fn validate(&self) -> FilterResult<()> {
        ensure_finite("alpha", self.alpha)?;
        ensure_finite("beta", self.beta)?;
        ensure_finite("initial", self.initial_state)?;
        ensure_finite("delta", self.initial_velocity)?;
        ensure_finite("time", self.time_step)?;

        // Velocity correction divides by the time unit
        if self.time_step == 0.0 {
            return Err(FilterError::ZeroTimeStep);
        }
        Ok(())
    }
}

/// Alpha-beta estimator with a pluggable acceleration model
#[derive(Debug, Clone)]
pub struct AlphaBetaFilter<A = ConstantVelocity> {
    config: AlphaBetaConfig,
    acceleration: A,
}

impl AlphaBetaFilter {
    /// Build a constant-velocity filter
    pub fn new(config: AlphaBetaConfig) -> FilterResult<Self> {
        Self::with_acceleration(config, ConstantVelocity)
    }
}

impl<A: Acceleration<f64>> AlphaBetaFilter<A> {
    /// Build a filter whose velocity evolves through `acceleration`
    pub fn with_acceleration(config: AlphaBetaConfig, acceleration: A) -> FilterResult<Self> {
        config.validate()?;
        log_debug!(
            "alpha-beta filter: alpha={} beta={} initial={} delta={} time={}",
            config.alpha,
            config.beta,
            config.initial_state,
            config.initial_velocity,
            config.time_step
        );
        Ok(Self { config, acceleration })
    }

    /// Parameters in use
    pub fn config(&self) -> &AlphaBetaConfig {
        &self.config
    }
}

impl<A: Acceleration<f64>> RecursiveEstimator for AlphaBetaFilter<A> {
    type Carry = Motion<f64>;
    type Estimate = f64;

    fn initial(&self) -> Motion<f64> {
        Motion::new(self.config.initial_state, self.config.initial_velocity)
    }

    fn step(&self, carry: Motion<f64>, measurement: f64) -> (Motion<f64>, f64) {
        let dt = self.config.time_step;
        let predicted = carry.predict(dt, &self.acceleration);

        let residual = measurement - predicted.state;
        let corrected = Motion::new(
            predicted.state + self.config.alpha * residual,
            predicted.velocity + (self.config.beta * residual) / dt,
        );

        (corrected, corrected.state)
    }
}
