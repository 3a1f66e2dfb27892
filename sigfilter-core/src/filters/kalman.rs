//! Scalar Kalman filter
//!
//! ## Model
//!
//! State and velocity are normal distributions. Velocity is deterministic
//! (variance 0), so this is the one-dimensional special case of the full
//! filter, where the covariance update collapses to precision-weighted fusion:
//!
//! ```text
//! Predict:   X̂ = X + dt·V          (V constant, so Var(X̂) = Var(X))
//!            V = accelerate(V)
//! Update:    X = X̂ ⊗ N(z, R)       (inverse-variance weighted fusion)
//! ```
//!
//! With `X̂ = N(μ, P)` the update is the familiar
//!
//! ```text
//! K = P / (P + R)
//! μ = μ + K·(z - μ)      P = (1 - K)·P
//! ```
//!
//! written in the symmetric form of [`distribution::multiply`].
//!
//! ## Restrictions
//!
//! Velocity carries no uncertainty and there is no process noise: the state
//! variance can only shrink. On a long run of data the estimate therefore
//! settles and stops following drift. These are modelling simplifications of
//! this tool, not of Kalman filtering in general.

use crate::{
    constants::defaults,
    distribution::{self, Normal},
    errors::{ensure_finite, FilterError, FilterResult},
    motion::{Acceleration, ConstantVelocity, Motion},
    traits::RecursiveEstimator,
};

/// Kalman filter parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct KalmanConfig {
    /// Variance of every measurement (R), must be positive
    pub measurement_variance: f64,
    /// Mean of the initial state distribution
    pub initial_state: f64,
    /// Standard deviation of the initial state distribution
    pub initial_std_dev: f64,
    /// Velocity (change per time unit), known exactly
    pub initial_velocity: f64,
    /// Length of one time step
    pub time_step: f64,
}

impl Default for KalmanConfig {
    fn default() -> Self {
        Self {
            measurement_variance: defaults::DEFAULT_MEASUREMENT_VARIANCE,
            initial_state: defaults::DEFAULT_INITIAL_STATE,
            initial_std_dev: defaults::DEFAULT_INITIAL_STD_DEV,
            initial_velocity: defaults::DEFAULT_INITIAL_VELOCITY,
            time_step: defaults::DEFAULT_TIME_STEP,
        }
    }
}

impl KalmanConfig {
    /// Check every parameter before a filter is built
    pub fn validate(&self) -> FilterResult<()> {
        let variance = ensure_finite("variance", self.measurement_variance)?;
        ensure_finite("initial", self.initial_state)?;
        let std_dev = ensure_finite("sigma", self.initial_std_dev)?;
        ensure_finite("delta", self.initial_velocity)?;
        ensure_finite("time", self.time_step)?;

        // Zero variance marks a constant: the update would scale the state
        // by the measurement instead of fusing with it.
        if variance <= 0.0 {
            return Err(FilterError::NonPositiveVariance {
                parameter: "variance",
                value: variance,
            });
        }
        if std_dev < 0.0 {
            return Err(FilterError::NegativeDeviation {
                parameter: "sigma",
                value: std_dev,
            });
        }

        // Fusion multiplies the prior σ² by R; the state variance only
        // shrinks, so the first product bounds every later one.
        let prior = ensure_finite("sigma", std_dev * std_dev)?;
        ensure_finite("variance", prior * variance)?;
        Ok(())
    }

    /// Initial state distribution N(μ, σ²)
    pub fn initial_state_distribution(&self) -> Normal {
        Normal::from_std_dev(self.initial_state, self.initial_std_dev)
    }

    /// Initial velocity distribution, always N(v, 0)
    pub fn initial_velocity_distribution(&self) -> Normal {
        Normal::constant(self.initial_velocity)
    }
}

/// Scalar Kalman estimator emitting `(mean, variance)` per measurement
#[derive(Debug, Clone)]
pub struct KalmanFilter<A = ConstantVelocity> {
    config: KalmanConfig,
    acceleration: A,
}

impl KalmanFilter {
    /// Build a constant-velocity filter
    pub fn new(config: KalmanConfig) -> FilterResult<Self> {
        Self::with_acceleration(config, ConstantVelocity)
    }
}

impl<A: Acceleration<Normal>> KalmanFilter<A> {
    /// Build a filter whose velocity distribution evolves through `acceleration`
    pub fn with_acceleration(config: KalmanConfig, acceleration: A) -> FilterResult<Self> {
        config.validate()?;
        log_debug!(
            "kalman filter: variance={} initial=N({},{}) delta={} time={}",
            config.measurement_variance,
            config.initial_state,
            config.initial_std_dev,
            config.initial_velocity,
            config.time_step
        );
        Ok(Self { config, acceleration })
    }

    /// Parameters in use
    pub fn config(&self) -> &KalmanConfig {
        &self.config
    }

    /// Distribution of a single measurement `z`
    fn observation(&self, measurement: f64) -> Normal {
        Normal::new(measurement, self.config.measurement_variance)
    }
}

impl<A: Acceleration<Normal>> RecursiveEstimator for KalmanFilter<A> {
    type Carry = Motion<Normal>;
    type Estimate = Normal;

    fn initial(&self) -> Motion<Normal> {
        Motion::new(
            self.config.initial_state_distribution(),
            self.config.initial_velocity_distribution(),
        )
    }

    fn step(&self, carry: Motion<Normal>, measurement: f64) -> (Motion<Normal>, Normal) {
        let predicted = carry.predict(self.config.time_step, &self.acceleration);
        let state = distribution::multiply(predicted.state, self.observation(measurement));
        log_trace!("kalman step: z={} -> N({},{})", measurement, state.mean, state.variance);

        (Motion::new(state, predicted.velocity), state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_update_averages_equal_variances() {
        let f = KalmanFilter::new(KalmanConfig::default()).unwrap();
        let est: Vec<Normal> = f.estimates(&[4.0]).collect();
        assert_eq!(est, [Normal::new(2.0, 0.5)]);
    }

    #[test]
    fn variance_follows_harmonic_sequence() {
        // With prior variance R, after n updates P = R / (n + 1)
        let f = KalmanFilter::new(KalmanConfig::default()).unwrap();
        for (n, est) in f.estimates(&[1.0; 6]).enumerate() {
            let expected = 1.0 / (n as f64 + 2.0);
            assert!((est.variance - expected).abs() < 1e-12, "step {n}: {}", est.variance);
        }
    }

    #[test]
    fn velocity_advances_mean_without_adding_variance() {
        let config = KalmanConfig {
            initial_state: 0.0,
            initial_std_dev: 1.0,
            initial_velocity: 2.0,
            ..KalmanConfig::default()
        };
        let f = KalmanFilter::new(config).unwrap();
        let (carry, est) = f.step(f.initial(), 2.0);
        // Predicted N(2, 1) fused with N(2, 1)
        assert_eq!(est, Normal::new(2.0, 0.5));
        assert_eq!(carry.velocity, Normal::constant(2.0));
    }

    #[test]
    fn tight_measurements_dominate() {
        let config = KalmanConfig {
            measurement_variance: 1e-6,
            initial_std_dev: 10.0,
            ..KalmanConfig::default()
        };
        let f = KalmanFilter::new(config).unwrap();
        let last = f.estimates(&[5.0, 5.0, 5.0]).last().unwrap();
        assert!((last.mean - 5.0).abs() < 1e-6);
    }

    #[test]
    fn certain_prior_is_allowed() {
        let config = KalmanConfig { initial_std_dev: 0.0, ..KalmanConfig::default() };
        let f = KalmanFilter::new(config).unwrap();
        for est in f.estimates(&[9.0, -3.0]) {
            assert_eq!(est, Normal::new(0.0, 0.0));
        }
    }

    #[test]
    fn non_positive_variance_is_rejected() {
        for variance in [0.0, -1.0] {
            let config = KalmanConfig { measurement_variance: variance, ..Default::default() };
            assert!(matches!(
                KalmanFilter::new(config),
                Err(FilterError::NonPositiveVariance { parameter: "variance", .. })
            ));
        }
    }

    #[test]
    fn negative_sigma_is_rejected() {
        let config = KalmanConfig { initial_std_dev: -0.5, ..Default::default() };
        let err = KalmanFilter::new(config).unwrap_err();
        assert_eq!(err.parameter(), "sigma");
    }

    #[test]
    fn sigma_whose_square_overflows_is_rejected() {
        for sigma in [1e200, 1e160] {
            let config = KalmanConfig { initial_std_dev: sigma, ..Default::default() };
            assert!(matches!(
                KalmanFilter::new(config),
                Err(FilterError::NonFinite { parameter: "sigma", .. })
            ));
        }
    }

    #[test]
    fn overflowing_fusion_product_is_rejected() {
        let config = KalmanConfig {
            measurement_variance: 1e300,
            initial_std_dev: 1e150,
            ..Default::default()
        };
        let err = KalmanFilter::new(config).unwrap_err();
        assert_eq!(err.parameter(), "variance");
    }

    #[test]
    fn large_but_finite_prior_gives_finite_estimates() {
        let config = KalmanConfig { initial_std_dev: 1e100, ..Default::default() };
        let f = KalmanFilter::new(config).unwrap();
        for est in f.estimates(&[1.0, 2.0, 3.0]) {
            assert!(est.mean.is_finite() && est.variance.is_finite(), "{est:?}");
        }
    }

    #[test]
    fn distributions_from_config() {
        let config = KalmanConfig {
            initial_state: 3.0,
            initial_std_dev: 2.0,
            initial_velocity: -1.0,
            ..KalmanConfig::default()
        };
        assert_eq!(config.initial_state_distribution(), Normal::new(3.0, 4.0));
        assert!(config.initial_velocity_distribution().is_constant());
    }
}
