//! Filter configuration from flags and config files
//!
//! Precedence, lowest first: built-in defaults, the `--config` JSON file,
//! explicit flags.
//!
//! ```json
//! { "method": "kalman", "measurement_variance": 0.5, "time_step": 2.0 }
//! ```

use std::{fs, path::Path};

use sigfilter_core::{
    AlphaBetaConfig, ConvolutionConfig, FilterConfig, KalmanConfig, Method,
};

use crate::{
    cli::{AlphaBetaArgs, Commands, ConvolveArgs, KalmanArgs},
    error::{CliError, CliResult},
};

/// Flags that override parts of a method's config
pub trait Overrides {
    /// Config type the flags apply to
    type Config;

    /// Replace every field that was given on the command line
    fn apply(&self, config: &mut Self::Config) -> CliResult<()>;
}

impl Overrides for AlphaBetaArgs {
    type Config = AlphaBetaConfig;

    fn apply(&self, config: &mut AlphaBetaConfig) -> CliResult<()> {
        set(&mut config.alpha, self.alpha);
        set(&mut config.beta, self.beta);
        set(&mut config.initial_velocity, self.delta);
        set(&mut config.initial_state, self.initial);
        set(&mut config.time_step, self.time);
        Ok(())
    }
}

impl Overrides for KalmanArgs {
    type Config = KalmanConfig;

    fn apply(&self, config: &mut KalmanConfig) -> CliResult<()> {
        set(&mut config.initial_velocity, self.delta);
        set(&mut config.initial_state, self.initial);
        set(&mut config.initial_std_dev, self.sigma);
        set(&mut config.measurement_variance, self.variance);
        Ok(())
    }
}

impl Overrides for ConvolveArgs {
    type Config = ConvolutionConfig;

    fn apply(&self, config: &mut ConvolutionConfig) -> CliResult<()> {
        if let Some(weights) = &self.kernel {
            *config = ConvolutionConfig::new(weights)?;
        }
        Ok(())
    }
}

fn set(field: &mut f64, flag: Option<f64>) {
    if let Some(value) = flag {
        *field = value;
    }
}

/// Read a config file
pub fn load(path: &Path) -> CliResult<FilterConfig> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_json::from_str(&text).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Method a subcommand runs
pub fn method_of(command: &Commands) -> Method {
    match command {
        Commands::AlphaBeta { .. } => Method::AlphaBeta,
        Commands::Kalman { .. } => Method::Kalman,
        Commands::Convolve { .. } => Method::Convolution,
    }
}

/// Effective configuration for `command`
///
/// Nothing is validated here beyond the file format; the filter checks its
/// own parameters when it is built.
pub fn resolve(command: &Commands) -> CliResult<FilterConfig> {
    let expected = method_of(command);
    let base = match &command.common().config {
        Some(path) => {
            let config = load(path)?;
            if config.method() != expected {
                return Err(CliError::MethodMismatch {
                    path: path.clone(),
                    expected,
                    found: config.method(),
                });
            }
            config
        }
        None => FilterConfig::default_for(expected),
    };

    Ok(match (command, base) {
        (Commands::AlphaBeta { params, .. }, FilterConfig::AlphaBeta(mut config)) => {
            params.apply(&mut config)?;
            config.into()
        }
        (Commands::Kalman { params, .. }, FilterConfig::Kalman(mut config)) => {
            params.apply(&mut config)?;
            config.into()
        }
        (Commands::Convolve { params, .. }, FilterConfig::Convolution(mut config)) => {
            params.apply(&mut config)?;
            config.into()
        }
        // Methods were matched above
        (_, other) => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CommonArgs;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    fn kalman(params: KalmanArgs, config: Option<&Path>) -> Commands {
        Commands::Kalman {
            params,
            common: CommonArgs {
                config: config.map(Path::to_path_buf),
                ..CommonArgs::default()
            },
        }
    }

    #[test]
    fn defaults_without_flags_or_file() {
        let config = resolve(&kalman(KalmanArgs::default(), None)).unwrap();
        assert_eq!(config, FilterConfig::Kalman(KalmanConfig::default()));
    }

    #[test]
    fn flags_override_file_and_file_overrides_defaults() {
        let file = config_file(r#"{"method": "kalman", "measurement_variance": 4.0, "initial_state": 2.0}"#);
        let params = KalmanArgs { initial: Some(-1.0), ..KalmanArgs::default() };
        let config = resolve(&kalman(params, Some(file.path()))).unwrap();

        let FilterConfig::Kalman(config) = config else {
            panic!("expected kalman config");
        };
        assert_eq!(config.measurement_variance, 4.0);
        assert_eq!(config.initial_state, -1.0);
        assert_eq!(config.initial_std_dev, 1.0);
    }

    #[test]
    fn short_method_names_are_accepted_in_files() {
        let file = config_file(r#"{"method": "convolve", "weights": [1.0, 2.0, 1.0]}"#);
        let config = load(file.path()).unwrap();
        assert_eq!(config.method(), Method::Convolution);
    }

    #[test]
    fn file_for_another_method_is_rejected() {
        let file = config_file(r#"{"method": "ab", "alpha": 0.5}"#);
        let err = resolve(&kalman(KalmanArgs::default(), Some(file.path()))).unwrap_err();
        assert!(matches!(
            err,
            CliError::MethodMismatch { expected: Method::Kalman, found: Method::AlphaBeta, .. }
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let file = config_file(r#"{"method": "kalman", "variance": 2.0}"#);
        assert!(matches!(load(file.path()), Err(CliError::Config { .. })));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CliError::ReadConfig { .. }));
    }

    #[test]
    fn kernel_flag_replaces_file_weights() {
        let file = config_file(r#"{"method": "convolution", "weights": [1.0]}"#);
        let command = Commands::Convolve {
            params: ConvolveArgs { kernel: Some(vec![1.0, 1.0]) },
            common: CommonArgs {
                config: Some(file.path().to_path_buf()),
                ..CommonArgs::default()
            },
        };
        let FilterConfig::Convolution(config) = resolve(&command).unwrap() else {
            panic!("expected convolution config");
        };
        assert_eq!(&config.weights[..], &[1.0, 1.0]);
    }
}
