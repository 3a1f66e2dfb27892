//! Error types for the sigfilter command line tool

use std::{fmt, io, path::PathBuf};

use sigfilter_core::{FilterError, Method};
use thiserror::Error;

/// Anything that stops a run before or while printing estimates
#[derive(Debug, Error)]
pub enum CliError {
    /// Filter parameters were rejected
    #[error("invalid parameter '{}': {}", .0.parameter(), .0)]
    Filter(#[from] FilterError),

    /// Config file is not valid JSON for any method
    #[error("cannot parse config '{}': {source}", .path.display())]
    Config {
        /// Config file
        path: PathBuf,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// Config file cannot be opened or read
    #[error("cannot read config '{}': {source}", .path.display())]
    ReadConfig {
        /// Config file
        path: PathBuf,
        /// I/O error
        #[source]
        source: io::Error,
    },

    /// Config file is for a different method than the subcommand
    #[error("config '{}' is for {found}, but {expected} was requested", .path.display())]
    MethodMismatch {
        /// Config file
        path: PathBuf,
        /// Method of the subcommand
        expected: Method,
        /// Method named in the file
        found: Method,
    },

    /// Report could not be rendered
    #[error("cannot format report")]
    Format(#[from] fmt::Error),

    /// Estimates could not be written to stdout
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
