//! Command line arguments
//!
//! One subcommand per method. Parameter flags are all optional here: values
//! left unset fall back to the `--config` file, then to the built-in
//! defaults.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Smooth noisy scalar measurements read from files or stdin
#[derive(Parser, Debug)]
#[command(name = "sigfilter", author, version, about, long_about = None)]
pub struct Cli {
    /// Filter method to run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the valid methodologies and exit
    #[arg(long)]
    pub list_methodologies: bool,

    /// Set the log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

/// Available filter methods
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fixed-gain alpha-beta filter
    #[command(name = "ab", visible_alias = "alpha-beta", allow_negative_numbers = true)]
    AlphaBeta {
        #[command(flatten)]
        params: AlphaBetaArgs,
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Scalar Kalman filter
    #[command(allow_negative_numbers = true)]
    Kalman {
        #[command(flatten)]
        params: KalmanArgs,
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Circular convolution with a normalized kernel
    #[command(name = "convolve", visible_alias = "convolution", allow_negative_numbers = true)]
    Convolve {
        #[command(flatten)]
        params: ConvolveArgs,
        #[command(flatten)]
        common: CommonArgs,
    },
}

impl Commands {
    /// Input and output options shared by every method
    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::AlphaBeta { common, .. }
            | Commands::Kalman { common, .. }
            | Commands::Convolve { common, .. } => common,
        }
    }
}

/// Options shared by every method
#[derive(Args, Debug, Default)]
pub struct CommonArgs {
    /// Print a header and the raw value beside each estimate
    #[arg(short, long)]
    pub report: bool,

    /// Read measurements from PATH, `-` for stdin
    #[arg(short = 'f', long = "file", value_name = "PATH", num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// More input files, read after every --file
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// JSON file with filter parameters
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl CommonArgs {
    /// Every input in reading order
    pub fn sources(&self) -> Vec<PathBuf> {
        self.files.iter().chain(&self.inputs).cloned().collect()
    }
}

/// Alpha-beta parameters
#[derive(Args, Debug, Default)]
pub struct AlphaBetaArgs {
    /// Correction applied to the predicted state [default: 0.05]
    #[arg(short, long)]
    pub alpha: Option<f64>,

    /// Correction applied to the predicted velocity [default: 0.005]
    #[arg(short, long)]
    pub beta: Option<f64>,

    /// Initial change per time unit [default: 0]
    #[arg(short, long)]
    pub delta: Option<f64>,

    /// Initial estimate [default: 0]
    #[arg(short, long)]
    pub initial: Option<f64>,

    /// Length of one time unit, non-zero [default: 1]
    #[arg(short, long)]
    pub time: Option<f64>,
}

/// Kalman parameters
#[derive(Args, Debug, Default)]
pub struct KalmanArgs {
    /// Expected change per time unit [default: 0]
    #[arg(short, long)]
    pub delta: Option<f64>,

    /// Mean of the initial estimate [default: 0]
    #[arg(short, long)]
    pub initial: Option<f64>,

    /// Standard deviation of the initial estimate [default: 1]
    #[arg(short, long)]
    pub sigma: Option<f64>,

    /// Variance of every measurement, positive [default: 1]
    #[arg(short, long)]
    pub variance: Option<f64>,
}

/// Convolution parameters
#[derive(Args, Debug, Default)]
pub struct ConvolveArgs {
    /// Kernel weights, space or comma separated [default: 1]
    #[arg(short, long, value_name = "W", num_args = 1.., value_delimiter = ',')]
    pub kernel: Option<Vec<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sigfilter").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn alpha_beta_flags() {
        let cli = parse(&["ab", "-a", "0.5", "--beta", "0.1", "-i", "-3", "-r", "data.txt"]);
        let Some(Commands::AlphaBeta { params, common }) = cli.command else {
            panic!("expected ab");
        };
        assert_eq!(params.alpha, Some(0.5));
        assert_eq!(params.beta, Some(0.1));
        assert_eq!(params.initial, Some(-3.0));
        assert_eq!(params.time, None);
        assert!(common.report);
        assert_eq!(common.inputs, [PathBuf::from("data.txt")]);
    }

    #[test]
    fn aliases_select_the_same_method() {
        assert!(matches!(parse(&["alpha-beta"]).command, Some(Commands::AlphaBeta { .. })));
        assert!(matches!(parse(&["convolution"]).command, Some(Commands::Convolve { .. })));
    }

    #[test]
    fn kernel_accepts_negative_and_comma_separated_weights() {
        let cli = parse(&["convolve", "-k", "-1", "3", "-1"]);
        let Some(Commands::Convolve { params, .. }) = cli.command else {
            panic!("expected convolve");
        };
        assert_eq!(params.kernel, Some(vec![-1.0, 3.0, -1.0]));

        let cli = parse(&["convolve", "--kernel", "1,2,1"]);
        let Some(Commands::Convolve { params, .. }) = cli.command else {
            panic!("expected convolve");
        };
        assert_eq!(params.kernel, Some(vec![1.0, 2.0, 1.0]));
    }

    #[test]
    fn files_are_read_before_positionals() {
        let cli = parse(&["kalman", "b.txt", "-f", "a.txt", "--", "-"]);
        let sources = cli.command.unwrap().common().sources();
        assert_eq!(sources, [PathBuf::from("a.txt"), PathBuf::from("b.txt"), PathBuf::from("-")]);
    }

    #[test]
    fn list_without_subcommand() {
        let cli = parse(&["--list-methodologies"]);
        assert!(cli.list_methodologies);
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn unknown_method_is_a_usage_error() {
        assert!(Cli::try_parse_from(["sigfilter", "median"]).is_err());
    }
}
