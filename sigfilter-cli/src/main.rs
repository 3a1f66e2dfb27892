//! sigfilter: smooth noisy scalar measurements
//!
//! ```text
//! sigfilter kalman -v 0.5 -r readings.txt
//! seq 1 10 | sigfilter ab -a 0.5 -b 0.1
//! sigfilter convolve -k 1 2 1 -f readings.txt
//! ```

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use env_logger::Env;

mod cli;
mod config;
mod error;
mod input;
mod run;

use cli::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too, on stdout
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level)).init();

    if cli.list_methodologies {
        println!("{}", run::methodologies());
        return ExitCode::SUCCESS;
    }

    let Some(command) = &cli.command else {
        eprintln!("{}", Cli::command().render_usage());
        eprintln!("Try `sigfilter --list-methodologies` and `sigfilter METHOD --help`");
        return ExitCode::FAILURE;
    };

    match run::run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("sigfilter: {err}");
            ExitCode::FAILURE
        }
    }
}
