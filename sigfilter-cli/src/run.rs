//! Command dispatch

use std::io::{self, Write};

use sigfilter_core::{write_estimates, Filter, Method, Style};

use crate::{
    cli::Commands,
    config,
    error::CliResult,
    input,
};

/// Line printed by `--list-methodologies`
pub fn methodologies() -> String {
    let names: Vec<&str> = Method::ALL.iter().map(|m| m.name()).collect();
    format!("Valid methodologies: {}", names.join(", "))
}

/// Run one filter command, printing its estimates to stdout
///
/// The filter is built before any input is read, so a bad parameter fails
/// the run without printing anything.
pub fn run(command: &Commands) -> CliResult<()> {
    let config = config::resolve(command)?;
    let filter = Filter::from_config(&config)?;
    log::info!("running {} filter", filter.method());

    let common = command.common();
    let (data, stats) = input::read_all(&input::sources(&common.sources()));
    if stats.parse_errors > 0 || stats.unreadable_sources > 0 {
        log::info!(
            "skipped {} of {} lines and {} unreadable sources",
            stats.parse_errors,
            stats.lines_processed,
            stats.unreadable_sources
        );
    }
    log::debug!("filtering {} measurements", stats.values_read);

    let style = if common.report { Style::Report } else { Style::Bare };
    let output = render(&filter, &data, style)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Estimates for `data` as printed text
pub fn render(filter: &Filter, data: &[f64], style: Style) -> CliResult<String> {
    let mut output = String::new();
    write_estimates(&mut output, filter, data, style)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigfilter_core::{AlphaBetaConfig, FilterConfig};

    #[test]
    fn lists_every_method() {
        assert_eq!(methodologies(), "Valid methodologies: ab, kalman, convolve");
    }

    #[test]
    fn renders_bare_estimates() {
        let config: FilterConfig =
            AlphaBetaConfig { alpha: 1.0, beta: 0.0, ..Default::default() }.into();
        let filter = Filter::from_config(&config).unwrap();
        assert_eq!(render(&filter, &[1.0, -2.5], Style::Bare).unwrap(), "1.0000\n-2.5000\n");
    }
}
