//! Reporting Formatter
//!
//! Renders filter output either bare (one estimate per line) or as an
//! annotated table: a header naming the filter and its parameters, then one
//! row per measurement with the raw value beside its estimate.
//!
//! ```text
//! Kalman filter
//!   Distribution of estimated initial state: N(0.0,1.0²)
//!   Distribution of expected change per time unit: N(0.0,0.0²)
//!   Variance of measurements: 1.0
//! Raw:      Est.:     Var.:
//! ========  ========  ========
//!   4.0000    2.0000    0.5000
//! ```
//!
//! Everything writes through `core::fmt::Write`, so rows stream straight
//! from the estimator iterators without collecting the estimates first.

use core::fmt::{self, Write};

use crate::{
    constants::report::{FIELD_WIDTH, PRECISION},
    distribution::Normal,
    filters::{AlphaBetaConfig, Filter, KalmanConfig, Kernel, Method},
    traits::RecursiveEstimator,
};

/// Output layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// One estimate per line
    #[default]
    Bare,
    /// Header followed by raw/estimate rows
    Report,
}

/// Report header for a filter
pub struct Header<'a> {
    filter: &'a Filter,
}

impl<'a> Header<'a> {
    /// Header describing `filter`
    pub fn new(filter: &'a Filter) -> Self {
        Self { filter }
    }
}

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.filter.method().title())?;
        match self.filter {
            Filter::AlphaBeta(filter) => alpha_beta_parameters(f, filter.config())?,
            Filter::Kalman(filter) => kalman_parameters(f, filter.config())?,
            Filter::Convolution(filter) => convolution_parameters(f, filter.kernel())?,
        }
        column_titles(f, self.filter.method())
    }
}

fn alpha_beta_parameters(f: &mut fmt::Formatter<'_>, config: &AlphaBetaConfig) -> fmt::Result {
    writeln!(f, "  α={:.p$}, β={:.p$}", config.alpha, config.beta, p = PRECISION)?;
    writeln!(
        f,
        "  Initial estimate: {:.p$} changing {:.p$} per time unit",
        config.initial_state,
        config.initial_velocity,
        p = PRECISION
    )
}

fn kalman_parameters(f: &mut fmt::Formatter<'_>, config: &KalmanConfig) -> fmt::Result {
    let velocity = config.initial_velocity_distribution();
    writeln!(
        f,
        "  Distribution of estimated initial state: N({:?},{:?}²)",
        config.initial_state, config.initial_std_dev
    )?;
    writeln!(
        f,
        "  Distribution of expected change per time unit: N({:?},{:?}²)",
        velocity.mean,
        velocity.std_dev()
    )?;
    writeln!(f, "  Variance of measurements: {:?}", config.measurement_variance)
}

fn convolution_parameters(f: &mut fmt::Formatter<'_>, kernel: &Kernel) -> fmt::Result {
    writeln!(f, "  kernel={:?}", kernel.weights())
}

fn column_titles(f: &mut fmt::Formatter<'_>, method: Method) -> fmt::Result {
    let (titles, columns) = match method {
        Method::AlphaBeta => ("Actual:   Est.:", 2),
        Method::Kalman => ("Raw:      Est.:     Var.:", 3),
        Method::Convolution => ("Raw:      Est.:", 2),
    };
    writeln!(f, "{titles}")?;
    for column in 0..columns {
        if column > 0 {
            f.write_str("  ")?;
        }
        for _ in 0..FIELD_WIDTH {
            f.write_char('=')?;
        }
    }
    f.write_char('\n')
}

/// One table row, without the trailing newline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Row {
    /// Measurement and point estimate
    Scalar {
        /// Measurement
        raw: f64,
        /// Estimate
        estimate: f64,
    },
    /// Measurement, estimated mean and its variance
    Distribution {
        /// Measurement
        raw: f64,
        /// Estimated distribution
        estimate: Normal,
    },
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const W: usize = FIELD_WIDTH;
        const P: usize = PRECISION;
        match *self {
            Row::Scalar { raw, estimate } => write!(f, "{raw:W$.P$}  {estimate:W$.P$}"),
            Row::Distribution { raw, estimate } => write!(
                f,
                "{raw:W$.P$}  {:W$.P$}  {:W$.P$}",
                estimate.mean, estimate.variance
            ),
        }
    }
}

/// Write every estimate of `data` through `filter` in the given style
///
/// Rows keep input order and there is exactly one per measurement. With
/// [`Style::Bare`] the Kalman variance is omitted.
pub fn write_estimates<W: Write>(
    out: &mut W,
    filter: &Filter,
    data: &[f64],
    style: Style,
) -> fmt::Result {
    if style == Style::Report {
        write!(out, "{}", Header::new(filter))?;
    }

    match filter {
        Filter::AlphaBeta(f) => {
            let rows = data.iter().zip(f.estimates(data));
            write_scalars(out, rows, style)
        }
        Filter::Convolution(f) => {
            let rows = data.iter().zip(f.estimates(data));
            write_scalars(out, rows, style)
        }
        Filter::Kalman(f) => {
            for (&raw, estimate) in data.iter().zip(f.estimates(data)) {
                match style {
                    Style::Bare => bare(out, estimate.mean)?,
                    Style::Report => writeln!(out, "{}", Row::Distribution { raw, estimate })?,
                }
            }
            Ok(())
        }
    }
}

fn write_scalars<'a, W, I>(out: &mut W, rows: I, style: Style) -> fmt::Result
where
    W: Write,
    I: Iterator<Item = (&'a f64, f64)>,
{
    for (&raw, estimate) in rows {
        match style {
            Style::Bare => bare(out, estimate)?,
            Style::Report => writeln!(out, "{}", Row::Scalar { raw, estimate })?,
        }
    }
    Ok(())
}

fn bare<W: Write>(out: &mut W, estimate: f64) -> fmt::Result {
    writeln!(out, "{estimate:.PRECISION$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{
        AlphaBetaFilter, ConvolutionConfig, ConvolutionFilter, FilterConfig, KalmanFilter,
    };

    fn render(filter: &Filter, data: &[f64], style: Style) -> String {
        let mut out = String::new();
        write_estimates(&mut out, filter, data, style).unwrap();
        out
    }

    #[test]
    fn alpha_beta_header() {
        let filter = Filter::AlphaBeta(AlphaBetaFilter::new(AlphaBetaConfig::default()).unwrap());
        let expected = "Alpha-beta filter\n\
                        \x20 α=0.0500, β=0.0050\n\
                        \x20 Initial estimate: 0.0000 changing 0.0000 per time unit\n\
                        Actual:   Est.:\n\
                        ========  ========\n";
        assert_eq!(Header::new(&filter).to_string(), expected);
    }

    #[test]
    fn kalman_header() {
        let filter = Filter::Kalman(KalmanFilter::new(KalmanConfig::default()).unwrap());
        let expected = "Kalman filter\n\
                        \x20 Distribution of estimated initial state: N(0.0,1.0²)\n\
                        \x20 Distribution of expected change per time unit: N(0.0,0.0²)\n\
                        \x20 Variance of measurements: 1.0\n\
                        Raw:      Est.:     Var.:\n\
                        ========  ========  ========\n";
        assert_eq!(Header::new(&filter).to_string(), expected);
    }

    #[test]
    fn convolution_header_shows_normalized_kernel() {
        let config = ConvolutionConfig::new(&[1.0, 2.0, 1.0]).unwrap();
        let filter = Filter::Convolution(ConvolutionFilter::new(&config).unwrap());
        let header = Header::new(&filter).to_string();
        assert!(header.starts_with("Convolution filter\n  kernel=[0.25, 0.5, 0.25]\n"));
        assert!(header.ends_with("Raw:      Est.:\n========  ========\n"));
    }

    #[test]
    fn rows_are_right_justified() {
        let row = Row::Scalar { raw: 1.5, estimate: -12.25 };
        assert_eq!(row.to_string(), "  1.5000  -12.2500");

        let row = Row::Distribution { raw: 4.0, estimate: Normal::new(2.0, 0.5) };
        assert_eq!(row.to_string(), "  4.0000    2.0000    0.5000");
    }

    #[test]
    fn bare_output_one_value_per_line() {
        let filter = Filter::Kalman(KalmanFilter::new(KalmanConfig::default()).unwrap());
        assert_eq!(render(&filter, &[4.0], Style::Bare), "2.0000\n");
    }

    #[test]
    fn report_keeps_input_order() {
        let config = AlphaBetaConfig { alpha: 1.0, beta: 0.0, ..Default::default() };
        let filter = Filter::AlphaBeta(AlphaBetaFilter::new(config).unwrap());
        let out = render(&filter, &[3.0, 1.0, 2.0], Style::Report);
        let rows: Vec<&str> = out.lines().skip(5).collect();
        assert_eq!(rows, ["  3.0000    3.0000", "  1.0000    1.0000", "  2.0000    2.0000"]);
    }

    #[test]
    fn empty_data_prints_only_header() {
        let filter = Filter::from_config(&FilterConfig::default_for(Method::Convolution)).unwrap();
        assert_eq!(render(&filter, &[], Style::Bare), "");
        assert_eq!(render(&filter, &[], Style::Report).lines().count(), 4);
    }
}
