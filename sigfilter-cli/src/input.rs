//! Measurement input
//!
//! Reads one number per line from files or stdin. Bad input never stops a
//! run: unreadable sources and lines that are not numbers are reported as
//! warnings and skipped, so the filters only ever see finite values.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

/// Counters for one acquisition pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReadStats {
    /// Non-blank lines seen
    pub lines_processed: usize,
    /// Measurements accepted
    pub values_read: usize,
    /// Lines that were not numbers
    pub parse_errors: usize,
    /// Files that could not be opened or read to the end
    pub unreadable_sources: usize,
}

/// Where measurements come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl Source {
    /// `-` means stdin
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Source::Stdin
        } else {
            Source::File(path.to_path_buf())
        }
    }
}

/// Sources for the given paths, stdin when there are none
pub fn sources(paths: &[PathBuf]) -> Vec<Source> {
    if paths.is_empty() {
        return vec![Source::Stdin];
    }
    paths.iter().map(|p| Source::from_path(p)).collect()
}

/// Read every source in order
pub fn read_all(sources: &[Source]) -> (Vec<f64>, ReadStats) {
    let mut data = Vec::new();
    let mut stats = ReadStats::default();

    for source in sources {
        match source {
            Source::Stdin => {
                let stdin = io::stdin();
                if let Err(err) = read_lines(stdin.lock(), &mut data, &mut stats) {
                    log::warn!("invalid file '-': {err}");
                    stats.unreadable_sources += 1;
                }
            }
            Source::File(path) => {
                let result = File::open(path)
                    .and_then(|file| read_lines(BufReader::new(file), &mut data, &mut stats));
                if let Err(err) = result {
                    log::warn!("invalid file '{}': {err}", path.display());
                    stats.unreadable_sources += 1;
                }
            }
        }
    }

    log::debug!("input: {stats:?}");
    (data, stats)
}

/// Append every number in `reader` to `data`
///
/// Values read before an I/O error are kept.
pub fn read_lines<R: BufRead>(
    reader: R,
    data: &mut Vec<f64>,
    stats: &mut ReadStats,
) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        stats.lines_processed += 1;

        match parse_measurement(line) {
            Some(value) => {
                data.push(value);
                stats.values_read += 1;
            }
            None => {
                log::warn!("cannot convert '{line}' into numeric value");
                stats.parse_errors += 1;
            }
        }
    }
    Ok(())
}

/// Finite number on a trimmed line
fn parse_measurement(line: &str) -> Option<f64> {
    line.parse::<f64>().ok().filter(|v| v.is_finite())
}
