//! Dated CSV summary format.
//!
//! ```text
//! DATE, COMPANY, CHANGE
//!
//!
//! 2024-01-05
//!
//!
//! 2024-01-05, ACME, 5.250
//! ```
//!
//! Each section starts with three line breaks, the date label and two more
//! line breaks; every row is preceded by one line break. There is no
//! trailing newline.

use closesum_aggregate::Report;
use closesum_types::Observation;
use std::io::Write;

use crate::{FormatError, Formatter};

/// Header line of the summary report.
const HEADER: &str = "DATE, COMPANY, CHANGE";

/// Fractional digits of the change column.
const CHANGE_PRECISION: usize = 3;

/// CSV summary formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Whether to include the header line.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new formatter with the header enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_header: true,
        }
    }

    /// Sets whether to include the header line.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Formats one report row.
    #[must_use]
    pub fn row(obs: &Observation) -> String {
        format!("{}, {}, {}", obs.date, obs.security, format_change(obs.change))
    }
}

/// Digits needed to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 1074;

/// Formats a change with fixed precision.
///
/// Rounding is done on the exact binary value and ties go away from zero,
/// so `5.0625` prints as `5.063`. A negative value that rounds to zero
/// keeps its sign (`-0.000`); only a true zero prints unsigned.
fn format_change(change: f64) -> String {
    if change.is_nan() {
        return "NaN".to_string();
    }
    if change.is_infinite() {
        let text = if change > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let exact = format!("{:.*}", EXACT_DIGITS, change.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(CHANGE_PRECISION))
        .collect();

    if frac_part.as_bytes().get(CHANGE_PRECISION).is_some_and(|d| *d >= b'5') {
        round_up(&mut digits);
    }

    let split = digits.len() - CHANGE_PRECISION;
    let sign = if change < 0.0 { "-" } else { "" };
    let (whole, frac) = digits.split_at(split);
    format!(
        "{sign}{}.{}",
        String::from_utf8_lossy(whole),
        String::from_utf8_lossy(frac)
    )
}

/// Adds one unit in the last place of a string of ASCII digits.
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

impl Formatter for CsvFormatter {
    fn write_report<W: Write>(&self, report: &Report, mut writer: W) -> Result<(), FormatError> {
        if self.include_header {
            write!(writer, "{HEADER}")?;
        }
        for section in &report.sections {
            write!(writer, "\n\n\n{}\n\n", section.label)?;
            for obs in &section.observations {
                write!(writer, "\n{}", Self::row(obs))?;
            }
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        "csv"
    }
}
