//! Output format abstraction.

use closesum_aggregate::Report;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for report formatters.
pub trait Formatter: Send + Sync {
    /// Writes the report to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_report<W: Write>(&self, report: &Report, writer: W) -> Result<(), FormatError>;

    /// Renders the report into memory.
    ///
    /// # Errors
    ///
    /// Returns an error if formatting fails.
    fn render(&self, report: &Report) -> Result<Vec<u8>, FormatError> {
        let mut buf = Vec::new();
        self.write_report(report, &mut buf)?;
        Ok(buf)
    }

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
