//! Display utilities and output helpers for the closesum CLI.

use anyhow::{Context, Result};
use closesum_lib::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Map the `--sort-by-date` flag to a folder order.
pub(crate) const fn folder_order(sort_by_date: bool) -> FolderOrder {
    if sort_by_date {
        FolderOrder::Calendar
    } else {
        FolderOrder::Listing
    }
}

/// Render the report as CSV and write it with a single write.
pub(crate) fn write_report(path: &Path, report: &Report) -> Result<()> {
    let bytes = CsvFormatter::new()
        .render(report)
        .context("Failed to render report")?;
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write report {}", path.display()))?;
    Ok(())
}

/// Create the chart progress bar, hidden in quiet mode.
pub(crate) fn chart_progress(total: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{prefix:.bold} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb.set_prefix("charts");
    pb
}
