//! Run command implementation.
//!
//! Loads every date folder, writes the summary report, then renders one
//! chart per security. Chart failures do not stop the batch; they are
//! summarised at the end and turn the exit status into an error.

use crate::display::{chart_progress, write_report};
use anyhow::{Context, Result, bail};
use closesum_lib::prelude::*;
use std::path::PathBuf;

/// Options of the run command.
pub(crate) struct RunOptions {
    pub(crate) input: PathBuf,
    pub(crate) file: String,
    pub(crate) report: PathBuf,
    pub(crate) charts_dir: PathBuf,
    pub(crate) order: FolderOrder,
    pub(crate) sequential: bool,
    pub(crate) quiet: bool,
}

/// Execute the run command.
pub(crate) fn run(opts: &RunOptions) -> Result<()> {
    // 1. Load and aggregate all folders; any missing input aborts here
    let Aggregation { report, series } = load_and_aggregate(&opts.input, &opts.file, opts.order)
        .with_context(|| format!("Failed to load snapshots from {}", opts.input.display()))?;

    // 2. Write the report before any chart work
    write_report(&opts.report, &report)?;
    log::info!(
        "Wrote {} rows to {}",
        report.observation_count(),
        opts.report.display()
    );

    // 3. Render charts
    let sink = PngDirectory::create(&opts.charts_dir)?;
    let parallelism = if opts.sequential {
        Parallelism::Sequential
    } else {
        Parallelism::Parallel
    };

    let progress = chart_progress(series.len(), opts.quiet);
    let batch = render_all(
        &series,
        &ChartRenderer::default(),
        &sink,
        parallelism,
        |_| progress.inc(1),
    );
    progress.finish_and_clear();

    // 4. Report summary
    let failures = batch.failure_count();
    let total = batch.outcomes.len();

    if !opts.quiet {
        println!("Run complete:");
        println!("  Folders: {}", report.sections.len());
        println!("  Report: {}", opts.report.display());
        println!("  Charts written: {}", total - failures);
        if failures > 0 {
            println!("  Failed: {failures}");
            for (i, (id, err)) in batch.failures().enumerate() {
                println!("    {}: {id}: {err}", i + 1);
            }
        }
    }

    // Return error if any chart failed
    if failures > 0 {
        bail!("{failures} out of {total} charts failed");
    }

    Ok(())
}
