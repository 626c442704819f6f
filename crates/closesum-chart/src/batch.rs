//! Rendering every series of a [`SeriesMap`].
//!
//! Charts are independent, so they are drawn on the rayon pool by default.
//! A failed chart is reported in its [`ChartOutcome`] and does not stop the
//! others.

use closesum_aggregate::{SecuritySeries, SeriesMap};
use closesum_types::SecurityId;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::render::ChartRenderer;
use crate::sink::{ChartError, ChartSink};

/// How charts of a batch are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Parallelism {
    /// Draw charts concurrently on the rayon pool.
    #[default]
    Parallel,
    /// Draw charts one after another in identifier order.
    Sequential,
}

/// Result of rendering one security's chart.
#[derive(Debug)]
pub struct ChartOutcome {
    /// Security the chart belongs to.
    pub id: SecurityId,
    /// Written path, or the reason the chart was not written.
    pub result: Result<PathBuf, ChartError>,
}

impl ChartOutcome {
    /// Returns true if the chart was written.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a batch, in identifier order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One outcome per series.
    pub outcomes: Vec<ChartOutcome>,
}

impl BatchReport {
    /// Iterates over the paths of written charts.
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(PathBuf::as_path))
    }

    /// Iterates over failed charts.
    pub fn failures(&self) -> impl Iterator<Item = (&SecurityId, &ChartError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (&o.id, e)))
    }

    /// Returns the number of failed charts.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Returns true if every chart was written.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(ChartOutcome::is_ok)
    }
}

/// Renders and persists one chart per series.
///
/// `on_chart` is called once per finished chart, possibly from several
/// threads at once.
pub fn render_all<K, F>(
    series: &SeriesMap,
    renderer: &ChartRenderer,
    sink: &K,
    parallelism: Parallelism,
    on_chart: F,
) -> BatchReport
where
    K: ChartSink,
    F: Fn(&ChartOutcome) + Sync,
{
    let draw = |s: &SecuritySeries| {
        let outcome = render_one(s, renderer, sink);
        on_chart(&outcome);
        outcome
    };

    let items: Vec<&SecuritySeries> = series.iter().collect();
    let outcomes: Vec<ChartOutcome> = match parallelism {
        Parallelism::Parallel => items.into_par_iter().map(draw).collect(),
        Parallelism::Sequential => items.into_iter().map(draw).collect(),
    };

    let report = BatchReport { outcomes };
    log::info!(
        "Rendered {} of {} charts",
        report.outcomes.len() - report.failure_count(),
        report.outcomes.len()
    );
    report
}

fn render_one<K: ChartSink>(
    series: &SecuritySeries,
    renderer: &ChartRenderer,
    sink: &K,
) -> ChartOutcome {
    let mut surface = sink.canvas(renderer.layout());
    renderer.render(series, &mut surface);
    let result = sink.persist(&series.id, surface);
    match &result {
        Ok(path) => log::debug!("Wrote chart {}", path.display()),
        Err(e) => log::error!("Chart for {} failed: {e}", series.id),
    }
    ChartOutcome {
        id: series.id.clone(),
        result,
    }
}
