//! Daily closing-price change report and chart generation.
//!
//! This is a facade crate that re-exports functionality from the closesum
//! workspace crates and wires ingest and aggregation together.

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use closesum_types::*;

// Re-export snapshot ingest
#[cfg(feature = "ingest")]
pub use closesum_ingest::{
    DEFAULT_SNAPSHOT_FILE, DateFolder, FolderSnapshot, date_folders, load_snapshots,
    parse_number, parse_record, parse_snapshot,
};

// Re-export aggregation
#[cfg(feature = "aggregate")]
pub use closesum_aggregate::{
    Aggregation, Aggregator, DateSection, Report, SecuritySeries, SeriesMap, SeriesPoint,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use closesum_format::{CsvFormatter, FormatError, Formatter};

// Re-export charting
#[cfg(feature = "chart")]
pub use closesum_chart::{
    BatchReport, ChartError, ChartGeometry, ChartLayout, ChartOutcome, ChartRenderer, ChartSink,
    ChartTheme, Parallelism, PngDirectory, RasterSurface, Surface, layout, render_all, surface,
};

#[cfg(all(feature = "ingest", feature = "aggregate"))]
mod pipeline;

#[cfg(all(feature = "ingest", feature = "aggregate"))]
pub use pipeline::{aggregate_snapshots, load_and_aggregate};

/// Prelude module for convenient imports.
///
/// ```
/// use closesum_lib::prelude::*;
/// ```
pub mod prelude {
    pub use closesum_types::{
        ClosesumError, DateLabel, FolderOrder, Observation, Result, SecurityId,
    };

    #[cfg(feature = "ingest")]
    pub use closesum_ingest::{DEFAULT_SNAPSHOT_FILE, date_folders, load_snapshots};

    #[cfg(feature = "aggregate")]
    pub use closesum_aggregate::{Aggregation, Aggregator, Report, SeriesMap};

    #[cfg(feature = "format")]
    pub use closesum_format::{CsvFormatter, Formatter};

    #[cfg(feature = "chart")]
    pub use closesum_chart::{
        BatchReport, ChartRenderer, ChartSink, Parallelism, PngDirectory, render_all,
    };

    #[cfg(all(feature = "ingest", feature = "aggregate"))]
    pub use crate::pipeline::{aggregate_snapshots, load_and_aggregate};
}
