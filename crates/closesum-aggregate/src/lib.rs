//! Per-security time series aggregation for closesum.
//!
//! This crate folds observations into the two pipeline outputs:
//!
//! - [`Report`] - Flat report, one [`DateSection`] per date folder
//! - [`SeriesMap`] - Ordered mapping from security to [`SecuritySeries`]
//! - [`Aggregator`] - Folder-by-folder accumulator producing both

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod report;
mod series;

pub use aggregator::{Aggregation, Aggregator};
pub use report::{DateSection, Report};
pub use series::{SecuritySeries, SeriesMap, SeriesPoint};
