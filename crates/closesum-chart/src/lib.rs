//! Line charts of per-security change series.
//!
//! Layout math and drawing are kept apart:
//!
//! - [`layout`] - Pure geometry: scales, gridlines, tick labels
//! - [`surface`] - The [`Surface`] drawing primitives and style types
//! - [`ChartRenderer`] - Issues one chart's primitives against a [`Surface`]
//! - [`RasterSurface`] - RGBA raster backend
//! - [`PngDirectory`] - [`ChartSink`] writing `<id>.png` files
//! - [`render_all`] - Renders a whole [`closesum_aggregate::SeriesMap`]

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod batch;
pub mod layout;
mod raster;
mod render;
mod sink;
pub mod surface;

pub use batch::{BatchReport, ChartOutcome, Parallelism, render_all};
pub use layout::{ChartGeometry, ChartLayout, PlotArea};
pub use raster::RasterSurface;
pub use render::{ChartRenderer, ChartTheme, X_CAPTION, Y_CAPTION};
pub use sink::{CHART_EXTENSION, ChartError, ChartSink, PngDirectory};
pub use surface::{Color, Surface};
