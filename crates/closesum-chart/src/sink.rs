//! Chart persistence.

use closesum_types::SecurityId;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::layout::ChartLayout;
use crate::raster::RasterSurface;
use crate::surface::Surface;

/// File extension of written charts.
pub const CHART_EXTENSION: &str = "png";

/// Errors that can occur while persisting a chart.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The output directory could not be created.
    #[error("Failed to create chart directory {}: {source}", path.display())]
    CreateDir {
        /// Directory path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The image could not be encoded.
    #[error("Failed to encode chart {}: {source}", path.display())]
    Encode {
        /// Target file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: image::ImageError,
    },

    /// The encoded image could not be written.
    #[error("Failed to write chart {}: {source}", path.display())]
    Write {
        /// Target file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// Destination for finished charts.
///
/// A sink hands out a fresh canvas per chart and persists it once drawn.
/// Sinks are shared across rendering threads.
pub trait ChartSink: Sync {
    /// Canvas type charts are drawn on.
    type Surface: Surface;

    /// Creates a blank canvas for one chart.
    fn canvas(&self, layout: &ChartLayout) -> Self::Surface;

    /// Persists a finished chart, returning where it was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the chart cannot be encoded or written.
    fn persist(&self, id: &SecurityId, surface: Self::Surface) -> Result<PathBuf, ChartError>;
}

/// Writes charts as `<dir>/<id>.png`.
#[derive(Debug, Clone)]
pub struct PngDirectory {
    dir: PathBuf,
}

impl PngDirectory {
    /// Opens an output directory, creating it if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, ChartError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| ChartError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Returns the output directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path of a security's chart.
    #[must_use]
    pub fn path_for(&self, id: &SecurityId) -> PathBuf {
        self.dir.join(id.file_name(CHART_EXTENSION))
    }
}

impl ChartSink for PngDirectory {
    type Surface = RasterSurface;

    fn canvas(&self, layout: &ChartLayout) -> RasterSurface {
        RasterSurface::new(layout.width, layout.height)
    }

    fn persist(&self, id: &SecurityId, surface: RasterSurface) -> Result<PathBuf, ChartError> {
        let path = self.path_for(id);
        let bytes = surface.encode_png().map_err(|source| ChartError::Encode {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, bytes).map_err(|source| ChartError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
