//! Error types for closesum.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for closesum operations.
pub type Result<T> = std::result::Result<T, ClosesumError>;

/// Errors that can occur while loading snapshot data.
#[derive(Error, Debug)]
pub enum ClosesumError {
    /// The snapshot base directory does not exist or is not a directory.
    #[error("Input directory not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// A date folder has no snapshot file.
    #[error("Snapshot file missing: {}", .0.display())]
    MissingSnapshot(PathBuf),

    /// I/O error on a specific path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The path being read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl ClosesumError {
    /// Wraps an I/O error with the path it occurred on.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
