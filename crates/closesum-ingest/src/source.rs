//! Date-folder discovery and snapshot loading.

use closesum_types::{ClosesumError, DateLabel, FolderOrder, Observation, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::parse_snapshot;

/// Snapshot file name expected inside every date folder.
pub const DEFAULT_SNAPSHOT_FILE: &str = "closing11.lis";

/// A directory holding one day's closing snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFolder {
    /// Folder name, e.g. `2024-01-05_A`.
    pub name: String,
    /// Label derived from the name, e.g. `2024-01-05`.
    pub label: DateLabel,
    /// Full path of the folder.
    pub path: PathBuf,
}

impl DateFolder {
    /// Creates a date folder from its path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            label: DateLabel::from_folder_name(&name),
            name,
            path,
        }
    }

    /// Returns the path of the snapshot file inside this folder.
    #[must_use]
    pub fn snapshot_path(&self, file_name: &str) -> PathBuf {
        self.path.join(file_name)
    }

    /// Reads the snapshot file as text.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ClosesumError::MissingSnapshot`] if the file does not
    /// exist, or an I/O error if it cannot be read.
    pub fn read_snapshot(&self, file_name: &str) -> Result<String> {
        let path = self.snapshot_path(file_name);
        match fs::read(&path) {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ClosesumError::MissingSnapshot(path))
            }
            Err(e) => Err(ClosesumError::io(path, e)),
        }
    }
}

/// The parsed contents of one date folder.
#[derive(Debug, Clone)]
pub struct FolderSnapshot {
    /// Date label of the folder.
    pub label: DateLabel,
    /// Observations in file line order.
    pub observations: Vec<Observation>,
}

/// Lists the date folders under `base` in processing order.
///
/// Sub-directories are listed in ascending name order and then reordered
/// according to `order`. Entries that are not directories are skipped.
///
/// # Errors
///
/// Returns [`ClosesumError::MissingInput`] if `base` is not a directory,
/// or an I/O error if it cannot be listed.
pub fn date_folders(base: &Path, order: FolderOrder) -> Result<Vec<DateFolder>> {
    if !base.is_dir() {
        return Err(ClosesumError::MissingInput(base.to_path_buf()));
    }

    let entries = fs::read_dir(base).map_err(|e| ClosesumError::io(base, e))?;
    let mut folders = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ClosesumError::io(base, e))?.path();
        if path.is_dir() {
            folders.push(DateFolder::new(path));
        } else {
            log::warn!("Skipping non-directory entry {}", path.display());
        }
    }

    folders.sort_by(|a, b| a.name.cmp(&b.name));
    order.apply(&mut folders, |f| &f.label);
    Ok(folders)
}

/// Reads and parses the snapshot of every date folder under `base`.
///
/// Any missing or unreadable snapshot aborts the whole load.
///
/// # Errors
///
/// Returns an error if the base directory cannot be listed or any
/// snapshot file cannot be read.
pub fn load_snapshots(
    base: &Path,
    file_name: &str,
    order: FolderOrder,
) -> Result<Vec<FolderSnapshot>> {
    date_folders(base, order)?
        .into_iter()
        .map(|folder| {
            let text = folder.read_snapshot(file_name)?;
            let observations: Vec<Observation> = parse_snapshot(&text).collect();
            log::debug!(
                "Loaded {} records from {}",
                observations.len(),
                folder.name
            );
            Ok(FolderSnapshot {
                label: folder.label,
                observations,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_folder(base: &Path, name: &str, contents: &str) {
        let dir = base.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(DEFAULT_SNAPSHOT_FILE), contents).unwrap();
    }

    #[test]
    fn test_date_folders_sorted_by_name() {
        let tmp = TempDir::new().unwrap();
        write_folder(tmp.path(), "2024-01-06_B", "");
        write_folder(tmp.path(), "2024-01-05_A", "");
        fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();

        let folders = date_folders(tmp.path(), FolderOrder::Listing).unwrap();
        let names: Vec<_> = folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["2024-01-05_A", "2024-01-06_B"]);
        assert_eq!(folders[0].label.as_str(), "2024-01-05");
    }

    #[test]
    fn test_date_folders_calendar_order() {
        let tmp = TempDir::new().unwrap();
        write_folder(tmp.path(), "05-01-2024_x", "");
        write_folder(tmp.path(), "2024-01-04_x", "");
        write_folder(tmp.path(), "2023-12-29_x", "");

        let folders = date_folders(tmp.path(), FolderOrder::Calendar).unwrap();
        let labels: Vec<_> = folders.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["2023-12-29", "2024-01-04", "05-01-2024"]);
    }

    #[test]
    fn test_missing_base_directory() {
        let tmp = TempDir::new().unwrap();
        let result = date_folders(&tmp.path().join("nope"), FolderOrder::Listing);
        assert!(matches!(result, Err(ClosesumError::MissingInput(_))));
    }

    #[test]
    fn test_load_snapshots() {
        let tmp = TempDir::new().unwrap();
        write_folder(tmp.path(), "2024-01-05_A", "2024-01-05|||ABC||||101||100\n");
        write_folder(
            tmp.path(),
            "2024-01-06_B",
            "2024-01-06|||ABC||||102||100\n2024-01-06|||XYZ||||bad||100\n",
        );

        let snapshots = load_snapshots(tmp.path(), DEFAULT_SNAPSHOT_FILE, FolderOrder::Listing)
            .unwrap();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].label.as_str(), "2024-01-05");
        assert_eq!(snapshots[1].observations.len(), 2);
        assert!(snapshots[1].observations[1].is_gap());
    }

    #[test]
    fn test_missing_snapshot_aborts_load() {
        let tmp = TempDir::new().unwrap();
        write_folder(tmp.path(), "2024-01-05_A", "2024-01-05|||ABC||||101||100\n");
        fs::create_dir_all(tmp.path().join("2024-01-06_B")).unwrap();

        let result = load_snapshots(tmp.path(), DEFAULT_SNAPSHOT_FILE, FolderOrder::Listing);
        match result {
            Err(ClosesumError::MissingSnapshot(path)) => {
                assert!(path.ends_with("2024-01-06_B/closing11.lis"));
            }
            other => panic!("expected missing snapshot, got {other:?}"),
        }
    }
}
