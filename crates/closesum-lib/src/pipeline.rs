//! Ingest-to-aggregate wiring.

use closesum_aggregate::{Aggregation, Aggregator};
use closesum_ingest::{FolderSnapshot, load_snapshots};
use closesum_types::{FolderOrder, Result};
use std::path::Path;

/// Folds loaded snapshots, in the given order, into a report and series.
#[must_use]
pub fn aggregate_snapshots(snapshots: impl IntoIterator<Item = FolderSnapshot>) -> Aggregation {
    let mut aggregator = Aggregator::new();
    for snapshot in snapshots {
        aggregator.push_folder(snapshot.label, snapshot.observations);
    }
    log::info!("Aggregated {} date folders", aggregator.folder_count());
    aggregator.finish()
}

/// Loads every date folder under `base` and aggregates it.
///
/// # Errors
///
/// Returns an error if the base directory or any snapshot file is missing
/// or unreadable. Nothing is aggregated in that case.
pub fn load_and_aggregate(base: &Path, file_name: &str, order: FolderOrder) -> Result<Aggregation> {
    let snapshots = load_snapshots(base, file_name, order)?;
    Ok(aggregate_snapshots(snapshots))
}
