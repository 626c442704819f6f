//! List command implementation.
//!
//! This module prints the date folders a run would process, in order.

use anyhow::{Context, Result};
use closesum_lib::prelude::*;
use std::path::Path;

/// List date folders under `input` in processing order.
pub(crate) fn list_folders(input: &Path, order: FolderOrder) -> Result<()> {
    let folders = date_folders(input, order)
        .with_context(|| format!("Failed to list {}", input.display()))?;

    if folders.is_empty() {
        println!("No date folders found.");
        return Ok(());
    }

    println!("{:<12} {:<30}", "LABEL", "FOLDER");
    println!("{}", "-".repeat(43));

    for folder in &folders {
        println!("{:<12} {:<30}", folder.label, folder.name);
    }

    println!("\nTotal: {} folders", folders.len());
    Ok(())
}
