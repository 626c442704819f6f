//! Snapshot discovery and record parsing for closesum.
//!
//! This crate provides the input side of the pipeline:
//!
//! - [`date_folders`] - Enumerates date folders under a base directory
//! - [`load_snapshots`] - Reads and parses every folder's snapshot file
//! - [`parse::parse_record`] - Parses one pipe-delimited record
//! - [`parse::parse_snapshot`] - Parses a whole snapshot file

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod parse;
mod source;

pub use parse::{parse_number, parse_record, parse_snapshot};
pub use source::{DEFAULT_SNAPSHOT_FILE, DateFolder, FolderSnapshot, date_folders, load_snapshots};
