//! Core types for the closesum closing-snapshot pipeline.
//!
//! This crate provides the data structures shared by every stage:
//!
//! - [`Observation`] - One parsed snapshot record with its derived change
//! - [`SecurityId`] - Sanitized security identifier used as series key and file stem
//! - [`DateLabel`] - Date label derived from a snapshot folder name
//! - [`FolderOrder`] - Processing order for date folders

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_label;
mod error;
mod observation;
mod security;

pub use date_label::{DateLabel, FolderOrder};
pub use error::{ClosesumError, Result};
pub use observation::Observation;
pub use security::SecurityId;
