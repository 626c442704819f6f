//! CLI command implementations.

pub(crate) mod list;
pub(crate) mod run;
