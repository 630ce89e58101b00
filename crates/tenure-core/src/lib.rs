//! Core types, configuration, and error handling for the tenure workspace.
//!
//! This crate provides the shared foundation used by the other tenure crates:
//! - [`TenureError`] — unified error type using `thiserror`
//! - [`TenureConfig`] — configuration loaded from `.tenure.toml`
//! - [`RepoSummary`] — the per-repository statistics record and its CSV contract

mod config;
mod error;
mod types;

pub use config::{ReportConfig, ScanConfig, TenureConfig};
pub use error::TenureError;
pub use types::{RepoSummary, CSV_HEADER};

/// A convenience `Result` type for tenure operations.
pub type Result<T> = std::result::Result<T, TenureError>;
