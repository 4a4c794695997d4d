//! Conformance harness for curlshim.
//!
//! This crate provides:
//! - Library description: which libcurl the shim links, where it lives, its sha256
//! - Conformance reports: the forwarding checks from `curlshim::conformance`
//!   wrapped with a summary and rendered as JSON
//! - Per-check structured log lines

#![forbid(unsafe_code)]

pub mod library_info;
pub mod report;

pub use library_info::LibraryInfo;
pub use report::{ConformanceReport, Summary};

/// Errors surfaced by the harness binary.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
