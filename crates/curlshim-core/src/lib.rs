//! # curlshim-core
//!
//! Safe, platform-independent pieces shared by the curlshim crates: libcurl
//! code tables and the structured JSONL log format used by the harness.
//!
//! Nothing here calls into the wrapped library. No `unsafe` code is permitted
//! at the crate level.

#![deny(unsafe_code)]

pub mod codes;
pub mod structured_log;

pub use codes::{InfoKind, OptionKind};
