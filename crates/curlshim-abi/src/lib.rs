//! # curlshim-abi
//!
//! Fixed-arity `extern "C"` boundary over libcurl (curl-impersonate build).
//!
//! This crate produces a `cdylib` (`libcurlshim.so`) whose export table is the
//! `ce_*` family. Each export forwards its arguments unchanged to one libcurl
//! entry point and returns that call's result, so host runtimes whose FFI
//! cannot call C-variadic functions (`curl_easy_setopt`, `curl_easy_getinfo`)
//! still reach them through typed wrappers.
//!
//! # Architecture
//!
//! ```text
//! host FFI -> ce_* export (this crate) -> libcurl (linked at build time)
//! ```
//!
//! The exports hold no state, never log and define no status codes of their
//! own. Every pointer argument is handed to libcurl untouched, so each
//! export's safety contract is that of the libcurl call it forwards to.

#![allow(clippy::missing_safety_doc)]

#[macro_use]
mod macros;

pub mod conformance;
pub mod easy_abi;
pub mod ffi;
pub mod global_abi;
pub mod linked;
pub mod slist_abi;
