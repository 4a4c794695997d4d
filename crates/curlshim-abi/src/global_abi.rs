//! Process-wide init/cleanup exports.
//!
//! Not safe to race with any other libcurl call; that contract is libcurl's.

use std::ffi::c_long;

use crate::ffi::{CURLcode, curl_global_cleanup, curl_global_init};

shim_fn! {
    /// `curl_global_init` with a `CURL_GLOBAL_*` bitmask.
    fn ce_global_init(flags: c_long) -> CURLcode {
        curl_global_init(flags)
    }
}

shim_fn! {
    /// `curl_global_cleanup`.
    fn ce_global_cleanup() {
        curl_global_cleanup()
    }
}
