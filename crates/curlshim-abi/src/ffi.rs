//! Raw libcurl declarations.
//!
//! Handles are opaque: the shim only moves their addresses around. The
//! library these resolve against is chosen at build time (see `build.rs`).

#![allow(non_camel_case_types)]

use std::ffi::{c_char, c_long};

pub use curlshim_core::codes::{CurlCode as CURLcode, CurlInfo as CURLINFO, CurlOption as CURLoption};

/// Opaque easy handle (`struct Curl_easy`).
#[repr(C)]
pub struct CURL {
    _private: [u8; 0],
}

/// Opaque header list node (`struct curl_slist`).
#[repr(C)]
pub struct curl_slist {
    _private: [u8; 0],
}

unsafe extern "C" {
    // ── Session ─────────────────────────────────────────────────
    pub fn curl_easy_init() -> *mut CURL;
    pub fn curl_easy_cleanup(handle: *mut CURL);
    pub fn curl_easy_perform(handle: *mut CURL) -> CURLcode;

    // ── Options and info (C-variadic) ───────────────────────────
    pub fn curl_easy_setopt(handle: *mut CURL, option: CURLoption, ...) -> CURLcode;
    pub fn curl_easy_getinfo(handle: *mut CURL, info: CURLINFO, ...) -> CURLcode;
    pub fn curl_easy_strerror(code: CURLcode) -> *const c_char;

    // ── Process-wide ────────────────────────────────────────────
    pub fn curl_global_init(flags: c_long) -> CURLcode;
    pub fn curl_global_cleanup();

    // ── Header lists ────────────────────────────────────────────
    pub fn curl_slist_append(list: *mut curl_slist, entry: *const c_char) -> *mut curl_slist;
    pub fn curl_slist_free_all(list: *mut curl_slist);
}

/// Present only in curl-impersonate builds.
#[cfg(curl_impersonate)]
unsafe extern "C" {
    pub fn curl_easy_impersonate(
        handle: *mut CURL,
        target: *const c_char,
        default_headers: std::ffi::c_int,
    ) -> CURLcode;
}
