//! The exports resolve against the libcurl chosen at build time.
//!
//! Variables set at runtime must not redirect them to another object. Kept
//! in its own test binary because it mutates the process environment.

#![cfg(unix)]

use std::ffi::CStr;

use curlshim::easy_abi::{ce_easy_cleanup, ce_easy_init, ce_easy_strerror, ce_setopt_long};
use curlshim::ffi;
use curlshim::linked;
use curlshim_core::codes::{CURLE_OK, CURLOPT_VERBOSE};

#[test]
fn runtime_environment_cannot_rebind_exports() {
    // SAFETY: this binary runs a single test; nothing reads the environment
    // concurrently.
    unsafe {
        std::env::set_var("CURLSHIM_LIBRARY", "libc.so.6");
        std::env::set_var("CURLSHIM_LOG", "trace");
        std::env::set_var("LD_LIBRARY_PATH", "/nonexistent");
    }

    let via_shim = unsafe { CStr::from_ptr(ce_easy_strerror(CURLE_OK)) };
    let via_direct = unsafe { CStr::from_ptr(ffi::curl_easy_strerror(CURLE_OK)) };
    assert_eq!(via_shim, via_direct);
    assert_eq!(via_shim.to_str().unwrap(), "No error");

    let handle = unsafe { ce_easy_init() };
    assert!(!handle.is_null());
    assert_eq!(unsafe { ce_setopt_long(handle, CURLOPT_VERBOSE, 0) }, CURLE_OK);
    unsafe { ce_easy_cleanup(handle) };

    #[cfg(target_os = "linux")]
    {
        let path = linked::library_path().expect("curl_easy_init has a defining object");
        let file = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(file.starts_with("libcurl"), "{file}");
    }
    assert!(linked::LINKED_LIBRARY.starts_with("libcurl"));
}
