//! Easy-handle exports: session lifecycle, transfer, options, info, errors
//! and impersonation.
//!
//! Every export forwards its arguments unchanged and returns the libcurl
//! result. `curl_easy_setopt` and `curl_easy_getinfo` are C-variadic; the
//! fixed-arity exports pass the trailing argument with its exact C type
//! (`long`, `void *`, `const char *`, `void **`, `long *`) so the variadic
//! callee reads the width it expects.

use std::ffi::{c_char, c_long, c_void};

use crate::ffi::{
    CURL, CURLINFO, CURLcode, CURLoption, curl_easy_cleanup, curl_easy_getinfo, curl_easy_init,
    curl_easy_perform, curl_easy_setopt, curl_easy_strerror,
};

// ---------------------------------------------------------------------------
// Session lifecycle
// ---------------------------------------------------------------------------

shim_fn! {
    /// `curl_easy_init`. Null on allocation failure.
    fn ce_easy_init() -> *mut CURL {
        curl_easy_init()
    }
}

shim_fn! {
    /// `curl_easy_cleanup`. Null is a no-op per libcurl.
    fn ce_easy_cleanup(handle: *mut CURL) {
        curl_easy_cleanup(handle)
    }
}

shim_fn! {
    /// `curl_easy_perform`. Blocks for the whole transfer.
    fn ce_easy_perform(handle: *mut CURL) -> CURLcode {
        curl_easy_perform(handle)
    }
}

// ---------------------------------------------------------------------------
// curl_easy_setopt
// ---------------------------------------------------------------------------

shim_fn! {
    /// `curl_easy_setopt` for `CURLOPTTYPE_LONG` options.
    fn ce_setopt_long(handle: *mut CURL, option: CURLoption, value: c_long) -> CURLcode {
        curl_easy_setopt(handle, option, value)
    }
}

shim_fn! {
    /// `curl_easy_setopt` for pointer options (data, callbacks, header lists).
    fn ce_setopt_ptr(handle: *mut CURL, option: CURLoption, value: *mut c_void) -> CURLcode {
        curl_easy_setopt(handle, option, value)
    }
}

shim_fn! {
    /// `curl_easy_setopt` for string options.
    ///
    /// libcurl copies most strings; the caller keeps `value` alive for the
    /// options documented as not copied.
    fn ce_setopt_str(handle: *mut CURL, option: CURLoption, value: *const c_char) -> CURLcode {
        curl_easy_setopt(handle, option, value)
    }
}

// ---------------------------------------------------------------------------
// curl_easy_getinfo
// ---------------------------------------------------------------------------

shim_fn! {
    /// `curl_easy_getinfo` for string, list and pointer infos.
    fn ce_easy_getinfo_ptr(handle: *mut CURL, info: CURLINFO, out: *mut *mut c_void) -> CURLcode {
        curl_easy_getinfo(handle, info, out)
    }
}

shim_fn! {
    /// `curl_easy_getinfo` for `long` infos.
    fn ce_easy_getinfo_long(handle: *mut CURL, info: CURLINFO, out: *mut c_long) -> CURLcode {
        curl_easy_getinfo(handle, info, out)
    }
}

// ---------------------------------------------------------------------------
// Errors and impersonation
// ---------------------------------------------------------------------------

shim_fn! {
    /// `curl_easy_strerror`. The string is owned by libcurl; never free it.
    fn ce_easy_strerror(code: CURLcode) -> *const c_char {
        curl_easy_strerror(code)
    }
}

// Only built when the linked library is a curl-impersonate build.
#[cfg(curl_impersonate)]
shim_fn! {
    /// `curl_easy_impersonate`.
    fn ce_easy_impersonate(
        handle: *mut CURL,
        target: *const c_char,
        default_headers: std::ffi::c_int,
    ) -> CURLcode {
        crate::ffi::curl_easy_impersonate(handle, target, default_headers)
    }
}
