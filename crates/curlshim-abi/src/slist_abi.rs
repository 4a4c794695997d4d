//! Header list exports.

use std::ffi::c_char;

use crate::ffi::{curl_slist, curl_slist_append, curl_slist_free_all};

shim_fn! {
    /// `curl_slist_append`. Pass null to start a list; keep the returned head.
    /// Null means the append failed and `list` is unchanged.
    fn ce_slist_append(list: *mut curl_slist, entry: *const c_char) -> *mut curl_slist {
        curl_slist_append(list, entry)
    }
}

shim_fn! {
    /// `curl_slist_free_all`. Releases the whole chain; null is a no-op.
    fn ce_slist_free_all(list: *mut curl_slist) {
        curl_slist_free_all(list)
    }
}
