//! Identity of the libcurl this crate was linked against.

use std::path::PathBuf;

/// Library chosen by the build script, e.g. `libcurl-impersonate-chrome`.
pub const LINKED_LIBRARY: &str = env!("CURLSHIM_LINKED_LIBRARY");

/// Whether `ce_easy_impersonate` is part of this build.
pub const IMPERSONATE: bool = cfg!(curl_impersonate);

/// Filesystem path of the loaded object that defines `curl_easy_init`.
#[cfg(unix)]
#[must_use]
pub fn library_path() -> Option<PathBuf> {
    use std::ffi::{CStr, c_void};
    use std::os::unix::ffi::OsStrExt;

    let addr = crate::ffi::curl_easy_init as *const c_void;
    // SAFETY: Dl_info is plain data; zeroed is a valid initial state.
    let mut info: libc::Dl_info = unsafe { std::mem::zeroed() };
    // SAFETY: info is a valid out-pointer for the duration of the call.
    let rc = unsafe { libc::dladdr(addr, &mut info) };
    if rc == 0 || info.dli_fname.is_null() {
        return None;
    }
    // SAFETY: dladdr returned a NUL-terminated name owned by the loader.
    let name = unsafe { CStr::from_ptr(info.dli_fname) };
    Some(PathBuf::from(std::ffi::OsStr::from_bytes(name.to_bytes())))
}

#[cfg(not(unix))]
#[must_use]
pub fn library_path() -> Option<PathBuf> {
    None
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;

    #[test]
    fn linked_library_is_a_curl_build() {
        assert!(LINKED_LIBRARY.starts_with("libcurl"), "{LINKED_LIBRARY}");
        assert_eq!(IMPERSONATE, LINKED_LIBRARY.contains("impersonate"));
    }

    #[test]
    fn library_path_points_at_loaded_libcurl() {
        let path = library_path().expect("dladdr resolves curl_easy_init");
        assert!(path.exists(), "{} does not exist", path.display());
        let file = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(file.starts_with("libcurl"), "{file}");
    }
}
