//! Forwarding-fidelity checks.
//!
//! Each check drives the `ce_*` exports and libcurl's own entry points with
//! identical arguments and compares what comes back. The harness binary and
//! the integration tests both run these.

use std::ffi::{CStr, CString, c_char, c_long, c_void};
use std::ptr;

use curlshim_core::codes::{
    CURL_GLOBAL_DEFAULT, CURLE_BAD_FUNCTION_ARGUMENT, CURLE_OK, CURLINFO_EFFECTIVE_URL,
    CURLINFO_PRIVATE, CURLINFO_REDIRECT_COUNT, CURLINFO_RESPONSE_CODE, CURLOPT_FOLLOWLOCATION,
    CURLOPT_HTTPHEADER, CURLOPT_NOSIGNAL, CURLOPT_PRIVATE, CURLOPT_TIMEOUT, CURLOPT_URL,
    CURLOPT_USERAGENT, CURLOPT_VERBOSE, CurlInfo, CurlOption,
};
use curlshim_core::structured_log::Outcome;
use curlshim_core::{InfoKind, OptionKind};
use serde::Serialize;

use crate::easy_abi::{
    ce_easy_cleanup, ce_easy_getinfo_long, ce_easy_getinfo_ptr, ce_easy_init, ce_easy_perform,
    ce_easy_strerror, ce_setopt_long, ce_setopt_ptr, ce_setopt_str,
};
use crate::ffi::{self, CURL, CURLcode, curl_slist};
use crate::global_abi::{ce_global_cleanup, ce_global_init};
use crate::slist_abi::{ce_slist_append, ce_slist_free_all};

/// An option id inside the `long` range that libcurl does not define.
pub const UNDEFINED_LONG_OPTION: CurlOption = 9_999;

/// A URL whose scheme no libcurl build supports, so `perform` fails without
/// touching the network.
pub const UNSUPPORTED_SCHEME_URL: &CStr = c"curlshim-nonexistent-scheme://localhost/";

/// Tunables for [`run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConformanceOptions {
    /// Impersonation target passed to `ce_easy_impersonate`.
    pub target: String,
    /// Create/destroy cycles in the session check.
    pub sessions: usize,
    /// Entries in the largest header list.
    pub headers: usize,
}

impl Default for ConformanceOptions {
    fn default() -> Self {
        Self {
            target: "chrome116".to_string(),
            sessions: 16,
            headers: 100,
        }
    }
}

/// Result of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub outcome: Outcome,
    pub symbols: Vec<&'static str>,
    pub detail: String,
}

impl CheckResult {
    fn new(name: &'static str, symbols: &[&'static str], (outcome, detail): Verdict) -> Self {
        Self {
            name,
            outcome,
            symbols: symbols.to_vec(),
            detail,
        }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Pass
    }
}

type Verdict = (Outcome, String);
type Check = fn(&ConformanceOptions) -> Verdict;

fn pass(detail: impl Into<String>) -> Verdict {
    (Outcome::Pass, detail.into())
}

fn fail(detail: impl Into<String>) -> Verdict {
    (Outcome::Fail, detail.into())
}

#[cfg(not(curl_impersonate))]
fn skip(detail: impl Into<String>) -> Verdict {
    (Outcome::Skip, detail.into())
}

const CHECKS: &[(&str, &[&str], Check)] = &[
    ("setopt_long", &["ce_setopt_long"], check_setopt_long),
    ("setopt_str", &["ce_setopt_str"], check_setopt_str),
    ("setopt_ptr", &["ce_setopt_ptr"], check_setopt_ptr),
    ("session_lifecycle", &["ce_easy_init", "ce_easy_cleanup"], check_sessions),
    ("perform", &["ce_easy_perform"], check_perform),
    ("header_lists", &["ce_slist_append", "ce_slist_free_all"], check_header_lists),
    ("strerror", &["ce_easy_strerror"], check_strerror),
    ("getinfo_long", &["ce_easy_getinfo_long"], check_getinfo_long),
    ("getinfo_ptr", &["ce_easy_getinfo_ptr"], check_getinfo_ptr),
    ("global_cycle", &["ce_global_init", "ce_global_cleanup"], check_global_cycle),
    ("impersonate", &["ce_easy_impersonate"], check_impersonate),
];

/// Names of every check, in run order.
#[must_use]
pub fn check_names() -> Vec<&'static str> {
    CHECKS.iter().map(|&(name, _, _)| name).collect()
}

/// Run every check.
///
/// Must not run concurrently with other libcurl users: the global cycle check
/// calls `curl_global_cleanup`.
#[must_use]
pub fn run(options: &ConformanceOptions) -> Vec<CheckResult> {
    CHECKS
        .iter()
        .map(|&(name, symbols, check)| CheckResult::new(name, symbols, check(options)))
        .collect()
}

// ---------------------------------------------------------------------------
// Session pairs
// ---------------------------------------------------------------------------

/// One handle driven through the exports and one driven directly.
struct Pair {
    shim: *mut CURL,
    direct: *mut CURL,
}

impl Pair {
    fn new() -> Option<Self> {
        // SAFETY: plain constructor calls with no arguments.
        let (shim, direct) = unsafe { (ce_easy_init(), ffi::curl_easy_init()) };
        if shim.is_null() || direct.is_null() {
            // SAFETY: cleanup of null is a no-op in libcurl.
            unsafe {
                ce_easy_cleanup(shim);
                ffi::curl_easy_cleanup(direct);
            }
            return None;
        }
        Some(Self { shim, direct })
    }
}

impl Drop for Pair {
    fn drop(&mut self) {
        // SAFETY: both handles came from easy_init and are released once.
        unsafe {
            ce_easy_cleanup(self.shim);
            ffi::curl_easy_cleanup(self.direct);
        }
    }
}

fn compare(label: &str, shim: CURLcode, direct: CURLcode, mismatches: &mut Vec<String>) {
    if shim != direct {
        mismatches.push(format!("{label}: shim={shim} direct={direct}"));
    }
}

// Cases must go through the export whose argument type matches the id.
fn option_fits(option: CurlOption, export: &str, mismatches: &mut Vec<String>) -> bool {
    let fits = OptionKind::of(option).setters().contains(&export);
    if !fits {
        mismatches.push(format!("option {option} is not carried by {export}"));
    }
    fits
}

fn info_fits(info: CurlInfo, export: &str, mismatches: &mut Vec<String>) -> bool {
    let fits = InfoKind::of(info).getter() == Some(export);
    if !fits {
        mismatches.push(format!("info {info:#x} is not carried by {export}"));
    }
    fits
}

fn verdict(cases: usize, mismatches: Vec<String>) -> Verdict {
    if mismatches.is_empty() {
        pass(format!("{cases} cases matched"))
    } else {
        fail(mismatches.join("; "))
    }
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

fn check_setopt_long(_: &ConformanceOptions) -> Verdict {
    let cases: [(CurlOption, c_long); 5] = [
        (CURLOPT_VERBOSE, 0),
        (CURLOPT_FOLLOWLOCATION, 1),
        (CURLOPT_TIMEOUT, 30),
        (CURLOPT_NOSIGNAL, 1),
        (UNDEFINED_LONG_OPTION, 1),
    ];
    let Some(pair) = Pair::new() else {
        return fail("easy_init returned null");
    };

    let mut mismatches = Vec::new();
    for (option, value) in cases {
        if !option_fits(option, "ce_setopt_long", &mut mismatches) {
            continue;
        }
        // SAFETY: both handles are live; long options take a long.
        let (shim, direct) = unsafe {
            (
                ce_setopt_long(pair.shim, option, value),
                ffi::curl_easy_setopt(pair.direct, option, value),
            )
        };
        compare(&format!("option {option}={value}"), shim, direct, &mut mismatches);
    }
    verdict(cases.len(), mismatches)
}

fn check_setopt_str(_: &ConformanceOptions) -> Verdict {
    let cases: [(CurlOption, &CStr); 3] = [
        (CURLOPT_URL, c"https://example.com/"),
        (CURLOPT_USERAGENT, c"curlshim-conformance/1"),
        (CURLOPT_URL, UNSUPPORTED_SCHEME_URL),
    ];
    let Some(pair) = Pair::new() else {
        return fail("easy_init returned null");
    };

    let mut mismatches = Vec::new();
    for (option, value) in cases {
        if !option_fits(option, "ce_setopt_str", &mut mismatches) {
            continue;
        }
        // SAFETY: both handles are live; libcurl copies these string options.
        let (shim, direct) = unsafe {
            (
                ce_setopt_str(pair.shim, option, value.as_ptr()),
                ffi::curl_easy_setopt(pair.direct, option, value.as_ptr()),
            )
        };
        compare(&format!("option {option}={value:?}"), shim, direct, &mut mismatches);
    }
    verdict(cases.len(), mismatches)
}

fn check_setopt_ptr(_: &ConformanceOptions) -> Verdict {
    let Some(pair) = Pair::new() else {
        return fail("easy_init returned null");
    };

    let mut marker = 0u64;
    let marker_ptr = (&raw mut marker).cast::<c_void>();
    // SAFETY: entry is NUL-terminated; libcurl copies it.
    let headers = unsafe { ffi::curl_slist_append(ptr::null_mut(), c"X-Curlshim: 1".as_ptr()) };
    let cases: [(CurlOption, *mut c_void); 3] = [
        (CURLOPT_PRIVATE, marker_ptr),
        (CURLOPT_HTTPHEADER, headers.cast::<c_void>()),
        (CURLOPT_HTTPHEADER, ptr::null_mut()),
    ];

    let mut mismatches = Vec::new();
    for (option, value) in cases {
        if !option_fits(option, "ce_setopt_ptr", &mut mismatches) {
            continue;
        }
        // SAFETY: both handles are live; the pointees outlive every use because
        // the header option is reset to null before the list is freed.
        let (shim, direct) = unsafe {
            (
                ce_setopt_ptr(pair.shim, option, value),
                ffi::curl_easy_setopt(pair.direct, option, value),
            )
        };
        compare(&format!("option {option}={value:p}"), shim, direct, &mut mismatches);
    }
    drop(pair);
    // SAFETY: no handle references the list any more.
    unsafe { ffi::curl_slist_free_all(headers) };
    verdict(cases.len(), mismatches)
}

fn check_sessions(options: &ConformanceOptions) -> Verdict {
    for cycle in 0..options.sessions {
        // SAFETY: the handle is released immediately and never reused.
        let handle = unsafe { ce_easy_init() };
        if handle.is_null() {
            return fail(format!("null handle on cycle {cycle}"));
        }
        unsafe { ce_easy_cleanup(handle) };
    }
    // SAFETY: libcurl documents cleanup of null as a no-op.
    unsafe { ce_easy_cleanup(ptr::null_mut()) };
    pass(format!("{} init/cleanup cycles and a null cleanup", options.sessions))
}

fn check_perform(_: &ConformanceOptions) -> Verdict {
    let Some(pair) = Pair::new() else {
        return fail("easy_init returned null");
    };
    // SAFETY: both handles are live; the URL is copied by libcurl.
    let (shim, direct) = unsafe {
        ce_setopt_str(pair.shim, CURLOPT_URL, UNSUPPORTED_SCHEME_URL.as_ptr());
        ffi::curl_easy_setopt(pair.direct, CURLOPT_URL, UNSUPPORTED_SCHEME_URL.as_ptr());
        (
            ce_easy_perform(pair.shim),
            ffi::curl_easy_perform(pair.direct),
        )
    };
    if shim != direct {
        return fail(format!("shim={shim} direct={direct}"));
    }
    if shim == CURLE_OK {
        return fail("unsupported scheme reported success");
    }
    pass(format!("both returned {shim}"))
}

/// Build a list of `count` entries through the exports and free it.
///
/// Returns the number of entries appended before a failure, if any.
pub fn append_and_free(count: usize) -> Result<(), usize> {
    let mut list: *mut curl_slist = ptr::null_mut();
    for i in 0..count {
        let Ok(entry) = CString::new(format!("X-Curlshim-{i}: {i}")) else {
            return Err(i);
        };
        // SAFETY: list is null or a head returned by a previous append.
        let next = unsafe { ce_slist_append(list, entry.as_ptr()) };
        if next.is_null() {
            // SAFETY: list is still the valid head on append failure.
            unsafe { ce_slist_free_all(list) };
            return Err(i);
        }
        list = next;
    }
    // SAFETY: list is null or a head built above, freed exactly once.
    unsafe { ce_slist_free_all(list) };
    Ok(())
}

fn check_header_lists(options: &ConformanceOptions) -> Verdict {
    let sizes = [0, 1, options.headers];
    for size in sizes {
        if let Err(appended) = append_and_free(size) {
            return fail(format!("append failed after {appended} of {size} entries"));
        }
    }
    pass(format!("lists of {sizes:?} entries"))
}

/// Read a libcurl-owned string.
///
/// # Safety
///
/// `ptr` must be null or a NUL-terminated string that stays valid.
unsafe fn owned_text(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: non-null and NUL-terminated per the caller.
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

fn check_strerror(_: &ConformanceOptions) -> Verdict {
    let mut texts = Vec::new();
    for code in [CURLE_OK, CURLE_BAD_FUNCTION_ARGUMENT] {
        // SAFETY: strerror returns static library-owned strings.
        let (shim, direct) = unsafe {
            (
                owned_text(ce_easy_strerror(code)),
                owned_text(ffi::curl_easy_strerror(code)),
            )
        };
        match (shim, direct) {
            (Some(shim), Some(direct)) if shim == direct => texts.push(shim),
            (shim, direct) => {
                return fail(format!("code {code}: shim={shim:?} direct={direct:?}"));
            }
        }
    }
    if texts[0] == texts[1] {
        return fail("success and failure share one description");
    }
    pass(format!("{:?} / {:?}", texts[0], texts[1]))
}

fn check_getinfo_long(_: &ConformanceOptions) -> Verdict {
    let Some(pair) = Pair::new() else {
        return fail("easy_init returned null");
    };
    let cases = [CURLINFO_RESPONSE_CODE, CURLINFO_REDIRECT_COUNT];

    let mut mismatches = Vec::new();
    for info in cases {
        if !info_fits(info, "ce_easy_getinfo_long", &mut mismatches) {
            continue;
        }
        let mut shim_value: c_long = -1;
        let mut direct_value: c_long = -2;
        // SAFETY: handle is live; both slots are valid longs.
        let (shim, direct) = unsafe {
            (
                ce_easy_getinfo_long(pair.shim, info, &raw mut shim_value),
                ffi::curl_easy_getinfo(pair.shim, info, &raw mut direct_value),
            )
        };
        compare(&format!("info {info:#x}"), shim, direct, &mut mismatches);
        if shim_value != direct_value {
            mismatches.push(format!(
                "info {info:#x}: shim wrote {shim_value}, direct wrote {direct_value}"
            ));
        }
    }
    verdict(cases.len(), mismatches)
}

fn check_getinfo_ptr(_: &ConformanceOptions) -> Verdict {
    let Some(pair) = Pair::new() else {
        return fail("easy_init returned null");
    };
    let mut marker = 0u32;
    let marker_ptr = (&raw mut marker).cast::<c_void>();
    // SAFETY: handle is live; the marker outlives the handle.
    let set = unsafe { ce_setopt_ptr(pair.shim, CURLOPT_PRIVATE, marker_ptr) };
    if set != CURLE_OK {
        return fail(format!("CURLOPT_PRIVATE rejected: {set}"));
    }
    let cases = [CURLINFO_PRIVATE, CURLINFO_EFFECTIVE_URL];

    let mut mismatches = Vec::new();
    for info in cases {
        if !info_fits(info, "ce_easy_getinfo_ptr", &mut mismatches) {
            continue;
        }
        let mut shim_value: *mut c_void = ptr::null_mut();
        let mut direct_value: *mut c_void = ptr::dangling_mut::<u8>().cast();
        // SAFETY: handle is live; both slots are valid pointer slots.
        let (shim, direct) = unsafe {
            (
                ce_easy_getinfo_ptr(pair.shim, info, &raw mut shim_value),
                ffi::curl_easy_getinfo(pair.shim, info, &raw mut direct_value),
            )
        };
        compare(&format!("info {info:#x}"), shim, direct, &mut mismatches);
        if shim_value != direct_value {
            mismatches.push(format!(
                "info {info:#x}: shim wrote {shim_value:p}, direct wrote {direct_value:p}"
            ));
        }
        if info == CURLINFO_PRIVATE && shim_value != marker_ptr {
            mismatches.push(format!("private pointer {shim_value:p}, expected {marker_ptr:p}"));
        }
    }
    verdict(cases.len(), mismatches)
}

fn check_global_cycle(_: &ConformanceOptions) -> Verdict {
    for cycle in 0..2 {
        // SAFETY: init/cleanup are paired and nothing else runs meanwhile.
        let (shim, direct) = unsafe {
            let shim = ce_global_init(CURL_GLOBAL_DEFAULT);
            ce_global_cleanup();
            let direct = ffi::curl_global_init(CURL_GLOBAL_DEFAULT);
            ffi::curl_global_cleanup();
            (shim, direct)
        };
        if shim != direct || shim != CURLE_OK {
            return fail(format!("cycle {cycle}: shim={shim} direct={direct}"));
        }
    }
    pass("2 init/cleanup cycles")
}

#[cfg(curl_impersonate)]
fn check_impersonate(options: &ConformanceOptions) -> Verdict {
    use crate::easy_abi::ce_easy_impersonate;

    let Ok(target) = CString::new(options.target.as_str()) else {
        return fail("target contains a NUL byte");
    };
    let Some(pair) = Pair::new() else {
        return fail("easy_init returned null");
    };
    // SAFETY: both handles are live; target is NUL-terminated.
    let (shim, direct) = unsafe {
        (
            ce_easy_impersonate(pair.shim, target.as_ptr(), 1),
            ffi::curl_easy_impersonate(pair.direct, target.as_ptr(), 1),
        )
    };
    if shim == direct {
        pass(format!("target {}: both returned {shim}", options.target))
    } else {
        fail(format!("shim={shim} direct={direct}"))
    }
}

#[cfg(not(curl_impersonate))]
fn check_impersonate(_: &ConformanceOptions) -> Verdict {
    skip(format!(
        "{} has no curl_easy_impersonate; ce_easy_impersonate is not built",
        crate::linked::LINKED_LIBRARY
    ))
}
