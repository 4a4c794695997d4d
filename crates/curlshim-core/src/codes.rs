//! libcurl numeric code tables.
//!
//! Values mirror `curl/curl.h`. The forwarding layer never consults these;
//! the conformance checks and tests use them to name codes and to confirm
//! each option or info id is driven through the fixed-arity export whose
//! argument type matches it.

use std::ffi::{c_int, c_long};

/// `CURLcode`: status code returned by most libcurl calls.
pub type CurlCode = c_int;
/// `CURLoption`: option identifier for `curl_easy_setopt`.
pub type CurlOption = c_int;
/// `CURLINFO`: info identifier for `curl_easy_getinfo`.
pub type CurlInfo = c_int;

// ---------------------------------------------------------------------------
// CURLcode
// ---------------------------------------------------------------------------

pub const CURLE_OK: CurlCode = 0;
pub const CURLE_UNSUPPORTED_PROTOCOL: CurlCode = 1;
pub const CURLE_BAD_FUNCTION_ARGUMENT: CurlCode = 43;
pub const CURLE_UNKNOWN_OPTION: CurlCode = 48;

// ---------------------------------------------------------------------------
// curl_global_init flags
// ---------------------------------------------------------------------------

pub const CURL_GLOBAL_SSL: c_long = 1 << 0;
pub const CURL_GLOBAL_WIN32: c_long = 1 << 1;
pub const CURL_GLOBAL_ALL: c_long = CURL_GLOBAL_SSL | CURL_GLOBAL_WIN32;
pub const CURL_GLOBAL_DEFAULT: c_long = CURL_GLOBAL_ALL;

// ---------------------------------------------------------------------------
// CURLoption
// ---------------------------------------------------------------------------

pub const CURLOPTTYPE_LONG: CurlOption = 0;
pub const CURLOPTTYPE_OBJECTPOINT: CurlOption = 10_000;
pub const CURLOPTTYPE_FUNCTIONPOINT: CurlOption = 20_000;
pub const CURLOPTTYPE_OFF_T: CurlOption = 30_000;
pub const CURLOPTTYPE_BLOB: CurlOption = 40_000;

pub const CURLOPT_URL: CurlOption = CURLOPTTYPE_OBJECTPOINT + 2;
pub const CURLOPT_TIMEOUT: CurlOption = CURLOPTTYPE_LONG + 13;
pub const CURLOPT_USERAGENT: CurlOption = CURLOPTTYPE_OBJECTPOINT + 18;
pub const CURLOPT_HTTPHEADER: CurlOption = CURLOPTTYPE_OBJECTPOINT + 23;
pub const CURLOPT_VERBOSE: CurlOption = CURLOPTTYPE_LONG + 41;
pub const CURLOPT_FOLLOWLOCATION: CurlOption = CURLOPTTYPE_LONG + 52;
pub const CURLOPT_NOSIGNAL: CurlOption = CURLOPTTYPE_LONG + 99;
pub const CURLOPT_PRIVATE: CurlOption = CURLOPTTYPE_OBJECTPOINT + 103;

// ---------------------------------------------------------------------------
// CURLINFO
// ---------------------------------------------------------------------------

pub const CURLINFO_STRING: CurlInfo = 0x10_0000;
pub const CURLINFO_LONG: CurlInfo = 0x20_0000;
pub const CURLINFO_DOUBLE: CurlInfo = 0x30_0000;
pub const CURLINFO_PTR: CurlInfo = 0x40_0000;
pub const CURLINFO_SOCKET: CurlInfo = 0x50_0000;
pub const CURLINFO_OFF_T: CurlInfo = 0x60_0000;
pub const CURLINFO_TYPEMASK: CurlInfo = 0xf0_0000;

pub const CURLINFO_EFFECTIVE_URL: CurlInfo = CURLINFO_STRING + 1;
pub const CURLINFO_RESPONSE_CODE: CurlInfo = CURLINFO_LONG + 2;
pub const CURLINFO_REDIRECT_COUNT: CurlInfo = CURLINFO_LONG + 20;
pub const CURLINFO_PRIVATE: CurlInfo = CURLINFO_STRING + 21;

// ---------------------------------------------------------------------------
// Type classes
// ---------------------------------------------------------------------------

/// Value class of a `CURLoption`, derived from its numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// `long` argument.
    Long,
    /// Data pointer or C string argument.
    ObjectPoint,
    /// Callback function pointer argument.
    FunctionPoint,
    /// `curl_off_t` argument.
    OffT,
    /// `struct curl_blob *` argument.
    Blob,
    /// Outside every documented range.
    Unknown,
}

impl OptionKind {
    #[must_use]
    pub const fn of(option: CurlOption) -> Self {
        if option < 0 {
            return Self::Unknown;
        }
        match option - option % CURLOPTTYPE_OBJECTPOINT {
            CURLOPTTYPE_LONG => Self::Long,
            CURLOPTTYPE_OBJECTPOINT => Self::ObjectPoint,
            CURLOPTTYPE_FUNCTIONPOINT => Self::FunctionPoint,
            CURLOPTTYPE_OFF_T => Self::OffT,
            CURLOPTTYPE_BLOB => Self::Blob,
            _ => Self::Unknown,
        }
    }

    /// Exported setters whose argument type matches this class.
    ///
    /// `curl_off_t` is 64-bit everywhere, so `ce_setopt_long` only fits it
    /// where C `long` is 64-bit too.
    #[must_use]
    pub const fn setters(self) -> &'static [&'static str] {
        match self {
            Self::Long => &["ce_setopt_long"],
            Self::ObjectPoint => &["ce_setopt_ptr", "ce_setopt_str"],
            Self::FunctionPoint | Self::Blob => &["ce_setopt_ptr"],
            Self::OffT if c_long::BITS == 64 => &["ce_setopt_long"],
            Self::OffT | Self::Unknown => &[],
        }
    }
}

/// Result class of a `CURLINFO`, taken from its type bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoKind {
    String,
    Long,
    Double,
    /// `struct curl_slist *` or an arbitrary pointer (same type bits).
    Pointer,
    Socket,
    OffT,
    Unknown,
}

impl InfoKind {
    #[must_use]
    pub const fn of(info: CurlInfo) -> Self {
        match info & CURLINFO_TYPEMASK {
            CURLINFO_STRING => Self::String,
            CURLINFO_LONG => Self::Long,
            CURLINFO_DOUBLE => Self::Double,
            CURLINFO_PTR => Self::Pointer,
            CURLINFO_SOCKET => Self::Socket,
            CURLINFO_OFF_T => Self::OffT,
            _ => Self::Unknown,
        }
    }

    /// Exported getter whose output slot matches this class, if any.
    #[must_use]
    pub const fn getter(self) -> Option<&'static str> {
        match self {
            Self::String | Self::Pointer => Some("ce_easy_getinfo_ptr"),
            Self::Long => Some("ce_easy_getinfo_long"),
            Self::OffT if c_long::BITS == 64 => Some("ce_easy_getinfo_long"),
            Self::OffT | Self::Double | Self::Socket | Self::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_kinds_follow_ranges() {
        assert_eq!(OptionKind::of(CURLOPT_VERBOSE), OptionKind::Long);
        assert_eq!(OptionKind::of(CURLOPT_URL), OptionKind::ObjectPoint);
        assert_eq!(OptionKind::of(CURLOPT_HTTPHEADER), OptionKind::ObjectPoint);
        assert_eq!(OptionKind::of(20_011), OptionKind::FunctionPoint);
        assert_eq!(OptionKind::of(30_117), OptionKind::OffT);
        assert_eq!(OptionKind::of(40_291), OptionKind::Blob);
        assert_eq!(OptionKind::of(-1), OptionKind::Unknown);
        assert_eq!(OptionKind::of(50_000), OptionKind::Unknown);
    }

    #[test]
    fn info_kinds_follow_type_bits() {
        assert_eq!(InfoKind::of(CURLINFO_EFFECTIVE_URL), InfoKind::String);
        assert_eq!(InfoKind::of(CURLINFO_RESPONSE_CODE), InfoKind::Long);
        assert_eq!(InfoKind::of(CURLINFO_DOUBLE + 3), InfoKind::Double);
        assert_eq!(InfoKind::of(CURLINFO_PRIVATE), InfoKind::String);
        assert_eq!(InfoKind::of(CURLINFO_PTR + 28), InfoKind::Pointer);
        assert_eq!(InfoKind::of(CURLINFO_SOCKET + 40), InfoKind::Socket);
        assert_eq!(InfoKind::of(7), InfoKind::Unknown);
    }

    #[test]
    fn getters_match_slot_types() {
        assert_eq!(InfoKind::String.getter(), Some("ce_easy_getinfo_ptr"));
        assert_eq!(InfoKind::Pointer.getter(), Some("ce_easy_getinfo_ptr"));
        assert_eq!(InfoKind::Long.getter(), Some("ce_easy_getinfo_long"));
        assert_eq!(InfoKind::Double.getter(), None);
        assert_eq!(InfoKind::Socket.getter(), None);
    }

    #[test]
    fn setters_match_argument_types() {
        assert_eq!(OptionKind::Long.setters(), &["ce_setopt_long"]);
        assert!(OptionKind::ObjectPoint.setters().contains(&"ce_setopt_str"));
        assert_eq!(OptionKind::FunctionPoint.setters(), &["ce_setopt_ptr"]);
        assert!(OptionKind::Unknown.setters().is_empty());
    }
}
