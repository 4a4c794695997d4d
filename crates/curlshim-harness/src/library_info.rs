//! Description of the linked libcurl.

use std::fmt::Write as _;
use std::path::Path;

use curlshim::linked;
use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::HarnessError;

/// Identity of the library the exports forward to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryInfo {
    /// Library name chosen at build time, e.g. `libcurl-impersonate-chrome`.
    pub name: String,
    /// File that defines `curl_easy_init`, when the loader can tell.
    pub path: Option<String>,
    pub sha256: Option<String>,
    /// Whether `ce_easy_impersonate` is exported by this build.
    pub impersonate: bool,
}

impl LibraryInfo {
    /// Describe the libcurl loaded into this process.
    pub fn linked() -> Result<Self, HarnessError> {
        let path = linked::library_path();
        let sha256 = path.as_deref().map(sha256_hex).transpose()?;
        Ok(Self {
            name: linked::LINKED_LIBRARY.to_string(),
            path: path.map(|p| p.display().to_string()),
            sha256,
            impersonate: linked::IMPERSONATE,
        })
    }

    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn sha256_hex(path: &Path) -> Result<String, HarnessError> {
    let data = std::fs::read(path)?;
    Ok(hex_lower(&sha2::Sha256::digest(&data)))
}

fn hex_lower(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(&mut out, "{b:02x}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_lower_pads_each_byte() {
        assert_eq!(hex_lower(&[0x00, 0x0f, 0xab, 0xff]), "000fabff");
        assert_eq!(hex_lower(&[]), "");
    }

    #[test]
    fn sha256_of_known_file() {
        let path = std::env::temp_dir().join(format!("curlshim-sha-{}", std::process::id()));
        std::fs::write(&path, b"abc").unwrap();
        let digest = sha256_hex(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(
            digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha256_of_missing_file_is_io_error() {
        let err = sha256_hex(Path::new("/nonexistent/curlshim/lib.so")).unwrap_err();
        assert!(matches!(err, HarnessError::Io(_)));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linked_library_is_described_with_digest() {
        let info = LibraryInfo::linked().unwrap();
        assert_eq!(info.name, linked::LINKED_LIBRARY);
        assert!(info.path.is_some());
        assert_eq!(info.sha256.as_ref().map(String::len), Some(64));
    }
}
