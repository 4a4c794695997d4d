//! Links the wrapped libcurl.
//!
//! Selection, first match wins:
//! 1. Feature `chrome` or `ff`: that curl-impersonate flavour, unconditionally.
//! 2. The first curl-impersonate build found in the system library directories.
//! 3. Stock libcurl.
//!
//! Emits `cfg(curl_impersonate)` when the linked library provides
//! `curl_easy_impersonate`, and `CURLSHIM_LINKED_LIBRARY` naming the library.

use std::path::{Path, PathBuf};

/// (link name, provides `curl_easy_impersonate`)
const CANDIDATES: &[(&str, bool)] = &[
    ("curl-impersonate-chrome", true),
    ("curl-impersonate-ff", true),
    ("curl-impersonate", true),
    ("curl", false),
];

const SEARCH_DIRS: &[&str] = &[
    "/usr/local/lib",
    "/usr/local/lib64",
    "/usr/lib",
    "/usr/lib64",
    "/opt/homebrew/lib",
];

struct Found {
    dir: PathBuf,
    file: String,
    /// Only a versioned runtime object (`libcurl.so.4`) exists, no dev link.
    versioned: bool,
}

fn search_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = SEARCH_DIRS.iter().map(PathBuf::from).collect();
    let arch = std::env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    if !arch.is_empty() {
        dirs.push(Path::new("/usr/lib").join(format!("{arch}-linux-gnu")));
    }
    dirs
}

fn locate(name: &str, target_os: &str, dirs: &[PathBuf]) -> Option<Found> {
    let (plain, versioned) = if target_os == "macos" {
        (format!("lib{name}.dylib"), None)
    } else {
        (format!("lib{name}.so"), Some(format!("lib{name}.so.4")))
    };
    dirs.iter().find_map(|dir| {
        if dir.join(&plain).exists() {
            return Some(Found {
                dir: dir.clone(),
                file: plain.clone(),
                versioned: false,
            });
        }
        let file = versioned.as_ref().filter(|file| dir.join(file).exists())?;
        Some(Found {
            dir: dir.clone(),
            file: file.clone(),
            versioned: true,
        })
    })
}

fn main() {
    println!("cargo:rustc-check-cfg=cfg(curl_impersonate)");
    println!("cargo:rerun-if-changed=build.rs");

    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let forced = if std::env::var_os("CARGO_FEATURE_CHROME").is_some() {
        Some("curl-impersonate-chrome")
    } else if std::env::var_os("CARGO_FEATURE_FF").is_some() {
        Some("curl-impersonate-ff")
    } else {
        None
    };

    let dirs = search_dirs();
    let (name, impersonate, found) = match forced {
        Some(name) => (name, true, locate(name, &target_os, &dirs)),
        None => CANDIDATES
            .iter()
            .find_map(|&(name, impersonate)| {
                locate(name, &target_os, &dirs).map(|found| (name, impersonate, Some(found)))
            })
            .unwrap_or(("curl", false, None)),
    };

    match found {
        Some(found) => {
            println!("cargo:rustc-link-search=native={}", found.dir.display());
            println!("cargo:rerun-if-changed={}", found.dir.join(&found.file).display());
            if found.versioned {
                println!("cargo:rustc-link-lib=dylib:+verbatim={}", found.file);
            } else {
                println!("cargo:rustc-link-lib=dylib={name}");
            }
        }
        // Leave the search to the linker's default paths.
        None => println!("cargo:rustc-link-lib=dylib={name}"),
    }

    if impersonate {
        println!("cargo:rustc-cfg=curl_impersonate");
    }
    println!("cargo:rustc-env=CURLSHIM_LINKED_LIBRARY=lib{name}");
}
