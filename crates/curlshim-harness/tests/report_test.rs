//! Integration tests: conformance report shaping.

use std::io::Write;
use std::sync::{Arc, Mutex};

use curlshim::conformance::{CheckResult, ConformanceOptions};
use curlshim_core::structured_log::{LogEmitter, Outcome};
use curlshim_harness::{ConformanceReport, LibraryInfo, Summary};

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn check(name: &'static str, outcome: Outcome) -> CheckResult {
    CheckResult {
        name,
        outcome,
        symbols: vec!["ce_setopt_long"],
        detail: format!("{name} detail"),
    }
}

fn chrome_library() -> LibraryInfo {
    LibraryInfo {
        name: "libcurl-impersonate-chrome".to_string(),
        path: Some("/usr/lib/libcurl-impersonate-chrome.so.4".to_string()),
        sha256: Some("00".repeat(32)),
        impersonate: true,
    }
}

#[test]
fn summary_counts_each_outcome() {
    let checks = vec![
        check("a", Outcome::Pass),
        check("b", Outcome::Pass),
        check("c", Outcome::Fail),
        check("d", Outcome::Skip),
    ];
    assert_eq!(
        Summary::tally(&checks),
        Summary {
            total: 4,
            passed: 2,
            failed: 1,
            skipped: 1,
        }
    );
    assert_eq!(Summary::tally(&[]), Summary::default());
}

#[test]
fn skips_are_not_failures() {
    let report = ConformanceReport::new(
        chrome_library(),
        ConformanceOptions::default(),
        vec![check("a", Outcome::Pass), check("b", Outcome::Skip)],
    );
    assert!(!report.has_failures());

    let report = ConformanceReport::new(
        chrome_library(),
        ConformanceOptions::default(),
        vec![check("a", Outcome::Fail)],
    );
    assert!(report.has_failures());
}

#[test]
fn report_json_has_expected_shape() {
    let report = ConformanceReport::new(
        chrome_library(),
        ConformanceOptions::default(),
        vec![check("setopt_long", Outcome::Pass)],
    );
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert!(json["generated_utc"].as_str().unwrap().ends_with('Z'));
    assert_eq!(json["library"]["name"], "libcurl-impersonate-chrome");
    assert_eq!(json["library"]["impersonate"], true);
    assert_eq!(json["options"]["target"], "chrome116");
    assert_eq!(json["options"]["headers"], 100);
    assert_eq!(json["summary"]["total"], 1);
    assert_eq!(json["checks"][0]["name"], "setopt_long");
    assert_eq!(json["checks"][0]["outcome"], "pass");
    assert_eq!(json["checks"][0]["symbols"][0], "ce_setopt_long");
}

#[test]
fn library_info_round_trips_through_json() {
    let info = LibraryInfo {
        name: "libcurl".to_string(),
        path: None,
        sha256: None,
        impersonate: false,
    };
    let parsed: LibraryInfo = serde_json::from_str(&info.to_json().unwrap()).unwrap();
    assert_eq!(parsed, info);
    let json: serde_json::Value = serde_json::from_str(&info.to_json().unwrap()).unwrap();
    assert!(json["path"].is_null());
}

#[test]
fn log_checks_writes_one_line_per_check() {
    let report = ConformanceReport::new(
        chrome_library(),
        ConformanceOptions::default(),
        vec![check("setopt_long", Outcome::Pass), check("perform", Outcome::Fail)],
    );
    let buf = SharedBuf::default();
    let mut emitter = LogEmitter::to_writer(buf.clone());
    report.log_checks(&mut emitter).unwrap();
    assert_eq!(emitter.lines(), 2);

    let text = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert_eq!(line["event"], "conformance_check");
        assert_eq!(line["library"], "libcurl-impersonate-chrome");
        assert_eq!(line["symbol"], "ce_setopt_long");
    }
    assert_eq!(lines[0]["level"], "info");
    assert_eq!(lines[0]["details"]["check"], "setopt_long");
    assert_eq!(lines[1]["level"], "error");
    assert_eq!(lines[1]["outcome"], "fail");
}
