//! Conformance report generation.

use curlshim::conformance::{CheckResult, ConformanceOptions};
use curlshim_core::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome, now_utc};
use serde::Serialize;

use crate::{HarnessError, LibraryInfo};

/// Outcome counts over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Summary {
    #[must_use]
    pub fn tally(checks: &[CheckResult]) -> Self {
        checks.iter().fold(
            Self {
                total: checks.len(),
                ..Self::default()
            },
            |mut acc, check| {
                match check.outcome {
                    Outcome::Pass => acc.passed += 1,
                    Outcome::Fail => acc.failed += 1,
                    Outcome::Skip => acc.skipped += 1,
                }
                acc
            },
        )
    }
}

/// A full conformance run, as written by `curlshim-harness check`.
#[derive(Debug, Clone, Serialize)]
pub struct ConformanceReport {
    pub generated_utc: String,
    pub library: LibraryInfo,
    pub options: ConformanceOptions,
    pub summary: Summary,
    pub checks: Vec<CheckResult>,
}

impl ConformanceReport {
    #[must_use]
    pub fn new(library: LibraryInfo, options: ConformanceOptions, checks: Vec<CheckResult>) -> Self {
        Self {
            generated_utc: now_utc(),
            summary: Summary::tally(&checks),
            library,
            options,
            checks,
        }
    }

    /// Any check failed. Skips do not count.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }

    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One `conformance_check` line per check. Failures log at error level.
    pub fn log_checks(&self, emitter: &mut LogEmitter) -> Result<(), HarnessError> {
        for check in &self.checks {
            let level = match check.outcome {
                Outcome::Fail => LogLevel::Error,
                Outcome::Pass | Outcome::Skip => LogLevel::Info,
            };
            let entry = LogEntry::new(level, "conformance_check")
                .with_symbol(check.symbols.join(","))
                .with_outcome(check.outcome)
                .with_library(&self.library.name)
                .with_details(serde_json::json!({
                    "check": check.name,
                    "detail": check.detail,
                }));
            emitter.emit(&entry)?;
        }
        emitter.flush()?;
        Ok(())
    }
}
