//! CLI entrypoint for the curlshim conformance harness.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use curlshim::conformance::{self, ConformanceOptions};
use curlshim_core::structured_log::LogEmitter;
use curlshim_harness::{ConformanceReport, HarnessError, LibraryInfo};

/// Conformance tooling for curlshim.
#[derive(Debug, Parser)]
#[command(name = "curlshim-harness")]
#[command(about = "Checks that the ce_* exports forward faithfully to libcurl")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Describe the libcurl the shim was linked against.
    Info,
    /// Run the forwarding-fidelity checks.
    Check {
        /// Impersonation target passed to ce_easy_impersonate.
        #[arg(long, default_value = "chrome116")]
        target: String,
        /// Create/destroy cycles in the session check.
        #[arg(long, default_value_t = 16)]
        sessions: usize,
        /// Entries in the largest header list.
        #[arg(long, default_value_t = 100)]
        headers: usize,
        /// Output JSON report path (if omitted, prints to stdout).
        #[arg(long)]
        output: Option<PathBuf>,
        /// Append one structured JSONL line per check to this file.
        #[arg(long)]
        log: Option<PathBuf>,
    },
}

fn write_output(path: Option<&PathBuf>, body: &str) -> Result<(), HarnessError> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, body)?;
            eprintln!("Wrote report to {}", path.display());
        }
        None => println!("{body}"),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<ExitCode, HarnessError> {
    match cli.command {
        Command::Info => {
            println!("{}", LibraryInfo::linked()?.to_json()?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check {
            target,
            sessions,
            headers,
            output,
            log,
        } => {
            let library = LibraryInfo::linked()?;
            let options = ConformanceOptions {
                target,
                sessions,
                headers,
            };
            let checks = conformance::run(&options);
            let report = ConformanceReport::new(library, options, checks);

            if let Some(path) = log {
                let mut emitter = LogEmitter::to_file(&path)?;
                report.log_checks(&mut emitter)?;
            }
            write_output(output.as_ref(), &report.to_json()?)?;

            let summary = report.summary;
            eprintln!(
                "{} checks: {} passed, {} failed, {} skipped",
                summary.total, summary.passed, summary.failed, summary.skipped
            );
            Ok(if report.has_failures() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
