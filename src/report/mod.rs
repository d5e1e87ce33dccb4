//! # Report Emitter
//!
//! Consumes the records of a finished run. Prints the console summary,
//! writes the JUnit XML and JSON reports when configured and computes the
//! process exit status.
//!
//! A report that cannot be written never fails the run: the summary has
//! already been printed, so the problem is shown as a warning line and the
//! exit status still reflects the tests alone.

pub mod console;
pub mod json;
pub mod junit;

use std::error::Error;
use std::path::Path;

use crate::cli::output::{self, Marks, SharedOutput};
use crate::config::RunConfig;
use crate::errors::MutestError;
use crate::registry::{Registry, RunCounters, TestRecord};

/// Highest exit status reported; larger failure counts saturate here so the
/// status can never wrap around to 0.
pub const MAX_EXIT_STATUS: usize = 255;

/// Read-only view of a finished run.
pub struct Report<'r, 'a> {
    registry: &'r Registry<'a>,
    counters: RunCounters,
}

impl<'r, 'a> Report<'r, 'a> {
    pub fn new(registry: &'r Registry<'a>, counters: RunCounters) -> Self {
        Self { registry, counters }
    }

    pub fn counters(&self) -> RunCounters {
        self.counters
    }

    pub fn records(&self) -> &'r [TestRecord<'a>] {
        self.registry.records()
    }

    /// 0 when nothing failed, otherwise the number of failed tests.
    pub fn exit_code(&self) -> i32 {
        exit_code(self.counters)
    }

    /// Prints the summary and writes every report the config asks for.
    pub fn emit(&self, config: &RunConfig, output: &SharedOutput, marks: Marks) {
        console::print_summary(self, output);

        if let Some(path) = &config.junit_output {
            match junit::write(self, path) {
                Ok(()) => written(output, marks, "JUnit XML", path),
                Err(e) => warn(output, &e),
            }
        }
        if let Some(path) = &config.json_output {
            match json::write(self, path) {
                Ok(()) => written(output, marks, "JSON", path),
                Err(e) => warn(output, &e),
            }
        }
    }
}

pub fn exit_code(counters: RunCounters) -> i32 {
    counters.total_failed.min(MAX_EXIT_STATUS) as i32
}

fn written(output: &SharedOutput, marks: Marks, kind: &str, path: &Path) {
    let text = format!(" {} report written to {}", kind, path.display());
    output.emit(&[(marks.arrow, Some(output::PASS)), (text.as_str(), None)]);
}

fn warn(output: &SharedOutput, err: &MutestError) {
    let mut text = format!(": {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        text.push_str(&format!(": {}", cause));
        source = cause.source();
    }
    output.emit(&[("warning", Some(output::WARN)), (text.as_str(), None)]);
}
