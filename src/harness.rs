//! mutest execution harness.
//!
//! Runs test functions one after another in the order the caller lists them,
//! records every outcome and prints live progress.
//!
//! # Architecture
//!
//! The harness owns the whole run state: the [`Registry`] of records, the
//! [`RunCounters`], the [`RunConfig`] and the console. Each test receives a
//! [`TestContext`] borrowing the message slot of its own record, so an
//! assertion always writes into the test that is currently running.
//!
//! Per test the state moves `Registered -> Running -> Passed | Failed`;
//! reporting afterwards only reads the records.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use mutest::{mut_assert_eq, mut_pass, mut_run_test, Harness, TestContext, TestOutcome};
//!
//! fn test_addition(ctx: &mut TestContext) -> TestOutcome {
//!     mut_assert_eq!(ctx, 1 + 1, 2);
//!     mut_pass!()
//! }
//!
//! let mut harness = Harness::from_env();
//! mut_run_test!(harness, test_addition);
//! std::process::exit(harness.finish());
//! ```

use std::fmt;
use std::time::Instant;

use crate::cli::output::{self, Marks, SharedOutput, StdoutSink};
use crate::config::RunConfig;
use crate::errors::{AssertionFailure, TestOutcome};
use crate::format::{FailureMessage, Location};
use crate::registry::{Registry, RunCounters};
use crate::report::Report;

// =============================================================================
// TEST CONTEXT
// =============================================================================

/// Handle passed to every test function.
///
/// Assertion macros take it as their first argument.
pub struct TestContext<'h> {
    name: &'h str,
    message: &'h mut Option<String>,
    output: &'h SharedOutput,
    marks: Marks,
}

impl<'h> TestContext<'h> {
    fn new(
        name: &'h str,
        message: &'h mut Option<String>,
        output: &'h SharedOutput,
        marks: Marks,
    ) -> Self {
        Self {
            name,
            message,
            output,
            marks,
        }
    }

    /// Name the running test was registered under.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Records a failure of the running test.
    ///
    /// Prints `<file>:<line>: <cross> <message>` right away, stores
    /// `<file>:<line>: <message>` in the test's record and returns the
    /// failure for the test function to return.
    pub fn fail(&mut self, location: Location, message: fmt::Arguments<'_>) -> AssertionFailure {
        let failure = FailureMessage::render(location, message);
        let prefix = format!("{}: ", failure.location);
        self.output.emit(&[
            (prefix.as_str(), None),
            (self.marks.cross, Some(output::FAIL)),
            (" ", None),
            (failure.text.as_str(), None),
        ]);

        let rendered = failure.to_string();
        if self.message.is_none() {
            *self.message = Some(rendered.clone());
        }
        AssertionFailure::new(rendered)
    }
}

// =============================================================================
// HARNESS
// =============================================================================

/// Sequential test driver and owner of the run state.
pub struct Harness<'a> {
    registry: Registry<'a>,
    counters: RunCounters,
    config: RunConfig,
    output: SharedOutput,
    marks: Marks,
}

impl<'a> Harness<'a> {
    /// Harness printing to stdout.
    pub fn new(config: RunConfig) -> Self {
        let output = SharedOutput::new(StdoutSink::new(config.use_colors));
        Self::with_output(config, output)
    }

    /// Harness printing into the given sink.
    pub fn with_output(config: RunConfig, output: SharedOutput) -> Self {
        let marks = Marks::for_colors(config.use_colors);
        Self {
            registry: Registry::new(),
            counters: RunCounters::default(),
            config,
            output,
            marks,
        }
    }

    /// Harness configured from the process arguments and environment.
    pub fn from_env() -> Self {
        Self::new(RunConfig::from_env())
    }

    /// Runs one test and records its outcome. Returns whether it passed.
    pub fn run<F>(&mut self, name: &'a str, test: F) -> bool
    where
        F: FnOnce(&mut TestContext<'_>) -> TestOutcome,
    {
        self.output
            .emit(&[("Running ", None), (name, Some(output::NAME)), ("...", None)]);
        let index = self.registry.register(name);
        self.counters.start();

        let started = Instant::now();
        let outcome = {
            let record = self.registry.record_mut(index);
            let mut ctx = TestContext::new(name, &mut record.message, &self.output, self.marks);
            test(&mut ctx)
        };
        self.registry.set_elapsed(index, started.elapsed());

        let passed = match outcome {
            Ok(()) => {
                self.output.emit(&[
                    (self.marks.check, Some(output::PASS)),
                    (" ", None),
                    (name, None),
                ]);
                true
            }
            Err(failure) => {
                self.registry.set_message(index, failure.into_message());
                self.counters.fail();
                false
            }
        };
        self.registry.mark_result(index, passed);
        passed
    }

    /// Prints the summary, writes the requested reports and returns the
    /// process exit status.
    pub fn finish(&self) -> i32 {
        let report = Report::new(&self.registry, self.counters);
        report.emit(&self.config, &self.output, self.marks);
        report.exit_code()
    }

    pub fn registry(&self) -> &Registry<'a> {
        &self.registry
    }

    pub fn counters(&self) -> RunCounters {
        self.counters
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn output(&self) -> &SharedOutput {
        &self.output
    }
}

/// Runs a test function under its own name.
///
/// `mut_run_test!(harness, test_addition)` is
/// `harness.run("test_addition", test_addition)`.
#[macro_export]
macro_rules! mut_run_test {
    ($harness:expr, $test:path) => {
        $harness.run(stringify!($test), $test)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::output::capture;

    fn passing(_ctx: &mut TestContext) -> TestOutcome {
        Ok(())
    }

    fn failing(ctx: &mut TestContext) -> TestOutcome {
        Err(ctx.fail(Location::new("h.rs", 7), format_args!("nope")))
    }

    #[test]
    fn passing_test_is_recorded_as_passed() {
        let (output, buffer) = capture();
        let mut harness = Harness::with_output(RunConfig::plain(), output);
        assert!(harness.run("passing", passing));

        let record = harness.registry().record(0).cloned();
        assert_eq!(record.as_ref().map(|r| r.passed), Some(true));
        assert_eq!(record.and_then(|r| r.message), None);
        assert_eq!(buffer.borrow().as_str(), "Running passing...\n[PASS] passing\n");
    }

    #[test]
    fn failing_test_stores_located_message() {
        let (output, buffer) = capture();
        let mut harness = Harness::with_output(RunConfig::plain(), output);
        assert!(!harness.run("failing", failing));

        let record = harness.registry().record(0);
        assert_eq!(record.and_then(|r| r.message.as_deref()), Some("h.rs:7: nope"));
        assert_eq!(harness.counters().total_failed, 1);
        assert_eq!(buffer.borrow().as_str(), "Running failing...\nh.rs:7: [FAIL] nope\n");
    }

    #[test]
    fn context_exposes_running_test_name() {
        let mut harness = Harness::with_output(RunConfig::plain(), SharedOutput::new(output::NullSink));
        let mut seen = String::new();
        harness.run("named", |ctx| {
            seen = ctx.name().to_string();
            Ok(())
        });
        assert_eq!(seen, "named");
    }

    #[test]
    fn records_follow_execution_order_and_carry_timing() {
        let mut harness = Harness::with_output(RunConfig::plain(), SharedOutput::new(output::NullSink));
        mut_run_test!(harness, passing);
        mut_run_test!(harness, failing);
        mut_run_test!(harness, passing);

        let names: Vec<_> = harness.registry().iter().map(|r| r.name).collect();
        assert_eq!(names, ["passing", "failing", "passing"]);
        assert!(harness.registry().iter().all(|r| r.elapsed.is_some()));
        assert_eq!(harness.counters(), RunCounters { total_run: 3, total_failed: 1 });
    }

    #[test]
    fn finish_returns_failed_count() {
        let mut harness = Harness::with_output(RunConfig::plain(), SharedOutput::new(output::NullSink));
        assert_eq!(harness.finish(), 0);
        harness.run("a", failing);
        harness.run("b", failing);
        assert_eq!(harness.finish(), 2);
    }
}
