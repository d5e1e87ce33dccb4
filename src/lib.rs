//! mutest: a minimal, embeddable unit-testing harness.
//!
//! Write test functions taking a [`TestContext`], check things with the
//! `mut_assert*` macros, list the tests in a binary with [`mut_run_test!`]
//! and exit with [`Harness::finish`]. Pass `--junit <path>` (or
//! `--json <path>`) to the binary for a machine-readable report.

pub use crate::cli::output::{OutputBuffer, OutputSink, SharedOutput};
pub use crate::config::RunConfig;
pub use crate::errors::{AssertionFailure, MutestError, TestOutcome};
pub use crate::harness::{Harness, TestContext};
pub use crate::registry::{Registry, RunCounters, TestRecord};

#[macro_use]
pub mod assertions;
pub mod cli;
pub mod config;
pub mod errors;
pub mod format;
pub mod harness;
pub mod registry;
pub mod report;
