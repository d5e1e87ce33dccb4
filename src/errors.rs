//! mutest error types.
//!
//! Two kinds of failure exist in a run. An [`AssertionFailure`] is expected:
//! it ends the current test and nothing else. A [`MutestError`] comes from
//! report I/O and is only ever surfaced as a warning; it never fails a run.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// The outcome of one test function.
pub type TestOutcome = Result<(), AssertionFailure>;

/// A failed assertion, carrying its rendered `<file>:<line>: <message>` text.
///
/// Only [`TestContext::fail`](crate::harness::TestContext::fail) builds one,
/// so every failure has been printed and stored in its record by the time a
/// test function sees it.
#[must_use = "an assertion failure must be returned from the test function"]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionFailure {
    message: String,
}

impl AssertionFailure {
    pub(crate) fn new(message: String) -> Self {
        Self { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_message(self) -> String {
        self.message
    }
}

/// Errors raised while emitting reports.
#[derive(Debug, Error, Diagnostic)]
pub enum MutestError {
    #[error("cannot create report file {}", path.display())]
    #[diagnostic(
        code(mutest::report::create),
        help("check that the parent directory exists and is writable")
    )]
    ReportCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write report file {}", path.display())]
    #[diagnostic(code(mutest::report::write))]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot serialize JSON report")]
    #[diagnostic(code(mutest::report::json))]
    ReportJson(#[from] serde_json::Error),
}

impl MutestError {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            MutestError::ReportCreate { path, .. } | MutestError::ReportWrite { path, .. } => {
                Some(path)
            }
            MutestError::ReportJson(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assertion_failure_displays_its_message() {
        let failure = AssertionFailure::new("a.rs:3: Expected true: ok".to_string());
        assert_eq!(failure.to_string(), "a.rs:3: Expected true: ok");
        assert_eq!(failure.message(), "a.rs:3: Expected true: ok");
    }

    #[test]
    fn report_errors_carry_diagnostic_codes() {
        let err = MutestError::ReportCreate {
            path: PathBuf::from("/nope/r.xml"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.code().map(|c| c.to_string()), Some("mutest::report::create".to_string()));
        assert_eq!(err.to_string(), "cannot create report file /nope/r.xml");
        assert_eq!(err.path(), Some(&PathBuf::from("/nope/r.xml")));
    }
}
