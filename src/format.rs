//! Failure message rendering.
//!
//! Assertions hand over their message as `fmt::Arguments`, which borrow the
//! payload without formatting it. Nothing is allocated until
//! [`FailureMessage::render`] runs, and the assertion macros only call it
//! once a condition is known false.

use std::fmt;

/// Source position of an assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub file: &'static str,
    pub line: u32,
}

impl Location {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// A rendered failure: where it happened and what the assertion said.
///
/// Displays as `"<file>:<line>: <text>"`, the form stored in test records
/// and reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureMessage {
    pub location: Location,
    pub text: String,
}

impl FailureMessage {
    pub fn render(location: Location, message: fmt::Arguments<'_>) -> Self {
        Self {
            location,
            text: fmt::format(message),
        }
    }
}

impl fmt::Display for FailureMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_file_and_line() {
        let at = Location::new("tests/math.rs", 12);
        let msg = FailureMessage::render(at, format_args!("Expected true: ok"));
        assert_eq!(msg.text, "Expected true: ok");
        assert_eq!(msg.to_string(), "tests/math.rs:12: Expected true: ok");
    }

    #[test]
    fn substitutes_payload() {
        let at = Location::new("a.rs", 1);
        let actual = 2;
        let msg = FailureMessage::render(at, format_args!("Expected x == 3 but x = {:?}", actual));
        assert_eq!(msg.to_string(), "a.rs:1: Expected x == 3 but x = 2");
    }
}
