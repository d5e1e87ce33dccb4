//! Handles all user-facing console output for a test run.
//!
//! Every line the harness, the assertions and the report emitter print goes
//! through an [`OutputSink`]. The default sink writes to stdout with colors;
//! [`OutputBuffer`] captures plain text so runs can be inspected in tests.

// ============================================================================
// OUTPUT SINKS: OutputBuffer and StdoutSink implementations
// ============================================================================

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// One fragment of a console line, optionally colored.
pub type Piece<'a> = (&'a str, Option<Color>);

/// Destination for console lines. Each call to `emit` writes exactly one line.
pub trait OutputSink {
    fn emit(&mut self, pieces: &[Piece<'_>]);
}

/// OutputBuffer: collects output into a String for testing or programmatic capture.
///
/// Colors are dropped; every emitted line ends with `\n`.
pub struct OutputBuffer {
    pub buffer: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }
    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for OutputBuffer {
    fn emit(&mut self, pieces: &[Piece<'_>]) {
        for (text, _) in pieces {
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
    }
}

/// StdoutSink: writes output to stdout for the default runner.
pub struct StdoutSink {
    stream: StandardStream,
}

impl StdoutSink {
    pub fn new(use_colors: bool) -> Self {
        let choice = if use_colors {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stream: StandardStream::stdout(choice),
        }
    }
}

impl OutputSink for StdoutSink {
    fn emit(&mut self, pieces: &[Piece<'_>]) {
        for (text, color) in pieces {
            match color {
                Some(c) => {
                    let _ = self.stream.set_color(ColorSpec::new().set_fg(Some(*c)));
                    let _ = write!(self.stream, "{}", text);
                    let _ = self.stream.reset();
                }
                None => {
                    let _ = write!(self.stream, "{}", text);
                }
            }
        }
        let _ = writeln!(self.stream);
        let _ = self.stream.flush();
    }
}

// A null output sink for running without output.
pub struct NullSink;
impl OutputSink for NullSink {
    fn emit(&mut self, _pieces: &[Piece<'_>]) {}
}

/// Ergonomic, extensible wrapper for shared, mutable output sinks.
///
/// The harness keeps one handle and hands clones to each [`TestContext`],
/// so assertion failures land on the console in order with progress lines.
///
/// [`TestContext`]: crate::harness::TestContext
#[derive(Clone)]
pub struct SharedOutput(pub Rc<RefCell<dyn OutputSink>>);

impl SharedOutput {
    /// Create a new SharedOutput from any OutputSink.
    pub fn new<T: OutputSink + 'static>(sink: T) -> Self {
        SharedOutput(Rc::new(RefCell::new(sink)))
    }
    /// Emit one line via the sink.
    pub fn emit(&self, pieces: &[Piece<'_>]) {
        self.0.borrow_mut().emit(pieces);
    }
    /// Emit one uncolored line.
    pub fn line(&self, text: &str) {
        self.emit(&[(text, None)]);
    }
}

/// Creates a capturing sink and the shared handle writing into it.
///
/// The returned buffer stays readable after the handle has been moved into
/// a harness.
pub fn capture() -> (SharedOutput, Rc<RefCell<OutputBuffer>>) {
    let buffer = Rc::new(RefCell::new(OutputBuffer::new()));
    (SharedOutput(buffer.clone()), buffer)
}

// ============================================================================
// MARKS AND PALETTE
// ============================================================================

/// Status glyphs used on progress and report lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marks {
    pub check: &'static str,
    pub cross: &'static str,
    pub arrow: &'static str,
}

impl Marks {
    pub const FANCY: Marks = Marks {
        check: "\u{2714}",
        cross: "\u{2718}",
        arrow: "\u{279c}",
    };

    pub const PLAIN: Marks = Marks {
        check: "[PASS]",
        cross: "[FAIL]",
        arrow: "->",
    };

    pub fn for_colors(use_colors: bool) -> Self {
        if use_colors {
            Self::FANCY
        } else {
            Self::PLAIN
        }
    }
}

pub const NAME: Color = Color::Cyan;
pub const PASS: Color = Color::Green;
pub const FAIL: Color = Color::Red;
pub const WARN: Color = Color::Yellow;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_drops_colors_and_terminates_lines() {
        let mut buffer = OutputBuffer::new();
        buffer.emit(&[("Running ", None), ("test_a", Some(NAME)), ("...", None)]);
        buffer.emit(&[("done", Some(PASS))]);
        assert_eq!(buffer.as_str(), "Running test_a...\ndone\n");
    }

    #[test]
    fn shared_output_writes_through_to_captured_buffer() {
        let (output, buffer) = capture();
        let clone = output.clone();
        output.line("first");
        clone.line("second");
        assert_eq!(buffer.borrow().as_str(), "first\nsecond\n");
    }

    #[test]
    fn plain_marks_are_ascii() {
        let marks = Marks::for_colors(false);
        assert_eq!(marks, Marks::PLAIN);
        assert!(marks.check.is_ascii() && marks.cross.is_ascii() && marks.arrow.is_ascii());
        assert_eq!(Marks::for_colors(true).check, "\u{2714}");
    }
}
