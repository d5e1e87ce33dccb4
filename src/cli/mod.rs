//! Command-line surface of a test binary: argument scanning and console output.

pub mod args;
pub mod output;

pub use args::HarnessArgs;
pub use output::{Marks, OutputBuffer, OutputSink, SharedOutput, StdoutSink};
