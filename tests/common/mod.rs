//! # Shared helpers for mutest integration tests
//!
//! Builds harnesses that print into a buffer so runs can be inspected.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use mutest::cli::output::capture;
use mutest::{Harness, OutputBuffer, RunConfig};

/// A plain-text harness and the buffer it prints into.
pub fn captured_harness(config: RunConfig) -> (Harness<'static>, Rc<RefCell<OutputBuffer>>) {
    let (output, buffer) = capture();
    (Harness::with_output(config, output), buffer)
}

pub fn console(buffer: &Rc<RefCell<OutputBuffer>>) -> String {
    buffer.borrow().as_str().to_string()
}
