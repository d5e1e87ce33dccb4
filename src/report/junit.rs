//! JUnit-style XML report.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <testsuite tests="2" failures="1">
//!   <testcase name="test_ok" time="0.000">
//!   </testcase>
//!   <testcase name="test_bad" time="0.001">
//!     <failure>tests/math.rs:9: Expected 1 + 1 == 3 but 1 + 1 = 2</failure>
//!   </testcase>
//! </testsuite>
//! ```
//!
//! Test names and failure messages are escaped, so any text survives a
//! strict XML parser.

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write as _;
use std::path::Path;

use super::Report;
use crate::errors::MutestError;

pub fn render(report: &Report<'_, '_>) -> String {
    let counters = report.counters();
    let mut xml = String::new();

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        xml,
        "<testsuite tests=\"{}\" failures=\"{}\">",
        counters.total_run, counters.total_failed
    );
    for record in report.records() {
        let _ = write!(xml, "  <testcase name=\"{}\"", escape(record.name));
        if let Some(elapsed) = record.elapsed {
            let _ = write!(xml, " time=\"{:.3}\"", elapsed.as_secs_f64());
        }
        xml.push_str(">\n");
        if record.failed() {
            let message = record.message.as_deref().unwrap_or("");
            let _ = writeln!(xml, "    <failure>{}</failure>", escape(message));
        }
        xml.push_str("  </testcase>\n");
    }
    xml.push_str("</testsuite>\n");
    xml
}

pub fn write(report: &Report<'_, '_>, path: &Path) -> Result<(), MutestError> {
    let mut file = File::create(path).map_err(|source| MutestError::ReportCreate {
        path: path.to_path_buf(),
        source,
    })?;
    file.write_all(render(report).as_bytes())
        .map_err(|source| MutestError::ReportWrite {
            path: path.to_path_buf(),
            source,
        })
}

/// Escapes the five XML special characters.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
