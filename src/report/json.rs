// JSON report: the same content as the XML report, for tooling that would
// rather not parse markup.

use std::fs::File;
use std::io::Write as _;
use std::path::Path;

use serde::Serialize;

use super::Report;
use crate::errors::MutestError;

#[derive(Debug, Serialize)]
pub struct JsonReport<'r> {
    pub tests: usize,
    pub failures: usize,
    pub testcases: Vec<JsonCase<'r>>,
}

#[derive(Debug, Serialize)]
pub struct JsonCase<'r> {
    pub name: &'r str,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'r str>,
    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
}

impl<'r> JsonReport<'r> {
    pub fn from_report(report: &Report<'r, '_>) -> Self {
        let counters = report.counters();
        Self {
            tests: counters.total_run,
            failures: counters.total_failed,
            testcases: report
                .records()
                .iter()
                .map(|r| JsonCase {
                    name: r.name,
                    passed: r.passed,
                    message: r.message.as_deref(),
                    time: r.elapsed.map(|d| d.as_secs_f64()),
                })
                .collect(),
        }
    }
}

pub fn render(report: &Report<'_, '_>) -> Result<String, MutestError> {
    Ok(serde_json::to_string_pretty(&JsonReport::from_report(report))?)
}

pub fn write(report: &Report<'_, '_>, path: &Path) -> Result<(), MutestError> {
    let body = render(report)?;
    let mut file = File::create(path).map_err(|source| MutestError::ReportCreate {
        path: path.to_path_buf(),
        source,
    })?;
    writeln!(file, "{}", body).map_err(|source| MutestError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{Registry, RunCounters};

    #[test]
    fn lists_every_case_with_failure_messages() {
        let mut registry = Registry::new();
        let a = registry.register("test_a");
        registry.mark_result(a, true);
        let b = registry.register("test_b");
        registry.set_message(b, "b.rs:2: this will fail".to_string());
        registry.mark_result(b, false);
        let counters = RunCounters {
            total_run: 2,
            total_failed: 1,
        };

        let text = render(&Report::new(&registry, counters)).expect("render");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");

        assert_eq!(value["tests"], 2);
        assert_eq!(value["failures"], 1);
        assert_eq!(value["testcases"][0]["name"], "test_a");
        assert_eq!(value["testcases"][0]["passed"], true);
        assert!(value["testcases"][0].get("message").is_none());
        assert_eq!(value["testcases"][1]["message"], "b.rs:2: this will fail");
    }
}
