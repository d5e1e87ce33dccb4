// Console summary printed after the last test.

use super::Report;
use crate::cli::output::{self, SharedOutput};

pub const BANNER_TOP: &str = "===== Test Report =====";
pub const BANNER_BOTTOM: &str = "=======================";

pub fn print_summary(report: &Report<'_, '_>, output: &SharedOutput) {
    let counters = report.counters();

    output.line("");
    output.line(BANNER_TOP);
    if counters.all_passed() {
        let text = format!("All {} tests passed", counters.total_run);
        output.emit(&[(text.as_str(), Some(output::PASS))]);
    } else {
        let run = counters.total_run.to_string();
        let failed = counters.total_failed.to_string();
        output.emit(&[("Tests run: ", None), (run.as_str(), Some(output::NAME))]);
        output.emit(&[("Tests failed: ", None), (failed.as_str(), Some(output::FAIL))]);
    }
    output.line(BANNER_BOTTOM);
}
