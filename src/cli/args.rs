//! Scans the harness argument list for report and output flags.
//!
//! The scan is deliberately lenient: a test binary receives whatever its
//! caller passes, so unknown arguments are kept aside (reserved for future
//! filtering) instead of rejected, and a flag missing its value is dropped.

use std::path::PathBuf;

/// Flags recognised by the harness.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HarnessArgs {
    /// `--junit <path>`: write a JUnit-style XML report.
    pub junit: Option<PathBuf>,
    /// `--json <path>`: write a JSON report.
    pub json: Option<PathBuf>,
    /// `--no-color`: plain marks and no ANSI colors.
    pub no_color: bool,
    /// Everything else, in order.
    pub ignored: Vec<String>,
}

impl HarnessArgs {
    /// Parses arguments, excluding the program name.
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = HarnessArgs::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            if let Some(path) = arg.strip_prefix("--junit=") {
                parsed.junit = non_empty(path);
            } else if let Some(path) = arg.strip_prefix("--json=") {
                parsed.json = non_empty(path);
            } else {
                match arg.as_str() {
                    "--junit" => parsed.junit = args.next().as_deref().and_then(non_empty),
                    "--json" => parsed.json = args.next().as_deref().and_then(non_empty),
                    "--no-color" => parsed.no_color = true,
                    _ => parsed.ignored.push(arg),
                }
            }
        }

        parsed
    }

    /// Parses the current process arguments.
    pub fn from_env() -> Self {
        Self::parse_from(std::env::args().skip(1))
    }
}

fn non_empty(path: &str) -> Option<PathBuf> {
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}
