//! Run configuration.
//!
//! Collects everything that changes how a run presents itself: colors and
//! the report destinations. Tests never see it; only the harness and the
//! report emitter do.

use std::path::PathBuf;

use crate::cli::HarnessArgs;

/// Configuration for test execution and reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub use_colors: bool,
    pub junit_output: Option<PathBuf>,
    pub json_output: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            use_colors: default_use_colors(),
            junit_output: None,
            json_output: None,
        }
    }
}

impl RunConfig {
    /// Plain-text configuration with no report files.
    pub fn plain() -> Self {
        Self {
            use_colors: false,
            junit_output: None,
            json_output: None,
        }
    }

    /// Applies scanned arguments on top of the defaults.
    pub fn from_args(args: &HarnessArgs) -> Self {
        let mut config = Self::default();
        if args.no_color {
            config.use_colors = false;
        }
        config.junit_output = args.junit.clone();
        config.json_output = args.json.clone();
        config
    }

    /// Configuration for the current process arguments and environment.
    pub fn from_env() -> Self {
        Self::from_args(&HarnessArgs::from_env())
    }

    pub fn with_junit_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.junit_output = Some(path.into());
        self
    }

    pub fn with_json_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_output = Some(path.into());
        self
    }
}

// Colors are on only for an interactive stdout, and never when the
// `no-color` feature or the NO_COLOR convention asks otherwise.
fn default_use_colors() -> bool {
    if cfg!(feature = "no-color") {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}
