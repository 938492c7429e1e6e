//! Output formatting for human and JSON modes
//!
//! Human mode prints the bare summary line so it can be pasted into a
//! spreadsheet column; JSON mode exposes the per-rule mapping.

use serde::Serialize;

use crate::summary::Summary;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of aggregating one statistic
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    /// The statistic key that was looked up
    pub stat: String,
    /// Values keyed by result file name
    pub values: Summary,
    /// Print a rule-name header line before the values (human mode only)
    #[serde(skip)]
    pub header: bool,
}

impl SummaryReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) -> serde_json::Result<()> {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => println!("{}", self.to_json()?),
        }
        Ok(())
    }

    /// Human-readable rendering, newline terminated
    #[must_use]
    pub fn to_human(&self) -> String {
        if self.header {
            format!("{}\n{}\n", self.values.header(), self.values.line())
        } else {
            format!("{}\n", self.values.line())
        }
    }

    /// Pretty JSON rendering
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
