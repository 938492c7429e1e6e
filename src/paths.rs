//! Centralized path definitions for rulestat
//!
//! This module is the single source of truth for the filesystem names the
//! aggregator relies on.
//!
//! ## Expected Layout
//!
//! ```text
//! cwd/
//! ├── rulestat.toml           # Optional project config
//! ├── RuleSets/               # One file per rule; only the name matters
//! │   ├── rule-a
//! │   └── rule-b
//! └── results/                # Passed on the command line
//!     ├── rule-a.result
//!     └── rule-b.result
//! ```

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Default rules directory, relative to the working directory
pub const RULES_DIR: &str = "RuleSets";

/// Extension appended to a rule name to find its result file
pub const RESULT_EXTENSION: &str = "result";

/// Project configuration filename
pub const CONFIG_FILE: &str = "rulestat.toml";

/// Sentinel recorded when a result file has no line for the requested key
pub const MISSING_VALUE: &str = "none";

/// Derive the result file name for a rule (`<rule>.result`).
#[must_use]
pub fn result_file_name(rule_name: &str) -> String {
    format!("{rule_name}.{RESULT_EXTENSION}")
}

/// Result file name for a rule name that may not be valid UTF-8.
#[must_use]
pub fn result_file_os_name(rule_name: &OsStr) -> OsString {
    let mut name = rule_name.to_os_string();
    name.push(".");
    name.push(RESULT_EXTENSION);
    name
}

/// Full path of a rule's result file inside `results_dir`.
#[must_use]
pub fn result_file_path(results_dir: &Path, rule_name: &OsStr) -> PathBuf {
    results_dir.join(result_file_os_name(rule_name))
}

/// Path to `rulestat.toml` inside `dir`.
#[must_use]
pub fn config_file(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

/// Strip the `.result` suffix from a result file name, if present.
#[must_use]
pub fn rule_name_of(result_file: &str) -> &str {
    result_file
        .strip_suffix(RESULT_EXTENSION)
        .and_then(|s| s.strip_suffix('.'))
        .unwrap_or(result_file)
}
