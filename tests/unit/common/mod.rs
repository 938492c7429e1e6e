//! Shared test fixtures and helpers
//!
//! This module provides a temporary rules/results layout for testing
//! rulestat components.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary workspace with a rules directory and a results directory:
/// ```text
/// /
/// ├── RuleSets/
/// └── results/
/// ```
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    /// Create an empty workspace
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join("RuleSets")).unwrap();
        fs::create_dir_all(dir.path().join("results")).unwrap();
        Self { dir }
    }

    /// Get the root path of the workspace
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the rules directory
    pub fn rules_dir(&self) -> PathBuf {
        self.dir.path().join("RuleSets")
    }

    /// Path of the results directory
    pub fn results_dir(&self) -> PathBuf {
        self.dir.path().join("results")
    }

    /// Add a rule file (content is irrelevant to the aggregator)
    pub fn add_rule(&self, name: &str) {
        fs::write(self.rules_dir().join(name), "p(?X) -> q(?X) .\n").unwrap();
    }

    /// Add a subdirectory inside the rules directory
    pub fn add_rule_dir(&self, name: &str) {
        fs::create_dir_all(self.rules_dir().join(name)).unwrap();
    }

    /// Write `<rule>.result` into the results directory
    pub fn add_result(&self, rule: &str, content: &str) {
        fs::write(self.results_dir().join(format!("{rule}.result")), content).unwrap();
    }

    /// Add a rule together with its result file
    pub fn add_rule_with_result(&self, rule: &str, content: &str) {
        self.add_rule(rule);
        self.add_result(rule, content);
    }

    /// Write `rulestat.toml` at the workspace root
    pub fn write_config(&self, content: &str) {
        fs::write(self.dir.path().join("rulestat.toml"), content).unwrap();
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
