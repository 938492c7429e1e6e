//! Rules directory scanning
//!
//! Every regular file directly inside the rules directory names one rule.
//! Subdirectories and other special entries are skipped; symlinks count when
//! they point at a regular file.
//!
//! # Examples
//!
//! ```no_run
//! use rulestat::rules::RuleSet;
//!
//! let rules = RuleSet::scan("RuleSets").unwrap();
//! for rule in rules.entries() {
//!     println!("{}", rule.display_name());
//! }
//! ```

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{CombineError, Result};
use crate::paths;

/// A regular file in the rules directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEntry {
    /// Base name of the file, the rule's identity. Kept as raw OS bytes so
    /// names that are not UTF-8 still find their result file.
    name: OsString,
}

impl RuleEntry {
    /// Create an entry from a rule name
    #[must_use]
    pub fn new(name: impl Into<OsString>) -> Self {
        Self { name: name.into() }
    }

    /// The rule's base name
    #[must_use]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// The rule's base name, lossily converted for display
    #[must_use]
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    /// Name of the result file this rule expects (`<name>.result`)
    #[must_use]
    pub fn result_file_name(&self) -> OsString {
        paths::result_file_os_name(&self.name)
    }

    /// Location of the result file inside `results_dir`
    #[must_use]
    pub fn result_path(&self, results_dir: &Path) -> PathBuf {
        paths::result_file_path(results_dir, &self.name)
    }
}

/// The rules found in one rules directory
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Directory that was scanned
    root: PathBuf,

    /// Regular-file entries, in directory order
    entries: Vec<RuleEntry>,
}

impl RuleSet {
    /// List the rules directory. Fails if it does not exist, is not a
    /// directory, or cannot be read.
    pub fn scan(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        // WalkDir yields a file root at depth 0, which min_depth would hide.
        if root.exists() && !root.is_dir() {
            return Err(CombineError::NotADirectory(root));
        }

        let mut entries = Vec::new();

        for entry in WalkDir::new(&root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|source| CombineError::RulesDir {
                path: root.clone(),
                source,
            })?;

            // Path::is_file follows symlinks; a dangling link is not a file.
            if !entry.path().is_file() {
                log::debug!("skipping non-file entry {}", entry.path().display());
                continue;
            }

            entries.push(RuleEntry::new(entry.file_name()));
        }

        log::debug!("found {} rule(s) in {}", entries.len(), root.display());
        Ok(Self { root, entries })
    }

    /// Directory that was scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All rule entries
    #[must_use]
    pub fn entries(&self) -> &[RuleEntry] {
        &self.entries
    }

    /// Number of rules found
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory held no regular files
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
