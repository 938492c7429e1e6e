//! Aggregation of one statistic across all rules
//!
//! The summary maps each rule's result file name to the value found for the
//! requested key, or to the missing-value sentinel. Entries are kept sorted
//! by result file name so the rendered line is deterministic regardless of
//! directory iteration order.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::paths;
use crate::result_file;
use crate::rules::RuleSet;

/// Separator written after every value in the summary line
pub const SEPARATOR: &str = "; ";

/// Values of one statistic, keyed by result file name
///
/// Keys keep the raw OS name so rules whose names are not UTF-8 stay
/// distinct; they are converted lossily only for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    values: BTreeMap<OsString, String>,
}

impl Summary {
    /// Collect `key` from the result file of every rule in `rules`.
    ///
    /// Stops at the first result file that cannot be read; nothing is
    /// returned for the rules already processed.
    pub fn collect(
        rules: &RuleSet,
        results_dir: &Path,
        key: &str,
        missing_value: &str,
    ) -> Result<Self> {
        let mut values = BTreeMap::new();

        for rule in rules.entries() {
            let path = rule.result_path(results_dir);
            let value = result_file::read_value(&path, key)?
                .unwrap_or_else(|| missing_value.to_string());
            values.insert(rule.result_file_name(), value);
        }

        Ok(Self { values })
    }

    /// Scan the configured rules directory and collect `key` from `results_dir`.
    pub fn aggregate(config: &ProjectConfig, key: &str, results_dir: &Path) -> Result<Self> {
        let rules = RuleSet::scan(&config.rules_dir)?;
        Self::collect(&rules, results_dir, key, &config.missing_value)
    }

    /// Number of recorded values
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no rules were found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value recorded for a result file name
    #[must_use]
    pub fn get(&self, result_file: impl AsRef<OsStr>) -> Option<&str> {
        self.values.get(result_file.as_ref()).map(String::as_str)
    }

    /// `(result file name, value)` pairs in output order
    pub fn iter(&self) -> impl Iterator<Item = (Cow<'_, str>, &str)> {
        self.values.iter().map(|(k, v)| (k.to_string_lossy(), v.as_str()))
    }

    /// Values joined as `v1; v2; ...; ` in result file name order.
    ///
    /// The trailing separator is part of the format.
    #[must_use]
    pub fn line(&self) -> String {
        join_with_trailing(self.values.values())
    }

    /// Rule names in the same order as [`Summary::line`].
    #[must_use]
    pub fn header(&self) -> String {
        join_with_trailing(
            self.values
                .keys()
                .map(|k| paths::rule_name_of(&k.to_string_lossy()).to_string()),
        )
    }
}

impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (file, value) in self.iter() {
            map.serialize_entry(&file, value)?;
        }
        map.end()
    }
}

fn join_with_trailing<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items.into_iter().fold(String::new(), |mut out, item| {
        out.push_str(item.as_ref());
        out.push_str(SEPARATOR);
        out
    })
}
