//! Result file scanning
//!
//! A result file holds one record per line, whitespace separated:
//!
//! ```text
//! Time-Positive: 12.5
//! Timeout: 0
//! ```
//!
//! A line only counts when it has at least two tokens and its first token is
//! exactly `<key>:`. A lone `\r` also ends a line. When the key appears
//! more than once the last line wins.

use std::fs;
use std::path::Path;

use crate::error::{CombineError, Result};

/// Token that marks a line as carrying `key`
#[must_use]
pub fn key_token(key: &str) -> String {
    format!("{key}:")
}

/// Find the value for `key` in result file text.
///
/// Returns the second token of the last line whose first token is `<key>:`.
/// `\n`, `\r\n` and a lone `\r` all end a line.
///
/// ```
/// use rulestat::result_file::extract_value;
///
/// let text = "score: 1\nother: 7\nscore: 2 ms\n";
/// assert_eq!(extract_value(text, "score"), Some("2"));
/// assert_eq!(extract_value(text, "missing"), None);
/// ```
#[must_use]
pub fn extract_value<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    let token = key_token(key);
    let mut found = None;

    // Empty pieces between \r and \n have no tokens and are skipped below.
    for line in content.split(['\n', '\r']) {
        let mut tokens = line.split_whitespace();
        let (Some(first), Some(second)) = (tokens.next(), tokens.next()) else {
            continue;
        };
        if first == token {
            found = Some(second);
        }
    }

    found
}

/// Read a result file and extract the value for `key`.
///
/// The file is read whole and closed before returning. A missing or
/// unreadable file is an error.
pub fn read_value(path: &Path, key: &str) -> Result<Option<String>> {
    let content = fs::read_to_string(path).map_err(|source| CombineError::ResultFile {
        path: path.to_path_buf(),
        source,
    })?;
    let value = extract_value(&content, key).map(str::to_string);

    match &value {
        Some(v) => log::debug!("{}: {key} = {v}", path.display()),
        None => log::debug!("{}: {key} not present", path.display()),
    }

    Ok(value)
}
