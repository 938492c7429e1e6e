//! Error types for the aggregator

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an aggregation run
#[derive(Debug, Error)]
pub enum CombineError {
    /// The rules directory could not be listed
    #[error("cannot read rules directory {path}")]
    RulesDir {
        /// Directory that was being listed
        path: PathBuf,
        /// Underlying walk error
        #[source]
        source: walkdir::Error,
    },

    /// The rules path exists but is not a directory
    #[error("rules path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A rule has no readable result file
    #[error("cannot read result file {path}")]
    ResultFile {
        /// Expected location of the result file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The project config exists but could not be read
    #[error("cannot read config {path}")]
    Config {
        /// Config file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The project config is not valid TOML for this tool
    #[error("invalid config {path}")]
    ConfigParse {
        /// Config file path
        path: PathBuf,
        /// TOML decoding error
        #[source]
        source: toml::de::Error,
    },
}

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, CombineError>;
