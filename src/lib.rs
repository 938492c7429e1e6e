//! rulestat - collect one statistic per rule from ruleset result files
//!
//! An external evaluation run leaves one `<rule>.result` file per rule. This
//! library lists the rules directory, pulls the value of a `key:` line out of
//! each result file and renders them as one `;`-joined summary line.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

pub mod config;
pub mod error;
pub mod output;
pub mod paths;
pub mod result_file;
pub mod rules;
pub mod summary;

pub use config::ProjectConfig;
pub use error::CombineError;
pub use summary::Summary;
