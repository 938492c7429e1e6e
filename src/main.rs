//! rulestat - collect one statistic per rule from ruleset result files

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_debug_implementations,
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

mod cli;

use std::process;

use colored::Colorize;

/// Main entry point for the rulestat CLI
fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}
