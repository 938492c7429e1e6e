//! CLI definitions and entry point

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use rulestat::ProjectConfig;
use rulestat::output::{OutputMode, SummaryReport};
use rulestat::summary::Summary;

/// Usage line printed when a positional argument is missing
pub const USAGE: &str = "rulestat <Stat> <Result-Folder>";

/// rulestat - one statistic per rule, as a single summary line
#[derive(Parser, Debug)]
#[command(
    name = "rulestat",
    version,
    about = "Collect one statistic per rule from ruleset result files",
    long_about = "Collect one statistic per rule from ruleset result files.\n\n\
                  For every file in the rules directory, reads <rule>.result from the\n\
                  result folder and prints the value of the '<Stat>:' line, or 'none'."
)]
pub struct Cli {
    /// Statistic key to look up (matched as '<Stat>:')
    #[arg(value_name = "Stat")]
    pub stat: Option<String>,

    /// Folder containing the <rule>.result files
    #[arg(value_name = "Result-Folder")]
    pub results_dir: Option<PathBuf>,

    /// Further positional arguments are accepted and ignored
    #[arg(hide = true)]
    pub ignored: Vec<String>,

    /// Rules directory (default: RuleSets, or rules_dir from rulestat.toml)
    #[arg(long, value_name = "DIR")]
    pub rules_dir: Option<PathBuf>,

    /// Print the rule names on a line above the values
    #[arg(long)]
    pub header: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the summary, so only warnings reach stderr by default
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if !cli.ignored.is_empty() {
        log::debug!("ignoring extra arguments: {:?}", cli.ignored);
    }

    let (Some(stat), Some(results_dir)) = (cli.stat, cli.results_dir) else {
        println!("{USAGE}");
        std::process::exit(1);
    };

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = ProjectConfig::load(Path::new("."))?.with_rules_dir(cli.rules_dir);
    log::debug!(
        "collecting '{stat}' from {} for rules in {}",
        results_dir.display(),
        config.rules_dir.display()
    );

    let summary = Summary::aggregate(&config, &stat, &results_dir)
        .with_context(|| format!("failed to collect '{stat}'"))?;

    let report = SummaryReport {
        stat,
        values: summary,
        header: cli.header,
    };
    report.render(output_mode)?;
    Ok(())
}
