use std::path::PathBuf;

use clap::{command, Parser};

use crate::checks::CheckCode;
use crate::logging::LogLevel;
use crate::printer::SerializationFormat;

#[derive(Debug, Parser)]
#[command(author, about = "rdklint: a linter for AWS Config rules written with rdklib.")]
#[command(version)]
pub struct Cli {
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Path to the `pyproject.toml` file to use for configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Enable verbose logging.
    #[arg(short, long, group = "verbosity")]
    pub verbose: bool,
    /// Only log errors.
    #[arg(short, long, group = "verbosity")]
    pub quiet: bool,
    /// Disable all logging (but still exit with status code "1" upon detecting
    /// errors).
    #[arg(short, long, group = "verbosity")]
    pub silent: bool,
    /// Exit with status code "0", even upon detecting errors.
    #[arg(short, long)]
    pub exit_zero: bool,
    /// List of check codes to enable.
    #[arg(long, value_delimiter = ',')]
    pub select: Vec<CheckCode>,
    /// List of check codes to ignore.
    #[arg(long, value_delimiter = ',')]
    pub ignore: Vec<CheckCode>,
    /// List of paths, used to exclude files and/or directories from checks.
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,
    /// The base class marking a class definition as a Config rule.
    #[arg(long)]
    pub rule_base: Option<String>,
    /// Output serialization format for error messages.
    #[arg(long, value_enum, default_value_t = SerializationFormat::Text)]
    pub format: SerializationFormat,
}

/// Map the CLI settings to a `LogLevel`.
pub fn extract_log_level(cli: &Cli) -> LogLevel {
    if cli.silent {
        LogLevel::Silent
    } else if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else if matches!(cli.format, SerializationFormat::Json) {
        LogLevel::Quiet
    } else {
        LogLevel::Default
    }
}
