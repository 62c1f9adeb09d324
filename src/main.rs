use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use glob::Pattern;
use log::{debug, error};

use rdklint::cli::{extract_log_level, Cli};
use rdklint::linter::lint_path;
use rdklint::logging::set_up_logging;
use rdklint::message::Message;
use rdklint::printer::Printer;
use rdklint::settings::Settings;
use rdklint::{fs, pyproject};

fn inner_main() -> Result<ExitCode> {
    let cli = Cli::parse();
    set_up_logging(&extract_log_level(&cli))?;

    // Find the project root and pyproject.toml.
    let project_root = pyproject::find_project_root(&cli.files);
    match &project_root {
        Some(path) => debug!("Found project root at: {path:?}"),
        None => debug!("Unable to identify project root; assuming current directory..."),
    };
    let pyproject_path = cli
        .config
        .clone()
        .or_else(|| pyproject::find_pyproject_toml(project_root.as_ref()));
    let config = pyproject::load_config(pyproject_path.as_ref())?;
    let mut settings = Settings::from_config(config, project_root.as_deref())?;

    // Apply command-line overrides.
    if !cli.select.is_empty() {
        settings.select(cli.select.clone());
    }
    if !cli.ignore.is_empty() {
        settings.ignore(&cli.ignore);
    }
    if !cli.exclude.is_empty() {
        settings.exclude = cli
            .exclude
            .iter()
            .map(|pattern| Pattern::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;
    }
    if let Some(rule_base) = &cli.rule_base {
        settings.rule_base_class = rule_base.clone();
    }

    let paths: Vec<PathBuf> = cli
        .files
        .iter()
        .flat_map(|path| fs::iter_python_files(path, &settings.exclude))
        .map(|entry| entry.into_path())
        .collect();

    let mut messages: Vec<Message> = vec![];
    for path in &paths {
        match lint_path(path, &settings) {
            Ok(file_messages) => messages.extend(file_messages),
            Err(err) => error!("Failed to check {}: {err:?}", path.to_string_lossy()),
        }
    }
    messages.sort();

    Printer::new(io::stdout().lock(), cli.format).write_once(&messages)?;

    if !messages.is_empty() && !cli.exit_zero {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    match inner_main() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:?}", "error".red().bold());
            ExitCode::FAILURE
        }
    }
}
