#![allow(clippy::collapsible_if, clippy::collapsible_else_if)]

use std::path::Path;

use anyhow::Result;

use crate::checks::Check;
use crate::settings::Settings;

pub mod ast;
pub mod check_ast;
pub mod checks;
pub mod cli;
mod docstrings;
pub mod fs;
mod gherkin;
pub mod linter;
pub mod logging;
pub mod message;
pub mod printer;
pub mod pyproject;
mod rdk_functions;
pub mod settings;
pub mod source_code_locator;
mod testcase_naming;
mod visitor;

/// Run rdklint over Python source code directly.
pub fn check(path: &Path, contents: &str, settings: &Settings) -> Result<Vec<Check>> {
    linter::check_path(path, contents, settings)
}
