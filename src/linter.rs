use std::path::Path;

use anyhow::Result;
use rustpython_parser::parser;

use crate::check_ast::check_ast;
use crate::checks::Check;
use crate::message::Message;
use crate::settings::Settings;
use crate::source_code_locator::SourceCodeLocator;

/// Lint one module: parse it and run the AST checks over it.
pub fn check_path(path: &Path, contents: &str, settings: &Settings) -> Result<Vec<Check>> {
    let python_ast = parser::parse_program(contents, &path.to_string_lossy())?;
    let locator = SourceCodeLocator::new(contents);
    Ok(check_ast(&python_ast, contents, &locator, settings))
}

/// Lint one file from disk, producing location-sorted messages.
pub fn lint_path(path: &Path, settings: &Settings) -> Result<Vec<Message>> {
    let contents = crate::fs::read_file(path)?;
    let mut messages: Vec<Message> = check_path(path, &contents, settings)?
        .into_iter()
        .map(|check| Message::from_check(check, path.to_string_lossy().to_string()))
        .collect();
    messages.sort();
    Ok(messages)
}

#[cfg(test)]
pub fn test_path(path: &Path, settings: &Settings) -> Result<Vec<Check>> {
    let contents = crate::fs::read_file(path)?;
    check_path(path, &contents, settings)
}
