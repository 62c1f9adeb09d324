use std::path::{Path, PathBuf};

use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::checks::CheckCode;
use crate::fs;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    pub select: Option<Vec<CheckCode>>,
    pub ignore: Option<Vec<CheckCode>>,
    pub exclude: Option<Vec<String>>,
    #[serde(rename = "rule-base-class")]
    pub rule_base_class: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Tools {
    rdklint: Option<Config>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Pyproject {
    tool: Option<Tools>,
}

fn parse_pyproject_toml(path: &Path) -> Result<Pyproject> {
    let contents = fs::read_file(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Find the project root: the closest ancestor of the first source that
/// holds a `pyproject.toml`.
pub fn find_project_root(sources: &[PathBuf]) -> Option<PathBuf> {
    let source = sources.first()?;
    let start = if source.is_dir() {
        source.as_path()
    } else {
        source.parent()?
    };
    for directory in start.ancestors() {
        if directory.join("pyproject.toml").is_file() {
            return Some(directory.to_path_buf());
        }
    }
    None
}

pub fn find_pyproject_toml(project_root: Option<&PathBuf>) -> Option<PathBuf> {
    let path = project_root?.join("pyproject.toml");
    path.is_file().then_some(path)
}

/// Load the `[tool.rdklint]` table, falling back to the default
/// configuration when no file (or no table) is present.
pub fn load_config(pyproject: Option<&PathBuf>) -> Result<Config> {
    match pyproject {
        Some(path) => {
            debug!("Loading configuration from: {}", path.to_string_lossy());
            Ok(parse_pyproject_toml(path)?
                .tool
                .and_then(|tool| tool.rdklint)
                .unwrap_or_default())
        }
        None => {
            debug!("No pyproject.toml found; using default configuration...");
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::{Config, Pyproject};
    use crate::checks::CheckCode;

    #[test]
    fn parse_tool_table() -> Result<()> {
        let pyproject: Pyproject = toml::from_str(
            "[tool.rdklint]\nselect = [\"C5001\", \"C5003\"]\nexclude = [\"build/*\"]\nrule-base-class = \"ConfigRule\"\n",
        )?;
        let config = pyproject.tool.and_then(|tool| tool.rdklint).unwrap();
        assert_eq!(
            config,
            Config {
                select: Some(vec![CheckCode::C5001, CheckCode::C5003]),
                ignore: None,
                exclude: Some(vec!["build/*".to_string()]),
                rule_base_class: Some("ConfigRule".to_string()),
            }
        );
        Ok(())
    }

    #[test]
    fn missing_table_is_default() -> Result<()> {
        let pyproject: Pyproject = toml::from_str("[tool.other]\nkey = 1\n")?;
        assert_eq!(pyproject.tool.and_then(|tool| tool.rdklint), None);
        Ok(())
    }
}
