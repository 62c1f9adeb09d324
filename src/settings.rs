use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{anyhow, Result};
use glob::Pattern;

use crate::checks::CheckCode;
use crate::pyproject::Config;

/// The base class that marks a class definition as a Config rule.
pub const DEFAULT_RULE_BASE_CLASS: &str = "ConfigRule";

#[derive(Debug)]
pub struct Settings {
    pub exclude: Vec<Pattern>,
    pub select: BTreeSet<CheckCode>,
    pub rule_base_class: String,
}

impl Settings {
    pub fn from_config(config: Config, project_root: Option<&Path>) -> Result<Self> {
        let Config {
            select,
            ignore,
            exclude,
            rule_base_class,
        } = config;
        let mut settings = Settings {
            exclude: exclude
                .unwrap_or_default()
                .into_iter()
                .map(|pattern| {
                    let path = Path::new(&pattern);
                    let absolute = match project_root {
                        Some(root) if path.is_relative() => root.join(path),
                        _ => path.to_path_buf(),
                    };
                    Pattern::new(&absolute.to_string_lossy())
                        .map_err(|err| anyhow!("Invalid exclude pattern '{pattern}': {err}"))
                })
                .collect::<Result<Vec<_>>>()?,
            select: BTreeSet::from_iter(select.unwrap_or_else(CheckCode::all)),
            rule_base_class: rule_base_class
                .unwrap_or_else(|| DEFAULT_RULE_BASE_CLASS.to_string()),
        };
        if let Some(ignore) = ignore {
            settings.ignore(&ignore);
        }
        Ok(settings)
    }

    pub fn for_rule(check_code: CheckCode) -> Self {
        Settings {
            exclude: vec![],
            select: BTreeSet::from([check_code]),
            rule_base_class: DEFAULT_RULE_BASE_CLASS.to_string(),
        }
    }

    pub fn for_rules(check_codes: Vec<CheckCode>) -> Self {
        Settings {
            exclude: vec![],
            select: BTreeSet::from_iter(check_codes),
            rule_base_class: DEFAULT_RULE_BASE_CLASS.to_string(),
        }
    }

    pub fn select(&mut self, codes: Vec<CheckCode>) {
        self.select.clear();
        for code in codes {
            self.select.insert(code);
        }
    }

    pub fn ignore(&mut self, codes: &[CheckCode]) {
        for code in codes {
            self.select.remove(code);
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            exclude: vec![],
            select: BTreeSet::from_iter(CheckCode::all()),
            rule_base_class: DEFAULT_RULE_BASE_CLASS.to_string(),
        }
    }
}
