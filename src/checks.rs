use std::fmt;
use std::str::FromStr;

use rustpython_parser::ast::Location;
use serde::{Deserialize, Serialize};

use crate::ast::types::Range;

#[derive(
    Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum CheckCode {
    C5001,
    C5002,
    C5003,
}

impl CheckCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckCode::C5001 => "C5001",
            CheckCode::C5002 => "C5002",
            CheckCode::C5003 => "C5003",
        }
    }

    /// The symbolic name for the check, as registered upstream.
    pub fn name(&self) -> &'static str {
        match self {
            CheckCode::C5001 => "gherkin-not-compliant",
            CheckCode::C5002 => "rdk-functions-not-up-to-date",
            CheckCode::C5003 => "testcase-naming-not-compliant",
        }
    }

    pub fn all() -> Vec<CheckCode> {
        vec![CheckCode::C5001, CheckCode::C5002, CheckCode::C5003]
    }
}

impl FromStr for CheckCode {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "C5001" => Ok(CheckCode::C5001),
            "C5002" => Ok(CheckCode::C5002),
            "C5003" => Ok(CheckCode::C5003),
            _ => Err(anyhow::anyhow!("Unknown check code: {string}")),
        }
    }
}

impl fmt::Display for CheckCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The confidence attached to a reported check. Every check in this linter
/// reports at `High` (no false positive expected from the matched pattern).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Confidence {
    High,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckKind {
    GherkinNotCompliant(String),
    RdkFunctionsNotUpToDate(String),
    TestCaseNamingNotCompliant(String),
}

impl CheckKind {
    /// The code for the check.
    pub fn code(&self) -> &'static CheckCode {
        match self {
            CheckKind::GherkinNotCompliant(..) => &CheckCode::C5001,
            CheckKind::RdkFunctionsNotUpToDate(..) => &CheckCode::C5002,
            CheckKind::TestCaseNamingNotCompliant(..) => &CheckCode::C5003,
        }
    }

    /// The body text for the check.
    pub fn body(&self) -> String {
        match self {
            CheckKind::GherkinNotCompliant(reason) => {
                format!("Gherkin is not compliant: \"{reason}\"")
            }
            CheckKind::RdkFunctionsNotUpToDate(reason) => {
                format!("rdk functions not up to date: \"{reason}\"")
            }
            CheckKind::TestCaseNamingNotCompliant(reason) => {
                format!("Test case name is not compliant: \"{reason}\"")
            }
        }
    }

    /// The confidence level for the check.
    pub fn confidence(&self) -> Confidence {
        match self {
            CheckKind::GherkinNotCompliant(..)
            | CheckKind::RdkFunctionsNotUpToDate(..)
            | CheckKind::TestCaseNamingNotCompliant(..) => Confidence::High,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Check {
    pub kind: CheckKind,
    pub location: Location,
    pub end_location: Location,
}

impl Check {
    pub fn new(kind: CheckKind, range: Range) -> Self {
        Self {
            kind,
            location: range.location,
            end_location: range.end_location,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{CheckCode, CheckKind, Confidence};

    #[test]
    fn code_round_trip() {
        for code in CheckCode::all() {
            assert_eq!(CheckCode::from_str(code.as_str()).unwrap(), code);
        }
        assert!(CheckCode::from_str("C9999").is_err());
    }

    #[test]
    fn bodies_embed_the_reason() {
        let kind = CheckKind::GherkinNotCompliant("'Rule Name' is not included".to_string());
        assert_eq!(
            kind.body(),
            "Gherkin is not compliant: \"'Rule Name' is not included\""
        );
        assert_eq!(kind.code(), &CheckCode::C5001);
        assert_eq!(kind.confidence(), Confidence::High);
    }
}
