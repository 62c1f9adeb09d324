use std::cmp::Ordering;
use std::fmt;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::checks::{Check, CheckKind, Confidence};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub kind: CheckKind,
    pub confidence: Confidence,
    pub filename: String,
    pub row: usize,
    pub column: usize,
}

impl Message {
    /// Lift a `Check` into a filename-qualified message. Columns shift to
    /// one-based for reporting.
    pub fn from_check(check: Check, filename: String) -> Self {
        Self {
            confidence: check.kind.confidence(),
            kind: check.kind,
            filename,
            row: check.location.row(),
            column: check.location.column() + 1,
        }
    }
}

impl Ord for Message {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.filename, self.row, self.column).cmp(&(&other.filename, other.row, other.column))
    }
}

impl PartialOrd for Message {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}{} {} {}",
            self.filename.white().bold(),
            ":".cyan(),
            self.row,
            ":".cyan(),
            self.column,
            ":".cyan(),
            self.kind.code().as_str().red().bold(),
            self.kind.body(),
        )
    }
}
