use once_cell::sync::Lazy;
use regex::Regex;
use rustpython_parser::ast::Stmt;

use crate::ast::helpers::find_marker_class;
use crate::ast::types::Range;
use crate::checks::{Check, CheckKind};

/// The labeled fields every Gherkin doc must carry, checked in this order.
const REQUIRED_FIELDS: [&str; 5] = [
    "Rule Name",
    "Description",
    "Reports on",
    "Rule Parameters",
    "Scenarios",
];

/// The line that opens the itemized scenario section. Matched exactly, with
/// no leading whitespace.
const SCENARIOS_HEADER: &str = "Scenarios:";

static SCENARIO_LINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(Scenario|Given|And|Then):").unwrap());

fn check_fields(doc: &str, checks: &mut Vec<Check>) {
    for field in REQUIRED_FIELDS {
        if !doc.contains(&format!("{field}:")) {
            checks.push(Check::new(
                CheckKind::GherkinNotCompliant(format!("'{field}' is not included")),
                Range::module(),
            ));
        }
    }
}

fn check_scenarios(doc: &str, checks: &mut Vec<Check>) {
    let mut in_scenarios = false;
    for line in doc.split('\n') {
        if in_scenarios && !line.trim().is_empty() && !SCENARIO_LINE_REGEX.is_match(line) {
            checks.push(Check::new(
                CheckKind::GherkinNotCompliant(format!(
                    "Scenario line '{line}' is not using the right Gherkin Format"
                )),
                Range::module(),
            ));
        }
        // The section opens on the line after the header; the header line
        // itself is never checked.
        if line == SCENARIOS_HEADER {
            in_scenarios = true;
        }
    }
}

/// C5001: verify the Gherkin documentation attached to a rule module.
pub fn gherkin_doc(body: &[Stmt], docstring: Option<&str>, marker: &str) -> Vec<Check> {
    if find_marker_class(body, marker).is_none() {
        return vec![];
    }

    let mut checks = vec![];
    match docstring {
        None => {
            checks.push(Check::new(
                CheckKind::GherkinNotCompliant("No Gherkin doc found".to_string()),
                Range::module(),
            ));
        }
        Some(doc) => {
            check_fields(doc, &mut checks);
            check_scenarios(doc, &mut checks);
        }
    }
    checks
}

#[cfg(test)]
mod tests {
    use super::{check_scenarios, SCENARIO_LINE_REGEX};

    #[test]
    fn scenario_line_grammar() {
        assert!(SCENARIO_LINE_REGEX.is_match("  Scenario: 1"));
        assert!(SCENARIO_LINE_REGEX.is_match("  Given: The security group is default"));
        assert!(SCENARIO_LINE_REGEX.is_match("      And: it has no attachments"));
        assert!(SCENARIO_LINE_REGEX.is_match("   Then: Return NOT_APPLICABLE"));
        assert!(!SCENARIO_LINE_REGEX.is_match("  Scenario 1:"));
        assert!(!SCENARIO_LINE_REGEX.is_match("  When: something happens"));
    }

    #[test]
    fn lines_before_the_header_are_ignored() {
        let mut checks = vec![];
        check_scenarios("anything goes here\nScenarios:\n  Scenario: 1\n", &mut checks);
        assert!(checks.is_empty());
    }

    #[test]
    fn indented_header_does_not_open_the_section() {
        let mut checks = vec![];
        check_scenarios("  Scenarios:\nnot a scenario line\n", &mut checks);
        assert!(checks.is_empty());
    }
}
