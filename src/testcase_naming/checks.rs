use itertools::Itertools;
use rustpython_parser::ast::{Stmt, StmtKind};

use crate::ast::types::Range;
use crate::checks::{Check, CheckKind};

/// Naming checks only fire in files that exercise the unit-test framework.
pub const UNITTEST_IMPORT: &str = "import unittest";

const TEST_PREFIX: &str = "test_";

/// Allowed values for the method-name field (third field).
const METHOD_NAMES: [&str; 3] = ["evaluatePeriodic", "evaluateParameters", "evaluateChange"];

/// Allowed values for the output-result field (fifth field).
const OUTPUT_RESULTS: [&str; 4] = [
    "returnsNonCompliant",
    "returnsCompliant",
    "returnsNotApplicable",
    "raisesException",
];

fn quoted_list(values: &[&str]) -> String {
    values.iter().map(|value| format!("'{value}'")).join(", ")
}

/// Check a single `test_`-prefixed method name against the five-field
/// schema. A wrong field count short-circuits the per-field checks; the
/// per-field checks themselves are independent.
fn test_method_name(func: &Stmt, name: &str) -> Vec<Check> {
    let fields: Vec<&str> = name.split('_').collect();
    if fields.len() != 5 {
        return vec![Check::new(
            CheckKind::TestCaseNamingNotCompliant(
                "Test case name should have 5 fields \
                 test_<scenarioName>_<methodName>_<inputConditions>_<outputResult>"
                    .to_string(),
            ),
            Range::from_located(func),
        )];
    }

    let mut checks = vec![];
    if !fields[1].starts_with("scenario") {
        checks.push(Check::new(
            CheckKind::TestCaseNamingNotCompliant(
                "Second field in test case name should be <scenarioName>".to_string(),
            ),
            Range::from_located(func),
        ));
    }
    if !METHOD_NAMES.contains(&fields[2]) {
        checks.push(Check::new(
            CheckKind::TestCaseNamingNotCompliant(format!(
                "Third field in test case name should be <methodName> from {}",
                quoted_list(&METHOD_NAMES)
            )),
            Range::from_located(func),
        ));
    }
    if !OUTPUT_RESULTS.contains(&fields[4]) {
        checks.push(Check::new(
            CheckKind::TestCaseNamingNotCompliant(format!(
                "Fifth field in test case name should be <outputResult> from {}",
                quoted_list(&OUTPUT_RESULTS)
            )),
            Range::from_located(func),
        ));
    }
    checks
}

/// C5003: check every `test_` method of every top-level class.
pub fn testcase_names(body: &[Stmt], contents: &str) -> Vec<Check> {
    if !contents.contains(UNITTEST_IMPORT) {
        return vec![];
    }

    let mut checks = vec![];
    for stmt in body {
        if let StmtKind::ClassDef {
            body: class_body, ..
        } = &stmt.node
        {
            for member in class_body {
                if let StmtKind::FunctionDef { name, .. }
                | StmtKind::AsyncFunctionDef { name, .. } = &member.node
                {
                    if name.starts_with(TEST_PREFIX) {
                        checks.extend(test_method_name(member, name));
                    }
                }
            }
        }
    }
    checks
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use rustpython_parser::parser;
    use test_case::test_case;

    use super::testcase_names;
    use crate::checks::CheckKind;

    fn checks_for(name: &str) -> Result<Vec<CheckKind>> {
        let contents = format!(
            "import unittest\nclass ComplianceTest(unittest.TestCase):\n    def {name}(self):\n        pass\n"
        );
        let suite = parser::parse_program(&contents, "<filename>")?;
        Ok(testcase_names(&suite, &contents)
            .into_iter()
            .map(|check| check.kind)
            .collect())
    }

    #[test]
    fn compliant_name_passes() -> Result<()> {
        assert!(checks_for("test_scenario1_evaluateChange_stoppedInstance_returnsCompliant")?
            .is_empty());
        Ok(())
    }

    #[test_case("test_scenario1_evaluateChange_returnsCompliant"; "four fields")]
    #[test_case("test_scenario1_evaluateChange_stopped_instance_returnsCompliant"; "six fields")]
    fn wrong_field_count_short_circuits(name: &str) -> Result<()> {
        let checks = checks_for(name)?;
        assert_eq!(checks.len(), 1);
        assert_eq!(
            checks[0],
            CheckKind::TestCaseNamingNotCompliant(
                "Test case name should have 5 fields \
                 test_<scenarioName>_<methodName>_<inputConditions>_<outputResult>"
                    .to_string()
            )
        );
        Ok(())
    }

    #[test]
    fn field_checks_are_independent() -> Result<()> {
        // All three fields are wrong at once; all three are reported.
        let checks = checks_for("test_abc_evaluateChanges_stoppedInstance_Compliant")?;
        assert_eq!(checks.len(), 3);
        Ok(())
    }

    #[test]
    fn non_test_methods_are_ignored() -> Result<()> {
        assert!(checks_for("setUp")?.is_empty());
        assert!(checks_for("helper_for_tests")?.is_empty());
        Ok(())
    }

    #[test]
    fn requires_unittest_import() -> Result<()> {
        let contents = "class ComplianceTest:\n    def test_bad(self):\n        pass\n";
        let suite = parser::parse_program(contents, "<filename>")?;
        assert!(testcase_names(&suite, contents).is_empty());
        Ok(())
    }
}
