use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;
use rustpython_parser::ast::{Stmt, StmtKind};

use crate::ast::helpers::{find_marker_class, member_function_names};
use crate::ast::types::Range;
use crate::checks::{Check, CheckKind};
use crate::source_code_locator::SourceCodeLocator;

/// The deprecated single-argument evaluator construction, detected by raw
/// substring over the handler's source (it can hit comments and miss
/// aliases, like the upstream checker).
const BARE_EVALUATOR_CALL: &str = "Evaluator(my_rule)";

const PARAMETER_ERROR: &str = "InvalidParametersError";

static NO_PARAMETERS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)Rule Parameters:\n\s*None$").unwrap());

/// Whether the rule declares parameters. A `Rule Parameters:` section whose
/// next line is exactly `None` means no parameters; a module without a
/// docstring defaults to parameters being required.
pub fn has_parameters(docstring: Option<&str>) -> bool {
    docstring.map_or(true, |doc| !NO_PARAMETERS_REGEX.is_match(doc))
}

/// C5002 (module pass): verify the evaluator members of the rule class, and
/// that parameter validation raises the rdklib error type somewhere in the
/// module.
pub fn evaluator_functions(
    body: &[Stmt],
    docstring: Option<&str>,
    contents: &str,
    marker: &str,
) -> Vec<Check> {
    let Some(class_def) = find_marker_class(body, marker) else {
        return vec![];
    };
    let StmtKind::ClassDef {
        body: class_body, ..
    } = &class_def.node
    else {
        return vec![];
    };

    let has_parameters = has_parameters(docstring);
    let members: FxHashSet<&str> = member_function_names(class_body).into_iter().collect();

    let mut checks = vec![];
    if has_parameters && !members.contains("evaluate_parameters") {
        checks.push(Check::new(
            CheckKind::RdkFunctionsNotUpToDate("'evaluate_parameters' is not included".to_string()),
            Range::module(),
        ));
    }
    if !members.contains("evaluate_change") && !members.contains("evaluate_periodic") {
        checks.push(Check::new(
            CheckKind::RdkFunctionsNotUpToDate(
                "'evaluate_change' or 'evaluate_periodic' is not included".to_string(),
            ),
            Range::module(),
        ));
    }
    if has_parameters && !contents.contains(PARAMETER_ERROR) {
        checks.push(Check::new(
            CheckKind::RdkFunctionsNotUpToDate(
                "'InvalidParametersError' is not used for evaluating parameters".to_string(),
            ),
            Range::module(),
        ));
    }
    checks
}

/// C5002 (function pass): flag `lambda_handler` definitions that construct
/// the evaluator without a resource type list. Applies at any nesting depth,
/// marker class or not.
pub fn stale_evaluator_call(
    stmt: &Stmt,
    name: &str,
    locator: &SourceCodeLocator,
) -> Option<Check> {
    if name != "lambda_handler" {
        return None;
    }
    if locator
        .slice_source_code_range(&Range::from_located(stmt))
        .contains(BARE_EVALUATOR_CALL)
    {
        return Some(Check::new(
            CheckKind::RdkFunctionsNotUpToDate(
                "No resource type for Evaluator in lambda_handler".to_string(),
            ),
            Range::from_located(stmt),
        ));
    }
    None
}
