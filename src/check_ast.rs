use rustpython_parser::ast::{Stmt, StmtKind, Suite};

use crate::checks::{Check, CheckCode};
use crate::docstrings;
use crate::settings::Settings;
use crate::source_code_locator::SourceCodeLocator;
use crate::visitor::{walk_stmt, Visitor};
use crate::{gherkin, rdk_functions, testcase_naming};

pub struct Checker<'a> {
    contents: &'a str,
    settings: &'a Settings,
    locator: &'a SourceCodeLocator<'a>,
    checks: Vec<Check>,
}

impl<'a> Checker<'a> {
    pub fn new(
        contents: &'a str,
        settings: &'a Settings,
        locator: &'a SourceCodeLocator<'a>,
    ) -> Self {
        Checker {
            contents,
            settings,
            locator,
            checks: vec![],
        }
    }
}

impl Visitor for Checker<'_> {
    fn visit_stmt(&mut self, stmt: &Stmt) {
        if self.settings.select.contains(&CheckCode::C5002) {
            if let StmtKind::FunctionDef { name, .. } | StmtKind::AsyncFunctionDef { name, .. } =
                &stmt.node
            {
                if let Some(check) =
                    rdk_functions::checks::stale_evaluator_call(stmt, name, self.locator)
                {
                    self.checks.push(check);
                }
            }
        }
        walk_stmt(self, stmt);
    }
}

/// Run all AST-based checks over a parsed module in a single pass.
pub fn check_ast(
    python_ast: &Suite,
    contents: &str,
    locator: &SourceCodeLocator,
    settings: &Settings,
) -> Vec<Check> {
    let mut checker = Checker::new(contents, settings, locator);
    let docstring = docstrings::module_docstring(python_ast);

    if checker.settings.select.contains(&CheckCode::C5001) {
        checker.checks.extend(gherkin::checks::gherkin_doc(
            python_ast,
            docstring,
            &checker.settings.rule_base_class,
        ));
    }
    if checker.settings.select.contains(&CheckCode::C5002) {
        checker.checks.extend(rdk_functions::checks::evaluator_functions(
            python_ast,
            docstring,
            checker.contents,
            &checker.settings.rule_base_class,
        ));
    }
    if checker.settings.select.contains(&CheckCode::C5003) {
        checker.checks.extend(testcase_naming::checks::testcase_names(
            python_ast,
            checker.contents,
        ));
    }

    for stmt in python_ast {
        checker.visit_stmt(stmt);
    }

    checker.checks
}
