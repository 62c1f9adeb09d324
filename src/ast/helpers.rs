use rustpython_parser::ast::{Expr, ExprKind, Stmt, StmtKind};

/// Return `true` if any base in the list is a plain-name reference to
/// `name`. Dotted bases (`rdklib.ConfigRule`) never match.
pub fn bases_include(bases: &[Expr], name: &str) -> bool {
    bases.iter().any(|base| {
        if let ExprKind::Name { id, .. } = &base.node {
            id == name
        } else {
            false
        }
    })
}

/// Find the first top-level class definition whose bases include the marker
/// base class. At most one class per module is ever matched.
pub fn find_marker_class<'a>(body: &'a [Stmt], marker: &str) -> Option<&'a Stmt> {
    body.iter().find(|stmt| {
        if let StmtKind::ClassDef { bases, .. } = &stmt.node {
            bases_include(bases, marker)
        } else {
            false
        }
    })
}

/// Collect the names of the function members of a class body.
pub fn member_function_names(body: &[Stmt]) -> Vec<&str> {
    body.iter()
        .filter_map(|stmt| match &stmt.node {
            StmtKind::FunctionDef { name, .. } | StmtKind::AsyncFunctionDef { name, .. } => {
                Some(name.as_str())
            }
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use rustpython_parser::parser;

    use super::{find_marker_class, member_function_names};

    #[test]
    fn first_marker_class_wins() -> Result<()> {
        let suite = parser::parse_program(
            "class A:\n    pass\n\nclass B(ConfigRule):\n    pass\n\nclass C(ConfigRule):\n    pass\n",
            "<filename>",
        )?;
        let stmt = find_marker_class(&suite, "ConfigRule").unwrap();
        assert_eq!(stmt.location.row(), 4);
        Ok(())
    }

    #[test]
    fn dotted_bases_never_match() -> Result<()> {
        let suite = parser::parse_program(
            "class RULE(rdklib.ConfigRule):\n    pass\n",
            "<filename>",
        )?;
        assert!(find_marker_class(&suite, "ConfigRule").is_none());
        Ok(())
    }

    #[test]
    fn member_names_skip_non_functions() -> Result<()> {
        let suite = parser::parse_program(
            "class RULE(ConfigRule):\n    x = 1\n    def evaluate_change(self):\n        pass\n    async def poll(self):\n        pass\n",
            "<filename>",
        )?;
        let stmt = find_marker_class(&suite, "ConfigRule").unwrap();
        if let rustpython_parser::ast::StmtKind::ClassDef { body, .. } = &stmt.node {
            assert_eq!(member_function_names(body), vec!["evaluate_change", "poll"]);
        } else {
            unreachable!();
        }
        Ok(())
    }
}
