use rustpython_parser::ast::{Constant, ExprKind, Stmt, StmtKind};

/// Extract the module docstring: the leading statement, when it is a string
/// constant expression.
pub fn module_docstring(body: &[Stmt]) -> Option<&str> {
    let stmt = body.first()?;
    if let StmtKind::Expr { value } = &stmt.node {
        if let ExprKind::Constant {
            value: Constant::Str(string),
            ..
        } = &value.node
        {
            return Some(string);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use rustpython_parser::parser;

    use super::module_docstring;

    #[test]
    fn leading_string_is_the_docstring() -> Result<()> {
        let suite = parser::parse_program("\"\"\"Rule Name:\n  X\n\"\"\"\nimport json\n", "<filename>")?;
        assert_eq!(module_docstring(&suite), Some("Rule Name:\n  X\n"));
        Ok(())
    }

    #[test]
    fn no_docstring() -> Result<()> {
        let suite = parser::parse_program("import json\n\"\"\"late\"\"\"\n", "<filename>")?;
        assert_eq!(module_docstring(&suite), None);
        Ok(())
    }

    #[test]
    fn empty_module() -> Result<()> {
        let suite = parser::parse_program("", "<filename>")?;
        assert_eq!(module_docstring(&suite), None);
        Ok(())
    }
}
