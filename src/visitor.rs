use rustpython_parser::ast::{Stmt, StmtKind};

/// A statement-level visitor. Function definitions can be nested inside any
/// compound statement, so the walker recurses into every statement body.
pub trait Visitor {
    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt);
    }
}

pub fn walk_stmt<V: Visitor + ?Sized>(visitor: &mut V, stmt: &Stmt) {
    match &stmt.node {
        StmtKind::FunctionDef { body, .. }
        | StmtKind::AsyncFunctionDef { body, .. }
        | StmtKind::ClassDef { body, .. }
        | StmtKind::With { body, .. }
        | StmtKind::AsyncWith { body, .. } => {
            for stmt in body {
                visitor.visit_stmt(stmt);
            }
        }
        StmtKind::For { body, orelse, .. }
        | StmtKind::AsyncFor { body, orelse, .. }
        | StmtKind::While { body, orelse, .. }
        | StmtKind::If { body, orelse, .. } => {
            for stmt in body {
                visitor.visit_stmt(stmt);
            }
            for stmt in orelse {
                visitor.visit_stmt(stmt);
            }
        }
        StmtKind::Match { cases, .. } => {
            for match_case in cases {
                for stmt in &match_case.body {
                    visitor.visit_stmt(stmt);
                }
            }
        }
        StmtKind::Try {
            body,
            handlers,
            orelse,
            finalbody,
        } => {
            for stmt in body {
                visitor.visit_stmt(stmt);
            }
            for handler in handlers {
                match &handler.node {
                    rustpython_parser::ast::ExcepthandlerKind::ExceptHandler { body, .. } => {
                        for stmt in body {
                            visitor.visit_stmt(stmt);
                        }
                    }
                }
            }
            for stmt in orelse {
                visitor.visit_stmt(stmt);
            }
            for stmt in finalbody {
                visitor.visit_stmt(stmt);
            }
        }
        _ => {}
    }
}
