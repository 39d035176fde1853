use super::class::ClassDecl;
use super::expression::Expr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Let,
    Const,
    Var,
}

/// Statement AST nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    ExprStmt(Expr),
    VarDecl {
        kind: VarKind,
        name: String,
        init: Option<Expr>,
    },
    Class(ClassDecl),
}
