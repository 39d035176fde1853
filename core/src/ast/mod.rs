//! Declaration AST consumed by the decorator core.
//!
//! Parsing is done elsewhere; these nodes are what a parser hands over once
//! decorator lists have been attached to their declarations.

mod class;
mod decorator;
mod expression;
mod literal;
mod object;
mod statement;

pub use class::{ClassDecl, ClassMember, ClassMemberKind};
pub use decorator::{Decorator, Span};
pub use expression::Expr;
pub use literal::Literal;
pub use object::{ObjectLiteral, ObjectMember, ObjectMemberKind};
pub use statement::{Stmt, VarKind};

/// A list of top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}
