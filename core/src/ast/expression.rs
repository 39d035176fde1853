use std::fmt;

use super::literal::Literal;
use super::object::ObjectLiteral;

/// The expression subset decorator lists and member bodies are written in.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Identifier(String),
    MemberAccess {
        object: Box<Expr>,
        property: String,
    },
    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Object(ObjectLiteral),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(name.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Literal(Literal::String(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Expr::Literal(Literal::Number(value))
    }

    pub fn boolean(value: bool) -> Self {
        Expr::Literal(Literal::Boolean(value))
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn member(object: Expr, property: impl Into<String>) -> Self {
        Expr::MemberAccess {
            object: Box::new(object),
            property: property.into(),
        }
    }
}

/// Short source-like rendering, used in diagnostics and traces.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(Literal::Number(n)) => write!(f, "{n}"),
            Expr::Literal(Literal::String(s)) => write!(f, "{s:?}"),
            Expr::Literal(Literal::Boolean(b)) => write!(f, "{b}"),
            Expr::Literal(Literal::Null) => f.write_str("null"),
            Expr::Literal(Literal::Undefined) => f.write_str("undefined"),
            Expr::Identifier(name) => f.write_str(name),
            Expr::MemberAccess { object, property } => write!(f, "{object}.{property}"),
            Expr::Call { callee, args } => {
                write!(f, "{callee}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                f.write_str(")")
            }
            Expr::Object(_) => f.write_str("{ ... }"),
        }
    }
}
