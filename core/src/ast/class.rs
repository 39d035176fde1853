use super::decorator::Decorator;
use super::expression::Expr;

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: String,
    pub parent: Option<Expr>,
    pub decorators: Vec<Decorator>,
    /// Evaluates to the host callable backing the constructor.
    pub constructor: Option<Expr>,
    pub members: Vec<ClassMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassMember {
    pub key: String,
    pub kind: ClassMemberKind,
    pub is_static: bool,
    /// Method/accessor implementation, or field initializer.
    pub value: Expr,
    pub decorators: Vec<Decorator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassMemberKind {
    Method,
    Getter,
    Setter,
    Field,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            decorators: Vec::new(),
            constructor: None,
            members: Vec::new(),
        }
    }
}

impl ClassMember {
    pub fn new(key: impl Into<String>, kind: ClassMemberKind, value: Expr) -> Self {
        Self {
            key: key.into(),
            kind,
            is_static: false,
            value,
            decorators: Vec::new(),
        }
    }
}
