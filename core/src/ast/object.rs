use super::decorator::Decorator;
use super::expression::Expr;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectLiteral {
    pub members: Vec<ObjectMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectMember {
    pub key: String,
    pub kind: ObjectMemberKind,
    pub value: Expr,
    pub decorators: Vec<Decorator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectMemberKind {
    /// `key: value`
    Property,
    Method,
    Getter,
    Setter,
}

impl ObjectMember {
    pub fn new(key: impl Into<String>, kind: ObjectMemberKind, value: Expr) -> Self {
        Self {
            key: key.into(),
            kind,
            value,
            decorators: Vec::new(),
        }
    }
}
