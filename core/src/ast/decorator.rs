use miette::SourceSpan;

use super::expression::Expr;

/// Byte offset and length of a node in its source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        (span.offset, span.len).into()
    }
}

/// One `@expr` entry of a decorator list.
#[derive(Debug, Clone, PartialEq)]
pub struct Decorator {
    pub expression: Expr,
    /// Analysis-only decorator; kept in the tree but never evaluated.
    pub ambient: bool,
    pub span: Option<Span>,
}

impl Decorator {
    pub fn new(expression: Expr) -> Self {
        Self {
            expression,
            ambient: false,
            span: None,
        }
    }

    pub fn ambient(expression: Expr) -> Self {
        Self {
            ambient: true,
            ..Self::new(expression)
        }
    }

    pub fn with_span(mut self, offset: usize, len: usize) -> Self {
        self.span = Some(Span { offset, len });
        self
    }
}
