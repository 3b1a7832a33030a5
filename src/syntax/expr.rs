use std::fmt;

use super::token::{Literal, Token};
use crate::error::{ErrorKind, PResult};

/// Value held by a literal node. An absent value is `nul`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'src> {
    Number(f64),
    Str(&'src str),
    Boolean(bool),
}

impl<'src> From<Literal<'src>> for Value<'src> {
    fn from(literal: Literal<'src>) -> Self {
        match literal {
            Literal::Number(n) => Self::Number(n),
            Literal::Str(s) => Self::Str(s),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression<'src> {
    Literal(Option<Value<'src>>),
    Grouping(Box<Expression<'src>>),
    Unary {
        op: Token<'src>,
        rhs: Box<Expression<'src>>,
    },
    Binary {
        lhs: Box<Expression<'src>>,
        op: Token<'src>,
        rhs: Box<Expression<'src>>,
    },
}

impl<'src> Expression<'src> {
    pub fn literal(value: impl Into<Value<'src>>) -> Self {
        Self::Literal(Some(value.into()))
    }

    pub fn nul() -> Self {
        Self::Literal(None)
    }

    pub fn grouping(expr: Expression<'src>) -> Self {
        Self::Grouping(Box::new(expr))
    }

    /// Fails unless `op` is `-` or `!`.
    pub fn unary(op: Token<'src>, rhs: Expression<'src>) -> PResult<Self> {
        if !op.kind().is_prefix_operator() {
            return Err(ErrorKind::InvalidPrefixOperator(op.kind()));
        }
        Ok(Self::Unary {
            op,
            rhs: Box::new(rhs),
        })
    }

    pub fn binary(lhs: Expression<'src>, op: Token<'src>, rhs: Expression<'src>) -> Self {
        Self::Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }

    /// Dispatches to the visitor method matching this node's shape. Children
    /// are only visited if the visitor recurses into them.
    pub fn accept<R, V>(&self, visitor: &mut V) -> R
    where
        V: Visitor<'src, R> + ?Sized,
    {
        match self {
            Self::Literal(value) => visitor.visit_literal(value.as_ref()),
            Self::Grouping(expr) => visitor.visit_grouping(expr),
            Self::Unary { op, rhs } => visitor.visit_unary(op, rhs),
            Self::Binary { lhs, op, rhs } => visitor.visit_binary(lhs, op, rhs),
        }
    }
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl<'src> From<&'src str> for Value<'src> {
    fn from(s: &'src str) -> Self {
        Self::Str(s)
    }
}

/// One whole-tree operation. Implementations decide how (and whether) to
/// recurse; composite children should be visited left to right.
pub trait Visitor<'src, R> {
    fn visit_literal(&mut self, value: Option<&Value<'src>>) -> R;
    fn visit_grouping(&mut self, expr: &Expression<'src>) -> R;
    fn visit_unary(&mut self, op: &Token<'src>, rhs: &Expression<'src>) -> R;
    fn visit_binary(
        &mut self,
        lhs: &Expression<'src>,
        op: &Token<'src>,
        rhs: &Expression<'src>,
    ) -> R;
}
