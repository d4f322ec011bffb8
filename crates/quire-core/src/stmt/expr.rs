use super::*;

use std::fmt;

#[derive(Clone, PartialEq)]
pub enum Expr {
    /// AND a set of binary expressions
    And(ExprAnd),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// References a column of a table in the statement
    Column(ExprColumn),

    /// OR a set of binary expressions
    Or(ExprOr),

    /// A named parameter, bound when the statement is executed
    Param(ExprParam),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    /// Returns true if the expression is the constant `true`.
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Value(value) if value.is_true())
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl Node for Expr {
    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_expr(self);
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And(e) => fmt::Debug::fmt(e, f),
            Self::BinaryOp(e) => fmt::Debug::fmt(e, f),
            Self::Column(e) => fmt::Debug::fmt(e, f),
            Self::Or(e) => fmt::Debug::fmt(e, f),
            Self::Param(e) => fmt::Debug::fmt(e, f),
            Self::Value(e) => fmt::Debug::fmt(e, f),
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}

impl From<u32> for Expr {
    fn from(value: u32) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<&Expr> for Expr {
    fn from(value: &Expr) -> Self {
        value.clone()
    }
}
