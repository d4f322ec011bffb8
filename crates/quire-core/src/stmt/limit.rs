use super::{Expr, Node, Visit};

/// `LIMIT` with an optional `OFFSET`.
#[derive(Debug, Clone, PartialEq)]
pub struct Limit {
    pub limit: Expr,
    pub offset: Option<Expr>,
}

impl Limit {
    pub fn new(limit: impl Into<Expr>) -> Limit {
        Limit {
            limit: limit.into(),
            offset: None,
        }
    }

    pub fn offset(self, offset: impl Into<Expr>) -> Limit {
        Limit {
            offset: Some(offset.into()),
            ..self
        }
    }
}

impl From<Expr> for Limit {
    fn from(limit: Expr) -> Self {
        Limit::new(limit)
    }
}

impl From<i32> for Limit {
    fn from(limit: i32) -> Self {
        Limit::new(limit)
    }
}

impl From<i64> for Limit {
    fn from(limit: i64) -> Self {
        Limit::new(limit)
    }
}

impl Node for Limit {
    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_limit(self);
    }
}
