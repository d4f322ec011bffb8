use super::{Node, OrderByExpr, Visit};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub exprs: Vec<OrderByExpr>,
}

impl From<OrderByExpr> for OrderBy {
    fn from(value: OrderByExpr) -> Self {
        Self { exprs: vec![value] }
    }
}

impl From<Vec<OrderByExpr>> for OrderBy {
    fn from(exprs: Vec<OrderByExpr>) -> Self {
        Self { exprs }
    }
}

impl<T: Into<OrderByExpr>> FromIterator<T> for OrderBy {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            exprs: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Node for OrderBy {
    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_order_by(self);
    }
}
