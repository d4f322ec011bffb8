use super::{Direction, Expr, ExprColumn};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderByExpr {
    /// The expression
    pub expr: Expr,

    /// Ascending or descending
    pub order: Option<Direction>,
}

impl OrderByExpr {
    pub fn asc(expr: impl Into<Expr>) -> OrderByExpr {
        OrderByExpr {
            expr: expr.into(),
            order: Some(Direction::Asc),
        }
    }

    pub fn desc(expr: impl Into<Expr>) -> OrderByExpr {
        OrderByExpr {
            expr: expr.into(),
            order: Some(Direction::Desc),
        }
    }
}

impl From<Expr> for OrderByExpr {
    fn from(expr: Expr) -> Self {
        OrderByExpr { expr, order: None }
    }
}

impl From<ExprColumn> for OrderByExpr {
    fn from(column: ExprColumn) -> Self {
        Expr::from(column).into()
    }
}
