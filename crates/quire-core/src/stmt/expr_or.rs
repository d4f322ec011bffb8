use super::Expr;

/// Conditions joined with `OR`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// `lhs OR rhs`. Operands that are themselves `OR`s are spliced in.
    pub fn or(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        let operands = [lhs.into(), rhs.into()]
            .into_iter()
            .flat_map(|expr| match expr {
                Expr::Or(or) => or.operands,
                expr => vec![expr],
            })
            .collect();

        ExprOr { operands }.into()
    }

    pub fn is_or(&self) -> bool {
        matches!(self, Expr::Or(_))
    }
}

impl From<ExprOr> for Expr {
    fn from(value: ExprOr) -> Self {
        Self::Or(value)
    }
}
