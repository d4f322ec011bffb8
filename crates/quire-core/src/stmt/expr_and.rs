use super::Expr;

/// Conditions joined with `AND`. Always holds at least two operands when
/// built with [`Expr::and`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// `lhs AND rhs`.
    ///
    /// Operands that are themselves `AND`s are spliced in, and a constant
    /// `true` operand is dropped.
    pub fn and(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        let (lhs, rhs) = (lhs.into(), rhs.into());

        if lhs.is_true() {
            return rhs;
        }

        if rhs.is_true() {
            return lhs;
        }

        let mut operands = ExprAnd::splice(lhs);
        operands.extend(ExprAnd::splice(rhs));

        ExprAnd { operands }.into()
    }

    pub fn is_and(&self) -> bool {
        matches!(self, Expr::And(_))
    }
}

impl ExprAnd {
    fn splice(expr: Expr) -> Vec<Expr> {
        match expr {
            Expr::And(and) => and.operands,
            expr => vec![expr],
        }
    }
}

impl From<ExprAnd> for Expr {
    fn from(value: ExprAnd) -> Self {
        Self::And(value)
    }
}
