use super::{BinaryOp, Expr};

/// A comparison between two expressions, e.g. `age >= 18`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn binary_op(lhs: impl Into<Expr>, op: BinaryOp, rhs: impl Into<Expr>) -> Expr {
        Expr::BinaryOp(ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        })
    }
}

macro_rules! comparisons {
    ( $( $(#[$attr:meta])* $name:ident => $op:ident; )* ) => {
        impl Expr {
            $(
                $(#[$attr])*
                pub fn $name(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
                    Expr::binary_op(lhs, BinaryOp::$op, rhs)
                }
            )*
        }
    };
}

comparisons! {
    /// `lhs = rhs`
    eq => Eq;
    /// `lhs <> rhs`
    ne => Ne;
    /// `lhs < rhs`
    lt => Lt;
    /// `lhs <= rhs`
    le => Le;
    /// `lhs > rhs`
    gt => Gt;
    /// `lhs >= rhs`
    ge => Ge;
}

impl From<ExprBinaryOp> for Expr {
    fn from(value: ExprBinaryOp) -> Self {
        Self::BinaryOp(value)
    }
}
