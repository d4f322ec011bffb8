use super::{Delimited, Ident, Params, ToSql};

use crate::stmt;

/// An operand of `AND`/`OR`. Nested logical expressions are parenthesized.
struct Operand<'a>(&'a stmt::Expr);

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use stmt::Expr::*;

        match self {
            And(expr) => {
                fmt!(f, Delimited(expr.operands.iter().map(Operand), " AND "));
            }
            BinaryOp(expr) => {
                fmt!(f, expr.lhs " " expr.op " " expr.rhs);
            }
            Column(expr) => expr.to_sql(f),
            Or(expr) => {
                fmt!(f, Delimited(expr.operands.iter().map(Operand), " OR "));
            }
            Param(expr) => {
                let placeholder = f.params.push_param(expr);
                fmt!(f, placeholder);
            }
            Value(value) => value.to_sql(f),
        }
    }
}

impl ToSql for Operand<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self.0 {
            stmt::Expr::And(_) | stmt::Expr::Or(_) => fmt!(f, "(" self.0 ")"),
            expr => expr.to_sql(f),
        }
    }
}

impl ToSql for &stmt::ExprColumn {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = self.table.as_ref().map(|table| (Ident(table), "."));
        fmt!(f, table Ident(&self.name));
    }
}

impl ToSql for &stmt::BinaryOp {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        f.dst.push_str(self.as_sql());
    }
}
