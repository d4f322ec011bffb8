use super::*;
use crate::{Error, Result};

impl Query {
    /// Checks that the query is consistent: safe to render and to run.
    ///
    /// A `SELECT` needs a non-empty select list and an `ORDER BY` needs at
    /// least one expression. Every nested query (derived tables and `UNION`
    /// operands) must itself be consistent, and the right operand of a
    /// `UNION` must not be a `UNION`.
    pub fn verify(&self) -> Result<()> {
        tracing::trace!(union = self.is_union(), "verifying query");

        self.body.verify()?;

        if let Some(order_by) = &self.order_by {
            if order_by.exprs.is_empty() {
                return Err(Error::invalid_statement(
                    "ORDER BY requires at least one expression",
                ));
            }
        }

        Ok(())
    }
}

impl ExprSet {
    fn verify(&self) -> Result<()> {
        match self {
            ExprSet::Select(select) => select.verify(),
            // Fields are public, so operands are checked again rather than
            // trusted to have come through `Query::union_with`.
            ExprSet::Union(expr_union) => {
                expr_union.lhs.verify()?;
                expr_union.rhs.verify()?;

                // Set operators associate to the left, so a union on the
                // right would render as a different query.
                if expr_union.rhs.is_union() {
                    return Err(Error::invalid_statement(
                        "right operand of UNION is itself a UNION",
                    ));
                }

                Ok(())
            }
        }
    }
}

impl Select {
    fn verify(&self) -> Result<()> {
        if self.returning.is_empty() {
            return Err(Error::invalid_statement(
                "SELECT requires at least one column",
            ));
        }

        for table in &self.from {
            if let TableRef::Derived(derived) = table {
                derived.subquery.verify().map_err(|err| {
                    err.context(Error::invalid_statement(format!(
                        "derived table `{}` is not consistent",
                        derived.alias
                    )))
                })?;
            }
        }

        Ok(())
    }
}
