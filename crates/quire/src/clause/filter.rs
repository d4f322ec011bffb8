use super::{empty_clause, Clause};
use crate::{stmt, True};
use quire_core::stmt::ParamList;

#[derive(Debug, Default, Clone, Copy)]
pub struct NoWhere;

empty_clause!(NoWhere);

/// The `WHERE` condition.
#[derive(Debug, Clone)]
pub struct Where {
    expr: stmt::Expr,
}

impl Where {
    pub(crate) fn new(expr: stmt::Expr) -> Where {
        Where { expr }
    }

    pub fn expr(&self) -> &stmt::Expr {
        &self.expr
    }
}

impl Clause for Where {
    type Consistent = True;

    fn params(&self) -> ParamList {
        ParamList::collect(&self.expr)
    }

    fn apply(&self, query: &mut stmt::Query) {
        if let Some(select) = query.body.as_select_mut() {
            select.filter = Some(self.expr.clone());
        }
    }
}
