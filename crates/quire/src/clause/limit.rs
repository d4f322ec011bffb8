use super::{empty_clause, Clause};
use crate::{stmt, True};
use quire_core::stmt::ParamList;

#[derive(Debug, Default, Clone, Copy)]
pub struct NoLimit;

empty_clause!(NoLimit);

/// `LIMIT`, and `OFFSET` once set with
/// [`Statement::offset`](crate::Statement::offset).
#[derive(Debug, Clone)]
pub struct Limit {
    limit: stmt::Limit,
}

impl Limit {
    pub(crate) fn new(limit: stmt::Expr) -> Limit {
        Limit {
            limit: stmt::Limit::new(limit),
        }
    }

    pub(crate) fn offset(self, offset: stmt::Expr) -> Limit {
        Limit {
            limit: self.limit.offset(offset),
        }
    }

    pub fn limit(&self) -> &stmt::Expr {
        &self.limit.limit
    }

    pub fn offset_expr(&self) -> Option<&stmt::Expr> {
        self.limit.offset.as_ref()
    }
}

impl Clause for Limit {
    type Consistent = True;

    fn params(&self) -> ParamList {
        ParamList::collect(&self.limit)
    }

    fn apply(&self, query: &mut stmt::Query) {
        query.limit = Some(self.limit.clone());
    }
}
