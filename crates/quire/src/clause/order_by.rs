use super::{empty_clause, Clause};
use crate::{stmt, NonEmpty, True};
use quire_core::stmt::ParamList;

#[derive(Debug, Default, Clone, Copy)]
pub struct NoOrderBy;

empty_clause!(NoOrderBy);

/// A non-empty `ORDER BY` list.
#[derive(Debug, Clone)]
pub struct OrderBy {
    order_by: stmt::OrderBy,
}

impl OrderBy {
    pub(crate) fn new(exprs: NonEmpty<stmt::OrderByExpr>) -> OrderBy {
        OrderBy {
            order_by: stmt::OrderBy {
                exprs: exprs.into_vec(),
            },
        }
    }

    pub fn exprs(&self) -> &[stmt::OrderByExpr] {
        &self.order_by.exprs
    }
}

impl Clause for OrderBy {
    type Consistent = True;

    fn params(&self) -> ParamList {
        ParamList::collect(&self.order_by)
    }

    fn apply(&self, query: &mut stmt::Query) {
        query.order_by = Some(self.order_by.clone());
    }
}
