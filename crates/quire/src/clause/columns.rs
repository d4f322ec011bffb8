use super::{empty_clause, Clause};
use crate::{stmt, NonEmpty, True};
use quire_core::stmt::ParamList;

#[derive(Debug, Default, Clone, Copy)]
pub struct NoColumns;

empty_clause!(NoColumns);

/// The select list. Never empty.
#[derive(Debug, Clone)]
pub struct Columns {
    exprs: Vec<stmt::Expr>,
}

impl Columns {
    pub(crate) fn new(exprs: NonEmpty<stmt::Expr>) -> Columns {
        Columns {
            exprs: exprs.into_vec(),
        }
    }

    pub fn exprs(&self) -> &[stmt::Expr] {
        &self.exprs
    }
}

impl Clause for Columns {
    type Consistent = True;

    fn params(&self) -> ParamList {
        ParamList::collect(&self.exprs)
    }

    fn apply(&self, query: &mut stmt::Query) {
        if let Some(select) = query.body.as_select_mut() {
            select.returning = self.exprs.clone();
        }
    }
}
