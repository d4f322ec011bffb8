use super::{empty_clause, Clause};
use crate::{stmt, True};
use quire_core::stmt::ParamList;

#[derive(Debug, Default, Clone, Copy)]
pub struct NoFrom;

empty_clause!(NoFrom);

/// Tables the statement selects from.
#[derive(Debug, Clone)]
pub struct From {
    tables: Vec<stmt::TableRef>,
}

impl From {
    pub(crate) fn new(table: stmt::TableRef) -> From {
        From {
            tables: vec![table],
        }
    }

    pub fn tables(&self) -> &[stmt::TableRef] {
        &self.tables
    }
}

impl Clause for From {
    type Consistent = True;

    fn params(&self) -> ParamList {
        ParamList::collect(&self.tables)
    }

    fn apply(&self, query: &mut stmt::Query) {
        if let Some(select) = query.body.as_select_mut() {
            select.from = self.tables.clone();
        }
    }
}
