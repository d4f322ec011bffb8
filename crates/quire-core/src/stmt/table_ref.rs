use super::*;

/// A source listed in `FROM`.
#[derive(Debug, Clone, PartialEq)]
pub enum TableRef {
    /// A named table, optionally aliased
    Table { name: String, alias: Option<String> },

    /// A sub-query used as a table
    Derived(TableDerived),
}

/// A sub-query in `FROM`. SQL requires these to be aliased.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDerived {
    pub subquery: Box<Query>,
    pub alias: String,
}

impl TableRef {
    pub fn table(name: impl Into<String>) -> TableRef {
        TableRef::Table {
            name: name.into(),
            alias: None,
        }
    }

    pub fn aliased(name: impl Into<String>, alias: impl Into<String>) -> TableRef {
        TableRef::Table {
            name: name.into(),
            alias: Some(alias.into()),
        }
    }

    pub fn derived(subquery: impl Into<Query>, alias: impl Into<String>) -> TableRef {
        TableRef::Derived(TableDerived {
            subquery: Box::new(subquery.into()),
            alias: alias.into(),
        })
    }

    pub fn is_derived(&self) -> bool {
        matches!(self, TableRef::Derived(_))
    }
}

impl From<&str> for TableRef {
    fn from(value: &str) -> Self {
        TableRef::table(value)
    }
}

impl From<String> for TableRef {
    fn from(value: String) -> Self {
        TableRef::table(value)
    }
}

impl From<TableDerived> for TableRef {
    fn from(value: TableDerived) -> Self {
        TableRef::Derived(value)
    }
}

impl Node for TableRef {
    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_table_ref(self);
    }
}
