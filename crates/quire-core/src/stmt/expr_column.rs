use super::Expr;

/// A reference to a column, optionally qualified by a table name or alias.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ExprColumn {
    /// Table name or alias qualifying the column, if any.
    pub table: Option<String>,

    /// The column name
    pub name: String,
}

impl Expr {
    pub fn column(column: impl Into<ExprColumn>) -> Self {
        column.into().into()
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }
}

impl ExprColumn {
    pub fn new(name: impl Into<String>) -> ExprColumn {
        ExprColumn {
            table: None,
            name: name.into(),
        }
    }

    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> ExprColumn {
        ExprColumn {
            table: Some(table.into()),
            name: name.into(),
        }
    }
}

impl From<&str> for ExprColumn {
    fn from(value: &str) -> Self {
        ExprColumn::new(value)
    }
}

impl From<String> for ExprColumn {
    fn from(value: String) -> Self {
        ExprColumn::new(value)
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
