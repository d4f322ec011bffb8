use super::*;

/// The body of a plain `SELECT`: select list, sources and filter.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    /// The select list
    pub returning: Vec<Expr>,

    /// Tables listed in `FROM`, in order
    pub from: Vec<TableRef>,

    /// `WHERE` condition
    pub filter: Option<Expr>,
}

impl Select {
    pub fn new<I>(returning: I) -> Select
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        Select {
            returning: returning.into_iter().map(Into::into).collect(),
            from: vec![],
            filter: None,
        }
    }

    /// Appends a table to the `FROM` list.
    pub fn table(mut self, table: impl Into<TableRef>) -> Select {
        self.from.push(table.into());
        self
    }

    /// ANDs `expr` into the filter.
    pub fn and(mut self, expr: impl Into<Expr>) -> Select {
        self.filter = Some(match self.filter.take() {
            Some(filter) => Expr::and(filter, expr),
            None => expr.into(),
        });
        self
    }

    /// Number of columns in the select list.
    pub fn width(&self) -> usize {
        self.returning.len()
    }
}

impl Node for Select {
    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_stmt_select(self);
    }
}
