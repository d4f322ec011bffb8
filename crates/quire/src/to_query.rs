use crate::stmt::{self, ParamList};

/// Lowers a typed statement to the untyped AST.
pub trait ToQuery {
    fn to_query(&self) -> stmt::Query;

    /// Named parameters the statement requires, in rendering order.
    fn params(&self) -> ParamList;
}
