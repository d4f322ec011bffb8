mod bad_statement;
pub use bad_statement::{BadStatement, Outcome};

pub mod clause;
pub use clause::{All, Distinct};

mod consistency;
pub use consistency::{Bool, Consistency, False, True};

mod executable;
pub use executable::Executable;

mod non_empty;
pub use non_empty::{IntoNonEmpty, NonEmpty};

mod statement;
pub use statement::{col, select, Statement, UnionOperand, UnionStatement, Unioned};

mod to_query;
pub use to_query::ToQuery;

pub use quire_core::{stmt, Error, Result};
pub use quire_sql::{Arguments, Bind, Prepared, Serializer};
