use crate::{stmt, Consistency, ToQuery, True};
use quire_sql::{Prepared, Serializer};

/// A statement that can be rendered and run.
///
/// Implemented for every consistent statement and only for those. A union
/// is executable exactly like its left operand.
pub trait Executable: ToQuery + Consistency<Consistent = True> {
    /// Renders the statement and collects its placeholder binds.
    fn prepare(&self, serializer: &Serializer) -> Prepared {
        serializer.prepare(&self.to_query())
    }

    /// Renders the statement without a terminator.
    fn to_sql(&self, serializer: &Serializer) -> String {
        self.prepare(serializer).sql
    }

    /// Uses the statement as a derived table named `alias`.
    fn as_table(&self, alias: impl Into<String>) -> stmt::TableRef {
        self.to_query().derived(alias)
    }
}

impl<T: ToQuery + Consistency<Consistent = True>> Executable for T {}
