//! Clause slots of a [`Statement`](crate::Statement).
//!
//! Every slot has an empty state (`NoColumns`, `NoFrom`, ...) and a
//! populated one. The builders that fill a slot are defined on the
//! statement, for the slot's empty state only.

mod columns;
pub use columns::{Columns, NoColumns};

mod filter;
pub use filter::{NoWhere, Where};

mod from;
pub use from::{From, NoFrom};

mod limit;
pub use limit::{Limit, NoLimit};

mod order_by;
pub use order_by::{NoOrderBy, OrderBy};

mod union;
pub use union::{All, Distinct, Flag, NoUnion, Union};

use crate::{stmt, Bool, False, True};
use quire_core::stmt::ParamList;

/// A value occupying one slot of a statement.
pub trait Clause: Clone {
    /// The slot's own consistency predicate.
    type Consistent: Bool;

    /// Named parameters referenced by the clause, in rendering order.
    fn params(&self) -> ParamList;

    /// Writes the clause into `query`.
    fn apply(&self, query: &mut stmt::Query);
}

/// Rule relating the columns slot to the union slot.
///
/// A statement that is not a union needs a select list. A union takes its
/// columns from its operands and has none of its own.
pub trait SelectShape {
    type Consistent: Bool;
}

impl SelectShape for (NoColumns, NoUnion) {
    type Consistent = False;
}

impl SelectShape for (Columns, NoUnion) {
    type Consistent = True;
}

impl<Lhs, Rhs, Fl> SelectShape for (NoColumns, Union<Lhs, Rhs, Fl>) {
    type Consistent = True;
}

/// Implements `Clause` for an empty slot state.
macro_rules! empty_clause {
    ($name:ident) => {
        impl $crate::clause::Clause for $name {
            type Consistent = $crate::True;

            fn params(&self) -> quire_core::stmt::ParamList {
                quire_core::stmt::ParamList::default()
            }

            fn apply(&self, _: &mut $crate::stmt::Query) {}
        }
    };
}

pub(crate) use empty_clause;
