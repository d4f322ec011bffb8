use super::{empty_clause, Clause};
use crate::{stmt, ToQuery, True};
use quire_core::stmt::ParamList;

use std::{fmt, sync::Arc};

/// The union slot of a statement that is not a union.
///
/// Statements in this state can be combined with
/// [`Statement::union`](crate::Statement::union) and friends.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoUnion;

empty_clause!(NoUnion);

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Distinct {}
    impl Sealed for super::All {}
}

/// Set quantifier of a union. Either [`Distinct`] or [`All`].
pub trait Flag: sealed::Sealed + fmt::Debug + Copy + Send + Sync + 'static {
    const FLAG: stmt::UnionFlag;
}

/// `UNION` without a quantifier; duplicate rows are removed.
#[derive(Debug, Default, Clone, Copy)]
pub struct Distinct;

/// `UNION ALL`
#[derive(Debug, Default, Clone, Copy)]
pub struct All;

impl Flag for Distinct {
    const FLAG: stmt::UnionFlag = stmt::UnionFlag::Distinct;
}

impl Flag for All {
    const FLAG: stmt::UnionFlag = stmt::UnionFlag::All;
}

/// Two statements combined with `UNION`.
///
/// Operands are shared, never copied, when the statement holding the union
/// is cloned.
pub struct Union<Lhs, Rhs, Fl> {
    lhs: Arc<Lhs>,
    rhs: Arc<Rhs>,
    flag: Fl,

    /// `lhs` parameters followed by `rhs` parameters
    params: ParamList,
}

impl<Lhs: ToQuery, Rhs: ToQuery, Fl: Flag> Union<Lhs, Rhs, Fl> {
    pub(crate) fn new(flag: Fl, lhs: Lhs, rhs: Rhs) -> Union<Lhs, Rhs, Fl> {
        let params = lhs.params().concat(&rhs.params());

        Union {
            lhs: Arc::new(lhs),
            rhs: Arc::new(rhs),
            flag,
            params,
        }
    }
}

impl<Lhs, Rhs, Fl: Flag> Union<Lhs, Rhs, Fl> {
    pub fn lhs(&self) -> &Lhs {
        &self.lhs
    }

    pub fn rhs(&self) -> &Rhs {
        &self.rhs
    }

    pub fn flag(&self) -> stmt::UnionFlag {
        Fl::FLAG
    }
}

impl<Lhs, Rhs, Fl: Clone> Clone for Union<Lhs, Rhs, Fl> {
    fn clone(&self) -> Self {
        Union {
            lhs: self.lhs.clone(),
            rhs: self.rhs.clone(),
            flag: self.flag.clone(),
            params: self.params.clone(),
        }
    }
}

impl<Lhs: fmt::Debug, Rhs: fmt::Debug, Fl: fmt::Debug> fmt::Debug for Union<Lhs, Rhs, Fl> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Union")
            .field("flag", &self.flag)
            .field("lhs", &self.lhs)
            .field("rhs", &self.rhs)
            .finish()
    }
}

impl<Lhs: ToQuery, Rhs: ToQuery, Fl: Flag> Clause for Union<Lhs, Rhs, Fl> {
    type Consistent = True;

    fn params(&self) -> ParamList {
        self.params.clone()
    }

    fn apply(&self, query: &mut stmt::Query) {
        query.body = stmt::ExprSet::Union(stmt::ExprUnion {
            flag: Fl::FLAG,
            lhs: Box::new(self.lhs.to_query()),
            rhs: Box::new(self.rhs.to_query()),
        });
    }
}
