use std::fmt;

use super::{ExprUnion, Select};

#[derive(Clone, PartialEq)]
pub enum ExprSet {
    /// A select query, possibly with a filter.
    Select(Box<Select>),

    /// Two queries combined with `UNION`
    Union(ExprUnion),
}

impl ExprSet {
    pub fn is_union(&self) -> bool {
        matches!(self, ExprSet::Union(_))
    }

    pub fn as_select(&self) -> Option<&Select> {
        match self {
            ExprSet::Select(select) => Some(&**select),
            ExprSet::Union(_) => None,
        }
    }

    pub fn as_select_mut(&mut self) -> Option<&mut Select> {
        match self {
            ExprSet::Select(select) => Some(&mut **select),
            ExprSet::Union(_) => None,
        }
    }

    pub fn as_union(&self) -> Option<&ExprUnion> {
        match self {
            ExprSet::Union(expr_union) => Some(expr_union),
            ExprSet::Select(_) => None,
        }
    }

    /// Number of columns each row of this set has.
    pub fn width(&self) -> usize {
        match self {
            ExprSet::Select(select) => select.width(),
            ExprSet::Union(expr_union) => expr_union.width(),
        }
    }
}

impl fmt::Debug for ExprSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(e) => fmt::Debug::fmt(e, f),
            Self::Union(e) => fmt::Debug::fmt(e, f),
        }
    }
}

impl Default for ExprSet {
    fn default() -> Self {
        Self::Select(Box::default())
    }
}

impl From<Select> for ExprSet {
    fn from(value: Select) -> Self {
        Self::Select(Box::new(value))
    }
}

impl From<ExprUnion> for ExprSet {
    fn from(value: ExprUnion) -> Self {
        Self::Union(value)
    }
}
