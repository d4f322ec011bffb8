use super::{Query, UnionFlag};

/// Two queries combined with `UNION`.
///
/// Each operand is a complete query and keeps its own `ORDER BY` and
/// `LIMIT`, if it has any. Ordering or limiting the combined rows belongs to
/// the query that holds this set, or to an outer query selecting from it.
///
/// # Examples
///
/// ```text
/// SELECT a FROM t UNION  SELECT b FROM u      // default flag
/// SELECT a FROM t UNION ALL SELECT b FROM u   // UnionFlag::All
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprUnion {
    /// Whether duplicate rows are kept.
    pub flag: UnionFlag,

    /// The statement `UNION` was applied to.
    pub lhs: Box<Query>,

    /// The statement passed to `UNION`.
    pub rhs: Box<Query>,
}

impl ExprUnion {
    pub fn is_all(&self) -> bool {
        self.flag.is_all()
    }

    /// The result width of a union is the width of its left operand.
    pub fn width(&self) -> usize {
        self.lhs.width()
    }
}
