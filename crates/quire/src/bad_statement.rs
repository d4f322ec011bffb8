use crate::Statement;

/// What a statement builder returns instead of a statement when the result
/// would not be consistent.
///
/// A `BadStatement` carries nothing and can only be created by the builders.
/// It implements neither [`ToQuery`](crate::ToQuery) nor
/// [`Executable`](crate::Executable), so a bad combination is reported where
/// the result is rendered, prepared or combined further:
///
/// ```compile_fail
/// use quire::{col, select, Executable, Serializer, Statement};
///
/// // No select list
/// let lhs = Statement::new().from("t");
/// let bad = lhs.union(select([col("b")]).from("u"));
///
/// bad.to_sql(&Serializer::postgresql());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BadStatement {
    _p: (),
}

impl BadStatement {
    pub(crate) fn new() -> BadStatement {
        BadStatement { _p: () }
    }
}

/// Distinguishes a built statement from [`BadStatement`] at run time.
pub trait Outcome {
    const IS_BAD: bool;

    fn is_bad(&self) -> bool {
        Self::IS_BAD
    }
}

impl Outcome for BadStatement {
    const IS_BAD: bool = true;
}

impl<C, F, W, O, L, U> Outcome for Statement<C, F, W, O, L, U> {
    const IS_BAD: bool = false;
}
