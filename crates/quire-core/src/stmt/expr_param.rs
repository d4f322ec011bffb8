use super::Expr;

/// A named placeholder whose value is supplied when the statement runs.
///
/// The same name may appear more than once in a statement; each occurrence
/// is a separate positional placeholder once serialized.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ExprParam {
    pub name: String,
}

impl ExprParam {
    pub fn new(name: impl Into<String>) -> ExprParam {
        ExprParam { name: name.into() }
    }
}

impl Expr {
    pub fn param(name: impl Into<String>) -> Self {
        ExprParam::new(name).into()
    }

    pub fn is_param(&self) -> bool {
        matches!(self, Self::Param(_))
    }
}

impl From<ExprParam> for Expr {
    fn from(value: ExprParam) -> Self {
        Self::Param(value)
    }
}
