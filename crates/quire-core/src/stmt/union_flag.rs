/// Set quantifier of a `UNION`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum UnionFlag {
    /// No quantifier is written; duplicate rows are removed.
    #[default]
    Distinct,

    /// `ALL`; duplicate rows are kept.
    All,
}

impl UnionFlag {
    pub fn is_all(self) -> bool {
        matches!(self, UnionFlag::All)
    }
}
