use super::Error;

/// Error when two statements cannot be combined.
///
/// This occurs when:
/// - An operand of a set operation is not itself a consistent statement
/// - An enabled `UnionRules` check rejects the pair of operands
///
/// The combination is refused as a whole; no partially combined statement is
/// ever produced.
#[derive(Debug)]
pub(super) struct InvalidCombination {
    reason: Box<str>,
}

impl std::error::Error for InvalidCombination {}

impl core::fmt::Display for InvalidCombination {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid combination: {}", self.reason)
    }
}

impl Error {
    /// Creates an invalid combination error.
    pub fn invalid_combination(reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidCombination(InvalidCombination {
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid combination error.
    pub fn is_invalid_combination(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidCombination(_))
    }
}
