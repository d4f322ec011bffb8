use super::Error;

/// Error when a named parameter has no bound argument.
#[derive(Debug)]
pub(super) struct MissingArgument {
    name: Box<str>,
}

impl std::error::Error for MissingArgument {}

impl core::fmt::Display for MissingArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "missing argument for parameter `{}`", self.name)
    }
}

impl Error {
    /// Creates a missing argument error for the parameter `name`.
    pub fn missing_argument(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingArgument(MissingArgument {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing argument error.
    pub fn is_missing_argument(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingArgument(_))
    }
}
