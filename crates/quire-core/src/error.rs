mod adhoc;
mod invalid_combination;
mod invalid_statement;
mod missing_argument;

use adhoc::AdhocError;
use invalid_combination::InvalidCombination;
use invalid_statement::InvalidStatement;
use missing_argument::MissingArgument;
use std::sync::Arc;

/// Returns early with an ad-hoc [`Error`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Creates an ad-hoc [`Error`] from a format string.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur while composing, verifying, or binding a
/// statement.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

impl ErrorInner {
    fn flatten(inner: Arc<ErrorInner>) -> ErrorInner {
        let message = Error { inner: Some(inner) }.to_string();

        ErrorInner {
            kind: ErrorKind::Adhoc(AdhocError::new(message)),
            cause: None,
        }
    }
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, consequent: Error) -> Error {
        let mut inner = match consequent.inner.map(Arc::try_unwrap) {
            Some(Ok(inner)) if inner.cause.is_none() => inner,
            // A shared or already chained consequent keeps only its message.
            Some(Ok(inner)) => ErrorInner::flatten(Arc::new(inner)),
            Some(Err(shared)) => ErrorInner::flatten(shared),
            None => ErrorInner {
                kind: ErrorKind::Unknown,
                cause: None,
            },
        };

        inner.cause = Some(self);

        Error {
            inner: Some(Arc::new(inner)),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    Adhoc(AdhocError),
    InvalidCombination(InvalidCombination),
    InvalidStatement(InvalidStatement),
    MissingArgument(MissingArgument),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Anyhow(err) => core::fmt::Display::fmt(err, f),
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            InvalidCombination(err) => core::fmt::Display::fmt(err, f),
            InvalidStatement(err) => core::fmt::Display::fmt(err, f),
            MissingArgument(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown quire error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner { kind, cause: None })),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error::from(ErrorKind::Anyhow(err))
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_size() {
        // Ensure Error stays at one word (size of pointer/Arc)
        let expected_size = core::mem::size_of::<usize>();
        assert_eq!(expected_size, core::mem::size_of::<Error>());
    }

    #[test]
    fn error_from_args() {
        let err = Error::from_args(format_args!("test error: {}", 42));
        assert_eq!(err.to_string(), "test error: 42");
    }

    #[test]
    fn error_chain_display() {
        let root = Error::from_args(format_args!("root cause"));
        let mid = Error::from_args(format_args!("middle context"));
        let top = Error::from_args(format_args!("top context"));

        let chained = root.context(mid).context(top);
        assert_eq!(
            chained.to_string(),
            "top context: middle context: root cause"
        );
    }

    #[test]
    fn context_on_shared_consequent() {
        let consequent = err!("while building query");
        let _keep_alive = consequent.clone();

        let err = Error::invalid_statement("empty select list").context(consequent);
        assert_eq!(
            err.to_string(),
            "while building query: invalid statement: empty select list"
        );
    }

    #[test]
    fn anyhow_bridge() {
        let anyhow_err = anyhow::anyhow!("something failed");
        let our_err: Error = anyhow_err.into();
        assert_eq!(our_err.to_string(), "something failed");
    }

    #[test]
    fn invalid_combination_with_context() {
        let err = Error::invalid_combination("operand widths differ (2 vs 1)")
            .context(err!("UNION ALL"));

        assert!(!err.is_invalid_combination());
        assert_eq!(
            err.to_string(),
            "UNION ALL: invalid combination: operand widths differ (2 vs 1)"
        );
    }

    #[test]
    fn invalid_statement_predicate() {
        let err = Error::invalid_statement("SELECT requires at least one column");
        assert!(err.is_invalid_statement());
        assert!(!err.is_invalid_combination());
        assert_eq!(
            err.to_string(),
            "invalid statement: SELECT requires at least one column"
        );
    }

    #[test]
    fn missing_argument_display() {
        let err = Error::missing_argument("user_id");
        assert!(err.is_missing_argument());
        assert_eq!(err.to_string(), "missing argument for parameter `user_id`");
    }
}
