use crate::BadStatement;

/// Folds type-level booleans with [`Bool::And`].
///
/// `all![A, B, C]` is `<A as Bool>::And<<B as Bool>::And<C>>`.
macro_rules! all {
    ($a:ty) => { $a };
    ($a:ty, $($rest:ty),+) => { <$a as $crate::Bool>::And<$crate::consistency::all!($($rest),+)> };
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::True {}
    impl Sealed for super::False {}
}

/// A boolean evaluated by the type checker.
///
/// Statement builders use it to pick their result type: a statement when the
/// inputs are consistent, [`BadStatement`] otherwise.
pub trait Bool: sealed::Sealed + 'static {
    const VALUE: bool;

    /// Conjunction of `Self` and `B`.
    type And<B: Bool>: Bool;

    /// `T` if `Self` is [`True`], [`BadStatement`] if it is [`False`].
    type If<T>;

    /// Builds the value of `Self::If<T>`, calling `f` only if `Self` is
    /// [`True`].
    fn choose<T>(f: impl FnOnce() -> T) -> Self::If<T>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct True;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;

    type And<B: Bool> = B;

    type If<T> = T;

    fn choose<T>(f: impl FnOnce() -> T) -> T {
        f()
    }
}

impl Bool for False {
    const VALUE: bool = false;

    type And<B: Bool> = False;

    type If<T> = BadStatement;

    fn choose<T>(_: impl FnOnce() -> T) -> BadStatement {
        BadStatement::new()
    }
}

/// Whether a statement is well formed.
///
/// `Consistent` is [`True`] iff every clause slot's own predicate holds and
/// every rule relating two slots holds. It is a pure function of the slot
/// types, so it is settled when the statement's type is.
pub trait Consistency {
    type Consistent: Bool;
}

pub(crate) use all;
