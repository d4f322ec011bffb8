use crate::stmt;

/// A list with at least one item.
///
/// Select lists and `ORDER BY` lists are taken as `NonEmpty` so that a
/// statement with an empty one cannot be built.
#[derive(Debug, Clone, PartialEq)]
pub struct NonEmpty<T> {
    first: T,
    rest: Vec<T>,
}

impl<T> NonEmpty<T> {
    pub fn new(first: T) -> NonEmpty<T> {
        NonEmpty { first, rest: vec![] }
    }

    /// Returns `None` if `items` is empty.
    pub fn from_vec(items: Vec<T>) -> Option<NonEmpty<T>> {
        let mut items = items.into_iter();
        let first = items.next()?;

        Some(NonEmpty {
            first,
            rest: items.collect(),
        })
    }

    /// Appends `item`.
    pub fn with(mut self, item: T) -> NonEmpty<T> {
        self.rest.push(item);
        self
    }

    pub fn first(&self) -> &T {
        &self.first
    }

    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn into_vec(self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len());
        items.push(self.first);
        items.extend(self.rest);
        items
    }

    fn map<U>(self, f: impl Fn(T) -> U) -> NonEmpty<U> {
        NonEmpty {
            first: f(self.first),
            rest: self.rest.into_iter().map(f).collect(),
        }
    }
}

/// Values that convert into a [`NonEmpty`] list of `T`.
///
/// Implemented for a single item, for `NonEmpty` itself, and for arrays of
/// one to sixteen items. An empty array or a `Vec` does not qualify; use
/// [`NonEmpty::from_vec`] for lists built at run time.
///
/// ```compile_fail
/// use quire::{select, stmt::Expr};
///
/// let query = select(Vec::<Expr>::new()).from("t");
/// ```
///
/// ```compile_fail
/// use quire::{col, select, stmt::OrderByExpr};
///
/// let query = select([col("a")]).from("t").order_by([] as [OrderByExpr; 0]);
/// ```
pub trait IntoNonEmpty<T> {
    fn into_non_empty(self) -> NonEmpty<T>;
}

impl<T, U: Into<T>> IntoNonEmpty<T> for NonEmpty<U> {
    fn into_non_empty(self) -> NonEmpty<T> {
        self.map(Into::into)
    }
}

impl IntoNonEmpty<stmt::Expr> for stmt::Expr {
    fn into_non_empty(self) -> NonEmpty<stmt::Expr> {
        NonEmpty::new(self)
    }
}

impl IntoNonEmpty<stmt::OrderByExpr> for stmt::OrderByExpr {
    fn into_non_empty(self) -> NonEmpty<stmt::OrderByExpr> {
        NonEmpty::new(self)
    }
}

macro_rules! impl_into_non_empty_for_array {
    ( $( $n:literal )* ) => {
        $(
            impl<T, U: Into<T>> IntoNonEmpty<T> for [U; $n] {
                fn into_non_empty(self) -> NonEmpty<T> {
                    let [first, rest @ ..] = self;

                    NonEmpty {
                        first: first.into(),
                        rest: rest.into_iter().map(Into::into).collect(),
                    }
                }
            }
        )*
    };
}

impl_into_non_empty_for_array! { 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 }
