use crate::{
    clause::{
        self, Clause, Columns, Flag, NoColumns, NoFrom, NoLimit, NoOrderBy, NoUnion, NoWhere,
        SelectShape, Union, Where,
    },
    consistency::all,
    stmt::{self, ParamList},
    Bool, Consistency, IntoNonEmpty, ToQuery,
};

/// A statement assembled from one clause per slot.
///
/// The slot types record which clauses are set, so a builder that fills a
/// slot only exists while the slot is empty. Every builder returns a new
/// statement; the receiver is consumed and nothing is mutated in place.
#[derive(Debug, Clone)]
pub struct Statement<
    C = NoColumns,
    F = NoFrom,
    W = NoWhere,
    O = NoOrderBy,
    L = NoLimit,
    U = NoUnion,
> {
    columns: C,
    from: F,
    filter: W,
    order_by: O,
    limit: L,
    union: U,

    /// Parameters of all slots, in rendering order
    params: ParamList,
}

/// The statement a union builder produces: only the union slot is set.
pub type UnionStatement<Lhs, Rhs, Fl> =
    Statement<NoColumns, NoFrom, NoWhere, NoOrderBy, NoLimit, Union<Lhs, Rhs, Fl>>;

/// What `lhs.union_with(flag, rhs)` returns: a [`UnionStatement`] if both
/// operands are consistent, [`BadStatement`](crate::BadStatement) otherwise.
pub type Unioned<Lhs, Rhs, Fl> = <<<Lhs as Consistency>::Consistent as Bool>::And<
    <Rhs as Consistency>::Consistent,
> as Bool>::If<UnionStatement<Lhs, Rhs, Fl>>;

/// Starts a statement selecting `columns`.
///
/// The select list cannot be empty. A list only known at run time goes
/// through [`NonEmpty::from_vec`](crate::NonEmpty::from_vec).
pub fn select<I>(columns: I) -> Statement<Columns>
where
    I: IntoNonEmpty<stmt::Expr>,
{
    Statement::new().columns(columns)
}

/// A column reference, for select lists and filters.
pub fn col(name: impl Into<stmt::ExprColumn>) -> stmt::Expr {
    stmt::Expr::column(name)
}

impl Statement {
    /// A statement with every slot empty. It is not consistent until a
    /// select list is set.
    pub fn new() -> Statement {
        Statement {
            columns: NoColumns,
            from: NoFrom,
            filter: NoWhere,
            order_by: NoOrderBy,
            limit: NoLimit,
            union: NoUnion,
            params: ParamList::default(),
        }
    }
}

impl Default for Statement {
    fn default() -> Self {
        Statement::new()
    }
}

impl<C, F, W, O, L, U> Statement<C, F, W, O, L, U>
where
    C: Clause,
    F: Clause,
    W: Clause,
    O: Clause,
    L: Clause,
    U: Clause,
{
    fn assemble(columns: C, from: F, filter: W, order_by: O, limit: L, union: U) -> Self {
        let params = [
            columns.params(),
            from.params(),
            filter.params(),
            union.params(),
            order_by.params(),
            limit.params(),
        ]
        .iter()
        .fold(ParamList::default(), |acc, params| acc.concat(params));

        Statement {
            columns,
            from,
            filter,
            order_by,
            limit,
            union,
            params,
        }
    }

    pub fn columns_clause(&self) -> &C {
        &self.columns
    }

    pub fn from_clause(&self) -> &F {
        &self.from
    }

    pub fn where_clause(&self) -> &W {
        &self.filter
    }

    pub fn order_by_clause(&self) -> &O {
        &self.order_by
    }

    pub fn limit_clause(&self) -> &L {
        &self.limit
    }

    pub fn union_clause(&self) -> &U {
        &self.union
    }
}

impl<F, W, O, L> Statement<NoColumns, F, W, O, L, NoUnion>
where
    F: Clause,
    W: Clause,
    O: Clause,
    L: Clause,
{
    pub fn columns<I>(self, columns: I) -> Statement<Columns, F, W, O, L, NoUnion>
    where
        I: IntoNonEmpty<stmt::Expr>,
    {
        Statement::assemble(
            Columns::new(columns.into_non_empty()),
            self.from,
            self.filter,
            self.order_by,
            self.limit,
            self.union,
        )
    }
}

impl<C, W, O, L> Statement<C, NoFrom, W, O, L, NoUnion>
where
    C: Clause,
    W: Clause,
    O: Clause,
    L: Clause,
{
    pub fn from(
        self,
        table: impl Into<stmt::TableRef>,
    ) -> Statement<C, clause::From, W, O, L, NoUnion> {
        Statement::assemble(
            self.columns,
            clause::From::new(table.into()),
            self.filter,
            self.order_by,
            self.limit,
            self.union,
        )
    }
}

impl<C, F, O, L> Statement<C, F, NoWhere, O, L, NoUnion>
where
    C: Clause,
    F: Clause,
    O: Clause,
    L: Clause,
{
    pub fn filter(self, expr: impl Into<stmt::Expr>) -> Statement<C, F, Where, O, L, NoUnion> {
        Statement::assemble(
            self.columns,
            self.from,
            Where::new(expr.into()),
            self.order_by,
            self.limit,
            self.union,
        )
    }
}

impl<C, F, W, L, U> Statement<C, F, W, NoOrderBy, L, U>
where
    C: Clause,
    F: Clause,
    W: Clause,
    L: Clause,
    U: Clause,
{
    /// Orders the rows. On a union this orders the combined rows.
    pub fn order_by(
        self,
        order_by: impl IntoNonEmpty<stmt::OrderByExpr>,
    ) -> Statement<C, F, W, clause::OrderBy, L, U> {
        Statement::assemble(
            self.columns,
            self.from,
            self.filter,
            clause::OrderBy::new(order_by.into_non_empty()),
            self.limit,
            self.union,
        )
    }
}

impl<C, F, W, O> Statement<C, F, W, O, NoLimit, NoUnion>
where
    C: Clause,
    F: Clause,
    W: Clause,
    O: Clause,
{
    pub fn limit(self, limit: impl Into<stmt::Expr>) -> Statement<C, F, W, O, clause::Limit, NoUnion> {
        Statement::assemble(
            self.columns,
            self.from,
            self.filter,
            self.order_by,
            clause::Limit::new(limit.into()),
            self.union,
        )
    }
}

impl<C, F, W, O> Statement<C, F, W, O, clause::Limit, NoUnion>
where
    C: Clause,
    F: Clause,
    W: Clause,
    O: Clause,
{
    pub fn offset(self, offset: impl Into<stmt::Expr>) -> Self {
        Statement::assemble(
            self.columns,
            self.from,
            self.filter,
            self.order_by,
            self.limit.offset(offset.into()),
            self.union,
        )
    }
}

/// A statement that may appear on the right of a union.
///
/// Only statements whose union slot is empty qualify. `UNION` groups to the
/// left, so a union on the right would render as a different query; select
/// from it with [`as_table`](crate::Executable::as_table) instead:
///
/// ```compile_fail
/// use quire::{col, select};
///
/// let ab = select([col("a")]).from("t").union(select([col("b")]).from("u"));
/// let cab = select([col("c")]).from("v").union_all(ab);
/// ```
pub trait UnionOperand: ToQuery + Consistency {}

impl<C, F, W, O, L> UnionOperand for Statement<C, F, W, O, L, NoUnion> where
    Self: ToQuery + Consistency
{
}

impl<C, F, W, O, L> Statement<C, F, W, O, L, NoUnion>
where
    Self: ToQuery + Consistency,
{
    /// Combines `self` and `rhs` with `UNION`, removing duplicate rows.
    ///
    /// Returns [`BadStatement`](crate::BadStatement) if either operand is
    /// not consistent. The operands are expected to select compatible
    /// columns, and `self` to carry no `ORDER BY`; neither is checked.
    pub fn union<R>(self, rhs: R) -> Unioned<Self, R, clause::Distinct>
    where
        R: UnionOperand,
    {
        self.union_with(clause::Distinct, rhs)
    }

    /// Combines `self` and `rhs` with `UNION ALL`.
    pub fn union_all<R>(self, rhs: R) -> Unioned<Self, R, clause::All>
    where
        R: UnionOperand,
    {
        self.union_with(clause::All, rhs)
    }

    /// Combines `self` and `rhs` with `UNION` and the quantifier `flag`.
    ///
    /// The result holds both operands in its union slot and has every other
    /// slot empty. In particular it has no `ORDER BY`, whether or not the
    /// operands have one; [`order_by`](Statement::order_by) can add one for
    /// the combined rows.
    pub fn union_with<R, Fl>(self, flag: Fl, rhs: R) -> Unioned<Self, R, Fl>
    where
        R: UnionOperand,
        Fl: Flag,
    {
        type Both<Lhs, Rhs> = <<Lhs as Consistency>::Consistent as Bool>::And<
            <Rhs as Consistency>::Consistent,
        >;

        let consistent = <Both<Self, R> as Bool>::VALUE;
        tracing::debug!(flag = ?Fl::FLAG, consistent, "building UNION");

        <Both<Self, R> as Bool>::choose(move || {
            Statement::assemble(
                NoColumns,
                NoFrom,
                NoWhere,
                NoOrderBy,
                NoLimit,
                Union::new(flag, self, rhs),
            )
        })
    }
}

impl<C, F, W, O, L, U> ToQuery for Statement<C, F, W, O, L, U>
where
    C: Clause,
    F: Clause,
    W: Clause,
    O: Clause,
    L: Clause,
    U: Clause,
{
    fn to_query(&self) -> stmt::Query {
        let mut query = stmt::Query::new(stmt::Select::default());

        self.columns.apply(&mut query);
        self.from.apply(&mut query);
        self.filter.apply(&mut query);
        self.union.apply(&mut query);
        self.order_by.apply(&mut query);
        self.limit.apply(&mut query);

        query
    }

    fn params(&self) -> ParamList {
        self.params.clone()
    }
}

impl<C, F, W, O, L, U> Consistency for Statement<C, F, W, O, L, U>
where
    C: Clause,
    F: Clause,
    W: Clause,
    O: Clause,
    L: Clause,
    U: Clause,
    (C, U): SelectShape,
{
    type Consistent = all![
        C::Consistent,
        F::Consistent,
        W::Consistent,
        O::Consistent,
        L::Consistent,
        U::Consistent,
        <(C, U) as SelectShape>::Consistent
    ];
}
