use super::*;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// The body of the query. Either `SELECT` or `UNION`.
    pub body: ExprSet,

    /// ORDER BY
    pub order_by: Option<OrderBy>,

    /// LIMIT and OFFSET
    pub limit: Option<Limit>,
}

impl Query {
    pub fn new(body: impl Into<ExprSet>) -> Self {
        Self {
            body: body.into(),
            order_by: None,
            limit: None,
        }
    }

    pub fn order_by(self, order_by: impl Into<OrderBy>) -> Self {
        Self {
            order_by: Some(order_by.into()),
            ..self
        }
    }

    pub fn limit(self, limit: impl Into<Limit>) -> Self {
        Self {
            limit: Some(limit.into()),
            ..self
        }
    }

    pub fn is_union(&self) -> bool {
        self.body.is_union()
    }

    /// Number of columns each returned row has.
    pub fn width(&self) -> usize {
        self.body.width()
    }

    /// Named parameters the query references, in rendering order.
    pub fn params(&self) -> ParamList {
        ParamList::collect(self)
    }

    /// Uses the query as a table named `alias`.
    pub fn derived(self, alias: impl Into<String>) -> TableRef {
        TableRef::derived(self, alias)
    }

    /// Combines `self` and `rhs` with `UNION`, removing duplicate rows.
    pub fn union(self, rhs: impl Into<Query>) -> Result<Query> {
        self.union_with(UnionFlag::Distinct, rhs, &UnionRules::default())
    }

    /// Combines `self` and `rhs` with `UNION ALL`.
    pub fn union_all(self, rhs: impl Into<Query>) -> Result<Query> {
        self.union_with(UnionFlag::All, rhs, &UnionRules::default())
    }

    /// Combines `self` and `rhs` with `UNION`.
    ///
    /// Both operands must be consistent (see [`Query::verify`]) and pass
    /// `rules`. `self` may be a union; `rhs` may not, since `UNION` groups to
    /// the left. Nest a union on the right through [`Query::derived`]. The combined query has no `ORDER BY` or `LIMIT` of its own;
    /// operands keep theirs. On failure nothing is returned but the error.
    pub fn union_with(
        self,
        flag: UnionFlag,
        rhs: impl Into<Query>,
        rules: &UnionRules,
    ) -> Result<Query> {
        let rhs = rhs.into();

        self.verify().map_err(|err| {
            err.context(Error::invalid_combination(
                "left operand of UNION is not a consistent statement",
            ))
        })?;

        rhs.verify().map_err(|err| {
            err.context(Error::invalid_combination(
                "right operand of UNION is not a consistent statement",
            ))
        })?;

        if rhs.is_union() {
            return Err(Error::invalid_combination(
                "right operand of UNION is itself a UNION; select from it as a derived table",
            ));
        }

        rules.check(&self, &rhs)?;

        if self.order_by.is_some() || rhs.order_by.is_some() {
            tracing::debug!("UNION operand has an ORDER BY; it stays inside the operand");
        }

        tracing::debug!(?flag, width = self.width(), "combining queries with UNION");

        Ok(Query {
            body: ExprSet::Union(ExprUnion {
                flag,
                lhs: Box::new(self),
                rhs: Box::new(rhs),
            }),
            order_by: None,
            limit: None,
        })
    }
}

impl From<Select> for Query {
    fn from(value: Select) -> Self {
        Query::new(value)
    }
}

impl Node for Query {
    fn visit<V: Visit>(&self, mut visit: V) {
        visit.visit_stmt_query(self);
    }
}
