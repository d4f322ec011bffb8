use super::{Comma, Ident, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::Query {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let order_by = self.order_by.as_ref().map(|order_by| (" ", order_by));
        let limit = self.limit.as_ref().map(|limit| (" ", limit));

        fmt!(f, self.body order_by limit);
    }
}

impl ToSql for &stmt::ExprSet {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::ExprSet::Select(select) => select.to_sql(f),
            stmt::ExprSet::Union(union) => union.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let from = if self.from.is_empty() {
            None
        } else {
            Some((" FROM ", Comma(&self.from)))
        };
        let filter = self.filter.as_ref().map(|expr| (" WHERE ", expr));

        fmt!(f, "SELECT " Comma(&self.returning) from filter);
    }
}

impl ToSql for &stmt::ExprUnion {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        // Without a quantifier the flag renders empty, leaving two spaces
        // before the right operand unless normalized.
        let space = if f.serializer.normalize_union_spacing && !self.flag.is_all() {
            ""
        } else {
            " "
        };

        fmt!(f, self.lhs " UNION " self.flag space self.rhs);
    }
}

impl ToSql for &stmt::UnionFlag {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::UnionFlag::Distinct => {}
            stmt::UnionFlag::All => f.dst.push_str("ALL"),
        }
    }
}

impl ToSql for &stmt::OrderBy {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, "ORDER BY " Comma(&self.exprs));
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let order = self.order.as_ref().map(|order| (" ", order));
        fmt!(f, self.expr order);
    }
}

impl ToSql for &stmt::Direction {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Direction::Asc => f.dst.push_str("ASC"),
            stmt::Direction::Desc => f.dst.push_str("DESC"),
        }
    }
}

impl ToSql for &stmt::Limit {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let offset = self.offset.as_ref().map(|offset| (" OFFSET ", offset));
        fmt!(f, "LIMIT " self.limit offset);
    }
}

impl ToSql for &stmt::TableRef {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::TableRef::Table { name, alias } => {
                let alias = alias.as_ref().map(|alias| (" AS ", Ident(alias)));
                fmt!(f, Ident(name) alias);
            }
            stmt::TableRef::Derived(derived) => {
                fmt!(f, "(" derived.subquery ") AS " Ident(&derived.alias));
            }
        }
    }
}
