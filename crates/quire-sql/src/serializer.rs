#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod statement;
mod value;

use crate::{prepared::Prepared, stmt::Query};

/// Serialize a statement to a SQL string
#[derive(Debug, Clone)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,

    /// Collapse the two spaces `UNION` is followed by when it has no
    /// quantifier into one.
    normalize_union_spacing: bool,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    /// By default a plain `UNION` renders as `UNION ` followed by a space
    /// separating it from the right operand, i.e. `... UNION  SELECT ...`.
    /// Passing `true` renders a single space instead.
    pub fn normalize_union_spacing(self, normalize: bool) -> Serializer {
        Serializer {
            normalize_union_spacing: normalize,
            ..self
        }
    }

    /// Renders `stmt` without a trailing terminator, pushing every literal
    /// value and named parameter to `params` in placeholder order.
    pub fn render(&self, stmt: &Query, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        tracing::debug!(flavor = ?self.flavor, sql = %ret, "rendered statement");
        ret
    }

    /// Renders `stmt` as a complete statement, terminated with `;`.
    pub fn serialize(&self, stmt: &Query, params: &mut impl Params) -> String {
        let mut ret = self.render(stmt, params);
        ret.push(';');
        ret
    }

    /// Renders `stmt` and keeps the placeholders' binds next to the text.
    pub fn prepare(&self, stmt: &Query) -> Prepared {
        let mut binds = vec![];
        let sql = self.render(stmt, &mut binds);
        Prepared { sql, binds }
    }
}
