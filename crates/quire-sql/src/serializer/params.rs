use super::{Flavor, Formatter, ToSql};

use crate::{prepared::Bind, stmt};

/// Collects the values behind positional placeholders while a statement is
/// rendered.
pub trait Params {
    fn push(&mut self, value: &stmt::Value) -> Placeholder;

    fn push_param(&mut self, param: &stmt::ExprParam) -> Placeholder;
}

/// One-based position of a placeholder in the rendered statement.
pub struct Placeholder(pub usize);

impl Params for Vec<Bind> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        Vec::push(self, Bind::Value(value.clone()));
        Placeholder(self.len())
    }

    fn push_param(&mut self, param: &stmt::ExprParam) -> Placeholder {
        Vec::push(self, Bind::Param(param.clone()));
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) {
        match f.serializer.flavor {
            Flavor::Mysql => f.dst.push('?'),
            Flavor::Postgresql => fmt!(f, "$" self.0),
            Flavor::Sqlite => fmt!(f, "?" self.0),
        }
    }
}
