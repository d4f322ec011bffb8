use pretty_assertions::assert_eq;
use quire_sql::{
    stmt::{Expr, Query, Select, Value},
    Arguments, Bind, Error, Serializer,
};
use std_util::prelude::*;

fn by_name() -> Query {
    let lhs = Query::from(
        Select::new([Expr::column("id")])
            .table("users")
            .and(Expr::eq(Expr::column("name"), Expr::param("name"))),
    );
    let rhs = Query::from(
        Select::new([Expr::column("id")])
            .table("admins")
            .and(Expr::eq(Expr::column("level"), 3))
            .and(Expr::eq(Expr::column("name"), Expr::param("name"))),
    );

    assert_ok!(lhs.union_all(rhs))
}

#[test]
fn binds_in_placeholder_order() {
    let prepared = Serializer::postgresql().prepare(&by_name());

    assert_eq!(
        prepared.sql,
        "SELECT id FROM users WHERE name = $1 UNION ALL \
         SELECT id FROM admins WHERE level = $2 AND name = $3"
    );
    assert_eq!(
        prepared.binds,
        [
            Bind::Param(quire_sql::stmt::ExprParam::new("name")),
            Bind::Value(Value::I64(3)),
            Bind::Param(quire_sql::stmt::ExprParam::new("name")),
        ]
    );

    let names: Vec<_> = prepared.params().map(|param| param.name.as_str()).collect();
    assert_eq!(names, ["name", "name"]);
}

#[test]
fn bind_resolves_arguments() {
    let prepared = Serializer::sqlite().prepare(&by_name());
    let args = Arguments::new().set("name", "carol");

    let values = assert_ok!(prepared.bind(&args));
    assert_eq!(
        values,
        [
            Value::from("carol"),
            Value::I64(3),
            Value::from("carol"),
        ]
    );
}

#[test]
fn bind_reports_missing_argument() {
    let prepared = Serializer::mysql().prepare(&by_name());
    let args = Arguments::new().set("other", 1);

    let err = assert_err_is!(prepared.bind(&args), Error::is_missing_argument);
    assert_eq!(err.to_string(), "missing argument for parameter `name`");
}

#[test]
fn literal_only_statement_needs_no_arguments() {
    let query = Query::from(Select::new([Expr::column("a")]).table("t").and(Expr::eq(Expr::column("a"), 1)));
    let prepared = Serializer::postgresql().prepare(&query);

    assert_eq!(prepared.params().count(), 0);
    assert_eq!(assert_ok!(prepared.bind(&Arguments::new())), [Value::I64(1)]);
}
