use quire_core::{
    stmt::{Expr, ExprSet, ExprUnion, OrderBy, Query, Select, TableRef, UnionFlag},
    Error,
};
use std_util::prelude::*;

#[test]
fn select_with_columns_is_consistent() {
    let query = Query::from(Select::new([Expr::column("a")]).table("t"));
    assert_ok!(query.verify());
}

#[test]
fn select_without_from_is_consistent() {
    let query = Query::from(Select::new([Expr::from(1)]));
    assert_ok!(query.verify());
}

#[test]
fn empty_select_list_is_inconsistent() {
    let query = Query::from(Select::default().table("t"));
    assert_err_is!(query.verify(), Error::is_invalid_statement);
}

#[test]
fn empty_order_by_is_inconsistent() {
    let query = Query::from(Select::new([Expr::column("a")])).order_by(OrderBy { exprs: vec![] });
    assert_err_is!(query.verify(), Error::is_invalid_statement);
}

#[test]
fn inconsistent_derived_table() {
    let inner = Query::from(Select::default());
    let query = Query::from(Select::new([Expr::column("a")]).table(inner.derived("sub")));

    let err = assert_err_is!(query.verify(), Error::is_invalid_statement);
    assert_eq!(
        err.to_string(),
        "invalid statement: derived table `sub` is not consistent: \
         invalid statement: SELECT requires at least one column"
    );
}

#[test]
fn hand_built_union_checks_operands() {
    let query = Query::new(ExprSet::Union(ExprUnion {
        flag: UnionFlag::All,
        lhs: Box::new(Select::new([Expr::column("a")]).into()),
        rhs: Box::new(Select::default().into()),
    }));

    assert_err_is!(query.verify(), Error::is_invalid_statement);
}

#[test]
fn hand_built_right_nested_union_is_inconsistent() {
    let column = |name: &str| -> Query { Select::new([Expr::column(name)]).into() };

    let query = Query::new(ExprSet::Union(ExprUnion {
        flag: UnionFlag::All,
        lhs: Box::new(column("c")),
        rhs: Box::new(Query::new(ExprSet::Union(ExprUnion {
            flag: UnionFlag::Distinct,
            lhs: Box::new(column("a")),
            rhs: Box::new(column("b")),
        }))),
    }));

    let err = assert_err_is!(query.verify(), Error::is_invalid_statement);
    assert_eq!(
        err.to_string(),
        "invalid statement: right operand of UNION is itself a UNION"
    );
}

#[test]
fn derived_union_is_consistent() {
    let union = assert_ok!(Query::from(Select::new([Expr::column("a")]).table("t"))
        .union(Query::from(Select::new([Expr::column("b")]).table("u"))));

    let query = Query::from(
        Select::new([Expr::column("a")]).table(TableRef::derived(union, "u")),
    )
    .limit(10);

    assert_ok!(query.verify());
}
