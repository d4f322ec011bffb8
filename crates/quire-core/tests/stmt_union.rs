use pretty_assertions::assert_eq;
use quire_core::{
    stmt::{Expr, ExprSet, OrderByExpr, Query, Select, UnionFlag, UnionRules},
    Error,
};
use std_util::prelude::*;

fn select(column: &str, table: &str) -> Query {
    Select::new([Expr::column(column)]).table(table).into()
}

#[test]
fn union_holds_both_operands() {
    let lhs = select("a", "t");
    let rhs = select("b", "u");

    let query = assert_ok!(lhs.clone().union(rhs.clone()));

    let ExprSet::Union(expr_union) = &query.body else {
        panic!("expected a union body; query={query:#?}");
    };

    assert_eq!(expr_union.flag, UnionFlag::Distinct);
    assert_eq!(*expr_union.lhs, lhs);
    assert_eq!(*expr_union.rhs, rhs);
}

#[test]
fn union_all_sets_flag() {
    let query = assert_ok!(select("a", "t").union_all(select("b", "u")));

    assert!(query.body.as_union().unwrap().is_all());
}

#[test]
fn union_resets_order_by_and_limit() {
    let lhs = select("a", "t")
        .order_by(OrderByExpr::desc(Expr::column("a")))
        .limit(10);

    let query = assert_ok!(lhs.union(select("b", "u")));

    assert!(query.order_by.is_none());
    assert!(query.limit.is_none());

    // The operand keeps its own ORDER BY.
    let expr_union = query.body.as_union().unwrap();
    assert!(expr_union.lhs.order_by.is_some());
}

#[test]
fn union_rejects_inconsistent_lhs() {
    let lhs = Query::from(Select::default().table("t"));

    let err = assert_err_is!(lhs.union(select("b", "u")), Error::is_invalid_combination);
    assert_eq!(
        err.to_string(),
        "invalid combination: left operand of UNION is not a consistent statement: \
         invalid statement: SELECT requires at least one column"
    );
}

#[test]
fn union_rejects_inconsistent_rhs() {
    let rhs = Query::from(Select::default());

    let err = assert_err_is!(select("a", "t").union_all(rhs), Error::is_invalid_combination);
    assert!(err.to_string().contains("right operand"), "err={err}");
}

#[test]
fn default_rules_accept_mismatched_width() {
    let lhs = select("a", "t");
    let rhs = Query::from(Select::new([Expr::column("b"), Expr::column("c")]).table("u"));

    let query = assert_ok!(lhs.union(rhs));
    assert_eq!(query.width(), 1);
}

#[test]
fn matching_width_rule() {
    let rules = UnionRules {
        require_matching_width: true,
        ..UnionRules::default()
    };

    let rhs = Query::from(Select::new([Expr::column("b"), Expr::column("c")]).table("u"));

    let err = assert_err_is!(
        select("a", "t").union_with(UnionFlag::Distinct, rhs, &rules),
        Error::is_invalid_combination
    );
    assert_eq!(
        err.to_string(),
        "invalid combination: UNION operands select a different number of columns (1 vs 2)"
    );

    assert_ok!(select("a", "t").union_with(UnionFlag::All, select("b", "u"), &rules));
}

#[test]
fn ordered_operand_rule() {
    let ordered = select("b", "u").order_by(OrderByExpr::asc(Expr::column("b")));

    assert_ok!(select("a", "t").union(ordered.clone()));

    let err = assert_err_is!(
        select("a", "t").union_with(UnionFlag::Distinct, ordered, &UnionRules::strict()),
        Error::is_invalid_combination
    );
    assert_eq!(
        err.to_string(),
        "invalid combination: right operand of UNION has an ORDER BY"
    );
}

#[test]
fn union_params_are_lhs_then_rhs() {
    let lhs = Query::from(
        Select::new([Expr::column("a")])
            .table("t")
            .and(Expr::eq(Expr::column("x"), Expr::param("x"))),
    );
    let rhs = Query::from(
        Select::new([Expr::column("b")])
            .table("u")
            .and(Expr::eq(Expr::column("y"), Expr::param("y")))
            .and(Expr::lt(Expr::column("z"), Expr::param("z"))),
    );

    let query = assert_ok!(lhs.clone().union(rhs.clone()));

    assert_eq!(query.params(), lhs.params().concat(&rhs.params()));
    assert_eq!(query.params().names().collect::<Vec<_>>(), ["x", "y", "z"]);
}

#[test]
fn union_result_can_be_left_operand() {
    let inner = assert_ok!(select("a", "t").union(select("b", "u")));
    let outer = assert_ok!(inner.union_all(select("c", "v")));

    assert_ok!(outer.verify());
    assert_eq!(outer.width(), 1);
}

#[test]
fn union_rejects_union_on_the_right() {
    let inner = assert_ok!(select("a", "t").union(select("b", "u")));

    let err = assert_err_is!(
        select("c", "v").union_all(inner.clone()),
        Error::is_invalid_combination
    );
    assert_eq!(
        err.to_string(),
        "invalid combination: right operand of UNION is itself a UNION; \
         select from it as a derived table"
    );

    // Through a derived table the grouping is explicit.
    let derived = Query::from(Select::new([Expr::column("a")]).table(inner.derived("ab")));
    let outer = assert_ok!(select("c", "v").union_all(derived));
    assert_ok!(outer.verify());
}
