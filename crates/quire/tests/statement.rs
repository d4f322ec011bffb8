use pretty_assertions::assert_eq;
use quire::{
    col, select,
    stmt::{Expr, OrderByExpr, TableRef, Value},
    Bind, Executable, NonEmpty, Serializer, Statement, ToQuery,
};

#[test]
fn select_from_where() {
    let query = select([col("id"), col("name")])
        .from(TableRef::aliased("users", "u"))
        .filter(Expr::ne(col("name"), Expr::param("name")));

    assert_eq!(
        query.to_sql(&Serializer::postgresql()),
        "SELECT id, name FROM users AS u WHERE name <> $1"
    );
    assert_eq!(query.params().names().collect::<Vec<_>>(), ["name"]);
}

#[test]
fn builders_fill_slots_in_any_order() {
    let a = select([col("a")]).from("t").filter(Expr::lt(col("a"), 3));
    let b = Statement::new()
        .filter(Expr::lt(col("a"), 3))
        .from("t")
        .columns([col("a")]);

    assert_eq!(a.to_query(), b.to_query());
}

#[test]
fn order_by_limit_offset() {
    let query = select([col("id")])
        .from("users")
        .order_by(OrderByExpr::desc(col("id")))
        .limit(20)
        .offset(40);

    let prepared = query.prepare(&Serializer::mysql());
    assert_eq!(
        prepared.sql,
        "SELECT id FROM users ORDER BY id DESC LIMIT ? OFFSET ?"
    );
    assert_eq!(
        prepared.binds,
        [Bind::Value(Value::from(20)), Bind::Value(Value::from(40))]
    );
}

#[test]
fn builders_leave_receiver_untouched() {
    let base = select([col("a")]).from("t");
    let filtered = base.clone().filter(Expr::eq(col("a"), Expr::param("a")));

    assert!(base.params().is_empty());
    assert_eq!(filtered.params().len(), 1);
    assert_eq!(
        base.to_sql(&Serializer::sqlite()),
        "SELECT a FROM t"
    );
}

#[test]
fn lowered_statement_verifies() {
    let query = select([col("a")]).from("t").union(select([col("b")]).from("u"));

    assert!(query.to_query().verify().is_ok());
    assert!(Statement::new().from("t").to_query().verify().is_err());
}

#[test]
fn run_time_lists_go_through_non_empty() {
    let names = ["id", "name"];
    let columns = NonEmpty::from_vec(names.iter().map(|name| col(*name)).collect()).unwrap();
    let order = NonEmpty::new(OrderByExpr::asc(col("name"))).with(OrderByExpr::desc(col("id")));

    let query = select(columns).from("users").order_by(order);

    assert!(query.to_query().verify().is_ok());
    assert_eq!(
        query.to_sql(&Serializer::sqlite()),
        "SELECT id, name FROM users ORDER BY name ASC, id DESC"
    );

    // An empty list never reaches a statement.
    assert!(NonEmpty::<Expr>::from_vec(vec![]).is_none());
    assert!(NonEmpty::<OrderByExpr>::from_vec(vec![]).is_none());
}
