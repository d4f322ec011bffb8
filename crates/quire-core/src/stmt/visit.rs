use super::{
    Expr, ExprAnd, ExprBinaryOp, ExprColumn, ExprOr, ExprParam, ExprSet, ExprUnion, Limit, Node,
    OrderBy, OrderByExpr, Query, Select, TableDerived, TableRef, Value,
};

macro_rules! visit_trait {
    (
        $( #[$attr:meta] )*
        pub trait Visit {
            $( fn $method:ident(&mut self, node: &$ty:ty); )*
        }
    ) => {
        $( #[$attr] )*
        pub trait Visit {
            fn visit<N: Node>(&mut self, node: &N)
            where
                Self: Sized,
            {
                node.visit(self);
            }

            $(
                fn $method(&mut self, node: &$ty) {
                    $method(self, node);
                }
            )*
        }

        impl<V: Visit + ?Sized> Visit for &mut V {
            $(
                fn $method(&mut self, node: &$ty) {
                    (**self).$method(node);
                }
            )*
        }
    };
}

visit_trait! {
    /// Walks a statement tree in rendering order.
    ///
    /// Each method defaults to the free function of the same name, which
    /// visits the node's children. Override a method to observe a node kind;
    /// call the free function from the override to keep descending.
    pub trait Visit {
        fn visit_expr(&mut self, node: &Expr);
        fn visit_expr_and(&mut self, node: &ExprAnd);
        fn visit_expr_binary_op(&mut self, node: &ExprBinaryOp);
        fn visit_expr_column(&mut self, node: &ExprColumn);
        fn visit_expr_or(&mut self, node: &ExprOr);
        fn visit_expr_param(&mut self, node: &ExprParam);
        fn visit_expr_set(&mut self, node: &ExprSet);
        fn visit_expr_union(&mut self, node: &ExprUnion);
        fn visit_limit(&mut self, node: &Limit);
        fn visit_order_by(&mut self, node: &OrderBy);
        fn visit_order_by_expr(&mut self, node: &OrderByExpr);
        fn visit_stmt_query(&mut self, node: &Query);
        fn visit_stmt_select(&mut self, node: &Select);
        fn visit_table_derived(&mut self, node: &TableDerived);
        fn visit_table_ref(&mut self, node: &TableRef);
        fn visit_value(&mut self, node: &Value);
    }
}

pub fn visit_expr<V>(v: &mut V, node: &Expr)
where
    V: Visit + ?Sized,
{
    match node {
        Expr::And(expr) => v.visit_expr_and(expr),
        Expr::BinaryOp(expr) => v.visit_expr_binary_op(expr),
        Expr::Column(expr) => v.visit_expr_column(expr),
        Expr::Or(expr) => v.visit_expr_or(expr),
        Expr::Param(expr) => v.visit_expr_param(expr),
        Expr::Value(expr) => v.visit_value(expr),
    }
}

pub fn visit_expr_and<V>(v: &mut V, node: &ExprAnd)
where
    V: Visit + ?Sized,
{
    for expr in &node.operands {
        v.visit_expr(expr);
    }
}

pub fn visit_expr_binary_op<V>(v: &mut V, node: &ExprBinaryOp)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.lhs);
    v.visit_expr(&node.rhs);
}

pub fn visit_expr_column<V>(_: &mut V, _: &ExprColumn)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_or<V>(v: &mut V, node: &ExprOr)
where
    V: Visit + ?Sized,
{
    node.operands.iter().for_each(|expr| v.visit_expr(expr));
}

pub fn visit_expr_param<V>(_: &mut V, _: &ExprParam)
where
    V: Visit + ?Sized,
{
}

pub fn visit_expr_set<V>(v: &mut V, node: &ExprSet)
where
    V: Visit + ?Sized,
{
    match node {
        ExprSet::Select(expr) => v.visit_stmt_select(expr),
        ExprSet::Union(expr) => v.visit_expr_union(expr),
    }
}

pub fn visit_expr_union<V>(v: &mut V, node: &ExprUnion)
where
    V: Visit + ?Sized,
{
    v.visit_stmt_query(&node.lhs);
    v.visit_stmt_query(&node.rhs);
}

pub fn visit_limit<V>(v: &mut V, node: &Limit)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.limit);

    if let Some(offset) = &node.offset {
        v.visit_expr(offset);
    }
}

pub fn visit_order_by<V>(v: &mut V, node: &OrderBy)
where
    V: Visit + ?Sized,
{
    for expr in &node.exprs {
        v.visit_order_by_expr(expr);
    }
}

pub fn visit_order_by_expr<V>(v: &mut V, node: &OrderByExpr)
where
    V: Visit + ?Sized,
{
    v.visit_expr(&node.expr);
}

pub fn visit_stmt_query<V>(v: &mut V, node: &Query)
where
    V: Visit + ?Sized,
{
    v.visit_expr_set(&node.body);

    if let Some(order_by) = &node.order_by {
        v.visit_order_by(order_by);
    }

    if let Some(limit) = &node.limit {
        v.visit_limit(limit);
    }
}

pub fn visit_stmt_select<V>(v: &mut V, node: &Select)
where
    V: Visit + ?Sized,
{
    for expr in &node.returning {
        v.visit_expr(expr);
    }

    for table in &node.from {
        v.visit_table_ref(table);
    }

    if let Some(filter) = &node.filter {
        v.visit_expr(filter);
    }
}

pub fn visit_table_derived<V>(v: &mut V, node: &TableDerived)
where
    V: Visit + ?Sized,
{
    v.visit_stmt_query(&node.subquery);
}

pub fn visit_table_ref<V>(v: &mut V, node: &TableRef)
where
    V: Visit + ?Sized,
{
    match node {
        TableRef::Table { .. } => {}
        TableRef::Derived(derived) => v.visit_table_derived(derived),
    }
}

pub fn visit_value<V>(_: &mut V, _: &Value)
where
    V: Visit + ?Sized,
{
}

pub fn for_each_expr<F>(node: &impl Node, f: F)
where
    F: FnMut(&Expr),
{
    struct ForEach<F> {
        f: F,
    }

    impl<F> Visit for ForEach<F>
    where
        F: FnMut(&Expr),
    {
        fn visit_expr(&mut self, node: &Expr) {
            visit_expr(self, node);
            (self.f)(node);
        }
    }

    node.visit(ForEach { f });
}
