mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_column;
pub use expr_column::ExprColumn;

mod expr_or;
pub use expr_or::ExprOr;

mod expr_param;
pub use expr_param::ExprParam;

mod expr_set;
pub use expr_set::ExprSet;

mod expr_union;
pub use expr_union::ExprUnion;

mod limit;
pub use limit::Limit;

mod node;
pub use node::Node;

mod op_binary;
pub use op_binary::BinaryOp;

mod order_by;
pub use order_by::OrderBy;

mod order_by_expr;
pub use order_by_expr::OrderByExpr;

mod param_list;
pub use param_list::ParamList;

mod query;
pub use query::Query;

mod select;
pub use select::Select;

mod table_ref;
pub use table_ref::{TableDerived, TableRef};

mod union_flag;
pub use union_flag::UnionFlag;

mod union_rules;
pub use union_rules::UnionRules;

mod value;
pub use value::Value;

mod verify;

pub mod visit;
pub use visit::Visit;
