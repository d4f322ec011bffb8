use super::{visit, Expr, ExprParam, Node};

use std::{fmt, ops, sync::Arc};

/// The ordered named parameters a statement requires before it can run.
///
/// Order matches the order placeholders appear in the rendered SQL. The list
/// is reference counted; cloning it never copies the parameters.
#[derive(Clone, PartialEq, Eq)]
pub struct ParamList {
    params: Arc<[ExprParam]>,
}

impl ParamList {
    pub fn new(params: Vec<ExprParam>) -> ParamList {
        ParamList {
            params: params.into(),
        }
    }

    /// Collects every parameter referenced by `node`, in rendering order.
    pub fn collect(node: &impl Node) -> ParamList {
        let mut params = vec![];

        visit::for_each_expr(node, |expr| {
            if let Expr::Param(param) = expr {
                params.push(param.clone());
            }
        });

        ParamList::new(params)
    }

    /// Returns `self` followed by `other`.
    pub fn concat(&self, other: &ParamList) -> ParamList {
        if other.is_empty() {
            return self.clone();
        }

        if self.is_empty() {
            return other.clone();
        }

        self.iter().chain(other.iter()).cloned().collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.params.iter().map(|param| &param.name[..])
    }
}

impl Default for ParamList {
    fn default() -> Self {
        ParamList::new(vec![])
    }
}

impl ops::Deref for ParamList {
    type Target = [ExprParam];

    fn deref(&self) -> &Self::Target {
        &self.params
    }
}

impl FromIterator<ExprParam> for ParamList {
    fn from_iter<T: IntoIterator<Item = ExprParam>>(iter: T) -> Self {
        ParamList::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for ParamList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(names: &[&str]) -> ParamList {
        names.iter().map(|name| ExprParam::new(*name)).collect()
    }

    #[test]
    fn concat_keeps_order() {
        let lhs = list(&["a", "b"]);
        let rhs = list(&["b", "c"]);

        let params = lhs.concat(&rhs);
        assert_eq!(params.names().collect::<Vec<_>>(), ["a", "b", "b", "c"]);
    }

    #[test]
    fn concat_with_empty_shares_storage() {
        let lhs = list(&["a"]);
        let params = lhs.concat(&ParamList::default());

        assert!(Arc::ptr_eq(&lhs.params, &params.params));
    }
}
