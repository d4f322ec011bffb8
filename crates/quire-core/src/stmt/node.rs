use super::Visit;
use std::fmt;

pub trait Node: fmt::Debug {
    fn visit<V: Visit>(&self, visit: V)
    where
        Self: Sized;
}

impl<T: Node> Node for Option<T> {
    fn visit<V: Visit>(&self, visit: V)
    where
        Self: Sized,
    {
        if let Some(node) = self {
            node.visit(visit);
        }
    }
}

impl<T: Node> Node for Vec<T> {
    fn visit<V: Visit>(&self, mut visit: V)
    where
        Self: Sized,
    {
        for node in self {
            node.visit(&mut visit);
        }
    }
}

impl<T: Node> Node for &T {
    fn visit<V: Visit>(&self, visit: V)
    where
        Self: Sized,
    {
        (**self).visit(visit)
    }
}
