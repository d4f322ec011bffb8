use crate::stmt;
use indexmap::IndexMap;
use quire_core::{Error, Result};

/// SQL text together with the values its placeholders stand for.
#[derive(Debug, Clone, PartialEq)]
pub struct Prepared {
    pub sql: String,

    /// One entry per placeholder, in placeholder order.
    pub binds: Vec<Bind>,
}

/// What a single placeholder is bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum Bind {
    /// A literal from the statement
    Value(stmt::Value),

    /// A named parameter, supplied by [`Arguments`] at execution
    Param(stmt::ExprParam),
}

/// Values for named parameters.
#[derive(Debug, Default, Clone)]
pub struct Arguments {
    values: IndexMap<String, stmt::Value>,
}

impl Prepared {
    /// Named parameters that still need a value, in placeholder order.
    pub fn params(&self) -> impl Iterator<Item = &stmt::ExprParam> + '_ {
        self.binds.iter().filter_map(|bind| match bind {
            Bind::Param(param) => Some(param),
            Bind::Value(_) => None,
        })
    }

    /// Resolves every placeholder to a value.
    pub fn bind(&self, args: &Arguments) -> Result<Vec<stmt::Value>> {
        self.binds
            .iter()
            .map(|bind| match bind {
                Bind::Value(value) => Ok(value.clone()),
                Bind::Param(param) => args
                    .get(&param.name)
                    .cloned()
                    .ok_or_else(|| Error::missing_argument(&param.name)),
            })
            .collect()
    }
}

impl Arguments {
    pub fn new() -> Arguments {
        Arguments::default()
    }

    /// Sets the value of parameter `name`, replacing any earlier value.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<stmt::Value>) -> Arguments {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&stmt::Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &stmt::Value)> + '_ {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}
