use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Values bound to variables, used to decide which subtrees of an expression can be fully
/// evaluated while simplifying.
///
/// A variable that is absent from this mapping is **unknown**.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Knowns {
    /// The values of the known variables.
    vars: HashMap<String, f64>,
}

impl Knowns {
    /// Creates an empty set of bindings, where every variable is unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the given variable, returning the updated bindings.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.add_var(name, value);
        self
    }

    /// Binds the given variable, replacing any previous value.
    pub fn add_var(&mut self, name: impl Into<String>, value: f64) {
        self.vars.insert(name.into(), value);
    }

    /// Returns the value of the given variable, if it is known.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns true if the given variable is known.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Returns the number of known variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if no variables are known.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Knowns {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut knowns = Self::new();
        for (name, value) in iter {
            knowns.add_var(name, value);
        }
        knowns
    }
}
