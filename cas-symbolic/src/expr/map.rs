use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A map keyed by [strict equality](super#strict-equality) of expressions, or of sequences of
/// expressions.
///
/// Two structurally identical trees land on the same entry regardless of where they came from.
/// Entries are kept in insertion order, so iterating the map is deterministic for a given input.
#[derive(Debug, Clone)]
pub struct ExprMap<K, V> {
    /// Maps each key to the position of its entry in `entries`.
    index: FxHashMap<K, usize>,

    /// The entries of the map, in insertion order.
    entries: Vec<(K, V)>,
}

impl<K, V> Default for ExprMap<K, V> {
    fn default() -> Self {
        Self {
            index: FxHashMap::default(),
            entries: Vec::new(),
        }
    }
}

impl<K: Clone + Eq + Hash, V> ExprMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value for the given key, returning the previous value if there was one. A
    /// replaced entry keeps its original position.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            },
        }
    }

    /// Returns the value for the given key.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    /// Returns a mutable reference to the value for the given key, inserting `default` first if
    /// the key is absent.
    pub fn get_or_insert(&mut self, key: K, default: V) -> &mut V {
        let idx = match self.index.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.index.insert(key.clone(), idx);
                self.entries.push((key, default));
                idx
            },
        };
        &mut self.entries[idx].1
    }

    /// Returns true if the map contains the given key.
    pub fn has(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> IntoIterator for ExprMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::{add, constant, multiply, variable, Expr};
    use super::*;

    #[test]
    fn groups_by_structure() {
        let mut map = ExprMap::<Expr, usize>::new();
        for _ in 0..3 {
            *map.get_or_insert(add(vec![variable("x"), constant(1.0)]).unwrap(), 0) += 1;
        }
        *map.get_or_insert(variable("x"), 0) += 1;

        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&add(vec![variable("x"), constant(1.0)]).unwrap()), Some(&3));
        assert_eq!(map.get(&variable("x")), Some(&1));
        assert!(!map.has(&variable("y")));
    }

    #[test]
    fn argument_order_matters() {
        let mut map = ExprMap::<Expr, usize>::new();
        map.put(multiply(vec![variable("x"), variable("y")]).unwrap(), 1);
        map.put(multiply(vec![variable("y"), variable("x")]).unwrap(), 1);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn negative_zero_is_zero() {
        let mut map = ExprMap::<Expr, usize>::new();
        map.put(constant(0.0), 1);
        assert_eq!(map.put(constant(-0.0), 2), Some(1));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn sequence_keys() {
        let mut map = ExprMap::<Vec<Expr>, f64>::new();
        *map.get_or_insert(vec![variable("x"), variable("y")], 0.0) += 2.0;
        *map.get_or_insert(vec![variable("z")], 0.0) += 1.0;
        *map.get_or_insert(vec![variable("x"), variable("y")], 0.0) += 3.0;

        let keys = map.keys().cloned().collect::<Vec<_>>();
        assert_eq!(keys, vec![vec![variable("x"), variable("y")], vec![variable("z")]]);
        assert_eq!(map.get(&vec![variable("x"), variable("y")]), Some(&5.0));
    }

    #[test]
    fn iterates_in_insertion_order() {
        let mut map = ExprMap::<Expr, usize>::new();
        assert!(map.is_empty());

        map.put(variable("y"), 1);
        map.put(variable("x"), 2);
        map.put(variable("y"), 3);
        assert!(!map.is_empty());

        let entries = map.iter()
            .map(|(key, value)| (key.clone(), *value))
            .collect::<Vec<_>>();
        assert_eq!(entries, vec![(variable("y"), 3), (variable("x"), 2)]);
    }
}
