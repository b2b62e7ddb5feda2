//! Ordered grouping shared by the ledger, history and late-loan views.

use std::collections::HashMap;
use std::hash::Hash;

/// Mapping key → values that remembers the order in which keys were first seen.
#[derive(Debug, Clone)]
pub struct OrderedGroups<K, V> {
    groups: Vec<(K, Vec<V>)>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone, V> OrderedGroups<K, V> {
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn push(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&pos) => self.groups[pos].1.push(value),
            None => {
                self.index.insert(key.clone(), self.groups.len());
                self.groups.push((key, vec![value]));
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.index.get(key).map(|&pos| self.groups[pos].1.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<K: Eq + Hash + Clone, V> Default for OrderedGroups<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> IntoIterator for OrderedGroups<K, V> {
    type Item = (K, Vec<V>);
    type IntoIter = std::vec::IntoIter<(K, Vec<V>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Group `items` by `key`, keeping first-seen key order and input order inside each group.
pub fn group_by<K, V, I, F>(items: I, key: F) -> OrderedGroups<K, V>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = V>,
    F: Fn(&V) -> K,
{
    let mut groups = OrderedGroups::new();
    for item in items {
        let k = key(&item);
        groups.push(k, item);
    }
    groups
}
