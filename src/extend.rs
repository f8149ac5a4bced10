//! In-place extension of existing containers, used by
//! [`collect_into`](crate::LazySequence::collect_into).

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;

/// A mutable container that a sequence can be drained into.
///
/// Three capability families are supported: append-ordered sequences keep
/// every element in source order at the end, mappings insert or overwrite
/// per `(key, value)` pair (last write wins), and sets insert with
/// duplicates collapsing. A destination with none of these capabilities is
/// rejected at compile time by this bound.
pub trait ExtendTarget<T> {
    fn extend_from<I: IntoIterator<Item = T>>(&mut self, items: I);
}

impl<T> ExtendTarget<T> for Vec<T> {
    fn extend_from<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.extend(items);
    }
}

impl<T> ExtendTarget<T> for VecDeque<T> {
    fn extend_from<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.extend(items);
    }
}

impl<K: Eq + Hash, V> ExtendTarget<(K, V)> for HashMap<K, V> {
    fn extend_from<I: IntoIterator<Item = (K, V)>>(&mut self, items: I) {
        for (key, value) in items {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> ExtendTarget<(K, V)> for BTreeMap<K, V> {
    fn extend_from<I: IntoIterator<Item = (K, V)>>(&mut self, items: I) {
        for (key, value) in items {
            self.insert(key, value);
        }
    }
}

impl<T: Eq + Hash> ExtendTarget<T> for HashSet<T> {
    fn extend_from<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.insert(item);
        }
    }
}

impl<T: Ord> ExtendTarget<T> for BTreeSet<T> {
    fn extend_from<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.insert(item);
        }
    }
}
