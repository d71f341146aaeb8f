//! Insert-if-absent, merge, and value checks on maps.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Helpers shared by `HashMap` and `BTreeMap`.
pub trait MapExt<K, V> {
    /// Insert `value` only if `key` is absent.  Returns `true` when inserted.
    fn add_or_skip_if_exists(&mut self, key: K, value: V) -> bool;

    /// Copy the entries of `other` into this map.  Existing keys keep their
    /// value unless `overwrite` is set.
    fn merge<I>(&mut self, other: I, overwrite: bool) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>;

    /// Return `true` if `key` is present and maps to `value`.
    fn has_value<Q>(&self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
        V: PartialEq;
}

impl<K, V, S> MapExt<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn add_or_skip_if_exists(&mut self, key: K, value: V) -> bool {
        if self.contains_key(&key) {
            return false;
        }
        self.insert(key, value);
        true
    }

    fn merge<I>(&mut self, other: I, overwrite: bool) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in other {
            if overwrite {
                self.insert(key, value);
            } else {
                self.entry(key).or_insert(value);
            }
        }
        self
    }

    fn has_value<Q>(&self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
        V: PartialEq,
    {
        self.get(key).is_some_and(|v| v == value)
    }
}

impl<K, V> MapExt<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    fn add_or_skip_if_exists(&mut self, key: K, value: V) -> bool {
        if self.contains_key(&key) {
            return false;
        }
        self.insert(key, value);
        true
    }

    fn merge<I>(&mut self, other: I, overwrite: bool) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in other {
            if overwrite {
                self.insert(key, value);
            } else {
                self.entry(key).or_insert(value);
            }
        }
        self
    }

    fn has_value<Q>(&self, key: &Q, value: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
        V: PartialEq,
    {
        self.get(key).is_some_and(|v| v == value)
    }
}
