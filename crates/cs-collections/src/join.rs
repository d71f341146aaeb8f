//! Outer joins.
//!
//! Both joins keep every element of the preserved side, in order.  An
//! element with several matches on the other side yields one row per match;
//! an element with none yields a single row with `None`.

use std::collections::HashMap;
use std::hash::Hash;

fn group_by_key<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> HashMap<K, Vec<T>>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

/// Join every element of `left` with the matching elements of `right`.
///
/// ```
/// use cs_collections::left_outer_join;
///
/// let people = [(1, "Bob"), (4, "Sue")];
/// let colours = [(1, "Blue")];
/// let rows = left_outer_join(
///     people,
///     colours,
///     |(id, _)| *id,
///     |(id, _)| *id,
///     |(_, name), colour| (*name, colour.map(|(_, c)| *c)),
/// );
/// assert_eq!(rows, [("Bob", Some("Blue")), ("Sue", None)]);
/// ```
pub fn left_outer_join<L, R, K, O>(
    left: impl IntoIterator<Item = L>,
    right: impl IntoIterator<Item = R>,
    left_key: impl Fn(&L) -> K,
    right_key: impl Fn(&R) -> K,
    mut result: impl FnMut(&L, Option<&R>) -> O,
) -> Vec<O>
where
    K: Eq + Hash,
{
    let lookup = group_by_key(right, right_key);
    let mut rows = Vec::new();
    for l in left {
        match lookup.get(&left_key(&l)) {
            Some(matches) => rows.extend(matches.iter().map(|r| result(&l, Some(r)))),
            None => rows.push(result(&l, None)),
        }
    }
    rows
}

/// Join every element of `right` with the matching elements of `left`.
pub fn right_outer_join<L, R, K, O>(
    left: impl IntoIterator<Item = L>,
    right: impl IntoIterator<Item = R>,
    left_key: impl Fn(&L) -> K,
    right_key: impl Fn(&R) -> K,
    mut result: impl FnMut(Option<&L>, &R) -> O,
) -> Vec<O>
where
    K: Eq + Hash,
{
    let lookup = group_by_key(left, left_key);
    let mut rows = Vec::new();
    for r in right {
        match lookup.get(&right_key(&r)) {
            Some(matches) => rows.extend(matches.iter().map(|l| result(Some(l), &r))),
            None => rows.push(result(None, &r)),
        }
    }
    rows
}
