//! Keyed upsert on vectors.

/// Vector helpers.
pub trait VecExt<T> {
    /// Replace the first element whose key equals `item`'s key, or push
    /// `item` when there is none.  Returns the replaced element.
    fn add_or_update<K, F>(&mut self, item: T, key: F) -> Option<T>
    where
        K: PartialEq,
        F: Fn(&T) -> K;
}

impl<T> VecExt<T> for Vec<T> {
    fn add_or_update<K, F>(&mut self, item: T, key: F) -> Option<T>
    where
        K: PartialEq,
        F: Fn(&T) -> K,
    {
        let item_key = key(&item);
        match self.iter_mut().find(|existing| key(existing) == item_key) {
            Some(slot) => Some(std::mem::replace(slot, item)),
            None => {
                self.push(item);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_first_match() {
        let mut items = vec![(1, "a"), (2, "b"), (1, "c")];
        let replaced = items.add_or_update((1, "z"), |(id, _)| *id);
        assert_eq!(replaced, Some((1, "a")));
        assert_eq!(items, [(1, "z"), (2, "b"), (1, "c")]);
    }

    #[test]
    fn pushes_new_key() {
        let mut items = vec![(1, "a")];
        assert_eq!(items.add_or_update((3, "c"), |(id, _)| *id), None);
        assert_eq!(items, [(1, "a"), (3, "c")]);
    }

    #[test]
    fn optional_keys_compare_equal_when_absent() {
        let mut items: Vec<(Option<u8>, &str)> = vec![(None, "first")];
        items.add_or_update((None, "second"), |(k, _)| *k);
        assert_eq!(items, [(None, "second")]);
    }
}
