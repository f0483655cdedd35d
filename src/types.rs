/// What [`OrderedMap::put`](crate::OrderedMap::put) did with its value.
#[derive(Debug, PartialEq, Eq)]
pub enum InsertResult<'a, V> {
    /// The key was new. This is the value now stored under it.
    Inserted(&'a V),
    /// The key was already present. This is the value it held before.
    Replaced(V),
}

impl<'a, V> InsertResult<'a, V> {
    /// The value a `put` displaced, if the key was already present.
    pub fn replaced(self) -> Option<V> {
        match self {
            InsertResult::Replaced(previous) => Some(previous),
            InsertResult::Inserted(_) => None,
        }
    }

    /// The previous value for an existing key, else the inserted value.
    pub fn value(&self) -> &V {
        match self {
            InsertResult::Inserted(value) => value,
            InsertResult::Replaced(previous) => previous,
        }
    }
}

/// A `put` as seen from one node on its path.
pub(crate) enum Placement<V> {
    // An existing node's value was swapped out.
    Replaced(V),
    // A new node was created below, with this many lower keys in the
    // current subtree.
    Added(usize),
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accessors() {
        let stored = 10;
        let inserted: InsertResult<'_, i32> = InsertResult::Inserted(&stored);
        assert_eq!(&10, inserted.value());
        assert_eq!(None, inserted.replaced());
        let replaced: InsertResult<'_, i32> = InsertResult::Replaced(7);
        assert_eq!(&7, replaced.value());
        assert_eq!(Some(7), replaced.replaced());
    }
}
