use crate::node::Node;
use std::{
    cmp::Ordering,
    fmt::{Debug, Error, Formatter},
    iter::FusedIterator,
    ops::{Bound, RangeBounds},
};

/// An in-order iterator over a range of a map's entries.
pub struct Iter<'a, K, V> {
    // Nodes still to be yielded, the next one on top.
    stack: Vec<&'a Node<K, V>>,
    end: Bound<K>,
}

impl<'a, K, V> Clone for Iter<'a, K, V>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            end: self.end.clone(),
        }
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    /// Iterate over every entry below `root`.
    pub(crate) fn new(root: Option<&'a Node<K, V>>) -> Self {
        let mut stack = Vec::new();
        let mut link = root;
        while let Some(node) = link {
            stack.push(node);
            link = node.left.as_deref();
        }
        Self {
            stack,
            end: Bound::Unbounded,
        }
    }
}

impl<'a, K, V> Iter<'a, K, V>
where
    K: Clone + Ord,
{
    pub(crate) fn range<R>(root: Option<&'a Node<K, V>>, range: R) -> Self
    where
        R: RangeBounds<K>,
    {
        match (range.start_bound(), range.end_bound()) {
            (Bound::Excluded(left), Bound::Excluded(right)) if left == right => {
                panic!("OrderedMap::range: start and end bounds are equal and excluding each other")
            }
            (Bound::Included(left), Bound::Included(right))
            | (Bound::Included(left), Bound::Excluded(right))
            | (Bound::Excluded(left), Bound::Included(right))
            | (Bound::Excluded(left), Bound::Excluded(right))
                if left.cmp(right) == Ordering::Greater =>
            {
                panic!("OrderedMap::range: range start is greater than range end");
            }
            _ => {}
        }

        // Stack up the path to the first key inside the range.
        let mut stack = Vec::new();
        let mut link = root;
        while let Some(node) = link {
            let inside = match range.start_bound() {
                Bound::Included(start) => &node.key >= start,
                Bound::Excluded(start) => &node.key > start,
                Bound::Unbounded => true,
            };
            if inside {
                stack.push(node);
                link = node.left.as_deref();
            } else {
                link = node.right.as_deref();
            }
        }

        Self {
            stack,
            end: range.end_bound().cloned(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V>
where
    K: Ord,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let inside = match &self.end {
            Bound::Included(end) => &node.key <= end,
            Bound::Excluded(end) => &node.key < end,
            Bound::Unbounded => true,
        };
        if !inside {
            self.stack.clear();
            return None;
        }
        let mut link = node.right.as_deref();
        while let Some(next) = link {
            self.stack.push(next);
            link = next.left.as_deref();
        }
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> where K: Ord {}

impl<'a, K, V> Debug for Iter<'a, K, V>
where
    K: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self.stack.last() {
            None => write!(f, "Iter(done)"),
            Some(node) => write!(f, "Iter(next={:?})", node.key),
        }
    }
}
