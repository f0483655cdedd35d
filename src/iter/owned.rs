use crate::node::{Link, Node};
use std::{
    fmt::{Debug, Formatter},
    iter::FusedIterator,
};

/// A consuming in-order iterator over a map's entries.
pub struct OwnedIter<K, V> {
    // Detached from their left subtrees, which have already been stacked.
    stack: Vec<Box<Node<K, V>>>,
    remaining: usize,
}

impl<K, V> OwnedIter<K, V> {
    pub(crate) fn new(root: Link<K, V>) -> Self {
        let remaining = Node::size_of(&root);
        let mut iter = Self {
            stack: Vec::new(),
            remaining,
        };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut link: Link<K, V>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K, V> Iterator for OwnedIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left(node.right.take());
        self.remaining = self.remaining.saturating_sub(1);
        let Node { key, value, .. } = *node;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for OwnedIter<K, V> {}
impl<K, V> FusedIterator for OwnedIter<K, V> {}

impl<K, V> Debug for OwnedIter<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "OwnedIter(remaining={})", self.remaining)
    }
}

impl<K, V> Drop for OwnedIter<K, V> {
    fn drop(&mut self) {
        // A degenerate tree is as deep as it is long, so no recursive drops.
        while self.next().is_some() {}
    }
}
