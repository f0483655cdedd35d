use crate::navigator::navigate_mut;
use std::cmp::Ordering;

pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// Which child slot of a node we're talking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    /// The side a key lands on, given how it compares to a node's key.
    ///
    /// `Equal` has no side; callers must handle a match before asking.
    pub(crate) fn toward(ordering: Ordering) -> Self {
        debug_assert_ne!(ordering, Ordering::Equal);
        match ordering {
            Ordering::Less => Side::Left,
            _ => Side::Right,
        }
    }
}

/// A tree node owns both of its children outright.
///
/// Besides the key and value, a node records its distance from the root
/// and the number of nodes in the subtree it heads, itself included.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) depth: usize,
    pub(crate) size: usize,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V, depth: usize) -> Self {
        Node {
            key,
            value,
            depth,
            size: 1,
            left: None,
            right: None,
        }
    }

    pub(crate) fn size_of(link: &Link<K, V>) -> usize {
        link.as_ref().map_or(0, |node| node.size)
    }

    pub(crate) fn child(&self, side: Side) -> Option<&Node<K, V>> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Link<K, V> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Hang a subtree off an empty child slot and count it into our size.
    pub(crate) fn attach(&mut self, side: Side, child: Box<Node<K, V>>) {
        debug_assert!(self.child(side).is_none());
        self.size += child.size;
        *self.child_mut(side) = Some(child);
    }

    /// How many keys in this subtree sort before everything on `side`.
    pub(crate) fn keys_before(&self, side: Side) -> usize {
        match side {
            Side::Left => 0,
            Side::Right => Self::size_of(&self.left) + 1,
        }
    }

    pub(crate) fn recount(&mut self) {
        self.size = 1 + Self::size_of(&self.left) + Self::size_of(&self.right);
    }
}

impl<K, V> Node<K, V>
where
    K: Ord,
{
    /// Move this whole subtree one level closer to the root.
    pub(crate) fn shift_up(&mut self) {
        navigate_mut(self, None::<&K>, |node, _| node.depth -= 1, |_, _, ()| ());
    }
}
