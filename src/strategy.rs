//! Hibbard deletion with a choice of where the replacement comes from.

use crate::node::{Link, Node, Side};
use rand::Rng;
use std::cmp::Ordering;
use tracing::trace;

/// The policy deciding which subtree supplies the replacement when a node
/// with two children is deleted.
///
/// The discriminator is picked when a map is constructed and never changes
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discriminator {
    /// Always promote the lowest key of the right subtree.
    Fixed,
    /// Toss a coin per deletion: heads promotes the lowest key of the right
    /// subtree, tails the highest key of the left subtree.
    Random,
    /// Promote from whichever subtree holds more nodes, the right one on a
    /// tie.
    SizeWeighted,
}

impl Default for Discriminator {
    fn default() -> Self {
        Discriminator::Fixed
    }
}

impl Discriminator {
    pub(crate) fn choose<K, V, R>(self, left: &Node<K, V>, right: &Node<K, V>, rng: &mut R) -> Side
    where
        R: Rng + ?Sized,
    {
        match self {
            Discriminator::Fixed => Side::Right,
            Discriminator::Random => {
                if rng.gen::<bool>() {
                    Side::Right
                } else {
                    Side::Left
                }
            }
            Discriminator::SizeWeighted => {
                if right.size >= left.size {
                    Side::Right
                } else {
                    Side::Left
                }
            }
        }
    }
}

/// Split the lowest node off a subtree.
///
/// Returns the detached node, childless and with a size of one, and what
/// remains of the subtree. The detached node's former right subtree takes
/// its place one level up.
pub(crate) fn split_min<K, V>(mut node: Box<Node<K, V>>) -> (Box<Node<K, V>>, Link<K, V>)
where
    K: Ord,
{
    match node.left.take() {
        None => {
            let rest = node.right.take().map(|mut rest| {
                rest.shift_up();
                rest
            });
            node.size = 1;
            (node, rest)
        }
        Some(left) => {
            let (min, rest) = split_min(left);
            node.left = rest;
            node.size -= 1;
            (min, Some(node))
        }
    }
}

/// Split the highest node off a subtree. See `split_min`.
pub(crate) fn split_max<K, V>(mut node: Box<Node<K, V>>) -> (Box<Node<K, V>>, Link<K, V>)
where
    K: Ord,
{
    match node.right.take() {
        None => {
            let rest = node.left.take().map(|mut rest| {
                rest.shift_up();
                rest
            });
            node.size = 1;
            (node, rest)
        }
        Some(right) => {
            let (max, rest) = split_max(right);
            node.right = rest;
            node.size -= 1;
            (max, Some(node))
        }
    }
}

/// Take the node in `link` out of the tree, closing the gap it leaves.
///
/// The removed node comes back detached from its children.
pub(crate) fn unlink<K, V, R>(
    link: &mut Link<K, V>,
    discriminator: Discriminator,
    rng: &mut R,
) -> Option<Box<Node<K, V>>>
where
    K: Ord,
    R: Rng + ?Sized,
{
    let mut node = link.take()?;
    *link = match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(mut child), None) | (None, Some(mut child)) => {
            child.shift_up();
            Some(child)
        }
        (Some(left), Some(right)) => {
            let side = discriminator.choose(&*left, &*right, rng);
            trace!(?discriminator, ?side, depth = node.depth, "replacing node with two children");
            let mut replacement = match side {
                Side::Right => {
                    let (mut min, rest) = split_min(right);
                    min.left = Some(left);
                    min.right = rest;
                    min
                }
                Side::Left => {
                    let (mut max, rest) = split_max(left);
                    max.left = rest;
                    max.right = Some(right);
                    max
                }
            };
            replacement.depth = node.depth;
            replacement.recount();
            Some(replacement)
        }
    };
    node.size = 1;
    Some(node)
}

/// Find `key` below `link` and remove it, shrinking every subtree on the
/// way down to it.
pub(crate) fn remove<K, V, R>(
    link: &mut Link<K, V>,
    key: &K,
    discriminator: Discriminator,
    rng: &mut R,
) -> Option<Box<Node<K, V>>>
where
    K: Ord,
    R: Rng + ?Sized,
{
    let node = link.as_deref_mut()?;
    let side = match key.cmp(&node.key) {
        Ordering::Equal => return unlink(link, discriminator, rng),
        ordering => Side::toward(ordering),
    };
    let removed = remove(node.child_mut(side), key, discriminator, rng)?;
    node.size -= 1;
    Some(removed)
}

/// Remove the lowest node below `link`.
pub(crate) fn remove_min<K, V>(link: &mut Link<K, V>) -> Option<Box<Node<K, V>>>
where
    K: Ord,
{
    let (min, rest) = split_min(link.take()?);
    *link = rest;
    Some(min)
}

/// Remove the highest node below `link`.
pub(crate) fn remove_max<K, V>(link: &mut Link<K, V>) -> Option<Box<Node<K, V>>>
where
    K: Ord,
{
    let (max, rest) = split_max(link.take()?);
    *link = rest;
    Some(max)
}
