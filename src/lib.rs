// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An unbalanced binary search tree map which keeps track of its own shape.
//!
//! Every node knows how many nodes its subtree holds and how far it sits
//! from the root, and both annotations are kept exact through every insert
//! and delete. That makes the tree cheap to measure (see
//! [`OrderedMap::mean_depth`] and [`OrderedMap::height`]) and gives you
//! order statistics ([`OrderedMap::rank`], [`OrderedMap::select`]) for free.
//!
//! No rebalancing is ever done. Instead, deleting a node with two children
//! promotes a neighbouring key in its place, and a [`Discriminator`] chosen
//! when the map is built decides which neighbour that is.
//!
//! ```
//! use hibbard::{Discriminator, OrderedMap};
//!
//! let mut map = OrderedMap::with_seed(Discriminator::SizeWeighted, 31337);
//! map.bulk_load((0..1000).map(|i| (i, i * 2)));
//! assert_eq!(Some(&84), map.get(&42));
//! map.delete(&42);
//! assert_eq!(None, map.get(&42));
//! assert_eq!(-1, map.depth(&42));
//! assert_eq!(999, map.len());
//! ```

#![forbid(rust_2018_idioms)]
#![deny(nonstandard_style)]
#![warn(unreachable_pub, missing_debug_implementations)]

use std::fmt::{Debug, Error, Formatter};
use std::{
    iter::FromIterator,
    mem,
    ops::{Index, RangeBounds},
};

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::debug;

mod config;
mod error;
mod iter;
mod navigator;
mod node;
mod stats;
mod strategy;
mod types;
mod validate;

pub use config::Config;
pub use error::InvariantViolation;
pub use iter::{Iter, OwnedIter};
pub use stats::DepthStats;
pub use strategy::Discriminator;
pub use types::InsertResult;

use navigator::{navigate, navigate_mut, Boundary};
use node::{Link, Node, Side};
use stats::DepthAccumulator;
use types::Placement;


/// An ordered map on an unbalanced binary search tree.
///
/// `R` is the random source used to shuffle bulk loads and to toss the coin
/// for [`Discriminator::Random`]. Seed it to make a map's shape
/// reproducible.
pub struct OrderedMap<K, V, R = StdRng> {
    root: Link<K, V>,
    discriminator: Discriminator,
    rng: R,
}

impl<K, V> OrderedMap<K, V, StdRng> {
    /// Construct an empty map, seeding its random source from the operating
    /// system.
    pub fn new(discriminator: Discriminator) -> Self {
        Self::with_rng(discriminator, StdRng::from_entropy())
    }

    /// Construct an empty map with a reproducible random source.
    pub fn with_seed(discriminator: Discriminator, seed: u64) -> Self {
        debug!(?discriminator, seed, "seeding ordered map");
        Self::with_rng(discriminator, StdRng::seed_from_u64(seed))
    }

    pub fn with_config(config: Config) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(config.discriminator, seed),
            None => Self::new(config.discriminator),
        }
    }
}

impl<K, V> Default for OrderedMap<K, V, StdRng> {
    fn default() -> Self {
        Self::new(Discriminator::default())
    }
}

impl<K, V, R> OrderedMap<K, V, R> {
    /// Construct an empty map drawing randomness from `rng`.
    pub fn with_rng(discriminator: Discriminator, rng: R) -> Self {
        Self {
            root: None,
            discriminator,
            rng,
        }
    }

    pub fn discriminator(&self) -> Discriminator {
        self.discriminator
    }

    pub fn len(&self) -> usize {
        Node::size_of(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
}

impl<K, V, R> OrderedMap<K, V, R>
where
    K: Ord,
{
    pub fn get(&self, key: &K) -> Option<&V> {
        let root = self.root.as_deref()?;
        navigate(
            root,
            Some(key),
            |node, boundary| match boundary {
                Boundary::Found(_) => Some(&node.value),
                _ => None,
            },
            |_, _, below| below,
        )
        .flatten()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// The number of edges between the root and the node holding `key`, or
    /// `-1` if there is no such node.
    pub fn depth(&self, key: &K) -> isize {
        self.root
            .as_deref()
            .and_then(|root| {
                navigate(
                    root,
                    Some(key),
                    |node, boundary| match boundary {
                        Boundary::Found(_) => Some(node.depth),
                        _ => None,
                    },
                    |_, _, below| below,
                )
                .flatten()
            })
            .map_or(-1, |depth| depth as isize)
    }

    /// The number of edges on the longest path from the root to a leaf.
    ///
    /// An empty tree and a tree holding a single key both have a height of
    /// zero; use [`is_empty`](Self::is_empty) to tell them apart.
    pub fn height(&self) -> usize {
        self.depth_stats().height
    }

    /// The average depth of every node in the tree, or `NaN` if the tree is
    /// empty.
    pub fn mean_depth(&self) -> f64 {
        self.depth_stats().mean()
    }

    pub fn depth_stats(&self) -> DepthStats {
        DepthAccumulator::default().walk(self.root.as_deref())
    }

    /// The number of keys in the map strictly lower than `key`.
    pub fn rank(&self, key: &K) -> usize {
        let root = match self.root.as_deref() {
            Some(root) => root,
            None => return 0,
        };
        navigate(
            root,
            Some(key),
            |node, boundary| match boundary {
                Boundary::Found(_) => Node::size_of(&node.left),
                Boundary::Vacant(side, _) => node.keys_before(side),
                Boundary::Visit => 0,
            },
            |node, side, below| below + node.keys_before(side),
        )
        .unwrap_or(0)
    }

    /// The entry with exactly `index` lower keys in the map.
    pub fn select(&self, mut index: usize) -> Option<(&K, &V)> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            let left = Node::size_of(&node.left);
            if index < left {
                link = node.left.as_deref();
            } else if index == left {
                return Some((&node.key, &node.value));
            } else {
                index -= left + 1;
                link = node.right.as_deref();
            }
        }
        None
    }

    /// The entry with the highest key not greater than `key`.
    pub fn floor(&self, key: &K) -> Option<(&K, &V)> {
        let root = self.root.as_deref()?;
        navigate(
            root,
            Some(key),
            |node, boundary| match boundary {
                Boundary::Found(_) | Boundary::Vacant(Side::Right, _) => Some(node),
                _ => None,
            },
            |node, side, below| match side {
                Side::Right => below.or(Some(node)),
                Side::Left => below,
            },
        )
        .flatten()
        .map(|node| (&node.key, &node.value))
    }

    /// The entry with the lowest key not less than `key`.
    pub fn ceiling(&self, key: &K) -> Option<(&K, &V)> {
        let root = self.root.as_deref()?;
        navigate(
            root,
            Some(key),
            |node, boundary| match boundary {
                Boundary::Found(_) | Boundary::Vacant(Side::Left, _) => Some(node),
                _ => None,
            },
            |node, side, below| match side {
                Side::Left => below.or(Some(node)),
                Side::Right => below,
            },
        )
        .flatten()
        .map(|node| (&node.key, &node.value))
    }

    pub fn min(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    pub fn max(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_deref())
    }

    /// Verify key order, subtree sizes and depth labels across the whole
    /// tree against an independent recount.
    pub fn check(&self) -> Result<(), InvariantViolation> {
        if let Some(root) = self.root.as_deref() {
            validate::check(root, 0, None, None)?;
        }
        Ok(())
    }

    /// Like [`check`](Self::check), but panics on a broken invariant.
    ///
    /// This is meant for tests and debugging: it walks the entire tree.
    pub fn validate(&self) {
        if let Err(error) = self.check() {
            panic!("OrderedMap::validate: {}", error);
        }
    }
}

impl<K, V, R> OrderedMap<K, V, R>
where
    K: Ord + Clone,
{
    /// Iterate over the entries whose keys fall within `range`, in order.
    ///
    /// Panics if the start of the range is greater than its end.
    pub fn range<B>(&self, range: B) -> Iter<'_, K, V>
    where
        B: RangeBounds<K>,
    {
        Iter::range(self.root.as_deref(), range)
    }
}

impl<K, V, R> OrderedMap<K, V, R>
where
    K: Ord,
    R: Rng,
{
    /// Insert a key and a value.
    ///
    /// If the key was already present, its value is replaced in place and
    /// the old one comes back as [`InsertResult::Replaced`]. Otherwise a new
    /// node is created and [`InsertResult::Inserted`] points at the value now
    /// stored in it.
    pub fn put(&mut self, key: K, value: V) -> InsertResult<'_, V> {
        let root = match self.root.as_deref_mut() {
            Some(root) => root,
            None => {
                let root = self.root.insert(Box::new(Node::new(key, value, 0)));
                return InsertResult::Inserted(&root.value);
            }
        };
        let mut value = Some(value);
        let placement = navigate_mut(
            root,
            Some(key),
            |node, boundary| {
                let value = value
                    .take()
                    .expect("OrderedMap::put: navigation reached a second boundary");
                match boundary {
                    Boundary::Vacant(side, key) => {
                        let depth = node.depth + 1;
                        node.attach(side, Box::new(Node::new(key, value, depth)));
                        Placement::Added(node.keys_before(side))
                    }
                    _ => Placement::Replaced(mem::replace(&mut node.value, value)),
                }
            },
            |node, side, placement| match placement {
                Placement::Added(rank) => {
                    node.size += 1;
                    Placement::Added(rank + node.keys_before(side))
                }
                replaced => replaced,
            },
        );
        #[cfg(feature = "tree_debug")]
        self.validate();
        let rank = match placement {
            Some(Placement::Added(rank)) => rank,
            Some(Placement::Replaced(previous)) => return InsertResult::Replaced(previous),
            None => unreachable!("OrderedMap::put: keyed navigation always reaches a boundary"),
        };
        let (_, stored) = self
            .select(rank)
            .expect("OrderedMap::put: inserted entry is missing from its rank");
        InsertResult::Inserted(stored)
    }

    /// Insert every entry from `entries`, in an order shuffled by the map's
    /// random source.
    ///
    /// Loading sorted input one key at a time would otherwise build a tree
    /// that is one long chain. If `entries` yields the same key more than
    /// once, which of its values ends up in the map depends on the shuffle.
    pub fn bulk_load<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut entries: Vec<(K, V)> = entries.into_iter().collect();
        entries.shuffle(&mut self.rng);
        debug!(entries = entries.len(), "bulk loading shuffled entries");
        for (key, value) in entries {
            self.put(key, value);
        }
    }

    /// Remove `key` from the map, returning its entry if it was present.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let removed = strategy::remove(&mut self.root, key, self.discriminator, &mut self.rng)?;
        #[cfg(feature = "tree_debug")]
        self.validate();
        let Node { key, value, .. } = *removed;
        Some((key, value))
    }

    /// Remove `key` from the map. Does nothing if it isn't there.
    pub fn delete(&mut self, key: &K) {
        self.remove(key);
    }

    pub fn remove_min(&mut self) -> Option<(K, V)> {
        let removed = strategy::remove_min(&mut self.root)?;
        #[cfg(feature = "tree_debug")]
        self.validate();
        let Node { key, value, .. } = *removed;
        Some((key, value))
    }

    pub fn remove_max(&mut self) -> Option<(K, V)> {
        let removed = strategy::remove_max(&mut self.root)?;
        #[cfg(feature = "tree_debug")]
        self.validate();
        let Node { key, value, .. } = *removed;
        Some((key, value))
    }

    pub fn delete_min(&mut self) {
        self.remove_min();
    }

    pub fn delete_max(&mut self) {
        self.remove_max();
    }
}

impl<K, V, R> Drop for OrderedMap<K, V, R> {
    fn drop(&mut self) {
        // Take the tree apart a node at a time; a chain is as deep as it is long.
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

#[cfg(feature = "tree_debug")]
impl<K, V, R> Debug for OrderedMap<K, V, R>
where
    K: Ord + Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self.root.as_deref() {
            None => write!(f, "EmptyTree"),
            Some(root) => {
                let mut result = Ok(());
                navigate(
                    root,
                    None::<&K>,
                    |node, _| {
                        if result.is_ok() {
                            result = writeln!(
                                f,
                                "{:indent$}{:?} => {:?} (depth={}, size={})",
                                "",
                                node.key,
                                node.value,
                                node.depth,
                                node.size,
                                indent = node.depth * 2
                            );
                        }
                    },
                    |_, _, ()| (),
                );
                result
            }
        }
    }
}

#[cfg(not(feature = "tree_debug"))]
impl<K, V, R> Debug for OrderedMap<K, V, R>
where
    K: Ord + Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, R> Clone for OrderedMap<K, V, R>
where
    K: Clone,
    V: Clone,
    R: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            discriminator: self.discriminator,
            rng: self.rng.clone(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V, StdRng>
where
    K: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut out = Self::default();
        out.bulk_load(iter);
        out
    }
}

impl<K, V, R> Extend<(K, V)> for OrderedMap<K, V, R>
where
    K: Ord,
    R: Rng,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<'a, K, V, R> Index<&'a K> for OrderedMap<K, V, R>
where
    K: Ord,
{
    type Output = V;

    fn index(&self, key: &K) -> &Self::Output {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, R> PartialEq for OrderedMap<K, V, R>
where
    K: Ord,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K, V, R> Eq for OrderedMap<K, V, R>
where
    K: Ord,
    V: Eq,
{
}

impl<'a, K, V, R> IntoIterator for &'a OrderedMap<K, V, R>
where
    K: Ord,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, R> IntoIterator for OrderedMap<K, V, R> {
    type Item = (K, V);
    type IntoIter = OwnedIter<K, V>;
    fn into_iter(mut self) -> Self::IntoIter {
        OwnedIter::new(self.root.take())
    }
}
