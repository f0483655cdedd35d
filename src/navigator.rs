//! The one recursive descent everything else is built on.
//!
//! A navigation either follows a key down a single path, or, given no key,
//! walks the whole tree. Where a keyed descent stops (on the matching node,
//! or on the node whose child slot the key would occupy) `on_boundary` is
//! applied, and the key itself is handed back with the `Boundary` so an
//! insertion can move it into a new node. On the way back up every node on
//! the path is folded into the result with `on_recurse`, along with the side
//! the descent took out of it.
//!
//! A whole-tree walk applies `on_boundary` to every node in pre-order and
//! yields nothing. There is no result to fold on a walk, so `on_recurse` is
//! never called.
//!
//! The same body is stamped out twice: `navigate` over shared references,
//! where results may borrow from the tree for its whole lifetime, and
//! `navigate_mut` over exclusive ones, where they may not.

use crate::node::{Node, Side};
use std::{borrow::Borrow, cmp::Ordering};

/// Why the navigator handed a node to `on_boundary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Boundary<Q> {
    /// The node holds the key being looked for.
    Found(Q),
    /// The key belongs in this empty child slot of the node.
    Vacant(Side, Q),
    /// Whole-tree walk, no key involved.
    Visit,
}

macro_rules! navigator {
    (
        $(#[$meta:meta])*
        fn $name:ident<$($lt:lifetime)?>($($mutability:tt)?) via $walk:ident
    ) => {
        $(#[$meta])*
        pub(crate) fn $name<$($lt,)? K, V, Q, T, B, R>(
            node: &$($lt)? $($mutability)? Node<K, V>,
            key: Option<Q>,
            mut on_boundary: B,
            mut on_recurse: R,
        ) -> Option<T>
        where
            K: Ord,
            Q: Borrow<K>,
            B: FnMut(&$($lt)? $($mutability)? Node<K, V>, Boundary<Q>) -> T,
            R: FnMut(&$($lt)? $($mutability)? Node<K, V>, Side, T) -> T,
        {
            $walk(node, key, &mut on_boundary, &mut on_recurse)
        }

        fn $walk<$($lt,)? K, V, Q, T, B, R>(
            node: &$($lt)? $($mutability)? Node<K, V>,
            key: Option<Q>,
            on_boundary: &mut B,
            on_recurse: &mut R,
        ) -> Option<T>
        where
            K: Ord,
            Q: Borrow<K>,
            B: FnMut(&$($lt)? $($mutability)? Node<K, V>, Boundary<Q>) -> T,
            R: FnMut(&$($lt)? $($mutability)? Node<K, V>, Side, T) -> T,
        {
            let key = match key {
                Some(key) => key,
                None => {
                    on_boundary(&$($mutability)? *node, Boundary::Visit);
                    if let Some(left) = &$($mutability)? node.left {
                        $walk(&$($mutability)? **left, None, on_boundary, on_recurse);
                    }
                    if let Some(right) = &$($mutability)? node.right {
                        $walk(&$($mutability)? **right, None, on_boundary, on_recurse);
                    }
                    return None;
                }
            };
            let side = match key.borrow().cmp(&node.key) {
                Ordering::Equal => return Some(on_boundary(&$($mutability)? *node, Boundary::Found(key))),
                ordering => Side::toward(ordering),
            };
            let child = match side {
                Side::Left => &$($mutability)? node.left,
                Side::Right => &$($mutability)? node.right,
            };
            match child {
                None => Some(on_boundary(&$($mutability)? *node, Boundary::Vacant(side, key))),
                Some(child) => {
                    let below = $walk(&$($mutability)? **child, Some(key), on_boundary, on_recurse)?;
                    Some(on_recurse(&$($mutability)? *node, side, below))
                }
            }
        }
    };
}

navigator! {
    /// Navigate a tree through shared references.
    ///
    /// Returns `None` only for a whole-tree walk (`key` is `None`).
    fn navigate<'a>() via walk
}

navigator! {
    /// Navigate a tree through exclusive references, for updates on the way
    /// down (in `on_boundary`) and on the way back up (in `on_recurse`).
    fn navigate_mut<>(mut) via walk_mut
}
