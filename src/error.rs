use thiserror::Error;

/// A broken structural invariant, as reported by `OrderedMap::check`.
///
/// Depths are those of the offending node, counted from the root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("key at depth {depth} is out of order with its ancestors")]
    Order { depth: usize },
    #[error("node at depth {depth} records a subtree size of {found}, but its subtree holds {expected} nodes")]
    Size {
        depth: usize,
        expected: usize,
        found: usize,
    },
    #[error("node at depth {expected} is labelled with depth {found}")]
    Depth { expected: usize, found: usize },
}
