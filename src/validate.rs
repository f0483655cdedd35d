use crate::{error::InvariantViolation, node::Node};

/// Check the subtree under `node` against an independent recount, returning
/// its size.
///
/// `lower` and `upper` are the exclusive key bounds inherited from the
/// ancestors, and `depth` is the number of edges walked from the root.
pub(crate) fn check<K, V>(
    node: &Node<K, V>,
    depth: usize,
    lower: Option<&K>,
    upper: Option<&K>,
) -> Result<usize, InvariantViolation>
where
    K: Ord,
{
    if node.depth != depth {
        return Err(InvariantViolation::Depth {
            expected: depth,
            found: node.depth,
        });
    }
    if lower.map_or(false, |lower| &node.key <= lower)
        || upper.map_or(false, |upper| &node.key >= upper)
    {
        return Err(InvariantViolation::Order { depth });
    }
    let left = match node.left.as_deref() {
        Some(left) => check(left, depth + 1, lower, Some(&node.key))?,
        None => 0,
    };
    let right = match node.right.as_deref() {
        Some(right) => check(right, depth + 1, Some(&node.key), upper)?,
        None => 0,
    };
    let expected = 1 + left + right;
    if node.size != expected {
        return Err(InvariantViolation::Size {
            depth,
            expected,
            found: node.size,
        });
    }
    Ok(expected)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::node::Side;

    fn sample() -> Node<u32, ()> {
        let mut root = Node::new(5, (), 0);
        root.attach(Side::Left, Box::new(Node::new(3, (), 1)));
        root.attach(Side::Right, Box::new(Node::new(8, (), 1)));
        root
    }

    #[test]
    fn accepts_consistent_tree() {
        assert_eq!(Ok(3), check(&sample(), 0, None, None));
    }

    #[test]
    fn catches_stale_depth() {
        let mut root = sample();
        root.right.as_mut().unwrap().depth = 2;
        assert_eq!(
            Err(InvariantViolation::Depth {
                expected: 1,
                found: 2
            }),
            check(&root, 0, None, None)
        );
    }

    #[test]
    fn catches_stale_size() {
        let mut root = sample();
        root.size = 2;
        assert_eq!(
            Err(InvariantViolation::Size {
                depth: 0,
                expected: 3,
                found: 2
            }),
            check(&root, 0, None, None)
        );
    }

    #[test]
    fn catches_misplaced_key() {
        let mut root = sample();
        root.left.as_mut().unwrap().key = 6;
        assert_eq!(
            Err(InvariantViolation::Order { depth: 1 }),
            check(&root, 0, None, None)
        );
    }
}
