use crate::navigator::navigate;
use crate::node::Node;

/// Summary of the depth labels across a whole tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DepthStats {
    /// Number of nodes visited.
    pub nodes: usize,
    /// Sum of every node's depth.
    pub total_depth: usize,
    /// The deepest depth seen, which is the height of the tree.
    pub height: usize,
}

impl DepthStats {
    /// The mean depth of a node, or `NaN` for an empty tree.
    pub fn mean(&self) -> f64 {
        if self.nodes == 0 {
            f64::NAN
        } else {
            self.total_depth as f64 / self.nodes as f64
        }
    }
}

/// Visitor collecting `DepthStats` during a whole-tree walk.
#[derive(Debug, Default)]
pub(crate) struct DepthAccumulator {
    stats: DepthStats,
}

impl DepthAccumulator {
    pub(crate) fn visit<K, V>(&mut self, node: &Node<K, V>) {
        self.stats.nodes += 1;
        self.stats.total_depth += node.depth;
        self.stats.height = self.stats.height.max(node.depth);
    }

    pub(crate) fn walk<K, V>(mut self, root: Option<&Node<K, V>>) -> DepthStats
    where
        K: Ord,
    {
        if let Some(root) = root {
            navigate(root, None::<&K>, |node, _| self.visit(node), |_, _, ()| ());
        }
        self.stats
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::node::Side;

    #[test]
    fn empty_tree_has_no_mean() {
        let stats = DepthAccumulator::default().walk::<u8, u8>(None);
        assert_eq!(DepthStats::default(), stats);
        assert!(stats.mean().is_nan());
    }

    #[test]
    fn sums_depth_labels() {
        let mut root = Node::new(2, (), 0);
        let mut left = Box::new(Node::new(1, (), 1));
        left.attach(Side::Left, Box::new(Node::new(0, (), 2)));
        root.attach(Side::Left, left);
        root.attach(Side::Right, Box::new(Node::new(3, (), 1)));
        let stats = DepthAccumulator::default().walk(Some(&root));
        assert_eq!(
            DepthStats {
                nodes: 4,
                total_depth: 4,
                height: 2
            },
            stats
        );
        assert_eq!(1.0, stats.mean());
    }
}
