//! Core node types for the tree model

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// Value carried by every tree node
pub type Value = i64;

/// Identifier of a node within one tree
///
/// This is the node's pre-order index: the root is 0, and a node always comes
/// before its children, which are numbered left to right. Layout nodes, search
/// paths and scene primitives all use the same numbering.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
#[display(fmt = "NodeId({})", _0)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root node always has ID 0
    pub const ROOT: NodeId = NodeId(0);

    /// Create a new NodeId from a usize
    pub const fn new(id: usize) -> Self {
        NodeId(id)
    }

    /// Get the inner usize value
    pub const fn get(self) -> usize {
        self.0
    }
}

/// A node of the caller-owned tree: a value and its ordered children
///
/// The visualizer never mutates a `TreeNode`; it only reads it to build
/// layouts and run searches. Trees must be finite and acyclic, which owned
/// children guarantee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub value: Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a node with children
    pub fn new(value: Value, children: Vec<TreeNode>) -> Self {
        Self { value, children }
    }

    /// Create a node without children
    pub fn leaf(value: Value) -> Self {
        Self::new(value, Vec::new())
    }

    /// Returns true if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Count total nodes in this subtree
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Number of levels in this subtree (a single node has depth 1)
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// The tree shown by the viewer when no other tree is configured.
    ///
    /// ```text
    /// 0 ─┬─ 1 ── 3 ── 6
    ///    └─ 2 ─┬─ 4
    ///          └─ 5 ── 6
    /// ```
    ///
    /// The value 6 appears twice, both times at depth 3.
    pub fn sample() -> Self {
        Self::new(
            0,
            vec![
                Self::new(1, vec![Self::new(3, vec![Self::leaf(6)])]),
                Self::new(
                    2,
                    vec![Self::leaf(4), Self::new(5, vec![Self::leaf(6)])],
                ),
            ],
        )
    }
}

impl Default for TreeNode {
    fn default() -> Self {
        Self::sample()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        assert_eq!(NodeId::ROOT, NodeId(0));
        assert_eq!(NodeId::new(5).get(), 5);
        assert_eq!(NodeId::from(10), NodeId(10));
        assert_eq!(usize::from(NodeId(7)), 7);
        assert_eq!(NodeId(3).to_string(), "NodeId(3)");
    }

    #[test]
    fn test_sample_shape() {
        let tree = TreeNode::sample();
        assert_eq!(tree.count(), 8);
        assert_eq!(tree.depth(), 4);
        assert!(!tree.is_leaf());
        assert!(TreeNode::leaf(9).is_leaf());
    }

    #[test]
    fn test_single_node() {
        let tree = TreeNode::leaf(42);
        assert_eq!(tree.count(), 1);
        assert_eq!(tree.depth(), 1);
    }
}
