//! Arena view of a [`TreeNode`] with pre-order node IDs

use smallvec::SmallVec;

use crate::tree::{NodeId, Tree, TreeNode, Value};

/// Internal node storage
#[derive(Debug, Clone)]
struct Entry {
    value: Value,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
}

/// A flattened, read-only copy of a [`TreeNode`]
///
/// Nodes are stored in pre-order, so a node's position in the arena is its
/// [`NodeId`]. The arena is built with an explicit stack and never recurses,
/// whatever the depth of the source tree.
#[derive(Debug, Clone)]
pub struct IndexedTree {
    nodes: Vec<Entry>,
}

impl IndexedTree {
    /// Flatten a tree into pre-order storage
    pub fn new(root: &TreeNode) -> Self {
        let mut nodes: Vec<Entry> = Vec::new();
        let mut stack: Vec<(&TreeNode, Option<NodeId>)> = vec![(root, None)];

        while let Some((node, parent)) = stack.pop() {
            let id = NodeId::new(nodes.len());
            nodes.push(Entry {
                value: node.value,
                parent,
                children: SmallVec::new(),
            });
            if let Some(parent) = parent {
                nodes[parent.get()].children.push(id);
            }
            for child in node.children.iter().rev() {
                stack.push((child, Some(id)));
            }
        }

        Self { nodes }
    }
}

impl Tree for IndexedTree {
    fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    fn value(&self, id: NodeId) -> Option<Value> {
        self.nodes.get(id.get()).map(|entry| entry.value)
    }

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.get())?.parent
    }

    fn children(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(
            self.nodes
                .get(id.get())
                .map(|entry| entry.children.iter().copied())
                .into_iter()
                .flatten(),
        )
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl From<&TreeNode> for IndexedTree {
    fn from(root: &TreeNode) -> Self {
        Self::new(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tree_operations() {
        let tree = IndexedTree::new(&TreeNode::sample());

        assert_eq!(tree.node_count(), 8);
        assert_eq!(tree.child_count(NodeId::ROOT), 2);
        assert_eq!(tree.value(NodeId(2)), Some(3));
        assert_eq!(tree.parent(NodeId(4)), Some(NodeId::ROOT));
        assert!(tree.is_leaf(NodeId(5)));
        assert!(!tree.is_leaf(NodeId(6)));
        assert_eq!(tree.value(NodeId(8)), None);
    }

    #[test]
    fn test_children_in_order() {
        let tree = IndexedTree::new(&TreeNode::sample());
        let children: Vec<_> = tree.children(NodeId(4)).collect();
        assert_eq!(children, vec![NodeId(5), NodeId(6)]);
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let mut chain = TreeNode::leaf(0);
        for value in 1..5_000 {
            chain = TreeNode::new(value, vec![chain]);
        }
        let tree = IndexedTree::new(&chain);
        assert_eq!(tree.node_count(), 5_000);
        assert_eq!(tree.depth(NodeId(4_999)), 4_999);
        assert_eq!(tree.value(NodeId(4_999)), Some(0));
    }
}
