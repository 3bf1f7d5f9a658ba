//! Read-only navigation over trees addressed by [`NodeId`]

use std::collections::VecDeque;
use std::iter;

use crate::tree::{NodeId, Value};

/// A tree whose nodes are addressed by [`NodeId`].
///
/// Lookups with an unknown id return `None` or an empty iterator rather than
/// panicking.
pub trait Tree {
    fn root(&self) -> NodeId;

    fn value(&self, id: NodeId) -> Option<Value>;

    /// `None` for the root and for unknown ids.
    fn parent(&self, id: NodeId) -> Option<NodeId>;

    /// Child ids, left to right.
    fn children(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_>;

    fn node_count(&self) -> usize;

    fn child_count(&self, id: NodeId) -> usize {
        self.children(id).count()
    }

    fn is_leaf(&self, id: NodeId) -> bool {
        self.children(id).next().is_none()
    }

    /// Parent, grandparent and so on up to the root.
    fn ancestors(&self, id: NodeId) -> Box<dyn Iterator<Item = NodeId> + '_> {
        Box::new(iter::successors(self.parent(id), move |&up| self.parent(up)))
    }

    /// Number of edges between `id` and the root.
    fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// Ids from the root down to `id`, both included.
    fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path: Vec<NodeId> = self.ancestors(id).collect();
        path.reverse();
        path.push(id);
        path
    }

    /// Values for `ids`, dropping unknown ones.
    fn values_of(&self, ids: &[NodeId]) -> Vec<Value> {
        ids.iter().filter_map(|&id| self.value(id)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Parent first, then each child subtree left to right.
    PreOrder,
    /// Level by level, each level left to right.
    BreadthFirst,
}

/// Walks and value lookups, available on every [`Tree`].
pub trait TreeTraversal: Tree + Sized {
    fn walk(&self, order: TraversalOrder) -> TreeWalker<'_, Self> {
        self.walk_from(self.root(), order)
    }

    /// Walk only the subtree rooted at `start`.
    fn walk_from(&self, start: NodeId, order: TraversalOrder) -> TreeWalker<'_, Self> {
        TreeWalker::new(self, start, order)
    }

    /// First node in pre-order whose value is `value`.
    fn find_by_value(&self, value: Value) -> Option<NodeId> {
        self.walk(TraversalOrder::PreOrder)
            .find(|&id| self.value(id) == Some(value))
    }

    /// Every node whose value is `value`, in pre-order.
    fn find_all_by_value(&self, value: Value) -> Vec<NodeId> {
        self.walk(TraversalOrder::PreOrder)
            .filter(|&id| self.value(id) == Some(value))
            .collect()
    }
}

impl<T: Tree> TreeTraversal for T {}

/// Iterator over node ids in a [`TraversalOrder`].
///
/// Pre-order pops from the back of the deque, breadth-first from the front.
pub struct TreeWalker<'a, T: Tree + ?Sized> {
    tree: &'a T,
    order: TraversalOrder,
    pending: VecDeque<NodeId>,
}

impl<'a, T: Tree + ?Sized> TreeWalker<'a, T> {
    /// An unknown `start` yields nothing.
    pub fn new(tree: &'a T, start: NodeId, order: TraversalOrder) -> Self {
        let pending = tree.value(start).map(|_| start).into_iter().collect();
        Self {
            tree,
            order,
            pending,
        }
    }
}

impl<T: Tree + ?Sized> Iterator for TreeWalker<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = match self.order {
            TraversalOrder::PreOrder => self.pending.pop_back()?,
            TraversalOrder::BreadthFirst => self.pending.pop_front()?,
        };
        let children = self.tree.children(current);
        match self.order {
            // Reversed so the leftmost child is popped next
            TraversalOrder::PreOrder => {
                let children: Vec<_> = children.collect();
                self.pending.extend(children.into_iter().rev());
            }
            TraversalOrder::BreadthFirst => self.pending.extend(children),
        }
        Some(current)
    }
}
