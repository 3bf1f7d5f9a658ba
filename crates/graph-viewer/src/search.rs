//! Breadth-first and depth-first path search.
//!
//! Both searches share one loop and differ only in their [`Frontier`]: a FIFO
//! queue gives breadth-first order, a LIFO stack gives depth-first order.
//! Paths are reported as [`NodeId`]s so repeated values stay unambiguous.

use std::collections::VecDeque;
use std::fmt;

use derive_more::Display;
use log::{debug, trace};

use crate::tree::{NodeId, Tree, Value};

/// Which traversal a search uses.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    #[display(fmt = "BFS")]
    Bfs,
    #[display(fmt = "DFS")]
    Dfs,
}

impl SearchKind {
    pub const ALL: [SearchKind; 2] = [SearchKind::Bfs, SearchKind::Dfs];
}

/// A node waiting to be visited, with the path that led to it.
#[derive(Debug, Clone)]
pub struct Pending {
    pub node: NodeId,
    pub path: Vec<NodeId>,
}

/// Order in which pending nodes are visited.
pub trait Frontier: Default {
    fn push(&mut self, pending: Pending);

    fn pop(&mut self) -> Option<Pending>;

    /// Queue the children of a visited node so that, among themselves, they
    /// are visited left to right.
    fn push_children(&mut self, children: Vec<Pending>);
}

/// FIFO frontier: nodes are visited in non-decreasing depth order.
#[derive(Debug, Default)]
pub struct Queue(VecDeque<Pending>);

impl Frontier for Queue {
    fn push(&mut self, pending: Pending) {
        self.0.push_back(pending);
    }

    fn pop(&mut self) -> Option<Pending> {
        self.0.pop_front()
    }

    fn push_children(&mut self, children: Vec<Pending>) {
        self.0.extend(children);
    }
}

/// LIFO frontier: a branch is exhausted before its right sibling starts.
#[derive(Debug, Default)]
pub struct Stack(Vec<Pending>);

impl Frontier for Stack {
    fn push(&mut self, pending: Pending) {
        self.0.push(pending);
    }

    fn pop(&mut self) -> Option<Pending> {
        self.0.pop()
    }

    fn push_children(&mut self, children: Vec<Pending>) {
        // Reversed so the leftmost child is on top
        self.0.extend(children.into_iter().rev());
    }
}

/// The result of one search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub kind: SearchKind,
    pub target: Value,

    /// IDs from the root to the matched node, inclusive; `None` when the
    /// target is not in the tree.
    pub path: Option<Vec<NodeId>>,

    /// Every visited node, in visiting order.
    pub visited: Vec<NodeId>,

    /// Values of `visited`, kept so the outcome can be rendered on its own.
    pub visited_values: Vec<Value>,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// The matched node, if any.
    pub fn terminal(&self) -> Option<NodeId> {
        self.path.as_ref().and_then(|path| path.last().copied())
    }

    /// Values along the found path.
    pub fn path_values(&self, tree: &impl Tree) -> Option<Vec<Value>> {
        self.path.as_ref().map(|path| tree.values_of(path))
    }

    /// Human-readable visiting order, e.g. `Visited nodes (BFS order): 0 → 1 → 2`.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Visited nodes ({} order): {}",
            self.kind,
            join_arrows(&self.visited_values)
        )
    }
}

fn join_arrows(values: &[Value]) -> String {
    values
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Search for the first node carrying `target` in the given traversal order.
pub fn search(tree: &impl Tree, kind: SearchKind, target: Value) -> SearchOutcome {
    match kind {
        SearchKind::Bfs => search_with::<Queue>(tree, kind, target),
        SearchKind::Dfs => search_with::<Stack>(tree, kind, target),
    }
}

/// Breadth-first search; finds a shallowest match.
pub fn bfs(tree: &impl Tree, target: Value) -> SearchOutcome {
    search(tree, SearchKind::Bfs, target)
}

/// Depth-first search; explores children left to right.
pub fn dfs(tree: &impl Tree, target: Value) -> SearchOutcome {
    search(tree, SearchKind::Dfs, target)
}

/// The shared search loop, parameterized by frontier.
///
/// Stops at the first visited node whose value equals `target`. The tree is
/// finite, so the frontier always drains when there is no match.
pub fn search_with<F: Frontier>(tree: &impl Tree, kind: SearchKind, target: Value) -> SearchOutcome {
    debug!("{} traversal starts, target {}", kind, target);

    let mut frontier = F::default();
    let mut visited = Vec::new();
    let mut visited_values = Vec::new();

    let root = tree.root();
    frontier.push(Pending {
        node: root,
        path: vec![root],
    });

    while let Some(Pending { node, path }) = frontier.pop() {
        let Some(value) = tree.value(node) else {
            continue;
        };
        visited.push(node);
        visited_values.push(value);
        debug!(
            "Visiting node {} ({}), path so far: {}",
            value,
            node,
            join_arrows(&tree.values_of(&path))
        );

        if value == target {
            debug!("Found target {} at {}", target, node);
            return SearchOutcome {
                kind,
                target,
                path: Some(path),
                visited,
                visited_values,
            };
        }

        let children = tree
            .children(node)
            .map(|child| {
                trace!("Queueing child {}", child);
                let mut child_path = path.clone();
                child_path.push(child);
                Pending {
                    node: child,
                    path: child_path,
                }
            })
            .collect();
        frontier.push_children(children);
    }

    debug!("{} traversal finished without finding {}", kind, target);
    SearchOutcome {
        kind,
        target,
        path: None,
        visited,
        visited_values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{IndexedTree, TreeNode};
    use pretty_assertions::assert_eq;

    fn ids(raw: &[usize]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn test_bfs_sample() {
        let tree = IndexedTree::new(&TreeNode::sample());
        let outcome = bfs(&tree, 6);

        assert_eq!(outcome.path, Some(ids(&[0, 1, 2, 3])));
        assert_eq!(outcome.path_values(&tree), Some(vec![0, 1, 3, 6]));
        assert_eq!(outcome.visited_values, vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(outcome.terminal(), Some(NodeId(3)));
    }

    #[test]
    fn test_dfs_sample() {
        let tree = IndexedTree::new(&TreeNode::sample());
        let outcome = dfs(&tree, 4);

        assert_eq!(outcome.path_values(&tree), Some(vec![0, 2, 4]));
        assert_eq!(outcome.path, Some(ids(&[0, 4, 5])));
        assert_eq!(outcome.visited_values, vec![0, 1, 3, 6, 2, 4]);
    }

    #[test]
    fn test_bfs_prefers_shallowest_match() {
        // 7 sits at depth 3 on the left and depth 2 on the right
        let tree = IndexedTree::new(&TreeNode::new(
            0,
            vec![
                TreeNode::new(1, vec![TreeNode::new(2, vec![TreeNode::leaf(7)])]),
                TreeNode::new(3, vec![TreeNode::leaf(7)]),
            ],
        ));

        let breadth = bfs(&tree, 7);
        assert_eq!(breadth.path_values(&tree), Some(vec![0, 3, 7]));

        let depth = dfs(&tree, 7);
        assert_eq!(depth.path_values(&tree), Some(vec![0, 1, 2, 7]));
    }

    #[test]
    fn test_missing_target_visits_everything_once() {
        let tree = IndexedTree::new(&TreeNode::sample());

        for kind in SearchKind::ALL {
            let outcome = search(&tree, kind, 42);
            assert!(!outcome.is_found());
            assert_eq!(outcome.terminal(), None);

            let mut visited = outcome.visited.clone();
            visited.sort();
            assert_eq!(visited, ids(&[0, 1, 2, 3, 4, 5, 6, 7]), "{kind}");
        }
    }

    #[test]
    fn test_root_match() {
        let tree = IndexedTree::new(&TreeNode::leaf(5));
        let outcome = dfs(&tree, 5);
        assert_eq!(outcome.path, Some(ids(&[0])));
        assert_eq!(outcome.visited, ids(&[0]));
    }

    #[test]
    fn test_summary_names_the_kind() {
        let tree = IndexedTree::new(&TreeNode::sample());
        insta::assert_snapshot!(bfs(&tree, 6).summary(), @"Visited nodes (BFS order): 0 → 1 → 2 → 3 → 4 → 5 → 6");
        insta::assert_snapshot!(dfs(&tree, 4).summary(), @"Visited nodes (DFS order): 0 → 1 → 3 → 6 → 2 → 4");
    }
}
