//! Directed graph as an adjacency map, with breadth-first and depth-first
//! traversal.

use std::collections::{HashMap, HashSet, VecDeque};

use log::trace;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph<'a> {
    adjacency: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> Graph<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(node, neighbors)` pairs. Neighbor order is kept.
    pub fn from_adjacency<I, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, N)>,
        N: IntoIterator<Item = &'a str>,
    {
        let mut graph = Self::new();
        for (node, neighbors) in entries {
            graph.add_edges(node, neighbors);
        }
        graph
    }

    /// Append edges from `node` to each of `neighbors`.
    pub fn add_edges(&mut self, node: &'a str, neighbors: impl IntoIterator<Item = &'a str>) {
        self.adjacency.entry(node).or_default().extend(neighbors);
    }

    /// Outgoing neighbors of `node`; empty if the node has no entry.
    pub fn neighbors(&self, node: &str) -> &[&'a str] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Visit order of a breadth-first traversal from `start`.
    pub fn bfs(&self, start: &'a str) -> Vec<&'a str> {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::from([start]);

        while let Some(node) = queue.pop_front() {
            if !visited.insert(node) {
                continue;
            }
            trace!("BFS visits {}", node);
            order.push(node);
            queue.extend(
                self.neighbors(node)
                    .iter()
                    .filter(|neighbor| !visited.contains(*neighbor)),
            );
        }
        order
    }

    /// Visit order of a depth-first traversal from `start`.
    ///
    /// Neighbors are explored first to last, as a recursive traversal would.
    pub fn dfs(&self, start: &'a str) -> Vec<&'a str> {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(node) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }
            trace!("DFS visits {}", node);
            order.push(node);
            stack.extend(self.neighbors(node).iter().rev());
        }
        order
    }
}
