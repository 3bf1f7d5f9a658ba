//! Binary search tree over `i64` keys.
//!
//! Nodes live in a flat arena and link to each other by index. Smaller keys
//! go left; equal or larger keys go right.

use log::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    value: i64,
    left: Option<usize>,
    right: Option<usize>,
}

impl Node {
    fn leaf(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bst {
    nodes: Vec<Node>,
    root: Option<usize>,
}

impl Bst {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `values` one after another into an empty tree.
    pub fn from_values(values: &[i64]) -> Self {
        let mut tree = Self::new();
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn insert(&mut self, value: i64) {
        let index = self.nodes.len();
        let Some(mut current) = self.root else {
            self.nodes.push(Node::leaf(value));
            self.root = Some(index);
            return;
        };

        loop {
            let node = &self.nodes[current];
            let next = if value < node.value {
                node.left
            } else {
                node.right
            };
            match next {
                Some(child) => current = child,
                None => break,
            }
        }

        self.nodes.push(Node::leaf(value));
        let parent = &mut self.nodes[current];
        if value < parent.value {
            parent.left = Some(index);
        } else {
            parent.right = Some(index);
        }
        trace!("Inserted {} under {}", value, parent.value);
    }

    pub fn contains(&self, value: i64) -> bool {
        let mut current = self.root;
        while let Some(index) = current {
            let node = &self.nodes[index];
            if value == node.value {
                return true;
            }
            current = if value < node.value {
                node.left
            } else {
                node.right
            };
        }
        false
    }

    /// Check that every key lies strictly between the bounds set by its
    /// ancestors. Repeated keys therefore make a tree invalid.
    pub fn is_valid(&self) -> bool {
        let mut pending: Vec<(usize, Option<i64>, Option<i64>)> =
            self.root.map(|root| (root, None, None)).into_iter().collect();

        while let Some((index, min, max)) = pending.pop() {
            let node = &self.nodes[index];
            let above_min = min.map_or(true, |min| node.value > min);
            let below_max = max.map_or(true, |max| node.value < max);
            if !(above_min && below_max) {
                trace!("Key {} violates bounds {:?}..{:?}", node.value, min, max);
                return false;
            }
            if let Some(left) = node.left {
                pending.push((left, min, Some(node.value)));
            }
            if let Some(right) = node.right {
                pending.push((right, Some(node.value), max));
            }
        }
        true
    }

    /// Left subtree, node, right subtree.
    pub fn in_order(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut current = self.root;

        while current.is_some() || !stack.is_empty() {
            while let Some(index) = current {
                stack.push(index);
                current = self.nodes[index].left;
            }
            if let Some(index) = stack.pop() {
                out.push(self.nodes[index].value);
                current = self.nodes[index].right;
            }
        }
        out
    }

    /// Node, left subtree, right subtree.
    pub fn pre_order(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<usize> = self.root.into_iter().collect();

        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            out.push(node.value);
            stack.extend(node.right);
            stack.extend(node.left);
        }
        out
    }

    /// Left subtree, right subtree, node.
    pub fn post_order(&self) -> Vec<i64> {
        // Node-right-left, reversed
        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<usize> = self.root.into_iter().collect();

        while let Some(index) = stack.pop() {
            let node = &self.nodes[index];
            out.push(node.value);
            stack.extend(node.left);
            stack.extend(node.right);
        }
        out.reverse();
        out
    }
}
