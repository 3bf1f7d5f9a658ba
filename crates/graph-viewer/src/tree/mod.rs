//! Tree model for the visualizer
//!
//! [`TreeNode`] is the nested, caller-owned tree. [`IndexedTree`] is a flat,
//! pre-order arena built from it that the search engine walks.

mod indexed;
mod node;
mod traits;

pub use indexed::IndexedTree;
pub use node::{NodeId, TreeNode, Value};
pub use traits::{TraversalOrder, Tree, TreeTraversal, TreeWalker};

/// Re-export common types for convenience
pub mod prelude {
    pub use super::{IndexedTree, NodeId, TraversalOrder, Tree, TreeNode, TreeTraversal, Value};
}
