//! Graph Viewer Library
//!
//! Lays out a tree of integer values in 3D, searches it breadth-first or
//! depth-first and highlights the path to a target value.
//!
//! # Core Concepts
//!
//! - **Tree**: nested [`tree::TreeNode`] values plus the flattened
//!   [`tree::IndexedTree`]; both number nodes in pre-order with [`tree::NodeId`]
//! - **Layout**: [`layout::TreeLayout`] places every node in space
//! - **Search**: [`search::search`] returns the path as node ids and the visit order
//! - **Scene**: [`scene::PrimitivePool`] keeps spheres and lines in step with a
//!   layout through a [`scene::RenderSurface`]
//! - **Session**: [`session::Visualizer`] ties the pieces together
//!
//! # Example
//!
//! ```
//! use graph_viewer::prelude::*;
//!
//! let mut surface = HeadlessSurface::new();
//! let mut session: Visualizer<_, _> = Visualizer::new(VisualizerOptions::default());
//!
//! let outcome = session.run(&mut surface, SearchKind::Bfs, 6).clone();
//! assert_eq!(outcome.path_values(session.indexed()), Some(vec![0, 1, 3, 6]));
//! assert_eq!(surface.node_count(), 8);
//! ```

pub mod highlight;
pub mod layout;
pub mod options;
pub mod scene;
pub mod search;
pub mod session;
pub mod tree;
pub mod viewer;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::layout::{LayoutEdge, LayoutNode, TreeLayout};
    pub use crate::options::{Palette, Rgb, VisualizerOptions};
    pub use crate::scene::{HeadlessSurface, PrimitivePool, RenderSurface};
    pub use crate::search::{SearchKind, SearchOutcome};
    pub use crate::session::{RunState, Visualizer};
    pub use crate::tree::prelude::*;
}
