//! Scene synchronization: keeps a pool of render primitives in step with a
//! tree layout.
//!
//! The pool is matched to the layout by pre-order index. Entry `i` of the
//! node list always shows the node with pre-order id `i`, and entry `j` of
//! the edge list always shows the `j`-th edge of
//! [`LayoutNode::edges`](crate::layout::LayoutNode::edges). Syncing reuses
//! existing primitives, allocates missing ones and removes the surplus, so
//! the pool always ends up with exactly one primitive per node and per edge.

pub mod headless;
mod pool;

pub use headless::HeadlessSurface;
pub use pool::{EdgePrimitive, NodePrimitive, PrimitivePool};

use bevy::math::Vec3;

use crate::options::Rgb;

/// A rendering backend that can show node spheres and edge lines.
///
/// Each node primitive carries a text label anchored just above it. Handles
/// returned by the spawn methods stay valid until passed to the matching
/// despawn method.
pub trait RenderSurface {
    /// Handle to a node primitive and its label.
    type Node;
    /// Handle to an edge primitive.
    type Edge;

    fn spawn_node(&mut self, position: Vec3, color: Rgb, label: &str) -> Self::Node;

    /// Move, recolor and relabel an existing node primitive.
    fn update_node(&mut self, node: &Self::Node, position: Vec3, color: Rgb, label: &str);

    fn recolor_node(&mut self, node: &Self::Node, color: Rgb);

    fn despawn_node(&mut self, node: Self::Node);

    fn spawn_edge(&mut self, start: Vec3, end: Vec3, color: Rgb) -> Self::Edge;

    /// Move and recolor an existing edge primitive.
    fn update_edge(&mut self, edge: &Self::Edge, start: Vec3, end: Vec3, color: Rgb);

    fn recolor_edge(&mut self, edge: &Self::Edge, color: Rgb);

    fn despawn_edge(&mut self, edge: Self::Edge);
}
