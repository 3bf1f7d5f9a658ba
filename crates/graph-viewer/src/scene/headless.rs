//! In-memory render surface.
//!
//! Records every primitive it is asked to show instead of drawing it. Used
//! to drive the full pipeline without a window, in tests and in the
//! `headless_search` example.

use std::collections::BTreeMap;

use bevy::math::Vec3;
use log::warn;

use crate::options::Rgb;
use crate::scene::{PrimitivePool, RenderSurface};

/// Handle to a recorded node primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeHandle(u64);

/// Handle to a recorded edge primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeHandle(u64);

/// A pool whose primitives live on a [`HeadlessSurface`].
pub type HeadlessPool = PrimitivePool<NodeHandle, EdgeHandle>;

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessNode {
    pub position: Vec3,
    pub color: Rgb,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessEdge {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Rgb,
}

#[derive(Debug, Default)]
pub struct HeadlessSurface {
    nodes: BTreeMap<NodeHandle, HeadlessNode>,
    edges: BTreeMap<EdgeHandle, HeadlessEdge>,
    next_handle: u64,
    nodes_spawned: usize,
    edges_spawned: usize,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, handle: NodeHandle) -> Option<&HeadlessNode> {
        self.nodes.get(&handle)
    }

    pub fn edge(&self, handle: EdgeHandle) -> Option<&HeadlessEdge> {
        self.edges.get(&handle)
    }

    /// Live node primitives.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Live edge primitives.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Node primitives ever spawned, including despawned ones.
    pub fn nodes_spawned(&self) -> usize {
        self.nodes_spawned
    }

    /// Edge primitives ever spawned, including despawned ones.
    pub fn edges_spawned(&self) -> usize {
        self.edges_spawned
    }

    fn next_handle(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }
}

impl RenderSurface for HeadlessSurface {
    type Node = NodeHandle;
    type Edge = EdgeHandle;

    fn spawn_node(&mut self, position: Vec3, color: Rgb, label: &str) -> NodeHandle {
        let handle = NodeHandle(self.next_handle());
        self.nodes.insert(
            handle,
            HeadlessNode {
                position,
                color,
                label: label.to_string(),
            },
        );
        self.nodes_spawned += 1;
        handle
    }

    fn update_node(&mut self, node: &NodeHandle, position: Vec3, color: Rgb, label: &str) {
        match self.nodes.get_mut(node) {
            Some(shown) => {
                shown.position = position;
                shown.color = color;
                shown.label = label.to_string();
            }
            None => warn!("Update of unknown node primitive {:?}", node),
        }
    }

    fn recolor_node(&mut self, node: &NodeHandle, color: Rgb) {
        match self.nodes.get_mut(node) {
            Some(shown) => shown.color = color,
            None => warn!("Recolor of unknown node primitive {:?}", node),
        }
    }

    fn despawn_node(&mut self, node: NodeHandle) {
        self.nodes.remove(&node);
    }

    fn spawn_edge(&mut self, start: Vec3, end: Vec3, color: Rgb) -> EdgeHandle {
        let handle = EdgeHandle(self.next_handle());
        self.edges.insert(handle, HeadlessEdge { start, end, color });
        self.edges_spawned += 1;
        handle
    }

    fn update_edge(&mut self, edge: &EdgeHandle, start: Vec3, end: Vec3, color: Rgb) {
        match self.edges.get_mut(edge) {
            Some(shown) => {
                shown.start = start;
                shown.end = end;
                shown.color = color;
            }
            None => warn!("Update of unknown edge primitive {:?}", edge),
        }
    }

    fn recolor_edge(&mut self, edge: &EdgeHandle, color: Rgb) {
        match self.edges.get_mut(edge) {
            Some(shown) => shown.color = color,
            None => warn!("Recolor of unknown edge primitive {:?}", edge),
        }
    }

    fn despawn_edge(&mut self, edge: EdgeHandle) {
        self.edges.remove(&edge);
    }
}
