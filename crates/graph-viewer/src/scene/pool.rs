use bevy::math::Vec3;
use log::debug;

use crate::layout::LayoutNode;
use crate::options::{Palette, Rgb};
use crate::scene::RenderSurface;
use crate::tree::NodeId;

/// A node sphere owned by the pool.
#[derive(Debug, Clone)]
pub struct NodePrimitive<N> {
    /// The layout node currently shown; always equal to the entry's index.
    pub id: NodeId,
    pub handle: N,
    pub position: Vec3,
    pub color: Rgb,
    pub label: String,
}

/// An edge line owned by the pool.
#[derive(Debug, Clone)]
pub struct EdgePrimitive<E> {
    pub parent: NodeId,
    pub child: NodeId,
    pub handle: E,
    pub start: Vec3,
    pub end: Vec3,
    pub color: Rgb,
}

/// Reusable primitives, kept in step with the current layout.
///
/// The pool mirrors what it has asked the surface to show, so callers can
/// inspect colors and positions without querying the surface.
#[derive(Debug)]
pub struct PrimitivePool<N, E> {
    nodes: Vec<NodePrimitive<N>>,
    edges: Vec<EdgePrimitive<E>>,
}

impl<N, E> Default for PrimitivePool<N, E> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<N, E> PrimitivePool<N, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[NodePrimitive<N>] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgePrimitive<E>] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&NodePrimitive<N>> {
        self.nodes.get(id.get())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Reconcile the pool with `layout`.
    ///
    /// Existing primitives are moved, relabelled and reset to the default
    /// colors; missing ones are spawned; surplus ones are despawned.
    pub fn sync<S>(&mut self, layout: &LayoutNode<'_>, surface: &mut S, palette: &Palette)
    where
        S: RenderSurface<Node = N, Edge = E>,
    {
        let (mut reused, mut spawned) = (0, 0);
        let mut i = 0;
        for node in layout.preorder() {
            let label = node.value().to_string();
            match self.nodes.get_mut(i) {
                Some(primitive) => {
                    surface.update_node(&primitive.handle, node.position, palette.node, &label);
                    primitive.id = node.id;
                    primitive.position = node.position;
                    primitive.color = palette.node;
                    primitive.label = label;
                    reused += 1;
                }
                None => {
                    let handle = surface.spawn_node(node.position, palette.node, &label);
                    self.nodes.push(NodePrimitive {
                        id: node.id,
                        handle,
                        position: node.position,
                        color: palette.node,
                        label,
                    });
                    spawned += 1;
                }
            }
            i += 1;
        }
        let removed = self.nodes.len() - i;
        for stale in self.nodes.drain(i..) {
            surface.despawn_node(stale.handle);
        }
        debug!(
            "Synced {} node primitives ({} reused, {} spawned, {} removed)",
            i, reused, spawned, removed
        );

        let mut j = 0;
        for edge in layout.edges() {
            match self.edges.get_mut(j) {
                Some(primitive) => {
                    surface.update_edge(&primitive.handle, edge.start, edge.end, palette.edge);
                    primitive.parent = edge.parent;
                    primitive.child = edge.child;
                    primitive.start = edge.start;
                    primitive.end = edge.end;
                    primitive.color = palette.edge;
                }
                None => {
                    let handle = surface.spawn_edge(edge.start, edge.end, palette.edge);
                    self.edges.push(EdgePrimitive {
                        parent: edge.parent,
                        child: edge.child,
                        handle,
                        start: edge.start,
                        end: edge.end,
                        color: palette.edge,
                    });
                }
            }
            j += 1;
        }
        for stale in self.edges.drain(j..) {
            surface.despawn_edge(stale.handle);
        }
        debug!("Synced {} edge primitives", j);
    }

    /// Recolor one node primitive. Returns false if `id` has no primitive.
    pub fn set_node_color<S>(&mut self, id: NodeId, color: Rgb, surface: &mut S) -> bool
    where
        S: RenderSurface<Node = N, Edge = E>,
    {
        match self.nodes.get_mut(id.get()) {
            Some(primitive) => {
                surface.recolor_node(&primitive.handle, color);
                primitive.color = color;
                true
            }
            None => false,
        }
    }

    /// Recolor every edge primitive accepted by `predicate`.
    pub fn set_edge_colors<S, P>(&mut self, color: Rgb, surface: &mut S, mut predicate: P)
    where
        S: RenderSurface<Node = N, Edge = E>,
        P: FnMut(&EdgePrimitive<E>) -> bool,
    {
        for primitive in self.edges.iter_mut() {
            if predicate(primitive) {
                surface.recolor_edge(&primitive.handle, color);
                primitive.color = color;
            }
        }
    }

    /// Restore default colors on every primitive.
    pub fn reset_colors<S>(&mut self, surface: &mut S, palette: &Palette)
    where
        S: RenderSurface<Node = N, Edge = E>,
    {
        for primitive in self.nodes.iter_mut() {
            surface.recolor_node(&primitive.handle, palette.node);
            primitive.color = palette.node;
        }
        self.set_edge_colors(palette.edge, surface, |_| true);
    }

    /// Despawn every primitive.
    pub fn clear<S>(&mut self, surface: &mut S)
    where
        S: RenderSurface<Node = N, Edge = E>,
    {
        for primitive in self.nodes.drain(..) {
            surface.despawn_node(primitive.handle);
        }
        for primitive in self.edges.drain(..) {
            surface.despawn_edge(primitive.handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::TreeLayout;
    use crate::scene::headless::{HeadlessPool, HeadlessSurface};
    use crate::tree::TreeNode;
    use pretty_assertions::assert_eq;

    fn chain(len: usize) -> TreeNode {
        let mut node = TreeNode::leaf(len as i64 - 1);
        for value in (0..len as i64 - 1).rev() {
            node = TreeNode::new(value, vec![node]);
        }
        node
    }

    fn seven() -> TreeNode {
        TreeNode::new(
            0,
            vec![
                TreeNode::new(1, vec![TreeNode::leaf(3), TreeNode::leaf(4)]),
                TreeNode::new(2, vec![TreeNode::leaf(5), TreeNode::leaf(6)]),
            ],
        )
    }

    #[test]
    fn test_first_sync_spawns_everything() {
        let tree = TreeNode::sample();
        let layout = TreeLayout::new().layout(&tree);
        let mut surface = HeadlessSurface::new();
        let mut pool = HeadlessPool::new();

        pool.sync(&layout, &mut surface, &Palette::default());

        assert_eq!(pool.node_count(), 8);
        assert_eq!(pool.edge_count(), 7);
        assert_eq!(surface.node_count(), 8);
        assert_eq!(surface.edge_count(), 7);
        assert!(pool.nodes().iter().all(|n| n.color == Rgb::RED));
        assert!(pool.edges().iter().all(|e| e.color == Rgb::LIGHT_GRAY));

        let labels: Vec<_> = pool.nodes().iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "1", "3", "6", "2", "4", "5", "6"]);
    }

    #[test]
    fn test_shrinking_trims_surplus() {
        let big = seven();
        let small = chain(3);
        let mut surface = HeadlessSurface::new();
        let mut pool = HeadlessPool::new();
        let palette = Palette::default();

        pool.sync(&TreeLayout::new().layout(&big), &mut surface, &palette);
        assert_eq!(pool.node_count(), 7);

        pool.sync(&TreeLayout::new().layout(&small), &mut surface, &palette);
        assert_eq!(pool.node_count(), 3);
        assert_eq!(pool.edge_count(), 2);
        assert_eq!(surface.node_count(), 3);
        assert_eq!(surface.edge_count(), 2);
    }

    #[test]
    fn test_growing_reuses_existing_handles() {
        let small = chain(3);
        let big = seven();
        let mut surface = HeadlessSurface::new();
        let mut pool = HeadlessPool::new();
        let palette = Palette::default();

        pool.sync(&TreeLayout::new().layout(&small), &mut surface, &palette);
        let before: Vec<_> = pool.nodes().iter().map(|n| n.handle).collect();
        let edges_before: Vec<_> = pool.edges().iter().map(|e| e.handle).collect();

        pool.sync(&TreeLayout::new().layout(&big), &mut surface, &palette);
        let after: Vec<_> = pool.nodes().iter().map(|n| n.handle).collect();
        let edges_after: Vec<_> = pool.edges().iter().map(|e| e.handle).collect();

        assert_eq!(&after[..3], &before[..]);
        assert_eq!(&edges_after[..2], &edges_before[..]);
        assert_eq!(surface.nodes_spawned(), 7);
        assert_eq!(surface.edges_spawned(), 6);
    }

    #[test]
    fn test_reused_primitives_follow_new_layout() {
        let mut surface = HeadlessSurface::new();
        let mut pool = HeadlessPool::new();
        let palette = Palette::default();

        pool.sync(&TreeLayout::new().layout(&seven()), &mut surface, &palette);
        let tree = chain(3);
        let layout = TreeLayout::new().layout(&tree);
        pool.sync(&layout, &mut surface, &palette);

        for (primitive, node) in pool.nodes().iter().zip(layout.preorder()) {
            assert_eq!(primitive.id, node.id);
            assert_eq!(primitive.position, node.position);
            let shown = surface.node(primitive.handle).unwrap();
            assert_eq!(shown.position, node.position);
            assert_eq!(shown.label, node.value().to_string());
        }
    }

    #[test]
    fn test_sync_resets_colors() {
        let tree = TreeNode::sample();
        let layout = TreeLayout::new().layout(&tree);
        let mut surface = HeadlessSurface::new();
        let mut pool = HeadlessPool::new();
        let palette = Palette::default();

        pool.sync(&layout, &mut surface, &palette);
        pool.set_node_color(NodeId(2), Rgb::GREEN, &mut surface);
        pool.set_edge_colors(Rgb::GREEN, &mut surface, |_| true);

        pool.sync(&layout, &mut surface, &palette);
        assert!(pool.nodes().iter().all(|n| n.color == palette.node));
        assert!(pool.edges().iter().all(|e| e.color == palette.edge));
    }

    #[test]
    fn test_clear_despawns_everything() {
        let tree = TreeNode::sample();
        let mut surface = HeadlessSurface::new();
        let mut pool = HeadlessPool::new();

        pool.sync(&TreeLayout::new().layout(&tree), &mut surface, &Palette::default());
        pool.clear(&mut surface);

        assert!(pool.is_empty());
        assert_eq!(surface.node_count(), 0);
        assert_eq!(surface.edge_count(), 0);
    }
}
