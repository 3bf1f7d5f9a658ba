//! Path highlighting on top of a synchronized primitive pool.
//!
//! Path nodes are matched to primitives by [`NodeId`], never by position or
//! value, so overlapping positions or repeated values cannot confuse it.

use std::collections::HashSet;

use log::{debug, warn};

use crate::layout::LayoutNode;
use crate::options::Palette;
use crate::scene::{PrimitivePool, RenderSurface};
use crate::tree::NodeId;

/// Color the primitives along `path`.
///
/// Every path node gets the path color except the last one, which gets the
/// terminal color. Every edge whose two endpoints are both on the path gets
/// the path color. An absent path changes nothing. IDs that are not part of
/// `layout` are skipped; if that includes the last one, no node gets the
/// terminal color.
pub fn highlight<N, E, S>(
    path: Option<&[NodeId]>,
    layout: &LayoutNode<'_>,
    pool: &mut PrimitivePool<N, E>,
    surface: &mut S,
    palette: &Palette,
) where
    S: RenderSurface<Node = N, Edge = E>,
{
    let Some(path) = path else {
        debug!("No path to highlight");
        return;
    };

    let Some((&terminal, body)) = path.split_last() else {
        return;
    };

    let layout_size = layout.count();
    let known = |id: NodeId| {
        let known = id.get() < layout_size;
        if !known {
            warn!("Path node {} is not part of the layout", id);
        }
        known
    };

    let mut members: HashSet<NodeId> = HashSet::with_capacity(path.len());
    for &id in body {
        if known(id) {
            pool.set_node_color(id, palette.path, surface);
            members.insert(id);
        }
    }
    if known(terminal) {
        pool.set_node_color(terminal, palette.terminal, surface);
        members.insert(terminal);
    }

    pool.set_edge_colors(palette.path, surface, |edge| {
        members.contains(&edge.parent) && members.contains(&edge.child)
    });

    debug!("Highlighted {} path nodes ending at {}", members.len(), terminal);
}

/// Restore default colors on every primitive.
pub fn reset<N, E, S>(pool: &mut PrimitivePool<N, E>, surface: &mut S, palette: &Palette)
where
    S: RenderSurface<Node = N, Edge = E>,
{
    pool.reset_colors(surface, palette);
}
