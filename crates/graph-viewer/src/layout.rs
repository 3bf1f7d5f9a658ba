//! Tree layout: positions every node of a [`TreeNode`] in 3D space.
//!
//! Children sit one level above their parent and are spread symmetrically
//! around the parent's x-coordinate. The z-coordinate never changes, so the
//! whole tree lies in the plane of its origin.

use bevy::math::Vec3;

use crate::tree::{NodeId, TreeNode, Value};

/// A positioned node of a laid-out tree.
///
/// One `LayoutNode` exists per source [`TreeNode`], with the same shape and
/// the source node's pre-order [`NodeId`].
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode<'a> {
    /// Pre-order index of the node.
    pub id: NodeId,

    /// The tree node this layout node was built from.
    pub source: &'a TreeNode,

    /// World-space position.
    pub position: Vec3,

    /// Laid-out children, in source order.
    pub children: Vec<LayoutNode<'a>>,
}

/// A parent-to-child edge of a laid-out tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutEdge {
    pub parent: NodeId,
    pub child: NodeId,
    pub start: Vec3,
    pub end: Vec3,
}

impl<'a> LayoutNode<'a> {
    /// Value of the source node.
    pub fn value(&self) -> Value {
        self.source.value
    }

    /// Count total nodes in this subtree.
    pub fn count(&self) -> usize {
        self.preorder().count()
    }

    /// Iterate over the subtree in pre-order.
    pub fn preorder(&self) -> Preorder<'_, 'a> {
        Preorder { stack: vec![self] }
    }

    /// All parent-to-child edges, ordered by parent in pre-order and then by
    /// child from left to right.
    pub fn edges(&self) -> Vec<LayoutEdge> {
        self.preorder()
            .flat_map(|parent| {
                parent.children.iter().map(move |child| LayoutEdge {
                    parent: parent.id,
                    child: child.id,
                    start: parent.position,
                    end: child.position,
                })
            })
            .collect()
    }

    /// Find a node in this subtree by its ID.
    pub fn find(&self, id: NodeId) -> Option<&LayoutNode<'a>> {
        self.preorder().find(|node| node.id == id)
    }

    /// Position of a node in this subtree.
    pub fn position_of(&self, id: NodeId) -> Option<Vec3> {
        self.find(id).map(|node| node.position)
    }
}

/// Pre-order iterator over a layout tree.
pub struct Preorder<'l, 'a> {
    stack: Vec<&'l LayoutNode<'a>>,
}

impl<'l, 'a> Iterator for Preorder<'l, 'a> {
    type Item = &'l LayoutNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        self.stack.extend(current.children.iter().rev());
        Some(current)
    }
}

/// Level-and-sibling spacing layout.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeLayout {
    /// Position of the root node.
    pub origin: Vec3,

    /// Vertical spacing between levels.
    pub level_spacing: f32,

    /// Horizontal spacing between siblings.
    pub sibling_spacing: f32,
}

impl Default for TreeLayout {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            level_spacing: 2.0,
            sibling_spacing: 2.5,
        }
    }
}

impl TreeLayout {
    /// Create a new tree layout with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root position.
    pub fn origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    /// Set the spacing between levels.
    pub fn level_spacing(mut self, spacing: f32) -> Self {
        self.level_spacing = spacing;
        self
    }

    /// Set the spacing between siblings.
    pub fn sibling_spacing(mut self, spacing: f32) -> Self {
        self.sibling_spacing = spacing;
        self
    }

    /// Lay out a tree, root at `self.origin`.
    pub fn layout<'a>(&self, tree: &'a TreeNode) -> LayoutNode<'a> {
        let mut next_id = 0;
        self.place(tree, self.origin, &mut next_id)
    }

    fn place<'a>(&self, node: &'a TreeNode, position: Vec3, next_id: &mut usize) -> LayoutNode<'a> {
        let id = NodeId::new(*next_id);
        *next_id += 1;

        let count = node.children.len();
        let start_x = position.x - count.saturating_sub(1) as f32 * self.sibling_spacing / 2.0;
        let child_y = position.y + self.level_spacing;

        let children = node
            .children
            .iter()
            .enumerate()
            .map(|(i, child)| {
                let child_position =
                    Vec3::new(start_x + i as f32 * self.sibling_spacing, child_y, position.z);
                self.place(child, child_position, next_id)
            })
            .collect();

        LayoutNode {
            id,
            source: node,
            position,
            children,
        }
    }
}
