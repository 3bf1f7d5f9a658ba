//! Configuration options for the visualizer.
//!
//! This module provides the `VisualizerOptions` struct which controls
//! layout spacing, the color palette, primitive sizes, the startup search
//! targets and the tree being shown. Options can be loaded from a TOML file;
//! every field is optional there and falls back to its default.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use bevy::color::Color;
use bevy::math::Vec3;
use serde::{Deserialize, Serialize};

use crate::layout::TreeLayout;
use crate::tree::{TreeNode, Value};

/// A 24-bit color written as `0xRRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const RED: Rgb = Rgb(0xff0000);
    pub const GREEN: Rgb = Rgb(0x00ff00);
    pub const WHITE: Rgb = Rgb(0xffffff);
    pub const BLACK: Rgb = Rgb(0x000000);
    pub const LIGHT_GRAY: Rgb = Rgb(0xefefef);

    /// Split into red, green and blue channels.
    pub const fn channels(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }

    /// Convert to a Bevy sRGB color.
    pub fn to_color(self) -> Color {
        let (r, g, b) = self.channels();
        Color::srgb_u8(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0xff_ffff)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        rgb.to_color()
    }
}

/// Colors used for primitives and the scene background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Default node sphere color.
    pub node: Rgb,

    /// Default edge line color.
    pub edge: Rgb,

    /// Nodes and edges on a found path.
    pub path: Rgb,

    /// The node that matched the search target.
    pub terminal: Rgb,

    /// Scene clear color.
    pub background: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            node: Rgb::RED,
            edge: Rgb::LIGHT_GRAY,
            path: Rgb::GREEN,
            terminal: Rgb::WHITE,
            background: Rgb::BLACK,
        }
    }
}

/// Configuration options for a visualizer session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerOptions {
    /// Position of the root node.
    pub origin: [f32; 3],

    /// Vertical distance between a node and its children.
    pub level_spacing: f32,

    /// Horizontal distance between adjacent siblings.
    pub sibling_spacing: f32,

    /// Primitive and background colors.
    pub palette: Palette,

    /// Radius of node spheres.
    pub node_radius: f32,

    /// Height of a node label above its node.
    pub label_offset: f32,

    /// Target searched by the startup BFS run.
    pub bfs_target: Value,

    /// Target searched by the startup DFS run.
    pub dfs_target: Value,

    /// Initial camera eye position; the camera looks at the origin.
    pub camera_eye: [f32; 3],

    /// Tree to show. The built-in sample tree is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<TreeNode>,
}

impl Default for VisualizerOptions {
    fn default() -> Self {
        Self {
            origin: [0.0, 0.0, 0.0],
            level_spacing: 2.0,
            sibling_spacing: 2.5,
            palette: Palette::default(),
            node_radius: 0.2,
            label_offset: 0.5,
            bfs_target: 6,
            dfs_target: 6,
            camera_eye: [5.0, 10.0, 10.0],
            tree: None,
        }
    }
}

impl VisualizerOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read options from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Parse options from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Render options as TOML text.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Set the root position.
    pub fn origin(mut self, origin: Vec3) -> Self {
        self.origin = origin.to_array();
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

    /// Set the color palette.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the startup search targets.
    pub fn targets(mut self, bfs: Value, dfs: Value) -> Self {
        self.bfs_target = bfs;
        self.dfs_target = dfs;
        self
    }

    /// Set the tree to show.
    pub fn tree(mut self, tree: TreeNode) -> Self {
        self.tree = Some(tree);
        self
    }

    /// The layout engine configured by these options.
    pub fn layout(&self) -> TreeLayout {
        TreeLayout::new()
            .origin(Vec3::from_array(self.origin))
            .level_spacing(self.level_spacing)
            .sibling_spacing(self.sibling_spacing)
    }

    /// The configured tree, or the sample tree.
    pub fn tree_or_sample(&self) -> TreeNode {
        self.tree.clone().unwrap_or_else(TreeNode::sample)
    }

    pub fn camera_eye(&self) -> Vec3 {
        Vec3::from_array(self.camera_eye)
    }
}
