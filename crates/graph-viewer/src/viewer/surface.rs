//! Bevy implementation of [`RenderSurface`].
//!
//! Nodes are unlit spheres, edges are line-list meshes, labels are absolutely
//! positioned UI text that [`position_labels`] moves to follow its node.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::view::NoFrustumCulling;

use crate::options::{Rgb, VisualizerOptions};
use crate::scene::RenderSurface;

/// Shared assets and sizes for primitives.
#[derive(Resource, Debug, Clone)]
pub struct SurfaceStyle {
    pub sphere: Handle<Mesh>,
    pub label_offset: f32,
    pub label_size: f32,
}

/// Marker for node spheres.
#[derive(Component, Debug)]
pub struct NodeSphere;

/// Marker for edge lines.
#[derive(Component, Debug)]
pub struct EdgeLine;

/// A text label anchored to a point in world space.
#[derive(Component, Debug, Clone, Copy)]
pub struct NodeLabel {
    pub anchor: Vec3,
}

/// Handle to a node sphere and its label.
#[derive(Debug, Clone)]
pub struct BevyNode {
    pub entity: Entity,
    pub label: Entity,
    pub material: Handle<StandardMaterial>,
}

/// Handle to an edge line.
#[derive(Debug, Clone)]
pub struct BevyEdge {
    pub entity: Entity,
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// Render surface backed by the ECS world, borrowed for one system run.
#[derive(SystemParam)]
pub struct BevySurface<'w, 's> {
    commands: Commands<'w, 's>,
    meshes: ResMut<'w, Assets<Mesh>>,
    materials: ResMut<'w, Assets<StandardMaterial>>,
    style: Res<'w, SurfaceStyle>,
}

/// Create the shared sphere mesh and primitive sizes.
pub fn setup_surface(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    session: Res<crate::viewer::ViewerSession>,
) {
    let options: &VisualizerOptions = session.options();
    let sphere = meshes.add(Sphere::new(options.node_radius).mesh().uv(32, 32));
    commands.insert_resource(SurfaceStyle {
        sphere,
        label_offset: options.label_offset,
        label_size: 14.0,
    });
}

fn unlit(color: Rgb) -> StandardMaterial {
    StandardMaterial {
        base_color: color.to_color(),
        unlit: true,
        ..default()
    }
}

fn line_positions(start: Vec3, end: Vec3) -> Vec<[f32; 3]> {
    vec![start.to_array(), end.to_array()]
}

fn line_mesh(start: Vec3, end: Vec3) -> Mesh {
    Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, line_positions(start, end))
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, vec![[0.0, 0.0, 1.0]; 2])
}

impl BevySurface<'_, '_> {
    fn set_color(&mut self, material: &Handle<StandardMaterial>, color: Rgb) {
        if let Some(material) = self.materials.get_mut(material) {
            material.base_color = color.to_color();
        }
    }

    fn label_anchor(&self, position: Vec3) -> Vec3 {
        position + Vec3::Y * self.style.label_offset
    }
}

impl RenderSurface for BevySurface<'_, '_> {
    type Node = BevyNode;
    type Edge = BevyEdge;

    fn spawn_node(&mut self, position: Vec3, color: Rgb, label: &str) -> BevyNode {
        let material = self.materials.add(unlit(color));
        let entity = self
            .commands
            .spawn((
                NodeSphere,
                Mesh3d(self.style.sphere.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_translation(position),
            ))
            .id();
        let label = self
            .commands
            .spawn((
                NodeLabel {
                    anchor: self.label_anchor(position),
                },
                Text::new(label),
                TextFont {
                    font_size: self.style.label_size,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    position_type: PositionType::Absolute,
                    ..default()
                },
            ))
            .id();

        BevyNode {
            entity,
            label,
            material,
        }
    }

    fn update_node(&mut self, node: &BevyNode, position: Vec3, color: Rgb, label: &str) {
        self.commands
            .entity(node.entity)
            .insert(Transform::from_translation(position));
        let anchor = self.label_anchor(position);
        self.commands
            .entity(node.label)
            .insert((NodeLabel { anchor }, Text::new(label)));
        self.set_color(&node.material, color);
    }

    fn recolor_node(&mut self, node: &BevyNode, color: Rgb) {
        self.set_color(&node.material, color);
    }

    fn despawn_node(&mut self, node: BevyNode) {
        self.commands.entity(node.entity).despawn();
        self.commands.entity(node.label).despawn();
    }

    fn spawn_edge(&mut self, start: Vec3, end: Vec3, color: Rgb) -> BevyEdge {
        let mesh = self.meshes.add(line_mesh(start, end));
        let material = self.materials.add(unlit(color));
        let entity = self
            .commands
            .spawn((
                EdgeLine,
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material.clone()),
                Transform::IDENTITY,
                // Vertices move in place, so the spawn-time bounds go stale
                NoFrustumCulling,
            ))
            .id();

        BevyEdge {
            entity,
            mesh,
            material,
        }
    }

    fn update_edge(&mut self, edge: &BevyEdge, start: Vec3, end: Vec3, color: Rgb) {
        if let Some(mesh) = self.meshes.get_mut(&edge.mesh) {
            mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, line_positions(start, end));
        }
        self.set_color(&edge.material, color);
    }

    fn recolor_edge(&mut self, edge: &BevyEdge, color: Rgb) {
        self.set_color(&edge.material, color);
    }

    fn despawn_edge(&mut self, edge: BevyEdge) {
        self.commands.entity(edge.entity).despawn();
    }
}

/// Move every label to the screen position of its anchor.
///
/// Runs every frame; labels whose anchor is off screen are hidden.
pub fn position_labels(
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut labels: Query<(&NodeLabel, &mut Node, &mut Visibility)>,
) {
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };

    for (label, mut node, mut visibility) in labels.iter_mut() {
        match camera.world_to_viewport(camera_transform, label.anchor) {
            Ok(viewport) => {
                node.left = Val::Px(viewport.x);
                node.top = Val::Px(viewport.y);
                *visibility = Visibility::Inherited;
            }
            Err(_) => *visibility = Visibility::Hidden,
        }
    }
}
