//! Interactive 3D viewer built on Bevy.
//!
//! [`GraphViewerPlugin`] owns a [`Visualizer`] as a resource and drives it
//! from UI buttons and the keyboard. The camera plugins from
//! `smooth-bevy-cameras` must be added alongside it.

pub mod camera;
pub mod input;
pub mod surface;
pub mod ui;

use bevy::prelude::*;
use bevy::ui::UiSystem;

use crate::options::VisualizerOptions;
use crate::search::SearchKind;
use crate::session::Visualizer;

pub use input::{InputMode, TargetInputs};
pub use surface::{BevyEdge, BevyNode, BevySurface};

/// The visualizer session, held by the ECS world.
#[derive(Resource, Deref, DerefMut)]
pub struct ViewerSession(pub Visualizer<BevyNode, BevyEdge>);

/// Requests from the input layer.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    /// Run a search for the target in that kind's field.
    Run(SearchKind),
    /// Restore default colors.
    Reset,
}

pub struct GraphViewerPlugin {
    options: VisualizerOptions,
}

impl GraphViewerPlugin {
    pub fn new(options: VisualizerOptions) -> Self {
        Self { options }
    }
}

impl Plugin for GraphViewerPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(self.options.palette.background.to_color()))
            .insert_resource(ViewerSession(Visualizer::new(self.options.clone())))
            .insert_resource(TargetInputs::new(&self.options))
            .init_resource::<InputMode>()
            .add_event::<ViewerCommand>()
            .add_systems(
                Startup,
                (
                    surface::setup_surface,
                    camera::setup_camera,
                    ui::setup_panel,
                    initial_runs,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    input::toggle_input_mode,
                    input::update_cursor_state,
                    camera::update_camera_controller,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    (input::edit_targets, ui::focus_fields, ui::run_buttons),
                    apply_commands,
                    (ui::refresh_target_fields, ui::refresh_results),
                )
                    .chain(),
            )
            .add_systems(
                PostUpdate,
                surface::position_labels.before(UiSystem::Layout),
            );
    }
}

/// Run the configured startup searches, BFS first.
fn initial_runs(mut session: ResMut<ViewerSession>, mut surface: BevySurface) {
    let options = session.options();
    let (bfs, dfs) = (options.bfs_target, options.dfs_target);
    session.run(&mut surface, SearchKind::Bfs, bfs);
    session.run(&mut surface, SearchKind::Dfs, dfs);
}

fn apply_commands(
    mut commands_in: EventReader<ViewerCommand>,
    mut session: ResMut<ViewerSession>,
    inputs: Res<TargetInputs>,
    mut surface: BevySurface,
) {
    for command in commands_in.read() {
        match *command {
            ViewerCommand::Run(kind) => {
                session.submit(&mut surface, kind, inputs.get(kind));
            }
            ViewerCommand::Reset => {
                info!("Resetting colors");
                session.reset(&mut surface);
            }
        }
    }
}
