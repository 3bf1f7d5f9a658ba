use anyhow::Result;
use bevy::prelude::*;
use graph_viewer::options::VisualizerOptions;
use graph_viewer::viewer::GraphViewerPlugin;
use smooth_bevy_cameras::{controllers::orbit::OrbitCameraPlugin, LookTransformPlugin};

/// Environment variable naming the config file when no argument is given.
const CONFIG_ENV: &str = "GRAPH_VIEWER_CONFIG";

fn main() -> Result<()> {
    let options = load_options()?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Graph Visualizer".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(LookTransformPlugin)
        .add_plugins(OrbitCameraPlugin::new(false))
        .add_plugins(GraphViewerPlugin::new(options))
        .run();

    Ok(())
}

fn load_options() -> Result<VisualizerOptions> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok());

    match path {
        Some(path) => VisualizerOptions::load(path),
        None => Ok(VisualizerOptions::default()),
    }
}
