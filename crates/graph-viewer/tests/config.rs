use std::fs;

use graph_viewer::prelude::*;
use graph_viewer::scene::headless::{EdgeHandle, NodeHandle};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const CUSTOM_CONFIG: &str = r#"
level_spacing = 3.0
bfs_target = 12
dfs_target = 11

[palette]
node = 0x3366ff
terminal = 0xffff00

[tree]
value = 10

[[tree.children]]
value = 11

[[tree.children]]
value = 12
children = [{ value = 13 }]
"#;

#[test]
fn test_load_custom_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("viewer.toml");
    fs::write(&path, CUSTOM_CONFIG).unwrap();

    let options = VisualizerOptions::load(&path).unwrap();
    assert_eq!(options.level_spacing, 3.0);
    assert_eq!(options.sibling_spacing, 2.5);
    assert_eq!((options.bfs_target, options.dfs_target), (12, 11));
    assert_eq!(options.palette.node, Rgb(0x3366ff));
    assert_eq!(options.palette.terminal, Rgb(0xffff00));
    assert_eq!(options.palette.path, Rgb::GREEN);

    let tree = options.tree_or_sample();
    assert_eq!(tree.count(), 4);
    assert_eq!(tree.children[1].children, vec![TreeNode::leaf(13)]);
}

#[test]
fn test_loaded_tree_drives_the_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("viewer.toml");
    fs::write(&path, CUSTOM_CONFIG).unwrap();

    let options = VisualizerOptions::load(&path).unwrap();
    let targets = (options.bfs_target, options.dfs_target);
    let mut surface = HeadlessSurface::new();
    let mut session: Visualizer<NodeHandle, EdgeHandle> = Visualizer::new(options);

    let bfs = session.run(&mut surface, SearchKind::Bfs, targets.0).clone();
    assert_eq!(bfs.path_values(session.indexed()), Some(vec![10, 12]));

    let dfs = session.run(&mut surface, SearchKind::Dfs, targets.1).clone();
    assert_eq!(dfs.path_values(session.indexed()), Some(vec![10, 11]));

    let first = session.pool().node(NodeId(1)).unwrap();
    assert_eq!(first.position.y, 3.0);
    assert_eq!(surface.node_count(), 4);
}

#[test]
fn test_saved_options_load_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");
    let options = VisualizerOptions::new()
        .targets(4, 5)
        .sibling_spacing(1.5)
        .tree(TreeNode::new(1, vec![TreeNode::leaf(4), TreeNode::leaf(5)]));

    fs::write(&path, options.to_toml().unwrap()).unwrap();
    assert_eq!(VisualizerOptions::load(&path).unwrap(), options);
}

#[test]
fn test_missing_file_names_the_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = VisualizerOptions::load(&path).unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "level_spacing = \"far\"").unwrap();

    let err = VisualizerOptions::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("broken.toml"));
}
