use graph_viewer::prelude::*;
use graph_viewer::scene::headless::{EdgeHandle, NodeHandle};
use pretty_assertions::assert_eq;

type HeadlessVisualizer = Visualizer<NodeHandle, EdgeHandle>;

fn node_colors(session: &HeadlessVisualizer, surface: &HeadlessSurface) -> Vec<Rgb> {
    session
        .pool()
        .nodes()
        .iter()
        .map(|primitive| surface.node(primitive.handle).unwrap().color)
        .collect()
}

fn edge_colors(session: &HeadlessVisualizer, surface: &HeadlessSurface) -> Vec<Rgb> {
    session
        .pool()
        .edges()
        .iter()
        .map(|primitive| surface.edge(primitive.handle).unwrap().color)
        .collect()
}

#[test]
fn test_startup_sequence_leaves_dfs_highlight() {
    let mut surface = HeadlessSurface::new();
    let mut session = HeadlessVisualizer::new(VisualizerOptions::default());

    session.run(&mut surface, SearchKind::Bfs, 6);
    session.run(&mut surface, SearchKind::Dfs, 6);

    // Both searches reach the left-hand 6, ids 0 → 1 → 2 → 3
    let (r, g, w, e) = (Rgb::RED, Rgb::GREEN, Rgb::WHITE, Rgb::LIGHT_GRAY);
    assert_eq!(node_colors(&session, &surface), vec![g, g, g, w, r, r, r, r]);
    assert_eq!(edge_colors(&session, &surface), vec![g, e, g, g, e, e, e]);

    assert_eq!(
        session.results_text(SearchKind::Bfs).as_deref(),
        Some("Visited nodes (BFS order): 0 → 1 → 2 → 3 → 4 → 5 → 6")
    );
    assert_eq!(
        session.results_text(SearchKind::Dfs).as_deref(),
        Some("Visited nodes (DFS order): 0 → 1 → 3 → 6")
    );

    // Repeated runs reuse every primitive
    assert_eq!(surface.nodes_spawned(), 8);
    assert_eq!(surface.edges_spawned(), 7);
}

#[test]
fn test_missing_target_leaves_defaults() {
    let mut surface = HeadlessSurface::new();
    let mut session = HeadlessVisualizer::new(VisualizerOptions::default());

    session.run(&mut surface, SearchKind::Bfs, 5);
    let outcome = session.run(&mut surface, SearchKind::Dfs, 42).clone();

    assert_eq!(outcome.path, None);
    assert_eq!(outcome.visited.len(), 8);
    assert!(node_colors(&session, &surface).iter().all(|&c| c == Rgb::RED));
    assert!(edge_colors(&session, &surface)
        .iter()
        .all(|&c| c == Rgb::LIGHT_GRAY));
    assert_eq!(session.results_text(SearchKind::Dfs), None);
    assert_eq!(session.state(), RunState::Idle);
}

#[test]
fn test_repeated_values_are_matched_by_id() {
    // Every node carries the same value and the leaves overlap in x
    let tree = TreeNode::new(
        7,
        vec![
            TreeNode::new(7, vec![TreeNode::leaf(7)]),
            TreeNode::new(7, vec![TreeNode::leaf(9)]),
        ],
    );
    let options = VisualizerOptions::new().sibling_spacing(0.0);
    let mut surface = HeadlessSurface::new();
    let mut session = HeadlessVisualizer::with_tree(tree, options);

    let outcome = session.run(&mut surface, SearchKind::Dfs, 9).clone();
    assert_eq!(outcome.path, Some(vec![NodeId(0), NodeId(3), NodeId(4)]));

    let (r, g, w) = (Rgb::RED, Rgb::GREEN, Rgb::WHITE);
    assert_eq!(node_colors(&session, &surface), vec![g, r, r, g, w]);
}

#[test]
fn test_custom_palette_reaches_the_surface() {
    let palette = Palette {
        node: Rgb(0x112233),
        edge: Rgb(0x445566),
        path: Rgb(0x778899),
        terminal: Rgb(0xaabbcc),
        background: Rgb::BLACK,
    };
    let mut surface = HeadlessSurface::new();
    let mut session = HeadlessVisualizer::new(VisualizerOptions::new().palette(palette));

    session.run(&mut surface, SearchKind::Bfs, 1);

    let nodes = node_colors(&session, &surface);
    assert_eq!(nodes[0], palette.path);
    assert_eq!(nodes[1], palette.terminal);
    assert!(nodes[2..].iter().all(|&c| c == palette.node));

    let edges = edge_colors(&session, &surface);
    assert_eq!(edges[0], palette.path);
    assert!(edges[1..].iter().all(|&c| c == palette.edge));
}

#[test]
fn test_single_node_tree() {
    let mut surface = HeadlessSurface::new();
    let mut session = HeadlessVisualizer::with_tree(TreeNode::leaf(3), VisualizerOptions::default());

    let found = session.run(&mut surface, SearchKind::Bfs, 3).clone();
    assert_eq!(found.path, Some(vec![NodeId::ROOT]));
    assert_eq!(surface.node_count(), 1);
    assert_eq!(surface.edge_count(), 0);
    assert_eq!(node_colors(&session, &surface), vec![Rgb::WHITE]);

    let missing = session.run(&mut surface, SearchKind::Dfs, 4).clone();
    assert_eq!(missing.path, None);
    assert_eq!(node_colors(&session, &surface), vec![Rgb::RED]);
}

#[test]
fn test_reset_keeps_primitives() {
    let mut surface = HeadlessSurface::new();
    let mut session = HeadlessVisualizer::new(VisualizerOptions::default());

    session.run(&mut surface, SearchKind::Dfs, 5);
    session.reset(&mut surface);

    assert_eq!(surface.node_count(), 8);
    assert_eq!(surface.edge_count(), 7);
    assert!(node_colors(&session, &surface).iter().all(|&c| c == Rgb::RED));
    // Results survive a color reset
    assert!(session.results_text(SearchKind::Dfs).is_some());
}

#[test]
fn test_layout_is_shared_by_pool_and_surface() {
    let mut surface = HeadlessSurface::new();
    let options = VisualizerOptions::default();
    let layout_options = options.layout();
    let mut session = HeadlessVisualizer::new(options);
    session.run(&mut surface, SearchKind::Bfs, 0);

    let tree = session.tree().clone();
    let layout = layout_options.layout(&tree);
    for (primitive, node) in session.pool().nodes().iter().zip(layout.preorder()) {
        let shown = surface.node(primitive.handle).unwrap();
        assert_eq!(primitive.id, node.id);
        assert_eq!(shown.position, node.position);
        assert_eq!(shown.label, node.value().to_string());
        assert_eq!(session.indexed().value(node.id), Some(node.value()));
    }
}
