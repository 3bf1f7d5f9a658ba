//! The visualizer session: one object owning the tree, options, primitive
//! pool and the latest search results.
//!
//! Every entry point runs to completion before returning. The render surface
//! is borrowed for the duration of each call rather than owned, so the same
//! session drives the Bevy viewer and the headless surface alike.

use std::collections::HashMap;

use derive_more::Display;
use log::{debug, info, warn};

use crate::highlight;
use crate::options::VisualizerOptions;
use crate::scene::{PrimitivePool, RenderSurface};
use crate::search::{self, SearchKind, SearchOutcome};
use crate::tree::{IndexedTree, TreeNode, Value};

/// Where a run currently is.
///
/// A run walks `Idle → LayoutComputed → Synced → SearchRunning →
/// PathFound | PathNotFound → Highlighted → Idle`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    LayoutComputed,
    Synced,
    SearchRunning,
    PathFound,
    PathNotFound,
    Highlighted,
}

/// A visualizer session, generic over the surface's primitive handles.
#[derive(Debug)]
pub struct Visualizer<N, E> {
    tree: TreeNode,
    indexed: IndexedTree,
    options: VisualizerOptions,
    pool: PrimitivePool<N, E>,
    outcomes: HashMap<SearchKind, SearchOutcome>,
    state: RunState,
}

impl<N, E> Visualizer<N, E> {
    /// Create a session for the tree configured in `options`.
    pub fn new(options: VisualizerOptions) -> Self {
        let tree = options.tree_or_sample();
        Self::with_tree(tree, options)
    }

    /// Create a session for an explicit tree.
    pub fn with_tree(tree: TreeNode, options: VisualizerOptions) -> Self {
        let indexed = IndexedTree::new(&tree);
        Self {
            tree,
            indexed,
            options,
            pool: PrimitivePool::new(),
            outcomes: HashMap::new(),
            state: RunState::Idle,
        }
    }

    pub fn tree(&self) -> &TreeNode {
        &self.tree
    }

    pub fn indexed(&self) -> &IndexedTree {
        &self.indexed
    }

    pub fn options(&self) -> &VisualizerOptions {
        &self.options
    }

    pub fn pool(&self) -> &PrimitivePool<N, E> {
        &self.pool
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// The most recent outcome for a search kind.
    pub fn last_outcome(&self, kind: SearchKind) -> Option<&SearchOutcome> {
        self.outcomes.get(&kind)
    }

    /// The visited-nodes line for a search kind, once it has found a path.
    pub fn results_text(&self, kind: SearchKind) -> Option<String> {
        self.last_outcome(kind)
            .filter(|outcome| outcome.is_found())
            .map(SearchOutcome::summary)
    }

    fn enter(current: &mut RunState, next: RunState) {
        debug!("Run state {} -> {}", current, next);
        *current = next;
    }

    /// Reset colors, lay out, sync, search and highlight.
    pub fn run<S>(&mut self, surface: &mut S, kind: SearchKind, target: Value) -> &SearchOutcome
    where
        S: RenderSurface<Node = N, Edge = E>,
    {
        info!("Running {} for target {}", kind, target);
        let palette = self.options.palette;
        highlight::reset(&mut self.pool, surface, &palette);

        let layout = self.options.layout().layout(&self.tree);
        Self::enter(&mut self.state, RunState::LayoutComputed);

        self.pool.sync(&layout, surface, &palette);
        Self::enter(&mut self.state, RunState::Synced);

        Self::enter(&mut self.state, RunState::SearchRunning);
        let outcome = search::search(&self.indexed, kind, target);
        let searched = if outcome.is_found() {
            RunState::PathFound
        } else {
            RunState::PathNotFound
        };
        Self::enter(&mut self.state, searched);

        highlight::highlight(
            outcome.path.as_deref(),
            &layout,
            &mut self.pool,
            surface,
            &palette,
        );
        Self::enter(&mut self.state, RunState::Highlighted);

        match outcome.path_values(&self.indexed) {
            Some(values) => info!("{} found {} at path {:?}", kind, target, values),
            None => info!("{} did not find {}", kind, target),
        }

        self.outcomes.insert(kind, outcome);
        Self::enter(&mut self.state, RunState::Idle);
        &self.outcomes[&kind]
    }

    /// Run a search for a target typed by the user.
    ///
    /// Empty or non-numeric input does not trigger a run.
    pub fn submit<S>(&mut self, surface: &mut S, kind: SearchKind, input: &str) -> Option<&SearchOutcome>
    where
        S: RenderSurface<Node = N, Edge = E>,
    {
        match parse_target(input) {
            Some(target) => Some(self.run(surface, kind, target)),
            None => {
                warn!("Ignoring {} target {:?}: not a number", kind, input);
                None
            }
        }
    }

    /// Restore default colors on every primitive.
    pub fn reset<S>(&mut self, surface: &mut S)
    where
        S: RenderSurface<Node = N, Edge = E>,
    {
        let palette = self.options.palette;
        highlight::reset(&mut self.pool, surface, &palette);
    }

    /// Despawn every primitive. The session can be run again afterwards.
    pub fn clear<S>(&mut self, surface: &mut S)
    where
        S: RenderSurface<Node = N, Edge = E>,
    {
        self.pool.clear(surface);
    }
}

/// Parse a search target, ignoring surrounding whitespace.
pub fn parse_target(input: &str) -> Option<Value> {
    input.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Rgb;
    use crate::scene::headless::{EdgeHandle, HeadlessSurface, NodeHandle};
    use pretty_assertions::assert_eq;

    type HeadlessVisualizer = Visualizer<NodeHandle, EdgeHandle>;

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("6"), Some(6));
        assert_eq!(parse_target(" -3 "), Some(-3));
        assert_eq!(parse_target(""), None);
        assert_eq!(parse_target("six"), None);
        assert_eq!(parse_target("4.5"), None);
    }

    #[test]
    fn test_run_ends_idle_and_records_outcome() {
        let mut surface = HeadlessSurface::new();
        let mut session = HeadlessVisualizer::new(VisualizerOptions::default());

        let outcome = session.run(&mut surface, SearchKind::Bfs, 6).clone();
        assert!(outcome.is_found());
        assert_eq!(session.state(), RunState::Idle);
        assert_eq!(session.last_outcome(SearchKind::Bfs), Some(&outcome));
        assert_eq!(session.last_outcome(SearchKind::Dfs), None);
        assert_eq!(session.pool().node_count(), 8);
    }

    #[test]
    fn test_second_run_resets_previous_highlight() {
        let mut surface = HeadlessSurface::new();
        let mut session = HeadlessVisualizer::new(VisualizerOptions::default());

        session.run(&mut surface, SearchKind::Bfs, 6);
        session.run(&mut surface, SearchKind::Dfs, 4);

        let colors: Vec<_> = session.pool().nodes().iter().map(|n| n.color).collect();
        let (r, g, w) = (Rgb::RED, Rgb::GREEN, Rgb::WHITE);
        // DFS path to 4 is ids 0, 4, 5
        assert_eq!(colors, vec![g, r, r, r, g, w, r, r]);
    }

    #[test]
    fn test_malformed_input_triggers_nothing() {
        let mut surface = HeadlessSurface::new();
        let mut session = HeadlessVisualizer::new(VisualizerOptions::default());

        assert!(session.submit(&mut surface, SearchKind::Dfs, "abc").is_none());
        assert!(session.submit(&mut surface, SearchKind::Dfs, "").is_none());
        assert!(session.pool().is_empty());
        assert_eq!(surface.nodes_spawned(), 0);
        assert_eq!(session.last_outcome(SearchKind::Dfs), None);
    }

    #[test]
    fn test_results_text_only_after_found_path() {
        let mut surface = HeadlessSurface::new();
        let mut session = HeadlessVisualizer::new(VisualizerOptions::default());

        session.submit(&mut surface, SearchKind::Dfs, "99");
        assert_eq!(session.results_text(SearchKind::Dfs), None);
        assert!(session.last_outcome(SearchKind::Dfs).is_some());

        session.submit(&mut surface, SearchKind::Dfs, "4");
        assert_eq!(
            session.results_text(SearchKind::Dfs).as_deref(),
            Some("Visited nodes (DFS order): 0 → 1 → 3 → 6 → 2 → 4")
        );
    }

    #[test]
    fn test_clear_then_run_again() {
        let mut surface = HeadlessSurface::new();
        let mut session = HeadlessVisualizer::new(VisualizerOptions::default());

        session.run(&mut surface, SearchKind::Bfs, 1);
        session.clear(&mut surface);
        assert_eq!(surface.node_count(), 0);

        session.run(&mut surface, SearchKind::Bfs, 1);
        assert_eq!(surface.node_count(), 8);
        assert_eq!(surface.edge_count(), 7);
    }
}
