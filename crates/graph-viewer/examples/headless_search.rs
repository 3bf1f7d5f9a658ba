//! Run both searches against the built-in tree without a window and print
//! what the viewer would show.
//!
//! ```text
//! cargo run --example headless_search -- [bfs_target] [dfs_target]
//! RUST_LOG=debug cargo run --example headless_search
//! ```

use anyhow::{Context, Result};
use graph_viewer::prelude::*;

fn target_arg(position: usize, default: Value) -> Result<Value> {
    match std::env::args().nth(position) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("Target {:?} is not a number", arg)),
        None => Ok(default),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let options = VisualizerOptions::default();
    let bfs_target = target_arg(1, options.bfs_target)?;
    let dfs_target = target_arg(2, options.dfs_target)?;

    let mut surface = HeadlessSurface::new();
    let mut session: Visualizer<_, _> = Visualizer::new(options);

    for (kind, target) in [(SearchKind::Bfs, bfs_target), (SearchKind::Dfs, dfs_target)] {
        let outcome = session.run(&mut surface, kind, target).clone();
        match outcome.path_values(session.indexed()) {
            Some(values) => println!("{} path to {}: {:?}", kind, target, values),
            None => println!("{} found no {}", kind, target),
        }
        println!("{}", outcome.summary());

        for primitive in session.pool().nodes() {
            if let Some(shown) = surface.node(primitive.handle) {
                println!("  {} value {:>3} {}", primitive.id, shown.label, shown.color);
            }
        }
    }

    Ok(())
}
