use crate::app::engine::Visualizer;
use crate::domain::type_ref::TypeRef;
use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::info;

/// Render the graph for `root` to `output`, or stdout when no path is given.
pub fn write_dot(visualizer: &Visualizer, root: &TypeRef, output: Option<&Path>) -> Result<()> {
    let dot = visualizer.graphviz(root)?;
    match output {
        Some(path) => {
            std::fs::write(path, &dot)
                .with_context(|| format!("Failed to write graph to {}", path.display()))?;
            info!(path = %path.display(), "graph written");
        }
        None => println!("{}", dot),
    }
    Ok(())
}

pub fn print_edges(
    visualizer: &Visualizer,
    root: &TypeRef,
    json: bool,
    qualified: bool,
) -> Result<()> {
    let edges = visualizer.edge_dtos(root, qualified)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&edges)?);
        return Ok(());
    }
    for edge in &edges {
        println!("{} -> {} via {}", edge.parent, edge.child, edge.via);
    }
    Ok(())
}

pub fn print_summary(visualizer: &Visualizer, root: &TypeRef, json: bool) -> Result<()> {
    let summary = visualizer.summary(root)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Graph Summary:");
    println!("  Root: {}", summary.root);
    if !summary.registered {
        println!("  (no registration; the graph is empty)");
    }
    println!("  Nodes: {}", summary.node_count);
    println!(
        "  Edges: {} ({} distinct)",
        summary.edge_count, summary.distinct_edge_count
    );
    if !summary.roots.is_empty() {
        println!("  Roots: {}", summary.roots.join(", "));
    }
    println!("  Cyclic: {}", if summary.cyclic { "yes" } else { "no" });
    Ok(())
}
