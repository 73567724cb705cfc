use crate::adapters::snapshot::ContainerSnapshot;
use crate::app::dto::{EdgeDto, GraphSummary};
use crate::domain::builder::{BuildOptions, GraphBuilder};
use crate::domain::edge::Edge;
use crate::domain::graph::DependencyGraph;
use crate::domain::ports::Container;
use crate::domain::render::to_graphviz;
use crate::domain::type_ref::TypeRef;
use anyhow::{Context as _, Result};
use std::path::Path;
use tracing::{info, warn};

/// Facade tying a container to the graph builder and renderer.
pub struct Visualizer {
    container: Box<dyn Container>,
    options: BuildOptions,
}

impl Visualizer {
    pub fn new(container: Box<dyn Container>) -> Self {
        Self::with_options(container, BuildOptions::default())
    }

    pub fn with_options(container: Box<dyn Container>, options: BuildOptions) -> Self {
        Self { container, options }
    }

    /// Visualizer over a snapshot file on disk.
    pub fn load_snapshot(path: &Path, options: BuildOptions) -> Result<Self> {
        let snapshot = ContainerSnapshot::load(path)?;
        info!(
            path = %path.display(),
            providers = snapshot.provider_count(),
            "container snapshot loaded"
        );
        Ok(Self::with_options(Box::new(snapshot), options))
    }

    pub fn edges(&self, root: &TypeRef) -> Result<Vec<Edge>> {
        let edges = GraphBuilder::with_options(self.container.as_ref(), self.options.clone())
            .build(root)
            .with_context(|| format!("Failed to build dependency graph for {}", root))?;
        if DependencyGraph::from_edges(&edges).has_cycle() {
            warn!(root = %root, "dependency graph contains a cycle");
        }
        Ok(edges)
    }

    pub fn graphviz(&self, root: &TypeRef) -> Result<String> {
        Ok(to_graphviz(&self.edges(root)?))
    }

    pub fn edge_dtos(&self, root: &TypeRef, qualified: bool) -> Result<Vec<EdgeDto>> {
        let convert: fn(&Edge) -> EdgeDto = if qualified {
            EdgeDto::qualified
        } else {
            EdgeDto::pretty
        };
        Ok(self.edges(root)?.iter().map(convert).collect())
    }

    pub fn summary(&self, root: &TypeRef) -> Result<GraphSummary> {
        let edges = self.edges(root)?;
        let graph = DependencyGraph::from_edges(&edges);
        Ok(GraphSummary {
            root: root.to_string(),
            registered: self.container.registration(root).is_some(),
            node_count: graph.node_count(),
            edge_count: edges.len(),
            distinct_edge_count: graph.edge_count(),
            roots: graph.roots().iter().map(|t| t.pretty_name()).collect(),
            cyclic: graph.has_cycle(),
        })
    }
}
