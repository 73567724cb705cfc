use crate::domain::edge::Edge;
use crate::domain::type_ref::TypeRef;
use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

/// Dependency Graph - petgraph view over a traversal's edge list
///
/// Nodes are distinct types, graph edges are distinct [`Edge`]s weighted by
/// the abstraction they were requested through.
pub struct DependencyGraph {
    pub graph: DiGraph<TypeRef, TypeRef>,

    /// Mapping from type to node index
    pub type_to_node: HashMap<TypeRef, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            type_to_node: HashMap::new(),
        }
    }

    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut graph = Self::new();
        let mut seen = HashSet::new();
        for edge in edges {
            if !seen.insert(edge) {
                continue;
            }
            let parent = graph.get_or_add_node(&edge.parent);
            let child = graph.get_or_add_node(&edge.child);
            graph.graph.add_edge(parent, child, edge.via.clone());
        }
        graph
    }

    fn get_or_add_node(&mut self, ty: &TypeRef) -> NodeIndex {
        if let Some(&idx) = self.type_to_node.get(ty) {
            return idx;
        }
        let idx = self.graph.add_node(ty.clone());
        self.type_to_node.insert(ty.clone(), idx);
        idx
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Types nothing depends on, in first-seen order.
    pub fn roots(&self) -> Vec<&TypeRef> {
        self.graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .map(|idx| &self.graph[idx])
            .collect()
    }

    pub fn has_cycle(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}
