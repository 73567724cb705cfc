use crate::domain::edge::Edge;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDto {
    pub parent: String,
    pub child: String,
    pub via: String,
}

impl EdgeDto {
    /// Display names, as they appear in the rendered graph.
    pub fn pretty(edge: &Edge) -> Self {
        Self {
            parent: edge.parent.pretty_name(),
            child: edge.child.pretty_name(),
            via: edge.via.pretty_name(),
        }
    }

    /// Fully qualified type notation, parseable back into `TypeRef`s.
    pub fn qualified(edge: &Edge) -> Self {
        Self {
            parent: edge.parent.to_string(),
            child: edge.child.to_string(),
            via: edge.via.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub root: String,
    pub registered: bool,
    pub node_count: usize,
    pub edge_count: usize,
    /// Distinct edges after collapsing repeats found on different paths
    pub distinct_edge_count: usize,
    pub roots: Vec<String>,
    pub cyclic: bool,
}
