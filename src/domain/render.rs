//! Graphviz rendering of an edge list.
//!
//! Output is one `digraph g` block with an edge statement per [`Edge`], in
//! input order, so the text is stable for a given traversal.

use crate::domain::edge::Edge;

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

const HEADER: &str = "digraph g {";
const FOOTER: &str = "}";

/// `Parent -> Child [ label = "Via" ];`
pub fn edge_statement(edge: &Edge) -> String {
    format!(
        "{} -> {} [ label = \"{}\" ];",
        edge.parent.pretty_name(),
        edge.child.pretty_name(),
        edge.via.pretty_name()
    )
}

/// Header, the joined edge statements, footer. The body line is always
/// present, so an empty edge list leaves a blank line between the braces.
pub fn to_graphviz(edges: &[Edge]) -> String {
    let body: Vec<String> = edges.iter().map(edge_statement).collect();
    [HEADER, body.join(LINE_ENDING).as_str(), FOOTER].join(LINE_ENDING)
}

/// Rendering as a method on edge lists.
pub trait ToGraphviz {
    fn to_graphviz(&self) -> String;
}

impl ToGraphviz for [Edge] {
    fn to_graphviz(&self) -> String {
        to_graphviz(self)
    }
}
