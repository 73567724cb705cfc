//! Classification of a dependency's implementation type.
//!
//! Collections fan out to every concrete member, everything else is a single
//! edge. The decision is made once per relationship, before dispatch.

use crate::domain::type_ref::TypeRef;

/// Generic definition recognised as a streamable sequence by default.
pub const DEFAULT_SEQUENCE_DEFINITION: &str = "System.Collections.Generic.IEnumerable`1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyShape {
    /// Fixed-size array of the element abstraction
    Array(TypeRef),
    /// Lazily enumerated sequence of the element abstraction
    Sequence(TypeRef),
    Single,
}

impl DependencyShape {
    /// Classify `implementation`, treating generic types whose definition is
    /// listed in `sequence_definitions` (and which take one argument) as
    /// sequences.
    pub fn classify(implementation: &TypeRef, sequence_definitions: &[String]) -> Self {
        if let Some(element) = implementation.element() {
            return Self::Array(element.clone());
        }
        if let [element] = implementation.args() {
            let definition = implementation.definition();
            if sequence_definitions.iter().any(|d| *d == definition) {
                return Self::Sequence(element.clone());
            }
        }
        Self::Single
    }

    /// Element abstraction for collection shapes.
    pub fn element(&self) -> Option<&TypeRef> {
        match self {
            Self::Array(e) | Self::Sequence(e) => Some(e),
            Self::Single => None,
        }
    }
}
