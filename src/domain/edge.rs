use crate::domain::type_ref::TypeRef;
use serde::{Deserialize, Serialize};

/// One discovered wiring step: `parent` receives `child` when it asks for `via`.
///
/// Equality is structural over the triple, so the same wiring found on two
/// paths compares equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Type that owns the dependency
    pub parent: TypeRef,
    /// Concrete type supplied
    pub child: TypeRef,
    /// Abstraction the dependency was requested through
    pub via: TypeRef,
}

impl Edge {
    pub fn new(parent: TypeRef, child: TypeRef, via: TypeRef) -> Self {
        Self { parent, child, via }
    }
}
