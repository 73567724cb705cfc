use crate::domain::type_ref::TypeRef;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a provider inside one container.
///
/// Two providers may share a service type (a decorator and the instance it
/// wraps), so traversal state is keyed on this handle and never on types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(pub u32);

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The container's recipe for one service type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    pub id: ProviderId,
    pub service_type: TypeRef,
    pub implementation_type: TypeRef,
}

/// A direct dependency declared by a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub dependency: Provider,
}

/// Read-only introspection port onto an already built container
/// (implemented by Infrastructure).
pub trait Container {
    /// Provider registered for `service`, if any.
    fn registration(&self, service: &TypeRef) -> Option<Provider>;

    /// Direct dependencies of `provider`, in declaration order.
    fn relationships(&self, provider: &Provider) -> Result<Vec<Relationship>>;

    /// Concrete runtime type of every instance the container supplies for a
    /// collection of `abstraction`, in collection order.
    fn all_instances(&self, abstraction: &TypeRef) -> Result<Vec<TypeRef>>;
}
