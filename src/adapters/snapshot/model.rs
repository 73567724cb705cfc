//! Serialized form of a container snapshot.
//!
//! ```json
//! {
//!   "providers": [
//!     {"id": 0, "service": "App.ILevel2", "implementation": "App.Level2", "dependencies": [1]},
//!     {"id": 1, "service": "App.ISimple", "implementation": "App.SimpleReference"}
//!   ],
//!   "collections": [
//!     {"service": "App.IMultiple", "members": ["App.Multiple1", "App.Multiple2"]}
//!   ]
//! }
//! ```

use crate::domain::ports::ProviderId;
use crate::domain::type_ref::TypeRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    #[serde(default)]
    pub providers: Vec<ProviderRecord>,
    #[serde(default)]
    pub collections: Vec<CollectionRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderRecord {
    pub id: ProviderId,
    pub service: TypeRef,
    pub implementation: TypeRef,
    /// Providers this one depends on, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<ProviderId>,
    /// Wrapped by a decorator: reachable only through the decorator's
    /// relationships, never by looking up `service`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub decorated: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRecord {
    /// Element abstraction
    pub service: TypeRef,
    /// Concrete member types, in resolution order
    pub members: Vec<TypeRef>,
}
