//! Container snapshot adapter
//!
//! Implements the [`Container`](crate::domain::ports::Container) port over a
//! recorded description of a container's wiring (JSON or built in code), so
//! graphs can be produced outside the process that owns the container.

mod adapter;
mod builder;
mod model;

pub use adapter::ContainerSnapshot;
pub use builder::SnapshotBuilder;
pub use model::{CollectionRecord, ProviderRecord, SnapshotDocument};
