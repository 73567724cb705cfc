use super::adapter::ContainerSnapshot;
use super::model::{CollectionRecord, ProviderRecord, SnapshotDocument};
use crate::domain::ports::ProviderId;
use crate::domain::type_ref::TypeRef;
use anyhow::{Result, bail};

/// Assembles a [`ContainerSnapshot`] in code.
///
/// This records wiring that already exists somewhere else. It does not
/// decide how anything is wired.
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    providers: Vec<ProviderRecord>,
    links: Vec<(ProviderId, ProviderId)>,
    collections: Vec<CollectionRecord>,
    /// Set once more providers were added than a `ProviderId` can number.
    exhausted: bool,
}

/// Id for the provider stored at `index`, if it fits.
fn id_for_index(index: usize) -> Option<ProviderId> {
    u32::try_from(index).ok().map(ProviderId)
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, service: TypeRef, implementation: TypeRef, decorated: bool) -> ProviderId {
        let id = id_for_index(self.providers.len()).unwrap_or_else(|| {
            self.exhausted = true;
            ProviderId(u32::MAX)
        });
        self.providers.push(ProviderRecord {
            id,
            service,
            implementation,
            dependencies: Vec::new(),
            decorated,
        });
        id
    }

    /// Provider registered under `service`.
    pub fn provider(&mut self, service: TypeRef, implementation: TypeRef) -> ProviderId {
        self.push(service, implementation, false)
    }

    /// Provider for a concrete type registered as itself.
    pub fn concrete(&mut self, ty: TypeRef) -> ProviderId {
        self.push(ty.clone(), ty, false)
    }

    /// Provider wrapped by a decorator; not found by service lookup.
    pub fn decorated(&mut self, service: TypeRef, implementation: TypeRef) -> ProviderId {
        self.push(service, implementation, true)
    }

    /// Append `dependency` to `provider`'s relationships.
    pub fn depends_on(&mut self, provider: ProviderId, dependency: ProviderId) -> &mut Self {
        self.links.push((provider, dependency));
        self
    }

    pub fn collection(&mut self, service: TypeRef, members: Vec<TypeRef>) -> &mut Self {
        self.collections.push(CollectionRecord { service, members });
        self
    }

    pub fn into_document(self) -> Result<SnapshotDocument> {
        if self.exhausted {
            bail!(
                "{} providers exceed the {} ids available",
                self.providers.len(),
                u64::from(u32::MAX) + 1
            );
        }
        let mut providers = self.providers;
        for (provider, dependency) in self.links {
            let Some(record) = providers.get_mut(provider.0 as usize) else {
                bail!("dependency {} declared on unknown provider {}", dependency, provider);
            };
            record.dependencies.push(dependency);
        }
        Ok(SnapshotDocument {
            providers,
            collections: self.collections,
        })
    }

    pub fn build(self) -> Result<ContainerSnapshot> {
        ContainerSnapshot::from_document(self.into_document()?)
    }
}
