use super::model::{CollectionRecord, ProviderRecord, SnapshotDocument};
use crate::domain::ports::{Container, Provider, ProviderId, Relationship};
use crate::domain::type_ref::TypeRef;
use anyhow::{Context, Result, anyhow, bail};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::debug;

/// Read-only container backed by a recorded snapshot of its wiring.
#[derive(Debug, Clone)]
pub struct ContainerSnapshot {
    providers: HashMap<ProviderId, ProviderRecord>,
    registrations: HashMap<TypeRef, ProviderId>,
    collections: HashMap<TypeRef, Vec<TypeRef>>,
}

impl ContainerSnapshot {
    /// Validate and index a snapshot document.
    pub fn from_document(document: SnapshotDocument) -> Result<Self> {
        let mut ids = HashSet::with_capacity(document.providers.len());
        for record in &document.providers {
            if !ids.insert(record.id) {
                bail!("duplicate provider id {}", record.id);
            }
        }
        // Document order, so the first bad reference is the one reported.
        for record in &document.providers {
            if let Some(dependency) = record.dependencies.iter().find(|d| !ids.contains(*d)) {
                bail!(
                    "provider {} ({}) depends on unknown provider {}",
                    record.id,
                    record.service,
                    dependency
                );
            }
        }

        let mut providers = HashMap::with_capacity(document.providers.len());
        let mut registrations = HashMap::new();
        for record in document.providers {
            if !record.decorated {
                if let Some(existing) = registrations.insert(record.service.clone(), record.id) {
                    bail!(
                        "service {} is registered by both provider {} and provider {}",
                        record.service,
                        existing,
                        record.id
                    );
                }
            }
            providers.insert(record.id, record);
        }

        let mut collections = HashMap::with_capacity(document.collections.len());
        for CollectionRecord { service, members } in document.collections {
            if collections.contains_key(&service) {
                bail!("collection {} is registered twice", service);
            }
            collections.insert(service, members);
        }

        debug!(
            providers = providers.len(),
            registrations = registrations.len(),
            collections = collections.len(),
            "snapshot indexed"
        );

        Ok(Self {
            providers,
            registrations,
            collections,
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let document: SnapshotDocument =
            serde_json::from_str(json).context("Failed to parse container snapshot JSON")?;
        Self::from_document(document)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read container snapshot: {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Invalid container snapshot: {}", path.display()))
    }

    /// Back to the serialized form, providers ordered by id and collections by
    /// service name.
    pub fn to_document(&self) -> SnapshotDocument {
        let mut providers: Vec<ProviderRecord> = self.providers.values().cloned().collect();
        providers.sort_by_key(|p| p.id);
        let mut collections: Vec<CollectionRecord> = self
            .collections
            .iter()
            .map(|(service, members)| CollectionRecord {
                service: service.clone(),
                members: members.clone(),
            })
            .collect();
        collections.sort_by_key(|c| c.service.to_string());
        SnapshotDocument {
            providers,
            collections,
        }
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    fn provider(&self, id: ProviderId) -> Option<Provider> {
        self.providers.get(&id).map(|record| Provider {
            id,
            service_type: record.service.clone(),
            implementation_type: record.implementation.clone(),
        })
    }
}

impl Container for ContainerSnapshot {
    fn registration(&self, service: &TypeRef) -> Option<Provider> {
        self.registrations
            .get(service)
            .and_then(|&id| self.provider(id))
    }

    fn relationships(&self, provider: &Provider) -> Result<Vec<Relationship>> {
        let record = self
            .providers
            .get(&provider.id)
            .ok_or_else(|| anyhow!("unknown provider {}", provider.id))?;
        record
            .dependencies
            .iter()
            .map(|&id| {
                self.provider(id)
                    .map(|dependency| Relationship { dependency })
                    .ok_or_else(|| anyhow!("unknown provider {}", id))
            })
            .collect()
    }

    fn all_instances(&self, abstraction: &TypeRef) -> Result<Vec<TypeRef>> {
        self.collections
            .get(abstraction)
            .cloned()
            .ok_or_else(|| anyhow!("no collection registered for {}", abstraction))
    }
}
