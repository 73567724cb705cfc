//! Mock implementations for integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::{Result, anyhow};
use composition_graph::domain::ports::{Container, Provider, ProviderId, Relationship};
use composition_graph::domain::type_ref::TypeRef;

/// Container wrapper that records every introspection call.
pub struct RecordingContainer<C> {
    inner: C,
    relationship_calls: RefCell<HashMap<ProviderId, usize>>,
    instance_calls: RefCell<Vec<TypeRef>>,
}

impl<C: Container> RecordingContainer<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            relationship_calls: RefCell::new(HashMap::new()),
            instance_calls: RefCell::new(Vec::new()),
        }
    }

    /// How many times each provider was expanded.
    pub fn relationship_calls(&self) -> HashMap<ProviderId, usize> {
        self.relationship_calls.borrow().clone()
    }

    pub fn instance_calls(&self) -> Vec<TypeRef> {
        self.instance_calls.borrow().clone()
    }
}

impl<C: Container> Container for RecordingContainer<C> {
    fn registration(&self, service: &TypeRef) -> Option<Provider> {
        self.inner.registration(service)
    }

    fn relationships(&self, provider: &Provider) -> Result<Vec<Relationship>> {
        *self
            .relationship_calls
            .borrow_mut()
            .entry(provider.id)
            .or_default() += 1;
        self.inner.relationships(provider)
    }

    fn all_instances(&self, abstraction: &TypeRef) -> Result<Vec<TypeRef>> {
        self.instance_calls.borrow_mut().push(abstraction.clone());
        self.inner.all_instances(abstraction)
    }
}

/// Container whose collection lookups always fail.
pub struct FailingCollections<C> {
    pub inner: C,
}

impl<C: Container> Container for FailingCollections<C> {
    fn registration(&self, service: &TypeRef) -> Option<Provider> {
        self.inner.registration(service)
    }

    fn relationships(&self, provider: &Provider) -> Result<Vec<Relationship>> {
        self.inner.relationships(provider)
    }

    fn all_instances(&self, abstraction: &TypeRef) -> Result<Vec<TypeRef>> {
        Err(anyhow!("collection {} could not be resolved", abstraction))
    }
}
