use crate::domain::edge::Edge;
use crate::domain::ports::{Container, Provider};
use crate::domain::shape::{DEFAULT_SEQUENCE_DEFINITION, DependencyShape};
use crate::domain::type_ref::TypeRef;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Traversal options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Generic definitions (full name with arity marker) whose single argument
    /// is the element abstraction of a streamable sequence.
    pub sequence_definitions: Vec<String>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            sequence_definitions: vec![DEFAULT_SEQUENCE_DEFINITION.to_string()],
        }
    }
}

/// Where the traversal continues after an edge is emitted.
enum Next {
    /// The relationship's own provider.
    Provider(Provider),
    /// Whatever the container registers for a collection member's concrete type.
    Registration(TypeRef),
}

struct Step {
    edge: Edge,
    next: Next,
}

/// Graph builder - Domain Service walking a container's relationship metadata
pub struct GraphBuilder<'c> {
    container: &'c dyn Container,
    options: BuildOptions,
}

impl<'c> GraphBuilder<'c> {
    pub fn new(container: &'c dyn Container) -> Self {
        Self::with_options(container, BuildOptions::default())
    }

    pub fn with_options(container: &'c dyn Container, options: BuildOptions) -> Self {
        Self { container, options }
    }

    /// Every edge reachable from `root`, in depth-first pre-order.
    ///
    /// An unregistered root yields an empty list. Each provider is expanded at
    /// most once, which keeps cycles finite and shared subtrees single.
    pub fn build(&self, root: &TypeRef) -> Result<Vec<Edge>> {
        let mut edges = Vec::new();
        let Some(provider) = self.container.registration(root) else {
            debug!(root = %root, "root type has no registration");
            return Ok(edges);
        };

        let mut visited = HashSet::new();
        visited.insert(provider.id);
        // One frame per provider under expansion; popping a frame returns to
        // the parent's next relationship, exactly like the recursive walk.
        let mut stack = vec![self.expand(&provider)?.into_iter()];

        while let Some(frame) = stack.last_mut() {
            let Some(step) = frame.next() else {
                stack.pop();
                continue;
            };
            edges.push(step.edge);

            let provider = match step.next {
                Next::Provider(p) => Some(p),
                Next::Registration(ty) => self.container.registration(&ty),
            };
            let Some(provider) = provider else {
                continue;
            };
            if visited.insert(provider.id) {
                stack.push(self.expand(&provider)?.into_iter());
            } else {
                debug!(provider = %provider.id, service = %provider.service_type, "already expanded");
            }
        }

        debug!(root = %root, edges = edges.len(), providers = visited.len(), "graph built");
        Ok(edges)
    }

    /// Edges declared directly by `provider`, each paired with where to go next.
    fn expand(&self, provider: &Provider) -> Result<Vec<Step>> {
        let mut steps = Vec::new();
        for relationship in self.container.relationships(provider)? {
            let dependency = relationship.dependency;
            let shape = DependencyShape::classify(
                &dependency.implementation_type,
                &self.options.sequence_definitions,
            );
            match shape.element() {
                Some(element) => {
                    let members = self.container.all_instances(element)?;
                    debug!(
                        provider = %provider.id,
                        element = %element,
                        members = members.len(),
                        "collection fan-out"
                    );
                    for member in members {
                        // Collection edges hang off the service type.
                        steps.push(Step {
                            edge: Edge::new(
                                provider.service_type.clone(),
                                member.clone(),
                                element.clone(),
                            ),
                            next: Next::Registration(member),
                        });
                    }
                }
                None => {
                    // Singular edges hang off the implementation type, so a
                    // decorator is credited with what it wraps.
                    steps.push(Step {
                        edge: Edge::new(
                            provider.implementation_type.clone(),
                            dependency.implementation_type.clone(),
                            dependency.service_type.clone(),
                        ),
                        next: Next::Provider(dependency),
                    });
                }
            }
        }
        Ok(steps)
    }
}

/// Build the edge list for `root` with default options.
pub fn build_graph(container: &dyn Container, root: &TypeRef) -> Result<Vec<Edge>> {
    GraphBuilder::new(container).build(root)
}
