//! composition-graph library: dependency graph extraction and Graphviz rendering
//! for object-composition containers.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
