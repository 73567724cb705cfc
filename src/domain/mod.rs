pub mod builder;
pub mod edge;
pub mod graph;
pub mod ports;
pub mod render;
pub mod shape;
pub mod type_ref;
