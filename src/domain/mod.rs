// Core model: syntax trees, the graph they are drawn into, and the
// strategies that draw them.

pub mod error;
pub mod graph;
pub mod kind;
pub mod language;
pub mod registry;
pub mod syntax;
pub mod traversal;
pub mod visualizers;
