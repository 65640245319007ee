// Main library entry point for astgraph.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::graph::{AstGraph, GraphEdge, GraphNodeProps};
pub use domain::registry::{NodeVisualizer, VisualizerRegistry};
pub use domain::syntax::{FieldValue, NodeId, Scalar, SyntaxNode, SyntaxTree};
pub use domain::traversal::{visualize, VisitContext};
