// Leaf strategies: they label the node and never descend.

use crate::domain::error::VisualizeError;
use crate::domain::graph::{AstGraph, GraphNodeProps};
use crate::domain::registry::NodeVisualizer;
use crate::domain::syntax::{NodeId, SyntaxNode};
use crate::domain::traversal::VisitContext;

fn scalar_label(node: &SyntaxNode, field: &str, color: &str) -> GraphNodeProps {
    GraphNodeProps {
        color: Some(color.to_string()),
        label: node.scalar(field).map(ToString::to_string),
    }
}

/// Identifiers, labeled with the `id` text.
pub struct NameVisualizer {
    color: String,
}

impl NameVisualizer {
    pub fn new(color: &str) -> Self {
        Self {
            color: color.to_string(),
        }
    }
}

impl NodeVisualizer for NameVisualizer {
    fn name(&self) -> &'static str {
        "name"
    }

    fn accepted_kinds(&self) -> &[&'static str] {
        &["Name"]
    }

    fn visualize_node(
        &self,
        id: NodeId,
        node: &SyntaxNode,
        _cx: &VisitContext<'_>,
        graph: &mut AstGraph,
    ) -> Result<Vec<NodeId>, VisualizeError> {
        graph.add_node(id, scalar_label(node, "id", &self.color));
        Ok(Vec::new())
    }
}

/// Literals, labeled with the display form of `value`.
pub struct ConstantVisualizer {
    color: String,
}

impl ConstantVisualizer {
    pub fn new(color: &str) -> Self {
        Self {
            color: color.to_string(),
        }
    }
}

impl NodeVisualizer for ConstantVisualizer {
    fn name(&self) -> &'static str {
        "constant"
    }

    fn accepted_kinds(&self) -> &[&'static str] {
        &["Constant"]
    }

    fn visualize_node(
        &self,
        id: NodeId,
        node: &SyntaxNode,
        _cx: &VisitContext<'_>,
        graph: &mut AstGraph,
    ) -> Result<Vec<NodeId>, VisualizeError> {
        graph.add_node(id, scalar_label(node, "value", &self.color));
        Ok(Vec::new())
    }
}
