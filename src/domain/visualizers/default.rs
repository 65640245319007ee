use super::link;
use crate::domain::error::VisualizeError;
use crate::domain::graph::{AstGraph, GraphNodeProps};
use crate::domain::registry::NodeVisualizer;
use crate::domain::syntax::{FieldValue, NodeId, Scalar, SyntaxNode};
use crate::domain::traversal::VisitContext;

/// Catch-all for expressions, statements and modules.
///
/// Labels a node with its kind plus the first primitive field that reads well
/// on one line, and draws an edge to every child field that can be drawn.
pub struct DefaultVisualizer {
    color: String,
}

impl DefaultVisualizer {
    pub fn new(color: &str) -> Self {
        Self {
            color: color.to_string(),
        }
    }

    fn default_description(field: &str, value: &Scalar) -> Option<String> {
        value
            .is_describable()
            .then(|| format!("{}={}", field, value))
    }

    fn build_default_name(kind: &str, description: Option<String>) -> String {
        match description {
            Some(description) => format!("{}\n{}", kind, description),
            None => kind.to_string(),
        }
    }
}

impl NodeVisualizer for DefaultVisualizer {
    fn name(&self) -> &'static str {
        "default"
    }

    fn accepted_kinds(&self) -> &[&'static str] {
        &["expr", "stmt", "mod"]
    }

    fn visualize_node(
        &self,
        id: NodeId,
        node: &SyntaxNode,
        cx: &VisitContext<'_>,
        graph: &mut AstGraph,
    ) -> Result<Vec<NodeId>, VisualizeError> {
        let mut description = None;
        let mut children = Vec::new();

        for (field, value) in node.fields() {
            match value {
                FieldValue::Scalar(scalar) => {
                    if description.is_none() {
                        description = Self::default_description(field, scalar);
                    }
                }
                FieldValue::Node(child) => {
                    link(cx, graph, id, *child, Some(field), &mut children)?;
                }
                FieldValue::List(elements) => {
                    for (index, element) in elements.iter().enumerate() {
                        let label = format!("{} #{}", field, index);
                        link(cx, graph, id, *element, Some(&label), &mut children)?;
                    }
                }
            }
        }

        graph.add_node(
            id,
            GraphNodeProps::new(&self.color, Self::build_default_name(node.kind(), description)),
        );
        Ok(children)
    }
}
