use super::link;
use crate::domain::error::VisualizeError;
use crate::domain::graph::{AstGraph, GraphNodeProps};
use crate::domain::registry::NodeVisualizer;
use crate::domain::syntax::{NodeId, SyntaxNode};
use crate::domain::traversal::VisitContext;
use std::collections::BTreeMap;

/// Comparison chains (`a < b < c`): the leftmost operand gets a plain edge,
/// every further operand an edge labeled with its operator.
pub struct CompareVisualizer {
    operators: BTreeMap<String, String>,
    color: String,
}

impl CompareVisualizer {
    pub fn new(operators: BTreeMap<String, String>, color: &str) -> Self {
        Self {
            operators,
            color: color.to_string(),
        }
    }

    fn print_comparator(&self, kind: &str) -> String {
        self.operators
            .get(kind)
            .cloned()
            .unwrap_or_else(|| format!("cmp: {}", kind))
    }
}

impl NodeVisualizer for CompareVisualizer {
    fn name(&self) -> &'static str {
        "compare"
    }

    fn accepted_kinds(&self) -> &[&'static str] {
        &["Compare"]
    }

    fn visualize_node(
        &self,
        id: NodeId,
        node: &SyntaxNode,
        cx: &VisitContext<'_>,
        graph: &mut AstGraph,
    ) -> Result<Vec<NodeId>, VisualizeError> {
        graph.add_node(id, GraphNodeProps::new(&self.color, "compare"));

        let mut children = Vec::new();
        if let Some(left) = node.child("left") {
            link(cx, graph, id, left, None, &mut children)?;
        }

        let ops = node.children("ops");
        let comparators = node.children("comparators");
        for (op, right) in ops.iter().zip(comparators) {
            let symbol = self.print_comparator(cx.kind_of(*op)?);
            link(cx, graph, id, *right, Some(&symbol), &mut children)?;
        }
        Ok(children)
    }
}
