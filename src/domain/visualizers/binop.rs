use super::link;
use crate::domain::error::VisualizeError;
use crate::domain::graph::{AstGraph, GraphNodeProps};
use crate::domain::registry::NodeVisualizer;
use crate::domain::syntax::{NodeId, SyntaxNode};
use crate::domain::traversal::VisitContext;
use std::collections::BTreeMap;

/// Binary operations, labeled with the operator symbol.
pub struct BinOpVisualizer {
    operators: BTreeMap<String, String>,
    color: String,
}

impl BinOpVisualizer {
    pub fn new(operators: BTreeMap<String, String>, color: &str) -> Self {
        Self {
            operators,
            color: color.to_string(),
        }
    }

    fn operator_label(&self, node: &SyntaxNode, cx: &VisitContext<'_>) -> Result<String, VisualizeError> {
        let Some(op) = node.child("op") else {
            return Ok("binop: ?".to_string());
        };
        let kind = cx.kind_of(op)?;
        Ok(self
            .operators
            .get(kind)
            .cloned()
            .unwrap_or_else(|| format!("binop: {}", kind)))
    }
}

impl NodeVisualizer for BinOpVisualizer {
    fn name(&self) -> &'static str {
        "binop"
    }

    fn accepted_kinds(&self) -> &[&'static str] {
        &["BinOp"]
    }

    fn visualize_node(
        &self,
        id: NodeId,
        node: &SyntaxNode,
        cx: &VisitContext<'_>,
        graph: &mut AstGraph,
    ) -> Result<Vec<NodeId>, VisualizeError> {
        let label = self.operator_label(node, cx)?;
        graph.add_node(id, GraphNodeProps::new(&self.color, label));

        let mut children = Vec::with_capacity(2);
        for side in ["left", "right"] {
            if let Some(operand) = node.child(side) {
                link(cx, graph, id, operand, Some(side), &mut children)?;
            }
        }
        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{edge_labels, label, run};
    use crate::domain::syntax::{NodeId, Scalar, SyntaxNode, SyntaxTree};

    fn binop(tree: &mut SyntaxTree, op: &str) -> NodeId {
        let x = tree.add(SyntaxNode::new("Name").with_field("id", Scalar::from("x")));
        let op = tree.add(SyntaxNode::new(op));
        let one = tree.add(SyntaxNode::new("Constant").with_field("value", Scalar::Int(1)));
        tree.add(
            SyntaxNode::new("BinOp")
                .with_field("left", x)
                .with_field("op", op)
                .with_field("right", one),
        )
    }

    #[test]
    fn test_add_uses_symbol() {
        let mut tree = SyntaxTree::new();
        let root = binop(&mut tree, "Add");
        let graph = run(&tree, root);

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.node_id(root), Some(0));
        assert_eq!(label(&graph, 0), Some("+"));
        assert_eq!(label(&graph, 1), Some("x"));
        assert_eq!(label(&graph, 2), Some("1"));
        assert_eq!(edge_labels(&graph), vec![Some("left"), Some("right")]);
    }

    #[test]
    fn test_unmapped_operator_falls_back_to_kind() {
        let mut tree = SyntaxTree::new();
        let root = binop(&mut tree, "MatMult");
        let graph = run(&tree, root);
        assert_eq!(label(&graph, 0), Some("binop: MatMult"));
    }

    #[test]
    fn test_missing_operand_is_skipped() {
        let mut tree = SyntaxTree::new();
        let y = tree.add(SyntaxNode::new("Name").with_field("id", Scalar::from("y")));
        let root = tree.add(SyntaxNode::new("BinOp").with_field("right", y));
        let graph = run(&tree, root);
        assert_eq!(label(&graph, 0), Some("binop: ?"));
        assert_eq!(edge_labels(&graph), vec![Some("right")]);
    }
}
