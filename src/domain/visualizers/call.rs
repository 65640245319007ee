use super::link;
use crate::domain::error::VisualizeError;
use crate::domain::graph::{AstGraph, GraphNodeProps};
use crate::domain::registry::NodeVisualizer;
use crate::domain::syntax::{NodeId, SyntaxNode};
use crate::domain::traversal::VisitContext;

/// Calls: `$func` points at the callee, `#i` at each positional argument.
pub struct CallVisualizer {
    color: String,
}

impl CallVisualizer {
    pub fn new(color: &str) -> Self {
        Self {
            color: color.to_string(),
        }
    }

    fn make_arg_repr(index: usize) -> String {
        format!("#{}", index)
    }
}

impl NodeVisualizer for CallVisualizer {
    fn name(&self) -> &'static str {
        "call"
    }

    fn accepted_kinds(&self) -> &[&'static str] {
        &["Call"]
    }

    fn visualize_node(
        &self,
        id: NodeId,
        node: &SyntaxNode,
        cx: &VisitContext<'_>,
        graph: &mut AstGraph,
    ) -> Result<Vec<NodeId>, VisualizeError> {
        let mut children = Vec::new();
        if let Some(func) = node.child("func") {
            link(cx, graph, id, func, Some("$func"), &mut children)?;
        }

        let args = node.children("args");
        for (index, arg) in args.iter().enumerate() {
            link(cx, graph, id, *arg, Some(&Self::make_arg_repr(index)), &mut children)?;
        }

        let args_repr = (0..args.len())
            .map(Self::make_arg_repr)
            .collect::<Vec<_>>()
            .join(",");
        graph.add_node(
            id,
            GraphNodeProps::new(&self.color, format!("$func ({})", args_repr)),
        );
        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{edge_labels, label, run};
    use crate::domain::syntax::{NodeId, Scalar, SyntaxNode, SyntaxTree};

    #[test]
    fn test_call_with_arguments() {
        let mut tree = SyntaxTree::new();
        let f = tree.add(SyntaxNode::new("Name").with_field("id", Scalar::from("f")));
        let one = tree.add(SyntaxNode::new("Constant").with_field("value", Scalar::Int(1)));
        let two = tree.add(SyntaxNode::new("Constant").with_field("value", Scalar::Int(2)));
        let call = tree.add(
            SyntaxNode::new("Call")
                .with_field("func", f)
                .with_field("args", vec![one, two])
                .with_field("keywords", Vec::<NodeId>::new()),
        );

        let graph = run(&tree, call);
        assert_eq!(label(&graph, 0), Some("$func (#0,#1)"));
        assert_eq!(edge_labels(&graph), vec![Some("$func"), Some("#0"), Some("#1")]);
        assert_eq!(label(&graph, 1), Some("f"));
        assert_eq!(label(&graph, 3), Some("2"));
    }

    #[test]
    fn test_call_without_arguments() {
        let mut tree = SyntaxTree::new();
        let f = tree.add(SyntaxNode::new("Name").with_field("id", Scalar::from("main")));
        let call = tree.add(SyntaxNode::new("Call").with_field("func", f));
        let graph = run(&tree, call);
        assert_eq!(label(&graph, 0), Some("$func ()"));
        assert_eq!(graph.edges().len(), 1);
    }
}
