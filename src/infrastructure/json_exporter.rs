use crate::api::dto::GraphDto;
use crate::domain::graph::AstGraph;
use crate::ports::GraphExporter;
use anyhow::{Context, Result};

/// Writes the graph as a pretty-printed [`GraphDto`] document.
pub struct JsonExporter;

impl GraphExporter for JsonExporter {
    fn format(&self) -> &'static str {
        "json"
    }

    fn export(&self, graph: &AstGraph) -> Result<String> {
        serde_json::to_string_pretty(&GraphDto::from(graph)).context("Failed to serialize graph")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::GraphNodeProps;
    use crate::domain::syntax::{SyntaxNode, SyntaxTree};

    #[test]
    fn test_export_parses_back() {
        let mut tree = SyntaxTree::new();
        let name = tree.add(SyntaxNode::new("Name"));
        let mut graph = AstGraph::new();
        graph.add_node(name, GraphNodeProps::new("green", "x"));

        let json = JsonExporter.export(&graph).unwrap();
        let dto: GraphDto = serde_json::from_str(&json).unwrap();
        assert_eq!(dto.nodes.len(), 1);
        assert_eq!(dto.nodes[0].label.as_deref(), Some("x"));
        assert!(dto.edges.is_empty());
    }
}
