use crate::domain::graph::AstGraph;
use serde::{Deserialize, Serialize};

/// JSON document handed to external renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDto {
    pub nodes: Vec<NodeDto>,
    pub edges: Vec<EdgeDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDto {
    pub id: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDto {
    pub from: usize,
    pub to: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub label: Option<String>,
}

impl From<&AstGraph> for GraphDto {
    fn from(graph: &AstGraph) -> Self {
        let nodes = graph
            .nodes()
            .map(|(id, props)| NodeDto {
                id,
                label: props.and_then(|p| p.label.clone()),
                color: props.and_then(|p| p.color.clone()),
            })
            .collect();

        let edges = graph
            .edges()
            .iter()
            .map(|edge| EdgeDto {
                from: edge.from,
                to: edge.to,
                label: edge.label.clone(),
            })
            .collect();

        GraphDto { nodes, edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::GraphNodeProps;
    use crate::domain::syntax::{SyntaxNode, SyntaxTree};

    #[test]
    fn test_dto_from_graph() {
        let mut tree = SyntaxTree::new();
        let call = tree.add(SyntaxNode::new("Call"));
        let func = tree.add(SyntaxNode::new("Name"));
        let mut graph = AstGraph::new();
        graph.add_node(call, GraphNodeProps::new("yellow", "$func ()"));
        graph.add_edge(func, Some((call, Some("$func"))));

        let dto = GraphDto::from(&graph);
        assert_eq!(dto.nodes.len(), 2);
        assert_eq!(dto.nodes[0].label.as_deref(), Some("$func ()"));
        assert_eq!(dto.nodes[1].label, None);
        assert_eq!(dto.edges[0].label.as_deref(), Some("$func"));

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["nodes"][1], serde_json::json!({ "id": 1 }));
        assert_eq!(json["edges"][0]["to"], 1);
    }
}
