//! Graph Model
//!
//! Output of one visualization run: graph node ids, display properties and
//! labeled edges. Ids are handed out lazily in first-seen order and never
//! change afterwards.

use crate::domain::syntax::NodeId;
use std::collections::HashMap;

/// Display properties of one graph node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphNodeProps {
    pub color: Option<String>,
    pub label: Option<String>,
}

impl GraphNodeProps {
    pub fn new(color: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            label: Some(label.into()),
        }
    }
}

/// A directed parent -> child edge between graph node ids.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphEdge {
    pub from: usize,
    pub to: usize,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AstGraph {
    ast_to_graph_node: HashMap<NodeId, usize>,
    graph_node_to_ast: Vec<NodeId>,
    properties: HashMap<usize, GraphNodeProps>,
    edges: Vec<GraphEdge>,
}

impl AstGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of `node`, allocating the next one on first reference.
    pub fn get_node_id(&mut self, node: NodeId) -> usize {
        if let Some(id) = self.ast_to_graph_node.get(&node) {
            return *id;
        }
        let id = self.graph_node_to_ast.len();
        self.ast_to_graph_node.insert(node, id);
        self.graph_node_to_ast.push(node);
        id
    }

    /// Id of `node` if it has been referenced already.
    pub fn node_id(&self, node: NodeId) -> Option<usize> {
        self.ast_to_graph_node.get(&node).copied()
    }

    /// Store the properties of `node`, replacing earlier ones.
    pub fn add_node(&mut self, node: NodeId, properties: GraphNodeProps) {
        let id = self.get_node_id(node);
        self.properties.insert(id, properties);
    }

    /// Record an edge from `parent` to `child`. `None` marks the root and
    /// records nothing. The parent id is allocated before the child id.
    pub fn add_edge(&mut self, child: NodeId, parent: Option<(NodeId, Option<&str>)>) {
        let Some((parent, label)) = parent else {
            return;
        };
        let from = self.get_node_id(parent);
        let to = self.get_node_id(child);
        self.edges.push(GraphEdge {
            from,
            to,
            label: label.map(str::to_string),
        });
    }

    pub fn node_count(&self) -> usize {
        self.graph_node_to_ast.len()
    }

    /// Syntax node behind a graph id.
    pub fn ast_node(&self, id: usize) -> Option<NodeId> {
        self.graph_node_to_ast.get(id).copied()
    }

    pub fn properties(&self, id: usize) -> Option<&GraphNodeProps> {
        self.properties.get(&id)
    }

    /// Graph ids in ascending order with their properties.
    pub fn nodes(&self) -> impl Iterator<Item = (usize, Option<&GraphNodeProps>)> {
        (0..self.node_count()).map(move |id| (id, self.properties.get(&id)))
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Label most recently supplied for the `from -> to` pair.
    pub fn edge_label(&self, from: usize, to: usize) -> Option<&str> {
        self.edges
            .iter()
            .rev()
            .filter(|edge| edge.from == from && edge.to == to)
            .find_map(|edge| edge.label.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.graph_node_to_ast.is_empty()
    }
}
