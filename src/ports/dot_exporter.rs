//! DOT Exporter
//!
//! Exports an AstGraph as Graphviz DOT, one filled box per node.

use crate::config::RenderConfig;
use crate::domain::graph::AstGraph;
use crate::ports::GraphExporter;

pub struct DotExporter {
    render: RenderConfig,
}

impl DotExporter {
    pub fn new(render: RenderConfig) -> Self {
        Self { render }
    }

    /// Convert an AstGraph to a DOT string.
    pub fn to_dot(&self, graph: &AstGraph) -> String {
        let mut lines = Vec::new();

        lines.push("digraph AST {".to_string());
        lines.push(format!("    rankdir={};", self.render.rankdir));
        lines.push(format!(
            "    node [shape={}, style=filled, fontname=\"Helvetica\", fontsize={}];",
            self.render.node_shape, self.render.font_size
        ));
        lines.push(format!(
            "    edge [fontname=\"Helvetica\", fontsize={}];",
            self.render.font_size
        ));
        lines.push("".to_string());

        for (id, props) in graph.nodes() {
            let mut attrs = Vec::new();
            match props.and_then(|p| p.label.as_deref()) {
                Some(label) => attrs.push(format!("label=\"{}\"", Self::escape_label(label))),
                None => attrs.push("label=\"\"".to_string()),
            }
            if let Some(color) = props.and_then(|p| p.color.as_deref()) {
                attrs.push(format!("fillcolor=\"{}\"", Self::escape_label(color)));
            }
            lines.push(format!("    n{} [{}];", id, attrs.join(", ")));
        }

        lines.push("".to_string());

        for edge in graph.edges() {
            let label = edge
                .label
                .as_ref()
                .map(|l| format!(" [label=\"{}\"]", Self::escape_label(l)))
                .unwrap_or_default();
            lines.push(format!("    n{} -> n{}{};", edge.from, edge.to, label));
        }

        lines.push("}".to_string());

        lines.join("\n")
    }

    fn escape_label(label: &str) -> String {
        label
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
    }
}

impl Default for DotExporter {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl GraphExporter for DotExporter {
    fn format(&self) -> &'static str {
        "dot"
    }

    fn export(&self, graph: &AstGraph) -> anyhow::Result<String> {
        Ok(self.to_dot(graph))
    }
}
