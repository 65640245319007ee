use crate::domain::graph::AstGraph;
use crate::domain::language::SourceLanguage;
use crate::domain::registry::VisualizerRegistry;
use crate::domain::traversal::visualize;
use crate::ports::{GraphExporter, SourceParser};
use anyhow::{Context, Result};
use rayon::prelude::*;
use tracing::debug;

/// One unit of input: where it came from, how to parse it, and the text.
#[derive(Debug, Clone)]
pub struct SourceInput {
    pub name: String,
    pub language: SourceLanguage,
    pub code: String,
}

pub struct VisualizeUsecase<'a> {
    pub parsers: &'a [&'a dyn SourceParser],
    pub registry: &'a VisualizerRegistry,
    pub exporter: &'a dyn GraphExporter,
}

impl<'a> VisualizeUsecase<'a> {
    fn parser(&self, language: SourceLanguage) -> Result<&'a dyn SourceParser> {
        self.parsers
            .iter()
            .copied()
            .find(|p| p.language() == language)
            .with_context(|| format!("No parser available for {}", language))
    }

    /// Parse `input` and draw it.
    pub fn build_graph(&self, input: &SourceInput) -> Result<AstGraph> {
        let tree = self
            .parser(input.language)?
            .parse(&input.code)
            .with_context(|| format!("Failed to parse {}", input.name))?;
        let root = tree
            .root()
            .with_context(|| format!("Parser produced no root for {}", input.name))?;

        let mut graph = AstGraph::new();
        visualize(&tree, root, self.registry, &mut graph)
            .with_context(|| format!("Failed to visualize {}", input.name))?;

        debug!(
            input = %input.name,
            tree_nodes = tree.len(),
            graph_nodes = graph.node_count(),
            edges = graph.edges().len(),
            "graph built"
        );
        Ok(graph)
    }

    /// Parse, draw and export one input.
    pub fn run(&self, input: &SourceInput) -> Result<String> {
        let graph = self.build_graph(input)?;
        self.exporter.export(&graph)
    }

    /// Run every input in parallel; results keep the input order.
    pub fn run_batch(&self, inputs: &[SourceInput]) -> Vec<Result<String>> {
        inputs.par_iter().map(|input| self.run(input)).collect()
    }
}
