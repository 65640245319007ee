//! Traversal Driver
//!
//! Resolves a strategy per node, lets it write to the graph and descends
//! depth-first into the children it returns. Nodes without a strategy are
//! skipped together with their whole subtree.

use crate::domain::error::VisualizeError;
use crate::domain::graph::AstGraph;
use crate::domain::registry::VisualizerRegistry;
use crate::domain::syntax::{NodeId, SyntaxNode, SyntaxTree};
use tracing::trace;

/// Read-only view handed to strategies while they visit a node.
#[derive(Clone, Copy)]
pub struct VisitContext<'a> {
    tree: &'a SyntaxTree,
    registry: &'a VisualizerRegistry,
}

impl<'a> VisitContext<'a> {
    pub fn new(tree: &'a SyntaxTree, registry: &'a VisualizerRegistry) -> Self {
        Self { tree, registry }
    }

    pub fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }

    pub fn registry(&self) -> &'a VisualizerRegistry {
        self.registry
    }

    pub fn node(&self, id: NodeId) -> Result<&'a SyntaxNode, VisualizeError> {
        self.tree.node(id)
    }

    pub fn kind_of(&self, id: NodeId) -> Result<&'a str, VisualizeError> {
        Ok(self.tree.node(id)?.kind())
    }

    /// Whether the driver would draw `id` at all.
    pub fn can_visualize(&self, id: NodeId) -> Result<bool, VisualizeError> {
        Ok(self.registry.can_visualize(self.kind_of(id)?))
    }
}

/// Visualize the tree below `root` into `graph`.
///
/// Children are visited in the order the strategy returns them, each subtree
/// completely before the next sibling. The input must be acyclic.
///
/// A strategy links all of a node's children before any of them is visited,
/// so siblings are numbered ahead of their own descendants.
pub fn visualize(
    tree: &SyntaxTree,
    root: NodeId,
    registry: &VisualizerRegistry,
    graph: &mut AstGraph,
) -> Result<(), VisualizeError> {
    let cx = VisitContext::new(tree, registry);
    let mut pending = vec![root];

    while let Some(id) = pending.pop() {
        let node = tree.node(id)?;
        let Some(visualizer) = registry.resolve(node.kind()) else {
            trace!(node = %id, kind = node.kind(), "no visualizer, subtree omitted");
            continue;
        };
        trace!(node = %id, kind = node.kind(), visualizer = visualizer.name(), "visiting");

        let children = visualizer.visualize_node(id, node, &cx, graph)?;
        pending.extend(children.into_iter().rev());
    }
    Ok(())
}
