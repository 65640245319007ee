//! Stock visualizer strategies and the registry that wires them together.

use crate::config::VisualizerConfig;
use crate::domain::error::VisualizeError;
use crate::domain::graph::AstGraph;
use crate::domain::kind::KindHierarchy;
use crate::domain::registry::VisualizerRegistry;
use crate::domain::syntax::NodeId;
use crate::domain::traversal::VisitContext;
use std::sync::Arc;

mod binop;
mod call;
mod compare;
mod default;
mod leaf;

pub use binop::BinOpVisualizer;
pub use call::CallVisualizer;
pub use compare::CompareVisualizer;
pub use default::DefaultVisualizer;
pub use leaf::{ConstantVisualizer, NameVisualizer};

/// Registry with the stock strategies, catch-all first.
pub fn standard_registry(config: &VisualizerConfig, hierarchy: KindHierarchy) -> VisualizerRegistry {
    let palette = &config.palette;
    VisualizerRegistry::builder(hierarchy)
        .register(Arc::new(DefaultVisualizer::new(&palette.default)))
        .register(Arc::new(BinOpVisualizer::new(
            config.binop_symbols.clone(),
            &palette.binop,
        )))
        .register(Arc::new(CallVisualizer::new(&palette.call)))
        .register(Arc::new(NameVisualizer::new(&palette.name)))
        .register(Arc::new(ConstantVisualizer::new(&palette.constant)))
        .register(Arc::new(CompareVisualizer::new(
            config.compare_symbols.clone(),
            &palette.compare,
        )))
        .build()
}

/// Stock strategies over the stock hierarchy with default settings.
pub fn default_registry() -> VisualizerRegistry {
    standard_registry(&VisualizerConfig::default(), KindHierarchy::standard())
}

/// Draw an edge to `child` and queue it, but only if it will be drawn itself.
fn link(
    cx: &VisitContext<'_>,
    graph: &mut AstGraph,
    parent: NodeId,
    child: NodeId,
    label: Option<&str>,
    children: &mut Vec<NodeId>,
) -> Result<(), VisualizeError> {
    if cx.can_visualize(child)? {
        graph.add_edge(child, Some((parent, label)));
        children.push(child);
    }
    Ok(())
}
