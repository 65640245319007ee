//! Visualizer Registry
//!
//! Maps node kinds to visualizer strategies. Lookup tries the exact kind
//! first, then walks the registered kinds in registration order and takes the
//! first one that is a supertype of the node's kind.

use crate::domain::error::VisualizeError;
use crate::domain::graph::AstGraph;
use crate::domain::kind::KindHierarchy;
use crate::domain::syntax::{NodeId, SyntaxNode};
use crate::domain::traversal::VisitContext;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A per-kind strategy turning a node into graph properties and edges.
///
/// Implementations must be thread-safe (Send + Sync) so one registry can
/// serve several traversals at once.
pub trait NodeVisualizer: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Kinds this strategy handles; abstract kinds cover all their subkinds.
    fn accepted_kinds(&self) -> &[&'static str];

    /// Emit properties/edges for `node` and return the children to descend
    /// into, in visiting order.
    fn visualize_node(
        &self,
        id: NodeId,
        node: &SyntaxNode,
        cx: &VisitContext<'_>,
        graph: &mut AstGraph,
    ) -> Result<Vec<NodeId>, VisualizeError>;
}

pub struct VisualizerRegistry {
    hierarchy: KindHierarchy,
    entries: Vec<(String, Arc<dyn NodeVisualizer>)>,
    index: HashMap<String, usize>,
}

impl fmt::Debug for VisualizerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(kind, v)| (kind, v.name())))
            .finish()
    }
}

impl VisualizerRegistry {
    pub fn builder(hierarchy: KindHierarchy) -> RegistryBuilder {
        RegistryBuilder {
            registry: VisualizerRegistry {
                hierarchy,
                entries: Vec::new(),
                index: HashMap::new(),
            },
        }
    }

    /// Strategy responsible for `kind`, if any.
    pub fn resolve(&self, kind: &str) -> Option<&dyn NodeVisualizer> {
        if let Some(&slot) = self.index.get(kind) {
            return Some(self.entries[slot].1.as_ref());
        }
        self.entries
            .iter()
            .find(|(accepted, _)| self.hierarchy.is_subkind(kind, accepted))
            .map(|(_, visualizer)| visualizer.as_ref())
    }

    pub fn can_visualize(&self, kind: &str) -> bool {
        self.resolve(kind).is_some()
    }

    pub fn hierarchy(&self) -> &KindHierarchy {
        &self.hierarchy
    }

    /// Registered kinds in registration order.
    pub fn registered_kinds(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(kind, _)| kind.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, kind: &str, visualizer: Arc<dyn NodeVisualizer>) {
        match self.index.get(kind) {
            // Replacing keeps the original slot, so precedence stays put.
            Some(&slot) => self.entries[slot].1 = visualizer,
            None => {
                self.index.insert(kind.to_string(), self.entries.len());
                self.entries.push((kind.to_string(), visualizer));
            }
        }
    }
}

/// Populates a [`VisualizerRegistry`] once, before any traversal.
pub struct RegistryBuilder {
    registry: VisualizerRegistry,
}

impl RegistryBuilder {
    /// Register a strategy for the kinds it declares itself.
    pub fn register(self, visualizer: Arc<dyn NodeVisualizer>) -> Self {
        let kinds: Vec<&'static str> = visualizer.accepted_kinds().to_vec();
        self.register_for(visualizer, &kinds)
    }

    /// Register a strategy for an explicit set of kinds.
    pub fn register_for(mut self, visualizer: Arc<dyn NodeVisualizer>, kinds: &[&str]) -> Self {
        debug!(visualizer = visualizer.name(), ?kinds, "registering visualizer");
        for kind in kinds {
            self.registry.insert(kind, Arc::clone(&visualizer));
        }
        self
    }

    pub fn build(self) -> VisualizerRegistry {
        debug!(kinds = self.registry.len(), "visualizer registry ready");
        self.registry
    }
}
