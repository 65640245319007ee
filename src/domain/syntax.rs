//! Syntax tree model.
//!
//! Trees are stored in an arena: every node gets a stable [`NodeId`] when it is
//! added, and that index is the node's identity. Two structurally equal nodes
//! added separately are distinct; a node referenced from two places is shared.

use crate::domain::error::VisualizeError;
use std::fmt;

/// Identity of a node inside a [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A primitive field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    None,
    Bool(bool),
    Int(i64),
    /// Integers above `i64::MAX`.
    UInt(u64),
    Float(f64),
    Str(String),
}

impl Scalar {
    /// Whether the value reads well as a one-line `field=value` description.
    pub fn is_describable(&self) -> bool {
        !matches!(self, Scalar::None)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::None => write!(f, "None"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::UInt(u) => write!(f, "{}", u),
            // Debug keeps the literal form: `1.0`, `1e20`.
            Scalar::Float(x) => write!(f, "{:?}", x),
            Scalar::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Scalar::Int(i),
            Err(_) => Scalar::UInt(value),
        }
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

/// Shape of a named field: one child, an ordered list of children, or a primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Node(NodeId),
    List(Vec<NodeId>),
    Scalar(Scalar),
}

impl From<NodeId> for FieldValue {
    fn from(id: NodeId) -> Self {
        FieldValue::Node(id)
    }
}

impl From<Vec<NodeId>> for FieldValue {
    fn from(ids: Vec<NodeId>) -> Self {
        FieldValue::List(ids)
    }
}

impl From<Scalar> for FieldValue {
    fn from(value: Scalar) -> Self {
        FieldValue::Scalar(value)
    }
}

/// One node of a syntax tree: a kind tag plus ordered named fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxNode {
    kind: String,
    fields: Vec<(String, FieldValue)>,
}

impl SyntaxNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field. Field order is kept as given.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// The child held by `name`, if that field is a single child.
    pub fn child(&self, name: &str) -> Option<NodeId> {
        match self.field(name) {
            Some(FieldValue::Node(id)) => Some(*id),
            _ => None,
        }
    }

    /// The children held by `name`; empty unless that field is a child list.
    pub fn children(&self, name: &str) -> &[NodeId] {
        match self.field(name) {
            Some(FieldValue::List(ids)) => ids,
            _ => &[],
        }
    }

    pub fn scalar(&self, name: &str) -> Option<&Scalar> {
        match self.field(name) {
            Some(FieldValue::Scalar(value)) => Some(value),
            _ => None,
        }
    }
}

/// Arena holding every node of one parsed tree.
#[derive(Debug, Clone, Default)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
    root: Option<NodeId>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its identity.
    pub fn add(&mut self, node: SyntaxNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Look a node up. An id from another tree (or a forged one) is a
    /// contract violation and is reported, never papered over.
    pub fn node(&self, id: NodeId) -> Result<&SyntaxNode, VisualizeError> {
        self.nodes.get(id.0).ok_or(VisualizeError::DanglingNode(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SyntaxNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }
}
