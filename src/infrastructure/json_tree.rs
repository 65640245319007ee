//! JSON tree frontend.
//!
//! Reads trees dumped by any external parser:
//!
//! ```json
//! {"kind": "BinOp", "fields": {
//!     "left":  {"kind": "Name", "fields": {"id": "x"}},
//!     "op":    {"kind": "Add"},
//!     "right": {"kind": "Constant", "fields": {"value": 1}}
//! }}
//! ```
//!
//! Objects are child nodes, arrays are child lists, everything else is a
//! primitive. Field order follows the document.

use crate::domain::error::ParseError;
use crate::domain::language::SourceLanguage;
use crate::domain::syntax::{FieldValue, NodeId, Scalar, SyntaxNode, SyntaxTree};
use crate::ports::SourceParser;
use serde_json::Value;
use tracing::trace;

pub struct JsonTreeParser;

impl SourceParser for JsonTreeParser {
    fn language(&self) -> SourceLanguage {
        SourceLanguage::JsonTree
    }

    fn parse(&self, src: &str) -> Result<SyntaxTree, ParseError> {
        let document: Value = serde_json::from_str(src)?;
        let mut tree = SyntaxTree::new();
        let root = lower_node(&mut tree, &document, "$")?;
        tree.set_root(root);
        Ok(tree)
    }
}

fn lower_node(tree: &mut SyntaxTree, value: &Value, path: &str) -> Result<NodeId, ParseError> {
    let object = value
        .as_object()
        .ok_or_else(|| ParseError::InvalidTree(format!("{}: expected a node object", path)))?;
    let kind = object
        .get("kind")
        .and_then(Value::as_str)
        .ok_or_else(|| ParseError::InvalidTree(format!("{}: missing string `kind`", path)))?;

    let mut node = SyntaxNode::new(kind);
    match object.get("fields") {
        None | Some(Value::Null) => {}
        Some(Value::Object(fields)) => {
            for (name, value) in fields {
                let field_path = format!("{}.{}", path, name);
                node = node.with_field(name.as_str(), lower_field(tree, value, &field_path)?);
            }
        }
        Some(_) => {
            return Err(ParseError::InvalidTree(format!(
                "{}: `fields` must be an object",
                path
            )))
        }
    }
    Ok(tree.add(node))
}

fn lower_field(tree: &mut SyntaxTree, value: &Value, path: &str) -> Result<FieldValue, ParseError> {
    let field = match value {
        Value::Null => FieldValue::Scalar(Scalar::None),
        Value::Bool(b) => FieldValue::Scalar(Scalar::Bool(*b)),
        Value::Number(n) => FieldValue::Scalar(if let Some(i) = n.as_i64() {
            Scalar::Int(i)
        } else if let Some(u) = n.as_u64() {
            Scalar::UInt(u)
        } else {
            n.as_f64().map(Scalar::Float).unwrap_or(Scalar::None)
        }),
        Value::String(s) => FieldValue::Scalar(Scalar::Str(s.clone())),
        Value::Object(_) => FieldValue::Node(lower_node(tree, value, path)?),
        Value::Array(items) => {
            let mut children = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                if item.is_object() {
                    children.push(lower_node(tree, item, &format!("{}[{}]", path, index))?);
                } else {
                    trace!(path, index, "dropping non-node list element");
                }
            }
            FieldValue::List(children)
        }
    };
    Ok(field)
}
