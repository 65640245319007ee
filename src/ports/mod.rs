use crate::domain::error::ParseError;
use crate::domain::graph::AstGraph;
use crate::domain::language::SourceLanguage;
use crate::domain::syntax::SyntaxTree;

pub mod dot_exporter;

/// Turns source text into a syntax tree with its root set.
pub trait SourceParser: Send + Sync {
    fn language(&self) -> SourceLanguage;
    fn parse(&self, src: &str) -> Result<SyntaxTree, ParseError>;
}

/// Serializes a finished graph into a text format.
pub trait GraphExporter: Send + Sync {
    /// Format name, also used as the file extension.
    fn format(&self) -> &'static str;
    fn export(&self, graph: &AstGraph) -> anyhow::Result<String>;
}
