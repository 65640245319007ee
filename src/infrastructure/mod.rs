// Infrastructure implementations for astgraph: frontends, exporters and the
// external tools they talk to.

pub mod concurrency;
pub mod graphviz;
pub mod json_exporter;
pub mod json_tree;
pub mod syn_parser;

pub use json_exporter::JsonExporter;
pub use json_tree::JsonTreeParser;
pub use syn_parser::SynSourceParser;
