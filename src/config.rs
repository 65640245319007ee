//! Configuration
//!
//! Everything here is optional; a missing file or section means the stock
//! settings. Loaded from TOML:
//!
//! ```toml
//! [binop_symbols]
//! Pow = "**"
//!
//! [palette]
//! call = "#f9e2af"
//!
//! [render]
//! rankdir = "LR"
//!
//! [hierarchy]
//! MatchCase = "stmt"
//! ```

use crate::domain::kind::KindHierarchy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    /// Operator kind -> symbol shown on BinOp nodes.
    pub binop_symbols: BTreeMap<String, String>,
    /// Comparison kind -> symbol shown on Compare edges.
    pub compare_symbols: BTreeMap<String, String>,
    pub palette: Palette,
    pub render: RenderConfig,
    /// Extra `kind = "parent"` relations on top of the stock hierarchy.
    pub hierarchy: BTreeMap<String, String>,
}

/// Fill colors per strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub default: String,
    pub binop: String,
    pub call: String,
    pub name: String,
    pub constant: String,
    pub compare: String,
}

/// Graph-wide DOT attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub rankdir: String,
    pub font_size: u32,
    pub node_shape: String,
}

fn symbols(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(kind, symbol)| (kind.to_string(), symbol.to_string()))
        .collect()
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            binop_symbols: symbols(&[("Add", "+"), ("Sub", "-"), ("Div", "/"), ("Mult", "*")]),
            compare_symbols: symbols(&[
                ("Lt", "<"),
                ("Gt", ">"),
                ("LtE", "<="),
                ("GtE", ">="),
                ("NotEq", "!="),
                ("Eq", "=="),
            ]),
            palette: Palette::default(),
            render: RenderConfig::default(),
            hierarchy: BTreeMap::new(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            default: "#abc7ed".to_string(),
            binop: "#abedd3".to_string(),
            call: "yellow".to_string(),
            name: "green".to_string(),
            constant: "purple".to_string(),
            compare: "#eddeab".to_string(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            rankdir: "TB".to_string(),
            font_size: 8,
            node_shape: "box".to_string(),
        }
    }
}

impl VisualizerConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: VisualizerConfig = toml::from_str(content).context("Invalid configuration")?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("In config {}", path.display()))
    }

    /// Stock hierarchy extended with the `[hierarchy]` section.
    pub fn kind_hierarchy(&self) -> Result<KindHierarchy> {
        let mut hierarchy = KindHierarchy::standard();
        for (kind, parent) in &self.hierarchy {
            hierarchy.declare(kind, parent)?;
        }
        Ok(hierarchy)
    }
}
