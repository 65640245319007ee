// Input languages: which frontend turns a file into a syntax tree.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SourceLanguage {
    /// Rust source, lowered through syn.
    #[default]
    Rust,
    /// `{"kind", "fields"}` documents written by some other parser.
    JsonTree,
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown language `{0}` (expected rust or json)")]
pub struct UnknownLanguage(pub String);

impl SourceLanguage {
    const ALL: [SourceLanguage; 2] = [SourceLanguage::Rust, SourceLanguage::JsonTree];

    /// Names accepted on the command line; the first is canonical.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            SourceLanguage::Rust => &["rust", "rs"],
            SourceLanguage::JsonTree => &["json", "json-tree"],
        }
    }

    fn file_extension(self) -> &'static str {
        match self {
            SourceLanguage::Rust => "rs",
            SourceLanguage::JsonTree => "json",
        }
    }

    /// Guess from the file extension, ignoring case. `None` for anything else.
    pub fn from_path(path: &Path) -> Option<SourceLanguage> {
        let ext = path.extension()?.to_str()?;
        Self::ALL
            .into_iter()
            .find(|lang| lang.file_extension().eq_ignore_ascii_case(ext))
    }
}

impl FromStr for SourceLanguage {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.aliases().iter().any(|a| a.eq_ignore_ascii_case(s)))
            .ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.aliases()[0])
    }
}
