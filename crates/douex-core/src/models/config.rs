//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the douex pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DouexConfig {
    /// Identifier extraction configuration.
    pub extraction: ExtractionConfig,

    /// Table recovery configuration.
    pub tables: TableConfig,
}

/// Identifier extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Require the GM/MS issuing-body token directly after the keyword.
    pub strict_issuer: bool,

    /// Backfill order number/date from source-row metadata when both the
    /// table and the extracted identifier are null.
    pub use_source_fallback: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            strict_issuer: false,
            use_source_fallback: true,
        }
    }
}

/// Which table row carries the header labels.
///
/// The source corpus mixes conventions; this is a deliberate, documented
/// policy choice applied uniformly to every table in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderRow {
    /// The first row holds the headers (default).
    First,
    /// The first row is a caption; headers are on the second row.
    Second,
}

impl Default for HeaderRow {
    fn default() -> Self {
        Self::First
    }
}

/// Table recovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Header row selection policy.
    pub header_row: HeaderRow,

    /// Minimum total rows for a table to be usable (header + data).
    pub min_rows: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            header_row: HeaderRow::First,
            min_rows: 2,
        }
    }
}

impl DouexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| crate::error::DouexError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> crate::error::Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| crate::error::DouexError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
