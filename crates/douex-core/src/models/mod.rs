//! Data models for the extraction pipeline.

pub mod config;
pub mod document;
pub mod record;

pub use config::{DouexConfig, ExtractionConfig, HeaderRow, TableConfig};
pub use document::{OrderIdentifier, RawDocument};
pub use record::{CanonicalField, CanonicalRecord, Dataset};
