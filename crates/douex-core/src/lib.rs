//! Core library for DOU portaria extraction.
//!
//! This crate provides:
//! - Order identifier extraction (number and issue date) from noisy text
//! - Table recovery from irregular gazette markup
//! - Header normalization onto the fixed canonical schema
//! - Field validation and cleaning (money, CNPJ, CNES, IBGE, UF, dates)
//! - Aggregation of cleaned records into one deduplicated dataset

pub mod error;
pub mod models;
pub mod portaria;

pub use error::{CorrectionError, DouexError, ExtractionError, Result, TableError};
pub use models::{
    CanonicalField, CanonicalRecord, Dataset, DouexConfig, HeaderRow, OrderIdentifier, RawDocument,
};
pub use portaria::{
    extract_identifier, extract_tables, GazetteProcessor, IdentifierExtractor, ProcessOutcome,
    RawTable, TableCorrector,
};
