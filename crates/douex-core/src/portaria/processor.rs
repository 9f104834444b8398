//! Per-document pipeline: identifier, tables, normalization, cleaning.

use tracing::{debug, info, warn};

use crate::error::DouexError;
use crate::models::{CanonicalRecord, Dataset, DouexConfig, OrderIdentifier, RawDocument};

use super::aggregate::merge;
use super::clean::{clean, InvalidValue};
use super::correction::{parse_corrected, TableCorrector};
use super::identifier::IdentifierExtractor;
use super::normalize::normalize;
use super::tables::{extract_tables_with, flatten_to_text};

/// Outcome of processing one document.
#[derive(Debug, Default)]
pub struct ProcessOutcome {
    /// Cleaned canonical records, one per recovered table row.
    pub records: Vec<CanonicalRecord>,
    /// Identifier recovered from the document text.
    pub identifier: OrderIdentifier,
    /// Number of usable tables found.
    pub tables_found: usize,
    /// Values downgraded to null during cleaning.
    pub invalid: Vec<InvalidValue>,
    /// Human-readable processing warnings.
    pub warnings: Vec<String>,
}

/// Batch pipeline over gazette documents.
///
/// Pure transform per document; no state is shared across documents, so
/// callers may process documents concurrently and merge at the end.
pub struct GazetteProcessor {
    config: DouexConfig,
    corrector: Option<Box<dyn TableCorrector>>,
}

impl GazetteProcessor {
    pub fn new() -> Self {
        Self {
            config: DouexConfig::default(),
            corrector: None,
        }
    }

    pub fn with_config(mut self, config: DouexConfig) -> Self {
        self.config = config;
        self
    }

    /// Require the GM/MS issuing body in the identifier pattern.
    pub fn with_strict_issuer(mut self, strict: bool) -> Self {
        self.config.extraction.strict_issuer = strict;
        self
    }

    /// Attach an external table-correction collaborator, tried when DOM
    /// recovery finds no usable table.
    pub fn with_corrector(mut self, corrector: Box<dyn TableCorrector>) -> Self {
        self.corrector = Some(corrector);
        self
    }

    /// Process one document into cleaned canonical records.
    ///
    /// Missing identifier fields and skipped tables are not errors; the
    /// only failure surfaced here is an upstream corrector failure.
    pub fn process_document(&self, document: &RawDocument) -> Result<ProcessOutcome, DouexError> {
        let mut outcome = ProcessOutcome::default();

        let extractor =
            IdentifierExtractor::new().with_strict_issuer(self.config.extraction.strict_issuer);
        outcome.identifier = extractor.extract(&document.text);
        if outcome.identifier.is_empty() {
            outcome.warnings.push("no order identifier recognized".to_string());
        }

        let mut tables = extract_tables_with(&document.text, &self.config.tables);

        if tables.is_empty() {
            if let Some(corrector) = &self.corrector {
                debug!("no DOM tables; invoking correction collaborator");
                let corrected = corrector.correct(&flatten_to_text(&document.text))?;
                tables = parse_corrected(&corrected);
                if tables.is_empty() {
                    outcome
                        .warnings
                        .push("correction collaborator produced no usable table".to_string());
                }
            }
        }
        outcome.tables_found = tables.len();

        let source = if self.config.extraction.use_source_fallback {
            Some(document)
        } else {
            None
        };

        let mut normalized = Vec::new();
        for table in &tables {
            normalized.extend(normalize(table, &outcome.identifier, source));
        }

        let cleaned = clean(normalized);
        outcome.records = cleaned.records;
        outcome.invalid = cleaned.invalid;

        debug!(
            tables = outcome.tables_found,
            records = outcome.records.len(),
            invalid = outcome.invalid.len(),
            "document processed"
        );

        Ok(outcome)
    }

    /// Process many documents and merge into one dataset.
    ///
    /// Failures are isolated per document: a failing document is logged
    /// and skipped, never aborting the run.
    pub fn process_batch<'a, I>(&self, documents: I) -> Dataset
    where
        I: IntoIterator<Item = &'a RawDocument>,
    {
        let mut record_sets = Vec::new();
        let mut processed = 0usize;
        let mut skipped = 0usize;

        for document in documents {
            match self.process_document(document) {
                Ok(outcome) => {
                    processed += 1;
                    if !outcome.records.is_empty() {
                        record_sets.push(outcome.records);
                    }
                }
                Err(err) => {
                    skipped += 1;
                    warn!(id = document.id, "skipping document: {err}");
                }
            }
        }

        let dataset = merge(record_sets);
        info!(
            processed,
            skipped,
            records = dataset.len(),
            "batch complete"
        );
        dataset
    }
}

impl Default for GazetteProcessor {
    fn default() -> Self {
        Self::new()
    }
}
