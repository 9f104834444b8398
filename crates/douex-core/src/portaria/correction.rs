//! Optional LLM table-correction collaborator.
//!
//! When DOM recovery finds no usable table, the flattened document text
//! can be handed to an external text-generation service that answers with
//! a semicolon-delimited CSV. That answer is untrusted: it goes through
//! the same reconciliation as DOM tables, and any parse problem degrades
//! to an empty result rather than an error.

use tracing::debug;

use crate::error::CorrectionError;

use super::tables::RawTable;

/// External collaborator that rewrites messy table text.
///
/// Implementations live outside the core (HTTP client, local model); the
/// core only defines the contract. Service failures are surfaced to the
/// pipeline caller as [`CorrectionError`]; retry policy belongs to the
/// orchestration layer.
pub trait TableCorrector {
    /// Given flattened table text, return a semicolon-delimited CSV with a
    /// header line.
    fn correct(&self, raw: &str) -> Result<String, CorrectionError>;
}

/// Parse a corrector answer into tables. Fail-soft: unusable output
/// yields an empty vector.
pub fn parse_corrected(csv_text: &str) -> Vec<RawTable> {
    let mut lines = csv_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let Some(header_line) = lines.next() else {
        debug!("corrector returned empty output");
        return Vec::new();
    };

    let headers: Vec<String> = header_line
        .split(';')
        .map(|h| h.trim().to_string())
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        debug!("corrector output has no header labels");
        return Vec::new();
    }

    let mut table = RawTable {
        headers,
        rows: Vec::new(),
    };

    for line in lines {
        let cells: Vec<Option<String>> = line
            .split(';')
            .map(|c| {
                let c = c.trim();
                if c.is_empty() { None } else { Some(c.to_string()) }
            })
            .collect();
        table.push_row(cells);
    }

    if table.rows.is_empty() {
        debug!("corrector output has a header but no data rows");
        return Vec::new();
    }

    vec![table]
}
