//! Table recovery from gazette markup.
//!
//! Gazette tables are irregular: caption rows, missing cells, rows longer
//! than the header. Recovery reconciles every data row to the header width
//! instead of dropping mismatched rows.

use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TableError;
use crate::models::{HeaderRow, TableConfig};

/// A reconstructed rectangular table.
///
/// Invariant: every row has exactly `headers.len()` cells; short rows are
/// padded with `None`, long rows truncated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    /// Stripped text of each header cell.
    pub headers: Vec<String>,
    /// Data rows; `None` marks a padded cell.
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// Reconcile one raw cell row to the header width.
    pub fn push_row(&mut self, mut cells: Vec<Option<String>>) {
        let width = self.headers.len();
        cells.truncate(width);
        cells.resize(width, None);
        self.rows.push(cells);
    }
}

/// Recover every usable table from markup with the default policy.
///
/// Never fails: malformed tables are skipped individually and logged.
pub fn extract_tables(markup: &str) -> Vec<RawTable> {
    extract_tables_with(markup, &TableConfig::default())
}

/// Recover tables under an explicit header-row policy.
pub fn extract_tables_with(markup: &str, config: &TableConfig) -> Vec<RawTable> {
    let document = Html::parse_document(markup);
    let table_sel = Selector::parse("table").expect("static selector");

    let mut tables = Vec::new();
    for (index, element) in document.select(&table_sel).enumerate() {
        match recover_table(element, config) {
            Ok(table) => tables.push(table),
            Err(err) => debug!(table = index, "skipping table: {err}"),
        }
    }

    tables
}

fn recover_table(element: ElementRef<'_>, config: &TableConfig) -> Result<RawTable, TableError> {
    let tr_sel = Selector::parse("tr").expect("static selector");
    let cell_sel = Selector::parse("th, td").expect("static selector");

    let rows: Vec<ElementRef<'_>> = element.select(&tr_sel).collect();
    let min_rows = config.min_rows.max(2);
    if rows.len() < min_rows {
        return Err(TableError::TooFewRows(rows.len()));
    }

    let header_index = match config.header_row {
        HeaderRow::First => 0,
        HeaderRow::Second => 1,
    };

    let headers: Vec<String> = rows[header_index]
        .select(&cell_sel)
        .map(|cell| cell_text(cell))
        .collect();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(TableError::ZeroHeaders);
    }

    let mut table = RawTable {
        headers,
        rows: Vec::new(),
    };

    for row in rows.iter().skip(header_index + 1) {
        let cells: Vec<Option<String>> = row
            .select(&cell_sel)
            .map(|cell| {
                let text = cell_text(cell);
                if text.is_empty() { None } else { Some(text) }
            })
            .collect();
        if cells.is_empty() {
            continue;
        }
        table.push_row(cells);
    }

    if table.rows.is_empty() {
        return Err(TableError::NoDataRows);
    }

    Ok(table)
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<Vec<_>>().join(" ").trim().to_string()
}

/// Flatten markup to plain text lines, for the correction collaborator.
///
/// Tag boundaries become newlines; blank runs collapse to one line break.
pub fn flatten_to_text(markup: &str) -> String {
    let document = Html::parse_document(markup);
    let lines: Vec<String> = document
        .root_element()
        .text()
        .map(|chunk| chunk.trim().to_string())
        .filter(|chunk| !chunk.is_empty())
        .collect();
    lines.join("\n")
}
