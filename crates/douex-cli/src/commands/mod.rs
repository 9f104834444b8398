//! CLI subcommands.

pub mod batch;
pub mod process;

use std::fs;
use std::path::Path;

use douex_core::models::RawDocument;

/// Load documents from one input file.
///
/// A `.json` file holds either one source row or an array of rows shaped
/// like the external data source; any other file is taken as the raw
/// markup of a single document.
pub fn load_documents(path: &Path) -> anyhow::Result<Vec<RawDocument>> {
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        if let Ok(docs) = serde_json::from_str::<Vec<RawDocument>>(&content) {
            return Ok(docs);
        }
        let doc: RawDocument = serde_json::from_str(&content)?;
        return Ok(vec![doc]);
    }

    Ok(vec![RawDocument::from_text(content)])
}

/// Write a dataset as delimited text with the canonical header.
pub fn write_dataset_csv<W: std::io::Write>(
    dataset: &douex_core::models::Dataset,
    writer: W,
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(douex_core::models::Dataset::header())?;
    for record in &dataset.records {
        wtr.write_record(record.as_row())?;
    }
    wtr.flush()?;
    Ok(())
}
