//! Batch command - process many gazette files into one dataset.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use douex_core::models::{DouexConfig, RawDocument};
use douex_core::portaria::{merge, GazetteProcessor, InvalidValue};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output file for the merged dataset
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: super::process::OutputFormat,

    /// Require the GM/MS issuing body in the identifier pattern
    #[arg(long)]
    strict: bool,

    /// Print a validation summary at the end
    #[arg(long)]
    summary: bool,

    /// Abort on the first file that fails to load
    #[arg(long)]
    fail_fast: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        DouexConfig::from_file(std::path::Path::new(path))?
    } else {
        DouexConfig::default()
    };

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!("{} Found {} files to process", style("ℹ").blue(), files.len());

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let processor = GazetteProcessor::new()
        .with_config(config)
        .with_strict_issuer(args.strict);

    let mut record_sets = Vec::new();
    let mut invalid: Vec<InvalidValue> = Vec::new();
    let mut documents_seen = 0usize;
    let mut failures = 0usize;

    for path in &files {
        let documents: Vec<RawDocument> = match super::load_documents(path) {
            Ok(docs) => docs,
            Err(e) => {
                if args.fail_fast {
                    anyhow::bail!("Failed to load {}: {}", path.display(), e);
                }
                warn!("Failed to load {}: {}", path.display(), e);
                failures += 1;
                progress.inc(1);
                continue;
            }
        };

        for document in &documents {
            documents_seen += 1;
            // Per-document isolation: a failing document never aborts the run.
            match processor.process_document(document) {
                Ok(outcome) => {
                    invalid.extend(outcome.invalid);
                    if !outcome.records.is_empty() {
                        record_sets.push(outcome.records);
                    }
                }
                Err(e) => {
                    failures += 1;
                    warn!("Skipping document in {}: {}", path.display(), e);
                }
            }
        }

        debug!("Processed {}", path.display());
        progress.inc(1);
    }

    progress.finish_with_message("Complete");

    let dataset = merge(record_sets);

    if dataset.is_empty() {
        println!("{} {}", style("!").yellow(), douex_core::ExtractionError::NoData);
        return Ok(());
    }

    let content = match args.format {
        super::process::OutputFormat::Json => serde_json::to_string_pretty(&dataset.records)?,
        super::process::OutputFormat::Csv => {
            let mut buffer = Vec::new();
            super::write_dataset_csv(&dataset, &mut buffer)?;
            String::from_utf8(buffer)?
        }
        super::process::OutputFormat::Text => {
            format!("{} record(s)\n", dataset.len())
        }
    };

    match &args.output {
        Some(path) => {
            fs::write(path, content)?;
            println!(
                "{} Wrote {} records to {}",
                style("✓").green(),
                dataset.len(),
                path.display()
            );
        }
        None => println!("{content}"),
    }

    println!();
    println!(
        "{} Processed {} documents from {} files in {:?}",
        style("✓").green(),
        documents_seen,
        files.len(),
        start.elapsed()
    );
    if failures > 0 {
        println!("   {} skipped", style(failures).red());
    }

    if args.summary {
        println!();
        if invalid.is_empty() {
            println!("{} All field values passed validation", style("✓").green());
        } else {
            println!(
                "{} {} value(s) downgraded to null:",
                style("!").yellow(),
                invalid.len()
            );
            for item in &invalid {
                println!("  row {}: {} = {:?}", item.row, item.field.name(), item.value);
            }
        }
    }

    Ok(())
}
