//! Process command - extract records from a single gazette document file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::info;

use douex_core::models::{Dataset, DouexConfig};
use douex_core::portaria::GazetteProcessor;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (HTML/XML markup, or JSON source rows)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Require the GM/MS issuing body in the identifier pattern
    #[arg(long)]
    strict: bool,

    /// Print every value downgraded to null during cleaning
    #[arg(long)]
    show_invalid: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        DouexConfig::from_file(std::path::Path::new(path))?
    } else {
        DouexConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let documents = super::load_documents(&args.input)?;
    info!("Loaded {} document(s) from {}", documents.len(), args.input.display());

    let processor = GazetteProcessor::new()
        .with_config(config)
        .with_strict_issuer(args.strict);

    let mut record_sets = Vec::new();
    let mut invalid = Vec::new();
    for document in &documents {
        let outcome = processor.process_document(document)?;
        if let Some(numero) = &outcome.identifier.numero {
            info!("Identified portaria {}", numero);
        }
        invalid.extend(outcome.invalid);
        record_sets.push(outcome.records);
    }

    let dataset = douex_core::portaria::merge(record_sets);

    if dataset.is_empty() {
        println!("{} {}", style("!").yellow(), douex_core::ExtractionError::NoData);
        return Ok(());
    }

    let content = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&dataset.records)?,
        OutputFormat::Csv => {
            let mut buffer = Vec::new();
            super::write_dataset_csv(&dataset, &mut buffer)?;
            String::from_utf8(buffer)?
        }
        OutputFormat::Text => format_dataset_text(&dataset),
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

    if args.show_invalid && !invalid.is_empty() {
        println!();
        println!("{}", style("Invalid values downgraded to null:").yellow());
        for item in &invalid {
            println!("  row {}: {} = {:?}", item.row, item.field.name(), item.value);
        }
    }

    info!("Done in {:?}", start.elapsed());
    Ok(())
}

fn format_dataset_text(dataset: &Dataset) -> String {
    let mut output = String::new();

    for record in &dataset.records {
        output.push_str(&format!(
            "Portaria {} ({})\n",
            record.numero_portaria.as_deref().unwrap_or("?"),
            record.data.as_deref().unwrap_or("sem data"),
        ));
        if let (Some(uf), Some(municipio)) = (&record.uf, &record.municipio) {
            output.push_str(&format!("  {municipio}/{uf}\n"));
        }
        if let Some(valor) = &record.valor {
            output.push_str(&format!("  valor: {valor}\n"));
        }
    }

    output.push_str(&format!("\n{} record(s)\n", dataset.len()));
    output
}
