//! Batch processing command for multiple OCR text files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, error, warn};

use recx_core::models::receipt::ExtractionResult;
use recx_core::receipt::{ReceiptParser, RuleReceiptParser};

use super::extract::{format_result, load_config};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: super::extract::OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    result: Option<ExtractionResult>,
    error: Option<String>,
}

/// One row of the summary CSV.
#[derive(Serialize)]
struct SummaryRecord {
    file: String,
    merchant: Option<String>,
    amount: Option<String>,
    date: Option<String>,
    tax: Option<String>,
    currency: Option<String>,
    confidence: f32,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "text" | "ocr")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let parser = RuleReceiptParser::from_config(&config.extraction);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        match process_single_file(&path, &parser, &args) {
            Ok(result) => {
                results.push(ProcessResult {
                    path,
                    result: Some(result),
                    error: None,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        path,
                        result: None,
                        error: Some(error_msg),
                    });
                } else {
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    if args.summary {
        let summary_path = args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("summary.csv");
        write_summary(&results, &summary_path)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let succeeded = results.iter().filter(|r| r.result.is_some()).count();
    let failed = results.len() - succeeded;
    let mean_confidence = if succeeded > 0 {
        results
            .iter()
            .filter_map(|r| r.result.as_ref())
            .map(|r| r.confidence.overall)
            .sum::<f32>()
            / succeeded as f32
    } else {
        0.0
    };

    println!(
        "{} Processed {} files ({} failed), mean confidence {:.1}%",
        style("✓").green(),
        succeeded,
        failed,
        mean_confidence * 100.0
    );
    debug!("Total batch time: {:?}", start.elapsed());

    Ok(())
}

/// Read one OCR text file, run extraction, and write the per-file output.
fn process_single_file(
    path: &PathBuf,
    parser: &RuleReceiptParser,
    args: &BatchArgs,
) -> anyhow::Result<ExtractionResult> {
    let text = fs::read_to_string(path)?;
    let result = parser.parse(&text);

    if let Some(ref output_dir) = args.output_dir {
        let extension = match args.format {
            super::extract::OutputFormat::Json => "json",
            super::extract::OutputFormat::Csv => "csv",
            super::extract::OutputFormat::Text => "txt",
        };
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("receipt");
        let out_path = output_dir.join(format!("{stem}.{extension}"));
        fs::write(&out_path, format_result(&result, args.format)?)?;
        debug!("Wrote {}", out_path.display());
    }

    Ok(result)
}

/// Write the summary CSV, one row per input file.
fn write_summary(results: &[ProcessResult], path: &PathBuf) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for processed in results {
        let record = match &processed.result {
            Some(result) => SummaryRecord {
                file: processed.path.display().to_string(),
                merchant: result.merchant.clone(),
                amount: result.amount.map(|a| a.to_string()),
                date: result.date.map(|d| d.to_string()),
                tax: result.tax.map(|t| t.to_string()),
                currency: result.currency.clone(),
                confidence: result.confidence.overall,
                error: None,
            },
            None => SummaryRecord {
                file: processed.path.display().to_string(),
                merchant: None,
                amount: None,
                date: None,
                tax: None,
                currency: None,
                confidence: 0.0,
                error: processed.error.clone(),
            },
        };
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}
