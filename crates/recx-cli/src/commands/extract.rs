//! Extract command - pull structured fields from a single OCR text file.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use recx_core::models::config::RecxConfig;
use recx_core::models::receipt::ExtractionResult;
use recx_core::receipt::{ReceiptParser, RuleReceiptParser};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input OCR text file (use "-" for stdin)
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction confidence scores
    #[arg(long)]
    show_confidence: bool,
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

/// Flat record used for CSV output.
#[derive(Serialize)]
struct CsvRecord<'a> {
    merchant: Option<&'a str>,
    amount: Option<String>,
    date: Option<String>,
    tax: Option<String>,
    currency: Option<&'a str>,
    confidence: f32,
}

impl<'a> From<&'a ExtractionResult> for CsvRecord<'a> {
    fn from(result: &'a ExtractionResult) -> Self {
        Self {
            merchant: result.merchant.as_deref(),
            amount: result.amount.map(|a| a.to_string()),
            date: result.date.map(|d| d.to_string()),
            tax: result.tax.map(|t| t.to_string()),
            currency: result.currency.as_deref(),
            confidence: result.confidence.overall,
        }
    }
}

pub fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let text = read_input(&args.input)?;
    info!("Read {} characters of OCR text", text.len());

    let parser = RuleReceiptParser::from_config(&config.extraction);
    let result = parser.parse(&text);

    let output = format_result(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_confidence {
        println!();
        println!(
            "{} Extraction confidence: {:.1}%",
            style("ℹ").blue(),
            result.confidence.overall * 100.0
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Load configuration from the given path, or defaults.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<RecxConfig> {
    match config_path {
        Some(path) => Ok(RecxConfig::from_file(Path::new(path))?),
        None => Ok(RecxConfig::default()),
    }
}

/// Read the input file, or stdin when the path is `-`.
pub(crate) fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    let path = Path::new(input);
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }
    Ok(fs::read_to_string(path)?)
}

/// Render an extraction result in the requested format.
pub(crate) fn format_result(
    result: &ExtractionResult,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.serialize(CsvRecord::from(result))?;
            let bytes = writer.into_inner()?;
            Ok(String::from_utf8(bytes)?)
        }
        OutputFormat::Text => {
            let field = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
            Ok(format!(
                "Merchant: {}\nAmount:   {}\nDate:     {}\nTax:      {}\nCurrency: {}\nOverall confidence: {:.0}%",
                field(result.merchant.clone()),
                field(result.amount.map(|a| a.to_string())),
                field(result.date.map(|d| d.to_string())),
                field(result.tax.map(|t| t.to_string())),
                field(result.currency.clone()),
                result.confidence.overall * 100.0
            ))
        }
    }
}
