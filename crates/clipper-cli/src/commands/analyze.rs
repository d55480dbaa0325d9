//! Analyze command - extract signals from a single review.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::{debug, info};

use clipper_core::models::review::{BatchReport, ReviewSignals};
use clipper_core::ReviewAnalyzer;

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Review text ("-" or omitted reads stdin)
    text: Option<String>,

    /// Read the review text from a file
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Include per-rule match details in JSON output
    #[arg(long)]
    matches: bool,
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

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn run(args: AnalyzeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let text = read_review(&args)?;
    debug!("Analyzing review of {} bytes", text.len());

    let analyzer = ReviewAnalyzer::from_config(&config)
        .with_matches(args.matches || config.extraction.include_matches);
    let signals = analyzer.analyze(text.as_str());

    info!(
        "Found {} name candidates, {} hairstyles",
        signals.candidate_names.len(),
        signals.hairstyles.len()
    );

    let output = format_signals(&signals, args.format, config.output.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output.trim_end());
    }

    Ok(())
}

fn read_review(args: &AnalyzeArgs) -> anyhow::Result<String> {
    if let Some(path) = &args.file {
        if !path.exists() {
            anyhow::bail!("Input file not found: {}", path.display());
        }
        return Ok(fs::read_to_string(path)?);
    }

    match args.text.as_deref() {
        Some("-") | None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
        Some(text) => Ok(text.to_string()),
    }
}

pub fn format_signals(
    signals: &ReviewSignals,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => to_json(signals, pretty),
        OutputFormat::Csv => format_csv(std::slice::from_ref(signals)),
        OutputFormat::Text => Ok(format_text(signals)),
    }
}

pub fn format_report(
    report: &BatchReport,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => to_json(report, pretty),
        OutputFormat::Csv => format_csv(&report.reviews),
        OutputFormat::Text => {
            let mut output = String::new();
            for review in &report.reviews {
                output.push_str(&format!(
                    "Review {}:\n",
                    review.id.as_deref().unwrap_or("-")
                ));
                output.push_str(&format_text(review));
                output.push('\n');
            }

            output.push_str(&format!(
                "{} reviews, {} with names, {} with hairstyles\n",
                report.total_reviews, report.reviews_with_names, report.reviews_with_hairstyles
            ));
            for entry in &report.hairstyles {
                output.push_str(&format!("  {:<14} {}\n", entry.style, entry.count));
            }
            Ok(output)
        }
    }
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}

fn format_csv(reviews: &[ReviewSignals]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["id", "candidate_names", "hairstyles"])?;

    for review in reviews {
        wtr.write_record([
            review.id.as_deref().unwrap_or(""),
            &review.names_joined(),
            &review.hairstyles.join(", "),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(signals: &ReviewSignals) -> String {
    let mut output = String::new();

    output.push_str(&format!("Candidates: {}\n", signals.names_joined()));
    output.push_str(&format!("Hairstyles: {}\n", signals.hairstyles.join(", ")));

    output
}
