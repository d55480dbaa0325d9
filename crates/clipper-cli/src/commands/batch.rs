//! Batch command for analyzing review files in bulk.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, error, warn};

use clipper_core::models::review::{BatchReport, ReviewSignals};
use clipper_core::{load_reviews, tally_hairstyles, ReviewAnalyzer};

use super::analyze::{format_report, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern (.txt, .json, .jsonl)
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file reports
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Maximum reviews per file (0 = unlimited, default from config)
    #[arg(long)]
    max_reviews: Option<usize>,
}

/// Result of processing a single file.
struct FileResult {
    path: PathBuf,
    report: Option<BatchReport>,
    error: Option<String>,
    processing_time_ms: u64,
}

/// One row of `summary.csv`.
#[derive(Serialize)]
struct SummaryRow<'a> {
    filename: &'a str,
    status: &'a str,
    reviews: usize,
    with_names: usize,
    with_hairstyles: usize,
    top_hairstyle: &'a str,
    processing_time_ms: u64,
    error: &'a str,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::load_config(config_path)?;
    let continue_on_error = args.continue_on_error || config.batch.continue_on_error;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "json" | "jsonl" | "ndjson")
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
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let analyzer = ReviewAnalyzer::from_config(&config)
        .with_max_reviews(args.max_reviews.unwrap_or(config.batch.max_reviews));

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let result = process_single_file(&path, &analyzer);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(report) => {
                results.push(FileResult {
                    path,
                    report: Some(report),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(FileResult {
                        path,
                        report: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    pb.abandon();
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    let successful: Vec<_> = results.iter().filter(|r| r.report.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(output_dir) = &args.output_dir {
        for result in &successful {
            if let Some(report) = &result.report {
                // Full file name: reviews.json and reviews.jsonl get separate reports
                let output_name = result
                    .path
                    .file_name()
                    .and_then(|s| s.to_str())
                    .unwrap_or("reviews");
                let output_path =
                    output_dir.join(format!("{}.{}", output_name, args.format.extension()));

                let content = format_report(report, args.format, config.output.pretty)?;
                fs::write(&output_path, content)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    // Hairstyle tally across every analyzed review
    let all_reviews: Vec<&ReviewSignals> = successful
        .iter()
        .filter_map(|r| r.report.as_ref())
        .flat_map(|report| report.reviews.iter())
        .collect();
    let tally = tally_hairstyles(all_reviews.iter().copied());

    println!();
    println!(
        "{} Processed {} files ({} reviews) in {:?}",
        style("✓").green(),
        results.len(),
        all_reviews.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !tally.is_empty() {
        println!();
        println!("{}", style("Hairstyles:").bold());
        for entry in &tally {
            println!("  {:<14} {}", entry.style, entry.count);
        }
    }

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn process_single_file(path: &Path, analyzer: &ReviewAnalyzer) -> anyhow::Result<BatchReport> {
    let records = load_reviews(path)?;
    debug!("Loaded {} reviews from {}", records.len(), path.display());

    Ok(analyzer.analyze_batch(&records)?)
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        let row = match &result.report {
            Some(report) => SummaryRow {
                filename,
                status: "success",
                reviews: report.total_reviews,
                with_names: report.reviews_with_names,
                with_hairstyles: report.reviews_with_hairstyles,
                top_hairstyle: report.hairstyles.first().map(|s| s.style.as_str()).unwrap_or(""),
                processing_time_ms: result.processing_time_ms,
                error: "",
            },
            None => SummaryRow {
                filename,
                status: "error",
                reviews: 0,
                with_names: 0,
                with_hairstyles: 0,
                top_hairstyle: "",
                processing_time_ms: result.processing_time_ms,
                error: result.error.as_deref().unwrap_or(""),
            },
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
