//! Demo command - run the extractors over built-in sample reviews.

use clap::Args;
use console::style;

use clipper_core::{ReviewAnalyzer, ReviewRecord};

use super::analyze::{format_report, OutputFormat};

const SAMPLE_REVIEWS: [&str; 5] = [
    "Went to Tony at Main Street Barber — he did an amazing fade. Highly recommend Jason too.",
    "Shoutout to Maria for the perfect cut! Booked with her after seeing her work.",
    "I always go to the shop but today Sam was on duty and gave me a great trim.",
    "The barber (not sure of his name) did fine, but ask for Chris if you want a fade.",
    "Fantastic service by the crew at Downtown Barbershop. Special mention: Luis!",
];

/// Arguments for the demo command.
#[derive(Args)]
pub struct DemoArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Include per-rule match details in JSON output
    #[arg(long)]
    matches: bool,
}

pub fn run(args: DemoArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;
    let analyzer = ReviewAnalyzer::from_config(&config)
        .with_matches(args.matches || config.extraction.include_matches)
        .with_max_reviews(0);

    if let OutputFormat::Text = args.format {
        for (i, review) in SAMPLE_REVIEWS.iter().enumerate() {
            let signals = analyzer.analyze(*review);
            println!("{}", style(format!("Review {}:", i + 1)).bold());
            println!("  {}", review);
            println!("Candidates: {}", signals.names_joined());
            println!("Hairstyles: {}", signals.hairstyles.join(", "));
            println!();
        }
        return Ok(());
    }

    let records: Vec<ReviewRecord> = SAMPLE_REVIEWS
        .iter()
        .enumerate()
        .map(|(i, text)| ReviewRecord::new((i + 1).to_string(), *text))
        .collect();
    let report = analyzer.analyze_batch(&records)?;

    println!("{}", format_report(&report, args.format, config.output.pretty)?.trim_end());

    Ok(())
}
