use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::time::Instant;

use vendor_rank::proposal::{ScoredResult, VendorResponse};
use vendor_rank::scoring::{ScoringError, ScoringWeights};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_NO_RESPONSES: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    /// Aligned table, colored on a terminal
    #[default]
    Table,
    /// Tab-separated values for scripting
    Tsv,
    /// JSON array with the same field names as the scores API
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score vendor responses and list them best first
    Rank {
        /// JSON export of vendor responses
        input: PathBuf,

        /// Only score responses to this request
        #[arg(long)]
        rfp: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,

        /// Also write the ranking as JSON to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Explain the score of one ranked vendor
    Show {
        /// JSON export of vendor responses
        input: PathBuf,

        /// Rank of the vendor to show (1-based, as shown by `rank`)
        index: usize,

        /// Only score responses to this request
        #[arg(long)]
        rfp: Option<u64>,
    },
    /// Print the weights in effect after loading config
    Weights,
}

#[derive(Parser, Debug)]
#[command(name = "vendor-rank")]
#[command(about = "Vendor proposal comparison CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/vendor-rank/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    let default_filter = if cli.verbose {
        "vendor_rank=debug"
    } else {
        "vendor_rank=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match vendor_rank::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let effective_scoring = config.scoring.unwrap_or_default();
    if let Err(errors) = vendor_rank::scoring::validate_scoring(&effective_scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    let weights = effective_scoring.effective_weights();

    match cli.command {
        Commands::Rank {
            input,
            rfp,
            format,
            output,
        } => {
            let results = rank_or_exit(&input, rfp, &weights);

            let rendered = match format {
                OutputFormat::Table => vendor_rank::output::format_ranking_table(
                    &results,
                    vendor_rank::output::should_use_colors(),
                ),
                OutputFormat::Tsv => vendor_rank::output::format_tsv(&results),
                OutputFormat::Json => match vendor_rank::output::format_json(&results) {
                    Ok(json) => json,
                    Err(e) => {
                        eprintln!("{:#}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                },
            };
            println!("{}", rendered);

            if let Some(path) = output {
                if let Err(e) = vendor_rank::output::write_report(&path, &results) {
                    eprintln!("{:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
                tracing::info!(path = %path.display(), "Report written");
            }

            tracing::debug!(
                vendors = results.len(),
                elapsed = ?start_time.elapsed(),
                "Ranking complete"
            );
        }
        Commands::Show { input, index, rfp } => {
            let results = rank_or_exit(&input, rfp, &weights);

            // Validate index bounds (1-based)
            if index < 1 || index > results.len() {
                eprintln!(
                    "Invalid index {}. Must be between 1 and {}.",
                    index,
                    results.len()
                );
                std::process::exit(EXIT_CONFIG);
            }

            let result = &results[index - 1];
            println!(
                "{}",
                vendor_rank::output::format_result_detail(
                    result,
                    &weights,
                    vendor_rank::output::should_use_colors()
                )
            );
        }
        Commands::Weights => {
            println!("price:    {:.2}", weights.price);
            println!("delivery: {:.2}", weights.delivery);
            println!("warranty: {:.2}", weights.warranty);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Load and score one request's responses, exiting with the matching code on failure.
fn rank_or_exit(input: &Path, rfp: Option<u64>, weights: &ScoringWeights) -> Vec<ScoredResult> {
    let responses: Vec<VendorResponse> = match vendor_rank::store::load_responses(input, rfp) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    match vendor_rank::scoring::score_with_weights(&responses, weights) {
        Ok(results) => results,
        Err(ScoringError::EmptyInput) => {
            match rfp {
                Some(id) => eprintln!("No vendor responses found to score for request {}.", id),
                None => eprintln!("{}", ScoringError::EmptyInput),
            }
            std::process::exit(EXIT_NO_RESPONSES);
        }
    }
}
