//! # Route-rank CLI
//!
//! Command-line interface for the route-rank library.
//! Answers one ranking question per run and writes `output.csv`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::error;
use route_rank::{AnalysisOptions, Query, OUTPUT_FILE};

mod cli;

/// Command-line interface for route-rank
#[derive(Parser)]
#[command(name = "route-rank")]
#[command(about = "Top-N rankings from a flight-route dataset")]
#[command(long_about = "Answers one question about a flight-route dataset and writes output.csv:
  route-rank --DATA=routes.yaml --QUESTION=1 --N=10   # Airlines with most routes into Canada
  route-rank --DATA=routes.yaml --QUESTION=2 --N=10   # Least frequent destination countries
  route-rank --DATA=routes.yaml --QUESTION=3 --N=10   # Most frequent destination airports

Unknown questions or N=0 produce a header-only report.")]
#[command(version = env!("ROUTE_RANK_VERSION"))]
struct Cli {
    /// Route data file
    #[arg(long = "DATA", value_name = "PATH")]
    data: Option<PathBuf>,

    /// Question to answer: 1, 2 or 3
    #[arg(long = "QUESTION", value_name = "ID", default_value_t = 0)]
    question: u32,

    /// Number of ranked rows to output
    #[arg(long = "N", value_name = "COUNT", default_value_t = 0)]
    n: usize,

    /// Show what would be analyzed without reading or writing anything
    #[arg(long)]
    dry_run: bool,

    /// Show a progress bar while the data file is read
    #[arg(long)]
    progress: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        error!("❌ Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging to stderr
    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();

    if cli.verbose {
        eprintln!("✈️  Route-rank v{} starting...", env!("ROUTE_RANK_VERSION"));
    }

    let data_file = cli.data.unwrap_or_default();

    if cli.dry_run {
        let question = Query::from_id(cli.question)
            .map(|q| q.to_string())
            .unwrap_or_else(|| format!("unknown question {}", cli.question));
        eprintln!(
            "🔍 [DRY RUN] Would answer {question} over {} with N={} into {OUTPUT_FILE}",
            data_file.display(),
            cli.n
        );
        return Ok(());
    }

    let progress_manager = cli
        .progress
        .then(|| cli::ProgressManager::new(0, &format!("📂 Reading {}", data_file.display())));

    let options = AnalysisOptions {
        data_file,
        query_id: cli.question,
        limit: cli.n,
        progress: progress_manager.as_ref().map(|manager| manager.callback()),
        ..Default::default()
    };

    let report = route_rank::run(&options)
        .with_context(|| format!("question {} failed", cli.question))?;

    if let Some(manager) = &progress_manager {
        if !manager.pb.is_finished() {
            manager.pb.finish_with_message("✅ Routes loaded");
        }
    }

    if cli.verbose {
        eprintln!("📁 Wrote {} rows to {}", report.rows.len(), options.output.display());
    }

    Ok(())
}
