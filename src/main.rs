//! # job_scout
//!
//! Searches several job boards at once, normalizes what they list into a
//! common posting record, filters the result and computes chart-ready
//! statistics.
//!
//! ## Features
//!
//! - Scrapes Indeed, LinkedIn and RemoteOK search pages concurrently
//! - Tolerates blocked, slow or restructured boards: a failing board
//!   contributes nothing instead of failing the search
//! - Optional relevance filter (every role word must appear) and job type filter
//! - Counts by location, by type, and a 14-day trend, ready for charting
//! - Prints the report as JSON or writes it to a dated directory
//!
//! ## Usage
//!
//! ```sh
//! job_scout -r "backend engineer" -p Berlin --src-indeed --src-linkedin --src-remoteok
//! ```
//!
//! ## Architecture
//!
//! 1. **Gathering**: Each enabled board builds its URL, fetches with a timeout, and extracts postings
//! 2. **Merging**: Outcomes are concatenated in canonical source order
//! 3. **Filtering**: Relevance and type filters narrow the list
//! 4. **Statistics**: Grouped counts and the daily trend are computed
//! 5. **Output**: The report goes to stdout or a JSON file

use chrono::Utc;
use clap::Parser;
use std::error::Error;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod adapter;
mod aggregate;
mod cli;
mod config;
mod fetch;
mod filters;
mod models;
mod outputs;
mod scrapers;
mod search;
mod stats;
mod utils;

use cli::Cli;
use config::Settings;
use fetch::HttpFetcher;
use models::SearchQuery;
use outputs::json::JsonDirSink;
use outputs::{ReportSink, StdoutSink};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    // Logs go to stderr so a report printed on stdout stays machine-readable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("job_scout starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let settings = Settings::load(args.config.as_deref())
        .await?
        .with_overrides(args.timeout_secs, args.user_agent.clone());

    let query = SearchQuery::from_form(&args.to_form(), settings.default_max_results);
    info!(
        role = %query.role,
        place = %query.place,
        max_results = query.max_results,
        sources = ?query.sources,
        "Search query"
    );

    let fetcher = HttpFetcher::new();
    let report = search::run_search(&fetcher, query, &settings, Utc::now()).await;

    match &args.json_output_dir {
        Some(dir) => JsonDirSink::new(dir.clone()).deliver(&report).await?,
        None => StdoutSink.deliver(&report).await?,
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        postings = report.postings.len(),
        "Execution complete"
    );

    Ok(())
}
