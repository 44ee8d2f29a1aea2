//! One search request, start to finish.
//!
//! gather → merge → filter → statistics. The result is a [`SearchReport`]
//! that an output sink can deliver; nothing is written here.

use crate::aggregate::{gather_with, merge};
use crate::config::Settings;
use crate::fetch::Fetcher;
use crate::filters;
use crate::models::{SearchQuery, SearchReport, Source, SourceOutcome};
use crate::scrapers::{JobBoard, board_for};
use crate::stats::Statistics;
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

/// Run `query` against the real boards.
pub async fn run_search<F: Fetcher>(
    fetcher: &F,
    query: SearchQuery,
    settings: &Settings,
    now: DateTime<Utc>,
) -> SearchReport {
    run_search_with(board_for, fetcher, query, settings, now).await
}

/// Run `query` with an explicit source-to-board lookup.
///
/// `now` anchors the trend window and the report timestamp.
#[instrument(level = "info", skip_all, fields(role = %query.role, place = %query.place))]
pub async fn run_search_with<F: Fetcher>(
    boards: fn(Source) -> &'static dyn JobBoard,
    fetcher: &F,
    query: SearchQuery,
    settings: &Settings,
    now: DateTime<Utc>,
) -> SearchReport {
    let outcomes = gather_with(boards, fetcher, &query, settings).await;
    build_report(query, &outcomes, now)
}

/// Filter merged outcomes and compute statistics.
pub fn build_report(query: SearchQuery, outcomes: &[SourceOutcome], now: DateTime<Utc>) -> SearchReport {
    let merged = merge(outcomes);
    let postings = filters::apply(&merged, &query);
    let statistics = Statistics::build(&postings, now.date_naive());
    let charts = statistics.charts();

    info!(
        merged = merged.len(),
        kept = postings.len(),
        locations = statistics.by_location.len(),
        "Built search report"
    );

    SearchReport {
        generated_at: now,
        sources: outcomes.iter().map(SourceOutcome::summary).collect(),
        query,
        postings,
        statistics,
        charts,
    }
}
