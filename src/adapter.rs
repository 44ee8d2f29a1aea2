//! Source adapter: query URL, bounded fetch, extraction.
//!
//! An adapter run never returns an error. Transport problems become a
//! [`SourceOutcome`] with a diagnostic and no postings, so an unreachable
//! board and a board with no matches look the same to the merger.

use crate::config::Settings;
use crate::fetch::{FetchError, Fetcher};
use crate::models::{SearchQuery, SourceOutcome};
use crate::scrapers::JobBoard;
use crate::utils::truncate_for_log;
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};

/// Run one board for `query`.
///
/// The fetch is bounded by [`Settings::fetch_timeout`] twice over: the
/// fetcher is told the budget, and the call itself is wrapped in a timer so a
/// fetcher that ignores it still cannot stall the request.
#[instrument(level = "info", skip_all, fields(source = %board.source()))]
pub async fn run_board<F: Fetcher>(
    board: &dyn JobBoard,
    fetcher: &F,
    query: &SearchQuery,
    settings: &Settings,
) -> SourceOutcome {
    let source = board.source();
    let url = board.search_url(&query.role, &query.place);
    let budget = settings.fetch_timeout();
    let headers = [("User-Agent", settings.user_agent.as_str())];

    let t0 = Instant::now();
    let fetched = match timeout(budget, fetcher.fetch(&url, &headers, budget)).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout(budget)),
    };
    let body = match fetched {
        Ok(body) => body,
        Err(e) => {
            warn!(
                %url,
                elapsed_ms = t0.elapsed().as_millis() as u64,
                error = %e,
                "Fetch failed; source contributes nothing"
            );
            return SourceOutcome::failed(source, e.to_string());
        }
    };

    let postings = board.extract(&body, query.max_results);
    if postings.is_empty() {
        debug!(%url, preview = %truncate_for_log(&body, 300), "No postings found in document");
    }
    info!(
        %url,
        count = postings.len(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Extracted postings"
    );
    SourceOutcome::succeeded(source, postings)
}
