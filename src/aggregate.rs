//! Run the enabled boards and merge what they return.
//!
//! Boards are driven concurrently, one in-flight fetch per enabled source,
//! and their outcomes are collected in canonical source order no matter
//! which finishes first.

use crate::adapter::run_board;
use crate::config::Settings;
use crate::fetch::Fetcher;
use crate::models::{JobPosting, SearchQuery, Source, SourceOutcome};
use crate::scrapers::JobBoard;
use futures::stream::{self, StreamExt};
use tracing::{info, instrument};

/// Run every enabled board for `query` and wait for all of them.
///
/// `boards` maps each source to its implementation (normally
/// [`crate::scrapers::board_for`]). The result holds one [`SourceOutcome`]
/// per enabled source, in canonical order. No fetch happens when no source
/// is enabled.
#[instrument(level = "info", skip_all, fields(role = %query.role, place = %query.place, sources = query.sources.len()))]
pub async fn gather_with<F: Fetcher>(
    boards: fn(Source) -> &'static dyn JobBoard,
    fetcher: &F,
    query: &SearchQuery,
    settings: &Settings,
) -> Vec<SourceOutcome> {
    let workers = query.sources.len().max(1);

    let outcomes: Vec<SourceOutcome> = stream::iter(query.sources.iter().copied())
        .map(|source| run_board(boards(source), fetcher, query, settings))
        .buffered(workers)
        .collect()
        .await;

    let failed = outcomes.iter().filter(|o| o.is_failure()).count();
    info!(
        sources = outcomes.len(),
        failed,
        postings = outcomes.iter().map(|o| o.postings.len()).sum::<usize>(),
        "Gathered source outcomes"
    );
    outcomes
}

/// Concatenate postings from `outcomes` in the order given.
///
/// Postings are not deduplicated: two boards listing the same opening
/// produce two postings.
pub fn merge(outcomes: &[SourceOutcome]) -> Vec<JobPosting> {
    outcomes
        .iter()
        .flat_map(|outcome| outcome.postings.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::tests::{Canned, StubFetcher, query, remoteok_rows};
    use crate::scrapers::board_for;

    async fn gather<F: Fetcher>(fetcher: &F, query: &SearchQuery, settings: &Settings) -> Vec<SourceOutcome> {
        gather_with(board_for, fetcher, query, settings).await
    }

    fn indeed_page(titles: &[&str]) -> String {
        titles
            .iter()
            .map(|t| format!(r#"<div class="job_seen_beacon"><h2 class="jobTitle">{t}</h2></div>"#))
            .collect()
    }

    fn linkedin_page(titles: &[&str]) -> String {
        let items = titles
            .iter()
            .map(|t| format!("<li><h3>{t}</h3></li>"))
            .collect::<String>();
        format!(r#"<ul class="jobs-search__results-list">{items}</ul>"#)
    }

    fn all_boards() -> StubFetcher {
        StubFetcher::default()
            .route("https://www.indeed.com/", Canned::Body(indeed_page(&["I1", "I2"])))
            .route("https://www.linkedin.com/", Canned::Body(linkedin_page(&["L1", "L2", "L3"])))
            .route("https://remoteok.com/", Canned::Body(remoteok_rows(&["R1"])))
    }

    #[tokio::test]
    async fn test_merge_keeps_canonical_order() {
        let fetcher = all_boards();
        let q = query("", 25, &[Source::RemoteOK, Source::LinkedIn, Source::Indeed]);
        let outcomes = gather(&fetcher, &q, &Settings::default()).await;

        let order: Vec<Source> = outcomes.iter().map(|o| o.source).collect();
        assert_eq!(order, vec![Source::Indeed, Source::LinkedIn, Source::RemoteOK]);

        let titles: Vec<String> = merge(&outcomes).into_iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["I1", "I2", "L1", "L2", "L3", "R1"]);
    }

    #[tokio::test]
    async fn test_only_enabled_sources_are_fetched() {
        let fetcher = all_boards();
        let q = query("rust", 25, &[Source::LinkedIn, Source::Indeed]);
        let outcomes = gather(&fetcher, &q, &Settings::default()).await;

        assert_eq!(outcomes.len(), 2);
        let urls = fetcher.requested_urls();
        assert_eq!(urls.len(), 2);
        assert!(urls.iter().all(|u| !u.contains("remoteok")));

        let merged = merge(&outcomes);
        assert_eq!(merged.first().map(|p| p.source), Some(Source::Indeed));
        assert_eq!(merged.last().map(|p| p.source), Some(Source::LinkedIn));
    }

    #[tokio::test]
    async fn test_failing_source_does_not_affect_others() {
        let fetcher = StubFetcher::default()
            .route("https://www.indeed.com/", Canned::Fail(403))
            .route("https://remoteok.com/", Canned::Body(remoteok_rows(&["R1", "R2"])));
        let q = query("", 25, &[Source::Indeed, Source::LinkedIn, Source::RemoteOK]);
        let outcomes = gather(&fetcher, &q, &Settings::default()).await;

        assert!(outcomes[0].is_failure());
        assert!(outcomes[1].is_failure());
        assert!(!outcomes[2].is_failure());
        assert_eq!(merge(&outcomes).len(), 2);
    }

    #[tokio::test]
    async fn test_no_sources_means_no_fetch() {
        let fetcher = all_boards();
        let outcomes = gather(&fetcher, &query("rust", 25, &[]), &Settings::default()).await;
        assert!(outcomes.is_empty());
        assert!(fetcher.requested_urls().is_empty());
        assert!(merge(&outcomes).is_empty());
    }

    #[tokio::test]
    async fn test_identical_postings_are_not_deduplicated() {
        let fetcher = StubFetcher::default()
            .route("https://www.indeed.com/", Canned::Body(indeed_page(&["Same Job", "Same Job"])));
        let outcomes = gather(&fetcher, &query("", 25, &[Source::Indeed]), &Settings::default()).await;
        assert_eq!(merge(&outcomes).len(), 2);
    }
}
