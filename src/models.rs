//! Data models shared by every stage of the search pipeline.
//!
//! This module defines the core data structures used throughout the application:
//! - [`JobPosting`]: A single normalized listing as produced by an extractor
//! - [`SearchForm`]: The raw, untrusted inbound search request
//! - [`SearchQuery`]: The normalized, read-only query built from a form
//! - [`SourceOutcome`]: What one source adapter produced (records or a diagnostic)
//! - [`SearchReport`]: Everything handed to an output sink at the end of a request

use crate::stats::{ChartData, Statistics};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder used for any text field an extractor could not find.
pub const PLACEHOLDER: &str = "N/A";

/// Result cap used when the request does not carry a usable value.
pub const DEFAULT_MAX_RESULTS: usize = 25;

/// The closed set of job boards the application knows how to query.
///
/// The declaration order is the canonical merge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Source {
    Indeed,
    LinkedIn,
    RemoteOK,
}

impl Source {
    /// Every source, in canonical order.
    pub const ALL: [Source; 3] = [Source::Indeed, Source::LinkedIn, Source::RemoteOK];

    pub fn name(self) -> &'static str {
        match self {
            Source::Indeed => "Indeed",
            Source::LinkedIn => "LinkedIn",
            Source::RemoteOK => "RemoteOK",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of opening a posting advertises.
///
/// No extractor distinguishes internships yet, so everything scraped is a [`JobType::Job`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    Job,
    Internship,
}

impl JobType {
    pub fn label(self) -> &'static str {
        match self {
            JobType::Job => "Job",
            JobType::Internship => "Internship",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A normalized job posting.
///
/// Postings are immutable values: later pipeline stages build filtered or
/// derived views and never edit a posting in place. Every text field is
/// always populated, falling back to [`PLACEHOLDER`] when nothing could be
/// extracted; only `url` may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    /// The job board that produced this posting.
    pub source: Source,
    /// Position title, whitespace-collapsed.
    pub title: String,
    /// Hiring company, whitespace-collapsed.
    pub company: String,
    /// Free-text location as the board displays it.
    pub location: String,
    /// Kind of opening.
    pub job_type: JobType,
    /// Absolute link to the original posting, or empty.
    pub url: String,
    /// When the posting was extracted (UTC).
    pub scraped_at: DateTime<Utc>,
}

/// The raw search request as it arrives from the outside world.
///
/// Nothing here is trusted: `max_results` is free text and the type flags may
/// both be off. Use [`SearchQuery::from_form`] to normalize it.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pub role: String,
    pub place: String,
    pub max_results: Option<String>,
    pub filter_exact: bool,
    pub type_job: bool,
    pub type_intern: bool,
    pub src_indeed: bool,
    pub src_linkedin: bool,
    pub src_remoteok: bool,
}

/// A normalized, read-only search query.
///
/// Built once per request and discarded once the report has been produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    pub role: String,
    pub place: String,
    pub max_results: usize,
    pub filter_exact: bool,
    pub want_job: bool,
    pub want_intern: bool,
    /// Enabled sources, always in canonical order.
    pub sources: Vec<Source>,
}

impl SearchQuery {
    /// Normalize an inbound form.
    ///
    /// - `role` and `place` are trimmed
    /// - a missing, non-numeric or non-positive `max_results` becomes `default_max`
    /// - when neither type flag is set, both are treated as set
    /// - enabled sources are listed in canonical order regardless of form order
    pub fn from_form(form: &SearchForm, default_max: usize) -> Self {
        let max_results = form
            .max_results
            .as_deref()
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(default_max);

        let (want_job, want_intern) = if !form.type_job && !form.type_intern {
            (true, true)
        } else {
            (form.type_job, form.type_intern)
        };

        let sources = Source::ALL
            .into_iter()
            .filter(|source| match source {
                Source::Indeed => form.src_indeed,
                Source::LinkedIn => form.src_linkedin,
                Source::RemoteOK => form.src_remoteok,
            })
            .collect();

        Self {
            role: form.role.trim().to_string(),
            place: form.place.trim().to_string(),
            max_results,
            filter_exact: form.filter_exact,
            want_job,
            want_intern,
            sources,
        }
    }
}

/// What a single source adapter produced.
///
/// A failed source carries a `diagnostic` and no postings, so callers can tell
/// "the board was unreachable" apart from "the board had nothing" without
/// reading logs, while still treating both as an empty contribution.
#[derive(Debug, Clone)]
pub struct SourceOutcome {
    pub source: Source,
    pub postings: Vec<JobPosting>,
    pub diagnostic: Option<String>,
}

impl SourceOutcome {
    pub fn succeeded(source: Source, postings: Vec<JobPosting>) -> Self {
        Self {
            source,
            postings,
            diagnostic: None,
        }
    }

    pub fn failed(source: Source, diagnostic: impl Into<String>) -> Self {
        Self {
            source,
            postings: Vec::new(),
            diagnostic: Some(diagnostic.into()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.diagnostic.is_some()
    }

    pub fn summary(&self) -> SourceSummary {
        SourceSummary {
            source: self.source,
            count: self.postings.len(),
            diagnostic: self.diagnostic.clone(),
        }
    }
}

/// Per-source line in the final report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSummary {
    pub source: Source,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

/// The complete result of one search request.
///
/// This is the hand-off to the rendering layer: it echoes the query, carries
/// the filtered postings and the chart-ready statistics.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub generated_at: DateTime<Utc>,
    pub query: SearchQuery,
    pub sources: Vec<SourceSummary>,
    pub postings: Vec<JobPosting>,
    pub statistics: Statistics,
    pub charts: Vec<ChartData>,
}
