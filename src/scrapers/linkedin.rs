//! LinkedIn public job search scraper.
//!
//! LinkedIn frequently answers anonymous clients with a JavaScript shell or
//! an auth wall, in which case no cards are found and the board simply
//! contributes nothing.
//!
//! # URL Pattern
//!
//! `https://www.linkedin.com/jobs/search/?keywords={role}&location={place}`

use super::JobBoard;
use super::extract::{CompiledTable, LocationRule, SelectorTable};
use crate::models::{JobPosting, Source};
use once_cell::sync::Lazy;
use urlencoding::encode;

static TABLE: SelectorTable = SelectorTable {
    source: Source::LinkedIn,
    base_origin: "https://www.linkedin.com",
    cards: &[
        ".result-card",
        ".jobs-search__results-list li",
        r#"a[href*="/jobs/view/"]"#,
    ],
    title: &["h3", "h2", "a"],
    company: &[
        ".result-card__subtitle",
        ".base-search-card__subtitle",
        ".job-result-card__subtitle",
    ],
    location: LocationRule::Chain(&[
        ".job-result-card__location",
        ".result-card__meta",
        ".job-search-card__location",
    ]),
    link: &["a[href]"],
};

static COMPILED: Lazy<CompiledTable> = Lazy::new(|| CompiledTable::compile(&TABLE));

/// The LinkedIn board.
#[derive(Debug)]
pub struct LinkedIn;

impl JobBoard for LinkedIn {
    fn source(&self) -> Source {
        Source::LinkedIn
    }

    fn search_url(&self, role: &str, place: &str) -> String {
        format!(
            "https://www.linkedin.com/jobs/search/?keywords={}&location={}",
            encode(role),
            encode(place)
        )
    }

    fn extract(&self, document: &str, limit: usize) -> Vec<JobPosting> {
        COMPILED.extract(document, limit)
    }
}
