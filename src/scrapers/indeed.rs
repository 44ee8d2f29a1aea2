//! Indeed job search scraper.
//!
//! Indeed serves its result list as server-rendered cards. The card markup
//! has been reshuffled several times (`.result`, `.job_seen_beacon`,
//! `.jobsearch-SerpJobCard`), so the first card selector groups all known
//! variants and the tracking-redirect anchors are the last resort.
//!
//! # URL Pattern
//!
//! `https://www.indeed.com/jobs?q={role}&l={place}`

use super::JobBoard;
use super::extract::{CompiledTable, LocationRule, SelectorTable};
use crate::models::{JobPosting, Source};
use once_cell::sync::Lazy;
use urlencoding::encode;

static TABLE: SelectorTable = SelectorTable {
    source: Source::Indeed,
    base_origin: "https://www.indeed.com",
    cards: &[
        ".result, .job_seen_beacon, .jobsearch-SerpJobCard",
        r#"a[href*="/rc/clk"]"#,
    ],
    title: &["h2.jobTitle", "a.jobtitle", "a"],
    company: &[".companyName", ".company"],
    location: LocationRule::Chain(&[".companyLocation", ".location"]),
    link: &["a[href]"],
};

static COMPILED: Lazy<CompiledTable> = Lazy::new(|| CompiledTable::compile(&TABLE));

/// The Indeed board.
#[derive(Debug)]
pub struct Indeed;

impl JobBoard for Indeed {
    fn source(&self) -> Source {
        Source::Indeed
    }

    fn search_url(&self, role: &str, place: &str) -> String {
        format!(
            "https://www.indeed.com/jobs?q={}&l={}",
            encode(role),
            encode(place)
        )
    }

    fn extract(&self, document: &str, limit: usize) -> Vec<JobPosting> {
        COMPILED.extract(document, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PLACEHOLDER;

    const SERP: &str = r#"
        <html><body><div id="mosaic">
          <div class="job_seen_beacon">
            <h2 class="jobTitle"><a href="/rc/clk?jk=abc"><span>Senior</span> <span>Rust Developer</span></a></h2>
            <span class="companyName">Ferrous Systems</span>
            <div class="companyLocation">Berlin,
                 Germany</div>
          </div>
          <div class="job_seen_beacon">
            <h2 class="jobTitle"><a href="https://www.indeed.com/viewjob?jk=def">Backend Engineer</a></h2>
            <span class="company">Acme</span>
          </div>
          <div class="jobsearch-SerpJobCard">
            <a class="jobtitle">Data Engineer</a>
          </div>
        </div></body></html>"#;

    #[test]
    fn test_search_url_encodes_role_and_place() {
        assert_eq!(
            Indeed.search_url("rust developer", "New York, NY"),
            "https://www.indeed.com/jobs?q=rust%20developer&l=New%20York%2C%20NY"
        );
        assert_eq!(Indeed.search_url("", ""), "https://www.indeed.com/jobs?q=&l=");
    }

    #[test]
    fn test_extract_serp_cards() {
        let postings = Indeed.extract(SERP, 25);
        assert_eq!(postings.len(), 3);

        assert_eq!(postings[0].title, "Senior Rust Developer");
        assert_eq!(postings[0].company, "Ferrous Systems");
        assert_eq!(postings[0].location, "Berlin, Germany");
        assert_eq!(postings[0].url, "https://www.indeed.com/rc/clk?jk=abc");

        assert_eq!(postings[1].company, "Acme");
        assert_eq!(postings[1].location, PLACEHOLDER);
        assert_eq!(postings[1].url, "https://www.indeed.com/viewjob?jk=def");

        assert_eq!(postings[2].title, "Data Engineer");
        assert_eq!(postings[2].url, "");
        assert!(postings.iter().all(|p| p.source == Source::Indeed));
    }

    #[test]
    fn test_extract_respects_limit() {
        assert_eq!(Indeed.extract(SERP, 2).len(), 2);
    }

    #[test]
    fn test_extract_tracking_anchor_fallback() {
        // The anchors themselves are the cards, so nothing inside them matches.
        let html = r#"<p><a href="/rc/clk?jk=1">One</a><a href="/rc/clk?jk=2">Two</a></p>"#;
        let postings = Indeed.extract(html, 25);
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].title, PLACEHOLDER);
    }

    #[test]
    fn test_extract_blocked_page() {
        let html = "<html><body><h1>Additional Verification Required</h1></body></html>";
        assert!(Indeed.extract(html, 25).is_empty());
    }
}
