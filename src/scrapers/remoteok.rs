//! RemoteOK scraper.
//!
//! RemoteOK lists only remote positions, so the location is fixed and the
//! place part of a query is never sent.
//!
//! # URL Pattern
//!
//! `https://remoteok.com/remote-{role}-jobs`, or `https://remoteok.com/remote-jobs`
//! when no role is given.

use super::JobBoard;
use super::extract::{CompiledTable, LocationRule, SelectorTable};
use crate::models::{JobPosting, Source};
use once_cell::sync::Lazy;
use urlencoding::encode;

/// Location reported for every RemoteOK posting.
pub const REMOTE_LOCATION: &str = "Remote / WFH";

static TABLE: SelectorTable = SelectorTable {
    source: Source::RemoteOK,
    base_origin: "https://remoteok.com",
    cards: &["tr.job", ".job", "article"],
    title: &["h2", "a", ".company_and_position h2"],
    company: &[".company", ".companyLink", ".company h3"],
    location: LocationRule::Fixed(REMOTE_LOCATION),
    link: &["a[href]"],
};

static COMPILED: Lazy<CompiledTable> = Lazy::new(|| CompiledTable::compile(&TABLE));

/// The RemoteOK board.
#[derive(Debug)]
pub struct RemoteOk;

impl JobBoard for RemoteOk {
    fn source(&self) -> Source {
        Source::RemoteOK
    }

    fn search_url(&self, role: &str, _place: &str) -> String {
        if role.is_empty() {
            "https://remoteok.com/remote-jobs".to_string()
        } else {
            format!("https://remoteok.com/remote-{}-jobs", encode(role))
        }
    }

    fn extract(&self, document: &str, limit: usize) -> Vec<JobPosting> {
        COMPILED.extract(document, limit)
    }
}
