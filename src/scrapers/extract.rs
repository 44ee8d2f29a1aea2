//! Table-driven posting extraction.
//!
//! Every job board is described by a [`SelectorTable`]: ordered fallback
//! chains of CSS selectors for the listing cards and for each field inside a
//! card, plus the origin relative links resolve against. The chains are plain
//! data, so markup drift on one board is fixed by editing that board's table.
//!
//! Extraction never fails. A chain that finds nothing yields the
//! [`PLACEHOLDER`] (or an empty url), and a document with no recognizable
//! cards yields no postings.

use crate::models::{JobPosting, JobType, PLACEHOLDER, Source};
use crate::utils::join_fragments;
use chrono::Utc;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};
use url::Url;

/// Where a board's location value comes from.
#[derive(Debug, Clone, Copy)]
pub enum LocationRule {
    /// Look it up in the card like any other field.
    Chain(&'static [&'static str]),
    /// Every posting from this board has the same location.
    Fixed(&'static str),
}

/// Declarative description of one board's markup.
#[derive(Debug)]
pub struct SelectorTable {
    pub source: Source,
    pub base_origin: &'static str,
    /// Card selectors in priority order; the first one that matches anything wins.
    pub cards: &'static [&'static str],
    pub title: &'static [&'static str],
    pub company: &'static [&'static str],
    pub location: LocationRule,
    pub link: &'static [&'static str],
}

#[derive(Debug)]
enum CompiledLocation {
    Chain(Vec<Selector>),
    Fixed(&'static str),
}

/// A [`SelectorTable`] with its selectors parsed, ready to run.
#[derive(Debug)]
pub struct CompiledTable {
    source: Source,
    base: Option<Url>,
    cards: Vec<Selector>,
    title: Vec<Selector>,
    company: Vec<Selector>,
    location: CompiledLocation,
    link: Vec<Selector>,
}

impl CompiledTable {
    /// Parse every selector in `table`.
    ///
    /// Selectors that do not parse are dropped from their chain with a warning,
    /// so a typo in one table degrades that chain instead of panicking.
    pub fn compile(table: &SelectorTable) -> Self {
        let base = match Url::parse(table.base_origin) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(source = %table.source, origin = table.base_origin, error = %e, "Invalid base origin");
                None
            }
        };

        let location = match table.location {
            LocationRule::Chain(chain) => CompiledLocation::Chain(compile_chain(table.source, chain)),
            LocationRule::Fixed(value) => CompiledLocation::Fixed(value),
        };

        Self {
            source: table.source,
            base,
            cards: compile_chain(table.source, table.cards),
            title: compile_chain(table.source, table.title),
            company: compile_chain(table.source, table.company),
            location,
            link: compile_chain(table.source, table.link),
        }
    }

    /// Extract at most `limit` postings from `document`.
    pub fn extract(&self, document: &str, limit: usize) -> Vec<JobPosting> {
        let html = Html::parse_document(document);

        let Some((strategy, cards)) = self
            .cards
            .iter()
            .enumerate()
            .map(|(i, selector)| (i, html.select(selector).take(limit).collect::<Vec<_>>()))
            .find(|(_, cards)| !cards.is_empty())
        else {
            debug!(source = %self.source, "No card selector matched");
            return Vec::new();
        };
        debug!(source = %self.source, strategy, count = cards.len(), "Matched listing cards");

        let scraped_at = Utc::now();
        cards
            .into_iter()
            .map(|card| JobPosting {
                source: self.source,
                title: text_or_placeholder(first_match(card, &self.title), " "),
                company: text_or_placeholder(first_match(card, &self.company), ""),
                location: match &self.location {
                    CompiledLocation::Chain(chain) => text_or_placeholder(first_match(card, chain), ""),
                    CompiledLocation::Fixed(value) => value.to_string(),
                },
                job_type: JobType::Job,
                url: first_match(card, &self.link)
                    .and_then(|a| a.value().attr("href"))
                    .map(|href| self.resolve_link(href))
                    .unwrap_or_default(),
                scraped_at,
            })
            .collect()
    }

    /// Resolve an href found in a card.
    ///
    /// Absolute `http(s)` links are kept verbatim, root-relative links are
    /// joined to the board's origin, anything else is dropped.
    fn resolve_link(&self, href: &str) -> String {
        let href = href.trim();
        if href.starts_with("http") {
            return href.to_string();
        }
        if !href.starts_with('/') {
            return String::new();
        }
        self.base
            .as_ref()
            .and_then(|base| base.join(href).ok())
            .map(|url| url.to_string())
            .unwrap_or_default()
    }
}

fn compile_chain(source: Source, chain: &[&str]) -> Vec<Selector> {
    chain
        .iter()
        .filter_map(|css| match Selector::parse(css) {
            Ok(selector) => Some(selector),
            Err(e) => {
                warn!(%source, selector = css, error = %e, "Dropping unparsable selector");
                None
            }
        })
        .collect()
}

fn first_match<'a>(card: ElementRef<'a>, chain: &[Selector]) -> Option<ElementRef<'a>> {
    chain.iter().find_map(|selector| card.select(selector).next())
}

fn text_or_placeholder(element: Option<ElementRef<'_>>, sep: &str) -> String {
    element
        .map(|el| join_fragments(el.text(), sep))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}
