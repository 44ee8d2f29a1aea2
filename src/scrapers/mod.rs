//! Job board scrapers.
//!
//! Each board is a [`JobBoard`]: it knows how to build its search URL and
//! carries a selector table that the shared engine in [`extract`] runs over a
//! fetched document. Boards hold no state and never fail; a board whose
//! markup changed just stops producing postings.
//!
//! # Supported Sources
//!
//! | Source | Module | Query shape | Notes |
//! |--------|--------|-------------|-------|
//! | Indeed | [`indeed`] | `?q=&l=` | Several historical card layouts |
//! | LinkedIn | [`linkedin`] | `?keywords=&location=` | Often serves an auth wall |
//! | RemoteOK | [`remoteok`] | `/remote-{role}-jobs` | Place ignored, fixed remote location |
//!
//! # Adding a board
//!
//! Add a [`Source`] variant, a module with a `SelectorTable` and a
//! `JobBoard` impl, and a match arm in [`board_for`].

pub mod extract;
pub mod indeed;
pub mod linkedin;
pub mod remoteok;

use crate::models::{JobPosting, Source};

/// One external job board.
pub trait JobBoard: Send + Sync {
    /// Which [`Source`] this board's postings are tagged with.
    fn source(&self) -> Source;

    /// Build the search URL for `role` in `place`.
    fn search_url(&self, role: &str, place: &str) -> String;

    /// Extract at most `limit` postings from a fetched document.
    ///
    /// Must never panic: anything unrecognizable yields fewer postings.
    fn extract(&self, document: &str, limit: usize) -> Vec<JobPosting>;
}

/// Look up the board implementation for a source.
pub fn board_for(source: Source) -> &'static dyn JobBoard {
    match source {
        Source::Indeed => &indeed::Indeed,
        Source::LinkedIn => &linkedin::LinkedIn,
        Source::RemoteOK => &remoteok::RemoteOk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_for_matches_source() {
        for source in Source::ALL {
            assert_eq!(board_for(source).source(), source);
        }
    }

    #[test]
    fn test_every_board_tolerates_garbage() {
        let garbage = [
            "",
            "<",
            "{\"json\": true}",
            "<html><head><title>Just a moment...</title></head></html>",
            "\u{0}\u{1}binary\u{ff}",
        ];
        for source in Source::ALL {
            for doc in garbage {
                assert!(board_for(source).extract(doc, 25).is_empty(), "{source} on {doc:?}");
            }
        }
    }
}
