//! Utility functions for text normalization, string manipulation, and file system checks.
//!
//! This module provides helper functions used throughout the application:
//! - Whitespace normalization for scraped text
//! - String truncation and slugification for logging and file names
//! - File system validation for output directories

use itertools::Itertools;
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Collapse every run of whitespace to a single space and trim both ends.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(clean_text("  Senior \n\t Engineer "), "Senior Engineer");
/// ```
pub fn clean_text(s: &str) -> String {
    s.split_whitespace().join(" ")
}

/// Join trimmed, non-empty text fragments with `sep`, then clean the result.
///
/// Markup often splits one visual label across several text nodes
/// (`<h2><span>Rust</span> Engineer</h2>`); this mirrors how a browser
/// would read them out.
pub fn join_fragments<'a, I>(fragments: I, sep: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = fragments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .join(sep);
    clean_text(&joined)
}

/// Truncate a string for logging purposes.
///
/// Long strings are truncated to at most `max` bytes (backing off to a char
/// boundary) with an ellipsis and byte count indicator appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log("a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Convert free text to a file-name friendly slug.
///
/// Lowercases the text, drops anything that is not alphanumeric, a space or
/// a hyphen, and turns spaces into hyphens. An empty result becomes `"any"`
/// so report file names never start with a separator.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(slugify("Senior Rust Dev"), "senior-rust-dev");
/// assert_eq!(slugify("C++"), "c");
/// ```
pub fn slugify(text: &str) -> String {
    let slug = clean_text(text)
        .to_lowercase()
        .replace(|c: char| !c.is_alphanumeric() && c != ' ' && c != '-', "")
        .replace(' ', "-");
    if slug.is_empty() { "any".to_string() } else { slug }
}

/// Ensure a directory exists and is writable.
///
/// This function creates the directory if it doesn't exist, then performs
/// a write test by creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The directory is not writable (permission denied, read-only filesystem, etc.)
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
