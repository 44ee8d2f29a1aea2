//! Fetch-by-URL transport.
//!
//! Source adapters only ever see the [`Fetcher`] trait. The production
//! implementation, [`HttpFetcher`], wraps a shared `reqwest` client; tests
//! swap in stubs that serve canned markup.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Why a fetch produced no document.
///
/// Every variant is a soft failure: adapters turn it into an empty
/// contribution plus a diagnostic.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(Duration::ZERO)
        } else if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}

/// Something that can turn a URL into a document body.
pub trait Fetcher {
    /// Fetch `url` with the given request headers, giving up after `timeout`.
    async fn fetch(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<String, FetchError>;
}

/// [`Fetcher`] backed by a pooled `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fetcher for HttpFetcher {
    #[instrument(level = "debug", skip_all, fields(%url))]
    async fn fetch(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<String, FetchError> {
        let t0 = Instant::now();
        let response = self
            .client
            .get(url)
            .headers(header_map(headers))
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| with_timeout(e.into(), timeout))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Non-success response");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| with_timeout(e.into(), timeout))?;
        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched document"
        );
        Ok(body)
    }
}

fn with_timeout(e: FetchError, timeout: Duration) -> FetchError {
    match e {
        FetchError::Timeout(_) => FetchError::Timeout(timeout),
        other => other,
    }
}

fn header_map(headers: &[(&str, &str)]) -> HeaderMap {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                map.insert(name, value);
            }
            _ => warn!(header = %name, "Skipping invalid request header"),
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_map_skips_invalid_headers() {
        let map = header_map(&[
            ("User-Agent", "Mozilla/5.0"),
            ("Bad Header", "x"),
            ("X-Line", "line\nbreak"),
        ]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("user-agent").unwrap(), "Mozilla/5.0");
    }

    #[test]
    fn test_fetch_error_messages() {
        assert_eq!(FetchError::Status(503).to_string(), "HTTP status 503");
        assert_eq!(
            FetchError::Timeout(Duration::from_secs(10)).to_string(),
            "timed out after 10s"
        );
    }

    #[test]
    fn test_with_timeout_fills_in_duration() {
        let e = with_timeout(FetchError::Timeout(Duration::ZERO), Duration::from_secs(3));
        assert!(matches!(e, FetchError::Timeout(d) if d == Duration::from_secs(3)));

        let e = with_timeout(FetchError::Status(404), Duration::from_secs(3));
        assert!(matches!(e, FetchError::Status(404)));
    }
}
