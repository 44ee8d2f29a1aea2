//! JSON file output.
//!
//! Reports are grouped in one directory per UTC day and named after the
//! searched role and the time they were generated, so repeated searches
//! never overwrite each other within a second's resolution.

use super::ReportSink;
use crate::models::SearchReport;
use crate::utils::{ensure_writable_dir, slugify};
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Writes each report to `{dir}/{date}/{role-slug}-{HHMMSS}.json`.
#[derive(Debug, Clone)]
pub struct JsonDirSink {
    dir: String,
}

impl JsonDirSink {
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory and file name a report will be written to.
    pub fn report_path(&self, report: &SearchReport) -> (String, String) {
        let day_dir = format!(
            "{}/{}",
            self.dir.trim_end_matches('/'),
            report.generated_at.format("%Y-%m-%d")
        );
        let file = format!(
            "{}/{}-{}.json",
            day_dir,
            slugify(&report.query.role),
            report.generated_at.format("%H%M%S")
        );
        (day_dir, file)
    }
}

impl ReportSink for JsonDirSink {
    #[instrument(level = "info", skip_all, fields(dir = %self.dir))]
    async fn deliver(&self, report: &SearchReport) -> Result<(), Box<dyn Error>> {
        let json = serde_json::to_string(report)?;
        let (day_dir, path) = self.report_path(report);

        if let Err(e) = ensure_writable_dir(&day_dir).await {
            error!(%day_dir, error = %e, "Report directory is not writable");
            return Err(e);
        }

        info!(%path, "Writing JSON report");
        fs::write(&path, json).await?;
        info!(%path, postings = report.postings.len(), "Wrote JSON report");
        Ok(())
    }
}
