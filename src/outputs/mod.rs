//! Output sinks for finished search reports.
//!
//! The pipeline only produces a [`SearchReport`]; where it goes is decided by
//! the caller through a [`ReportSink`].
//!
//! # Submodules
//!
//! - [`json`]: Writes each report to a dated JSON file
//!
//! # Output Structure
//!
//! ```text
//! json_output_dir/
//! └── 2025-05-06/
//!     ├── rust-developer-091502.json
//!     └── any-101733.json
//! ```

pub mod json;

use crate::models::SearchReport;
use std::error::Error;
use tracing::{info, instrument};

/// Somewhere a finished report can be delivered.
pub trait ReportSink {
    async fn deliver(&self, report: &SearchReport) -> Result<(), Box<dyn Error>>;
}

/// Prints the report as pretty JSON on standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    #[instrument(level = "info", skip_all)]
    async fn deliver(&self, report: &SearchReport) -> Result<(), Box<dyn Error>> {
        let json = serde_json::to_string_pretty(report)?;
        println!("{json}");
        info!(postings = report.postings.len(), "Wrote report to stdout");
        Ok(())
    }
}
