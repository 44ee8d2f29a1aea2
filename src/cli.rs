//! Command-line interface definitions for job_scout.
//!
//! Each flag mirrors one field of the inbound search form. A few settings
//! can also come from environment variables.

use crate::models::SearchForm;
use clap::Parser;

/// Command-line arguments for a single search.
///
/// # Examples
///
/// ```sh
/// # Rust jobs in Berlin from Indeed and LinkedIn
/// job_scout -r "rust developer" -p Berlin --src-indeed --src-linkedin
///
/// # Remote python jobs, titles must mention every word, saved as JSON
/// job_scout -r python --src-remoteok --filter-exact -j ./reports
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Role or keywords to search for
    #[arg(short, long, default_value = "")]
    pub role: String,

    /// City, region or country
    #[arg(short, long, default_value = "")]
    pub place: String,

    /// Maximum postings per source (invalid values fall back to the default)
    #[arg(short = 'n', long)]
    pub max_results: Option<String>,

    /// Keep only postings whose title or company contain every role word
    #[arg(long)]
    pub filter_exact: bool,

    /// Include regular jobs
    #[arg(long)]
    pub type_job: bool,

    /// Include internships
    #[arg(long)]
    pub type_intern: bool,

    /// Search Indeed
    #[arg(long)]
    pub src_indeed: bool,

    /// Search LinkedIn
    #[arg(long)]
    pub src_linkedin: bool,

    /// Search RemoteOK
    #[arg(long)]
    pub src_remoteok: bool,

    /// Optional path to a YAML settings file
    #[arg(short, long, env = "JOB_SCOUT_CONFIG")]
    pub config: Option<String>,

    /// Write the report as JSON under this directory instead of printing it
    #[arg(short, long)]
    pub json_output_dir: Option<String>,

    /// Per-source fetch timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent to job boards
    #[arg(long, env = "JOB_SCOUT_USER_AGENT")]
    pub user_agent: Option<String>,
}

impl Cli {
    /// The search form these arguments describe.
    pub fn to_form(&self) -> SearchForm {
        SearchForm {
            role: self.role.clone(),
            place: self.place.clone(),
            max_results: self.max_results.clone(),
            filter_exact: self.filter_exact,
            type_job: self.type_job,
            type_intern: self.type_intern,
            src_indeed: self.src_indeed,
            src_linkedin: self.src_linkedin,
            src_remoteok: self.src_remoteok,
        }
    }
}
