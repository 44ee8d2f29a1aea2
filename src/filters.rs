//! Narrow a merged posting list to what the user asked for.
//!
//! Both filters take a slice and return a new list; postings themselves are
//! never touched.

use crate::models::{JobPosting, JobType, SearchQuery};
use tracing::debug;

/// Tokens shorter than this are ignored by the relevance filter.
const MIN_TOKEN_LEN: usize = 3;

/// Apply every filter the query asks for, relevance first.
pub fn apply(postings: &[JobPosting], query: &SearchQuery) -> Vec<JobPosting> {
    let relevant = if query.filter_exact && !query.role.is_empty() {
        relevance(postings, &query.role)
    } else {
        postings.to_vec()
    };
    let kept = by_type(&relevant, query.want_job, query.want_intern);
    debug!(input = postings.len(), kept = kept.len(), "Applied filters");
    kept
}

/// Lower-cased role tokens of at least three characters.
pub fn role_tokens(role: &str) -> Vec<String> {
    role.split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .map(str::to_lowercase)
        .collect()
}

/// Keep postings whose title or company mention every qualifying role token.
///
/// A role made only of short words has no qualifying tokens and keeps
/// everything.
pub fn relevance(postings: &[JobPosting], role: &str) -> Vec<JobPosting> {
    let tokens = role_tokens(role);
    postings
        .iter()
        .filter(|posting| {
            let haystack = format!("{} {}", posting.title, posting.company).to_lowercase();
            tokens.iter().all(|token| haystack.contains(token.as_str()))
        })
        .cloned()
        .collect()
}

/// Keep postings of the requested kinds.
///
/// Asking for both kinds (or, after form normalization, neither) is no
/// restriction at all.
pub fn by_type(postings: &[JobPosting], want_job: bool, want_intern: bool) -> Vec<JobPosting> {
    if want_job && want_intern {
        return postings.to_vec();
    }
    postings
        .iter()
        .filter(|posting| match posting.job_type {
            JobType::Job => want_job,
            JobType::Internship => want_intern,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SearchForm, Source};
    use chrono::Utc;

    fn posting(title: &str, company: &str) -> JobPosting {
        JobPosting {
            source: Source::Indeed,
            title: title.to_string(),
            company: company.to_string(),
            location: "N/A".to_string(),
            job_type: JobType::Job,
            url: String::new(),
            scraped_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_tokens_drop_short_words() {
        assert_eq!(role_tokens("Sr. UI dev at ACME"), vec!["sr.", "dev", "acme"]);
        assert!(role_tokens("go ui qa").is_empty());
    }

    #[test]
    fn test_relevance_requires_every_token() {
        let postings = vec![posting("Backend Engineer", "Acme")];
        assert!(relevance(&postings, "senior backend").is_empty());
        assert_eq!(relevance(&postings, "backend").len(), 1);
    }

    #[test]
    fn test_relevance_token_length_boundary() {
        let postings = vec![posting("Backend Engineer", "Acme")];
        // "go" has two characters and is dropped; "api" has three and must match
        assert_eq!(relevance(&postings, "go backend").len(), 1);
        assert!(relevance(&postings, "api backend").is_empty());
    }

    #[test]
    fn test_relevance_matches_company_and_substrings() {
        let postings = vec![
            posting("Engineer", "Pythonista Labs"),
            posting("Rust Developer", "Ferris"),
        ];
        let kept = relevance(&postings, "PYTHON");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].company, "Pythonista Labs");
    }

    #[test]
    fn test_relevance_with_no_tokens_keeps_everything() {
        let postings = vec![posting("A", "B"), posting("C", "D")];
        assert_eq!(relevance(&postings, "a b").len(), 2);
    }

    #[test]
    fn test_internship_only_on_jobs_is_empty() {
        let postings = vec![posting("Dev", "Co"), posting("Ops", "Co")];
        assert!(by_type(&postings, false, true).is_empty());
        assert_eq!(by_type(&postings, true, false).len(), 2);
        assert_eq!(by_type(&postings, true, true).len(), 2);
    }

    #[test]
    fn test_by_type_keeps_internships() {
        let mut intern = posting("Summer Intern", "Co");
        intern.job_type = JobType::Internship;
        let postings = vec![posting("Dev", "Co"), intern];
        let kept = by_type(&postings, false, true);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Summer Intern");
    }

    #[test]
    fn test_apply_skips_relevance_unless_requested() {
        let postings = vec![posting("Backend Engineer", "Acme"), posting("Chef", "Diner")];
        let form = SearchForm {
            role: "backend".to_string(),
            ..Default::default()
        };
        assert_eq!(apply(&postings, &SearchQuery::from_form(&form, 25)).len(), 2);

        let form = SearchForm {
            filter_exact: true,
            ..form
        };
        assert_eq!(apply(&postings, &SearchQuery::from_form(&form, 25)).len(), 1);
    }

    #[test]
    fn test_apply_without_role_ignores_relevance_flag() {
        let postings = vec![posting("Chef", "Diner")];
        let form = SearchForm {
            filter_exact: true,
            ..Default::default()
        };
        assert_eq!(apply(&postings, &SearchQuery::from_form(&form, 25)).len(), 1);
    }
}
