//! Chart-ready statistics over a filtered posting list.
//!
//! Everything here is a pure function of the postings and "today"; nothing
//! is cached between requests and nothing is drawn. The [`ChartData`]
//! descriptors carry titles and axis labels so a renderer can plot them
//! as-is.

use crate::models::JobPosting;
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;

/// Maximum number of buckets kept in a grouped count.
pub const TOP_N: usize = 8;

/// Number of calendar days in the trend window, today included.
pub const TREND_DAYS: usize = 14;

/// Postings in one trend bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub day: NaiveDate,
    pub count: usize,
}

/// The three aggregate views of one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Top locations by posting count.
    pub by_location: Vec<(String, usize)>,
    /// Top job types by posting count.
    pub by_type: Vec<(String, usize)>,
    /// One point per day of the trend window, oldest first.
    pub trend: Vec<TrendPoint>,
}

/// Renderer-facing description of one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<usize>,
    /// Set when there is nothing to plot and a placeholder should be shown.
    pub no_data: bool,
}

impl Statistics {
    /// Compute every view for `postings`, with the trend window ending on `today` (UTC).
    pub fn build(postings: &[JobPosting], today: NaiveDate) -> Self {
        Self {
            by_location: top_counts(postings.iter().map(|p| p.location.as_str()), TOP_N),
            by_type: top_counts(postings.iter().map(|p| p.job_type.label()), TOP_N),
            trend: trend(postings, today),
        }
    }

    /// Chart descriptors for the location, type and trend views, in that order.
    pub fn charts(&self) -> Vec<ChartData> {
        vec![
            bar_chart("Openings by City", &self.by_location),
            bar_chart("Openings by Type", &self.by_type),
            ChartData {
                title: "Openings (last 14 days)".to_string(),
                // every other day is labelled to keep the axis readable
                labels: self
                    .trend
                    .iter()
                    .enumerate()
                    .map(|(i, point)| if i % 2 == 0 { point.day.to_string() } else { String::new() })
                    .collect(),
                values: self.trend.iter().map(|point| point.count).collect(),
                no_data: self.trend.is_empty(),
            },
        ]
    }
}

/// Count occurrences of each key and keep the `n` most frequent.
///
/// Keys are compared verbatim. Among equal counts, the key seen first comes
/// first.
pub fn top_counts<'a, I>(keys: I, n: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut slots: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for key in keys {
        match slots.get(key) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(key, counts.len());
                counts.push((key.to_string(), 1));
            }
        }
    }
    // stable sort keeps first-seen order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
}

/// Daily posting counts for the [`TREND_DAYS`] days ending on `today`.
///
/// Postings scraped outside the window are not counted.
pub fn trend(postings: &[JobPosting], today: NaiveDate) -> Vec<TrendPoint> {
    let start = today
        .checked_sub_days(Days::new(TREND_DAYS as u64 - 1))
        .unwrap_or(NaiveDate::MIN);
    let mut points: Vec<TrendPoint> = start
        .iter_days()
        .take(TREND_DAYS)
        .map(|day| TrendPoint { day, count: 0 })
        .collect();

    for posting in postings {
        let day = posting.scraped_at.date_naive();
        if day < start || day > today {
            continue;
        }
        let offset = (day - start).num_days() as usize;
        if let Some(point) = points.get_mut(offset) {
            point.count += 1;
        }
    }
    points
}

fn bar_chart(title: &str, pairs: &[(String, usize)]) -> ChartData {
    ChartData {
        title: title.to_string(),
        labels: pairs.iter().map(|(label, _)| label.clone()).collect(),
        values: pairs.iter().map(|(_, count)| *count).collect(),
        no_data: pairs.is_empty(),
    }
}
