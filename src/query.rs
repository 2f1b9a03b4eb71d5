//! Range-query filtering and report formatting over station summaries.

use crate::reading::StationSummary;

/// Optional numeric bounds; an unset bound disables that predicate.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryConfig {
    pub min_low: Option<f32>,
    pub min_high: Option<f32>,
    pub max_high: Option<f32>,
}

impl QueryConfig {
    pub fn matches(&self, summary: &StationSummary) -> bool {
        if let Some(bound) = self.min_low {
            if !at_least(summary.min_low, bound) {
                return false;
            }
        }
        if let Some(bound) = self.min_high {
            if !at_least(summary.min_high, bound) {
                return false;
            }
        }
        if let Some(bound) = self.max_high {
            if !at_most(summary.max_high, bound) {
                return false;
            }
        }

        true
    }
}

// An absent field fails any configured bound. NaN comparisons are false
// either way, so NaN summary values are never rejected.
fn at_least(value: Option<f32>, bound: f32) -> bool {
    match value {
        Some(v) => !(v < bound),
        None => false,
    }
}

fn at_most(value: Option<f32>, bound: f32) -> bool {
    match value {
        Some(v) => !(v > bound),
        None => false,
    }
}

/// Keep the summaries satisfying every configured predicate, in input order.
pub fn filter_summaries(
    summaries: Vec<StationSummary>,
    config: &QueryConfig,
) -> Vec<StationSummary> {
    summaries
        .into_iter()
        .filter(|s| config.matches(s))
        .collect()
}

/// One report line: high range, lowest low, then the pair names.
pub fn format_summary(summary: &StationSummary) -> String {
    format!(
        "{}-{}\t{}\t{}\t{}",
        round0(summary.min_high),
        round0(summary.max_high),
        round0(summary.min_low),
        summary.location,
        summary.station,
    )
}

fn round0(value: Option<f32>) -> String {
    match value {
        Some(v) => format!("{v:.0}"),
        None => "N/A".to_string(),
    }
}

// -- Tests -------------------------------------------------------------------
