use thiserror::Error;

use crate::scoring::round2;
use crate::types::metrics::PostMetric;
use crate::types::report::{TrendDirection, TrendResult};

/// Minimum history length for a trend.
pub const MIN_TREND_RECORDS: usize = 2;

#[derive(Debug, Error, PartialEq)]
pub enum TrendError {
    #[error("Insufficient data for trend analysis: {records} record(s)")]
    InsufficientData { records: usize },

    #[error("Trend change is undefined: first window averages 0.0 (second window {second_half_avg})")]
    DivisionUndefined { second_half_avg: f64 },
}

/// Compare mean engagement of the first and second half of `history`.
///
/// The split index is `len / 2`, so for odd lengths the second window
/// holds the extra record. A change of exactly zero is `Decreasing`;
/// any positive change is `Increasing`, even one that rounds to 0.0.
pub fn analyze_trend(history: &[PostMetric]) -> Result<TrendResult, TrendError> {
    if history.len() < MIN_TREND_RECORDS {
        return Err(TrendError::InsufficientData {
            records: history.len(),
        });
    }

    let (first_half, second_half) = history.split_at(history.len() / 2);
    let avg_first = mean_engagement(first_half);
    let avg_second = mean_engagement(second_half);

    if avg_first == 0.0 {
        return Err(TrendError::DivisionUndefined {
            second_half_avg: round2(avg_second),
        });
    }

    // Direction follows the unrounded change.
    let change = (avg_second - avg_first) / avg_first * 100.0;
    let direction = if change > 0.0 {
        TrendDirection::Increasing
    } else {
        TrendDirection::Decreasing
    };

    Ok(TrendResult {
        direction,
        change_percentage: round2(change),
        first_half_avg: round2(avg_first),
        second_half_avg: round2(avg_second),
    })
}

// Callers guarantee a non-empty window.
fn mean_engagement(window: &[PostMetric]) -> f64 {
    let total: f64 = window.iter().map(|post| post.engagement_score).sum();
    total / window.len() as f64
}
