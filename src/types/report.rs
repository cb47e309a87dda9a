use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::identifiers::Platform;
use crate::types::metrics::PostMetric;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
}

/// Comparison of the two halves of a post history.
/// Recomputed on every call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    pub direction: TrendDirection,
    pub change_percentage: f64,
    pub first_half_avg: f64,
    pub second_half_avg: f64,
}

/// Aggregates for one platform inside an analysis window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformStats {
    pub post_count: usize,
    pub avg_engagement: f64,
    pub total_likes: u64,
    pub total_comments: u64,
    pub total_shares: u64,
}

/// The result of a windowed performance analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub period_days: i64,
    pub total_posts: usize,
    pub by_platform: BTreeMap<Platform, PlatformStats>,
    pub best_performing: Vec<PostMetric>,
    /// Absent when the window holds too few posts or a zero baseline.
    pub engagement_trend: Option<TrendResult>,
    pub recommendations: Vec<String>,
}
