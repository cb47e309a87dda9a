use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tracing::{debug, trace};

use crate::analytics::breakdown::{platform_averages, platform_breakdown, top_posts, TOP_POST_COUNT};
use crate::analytics::recommend::recommend;
use crate::analytics::trend::analyze_trend;
use crate::scoring::{EngagementScorer, WeightedEngagement};
use crate::types::identifiers::Platform;
use crate::types::metrics::{MetricError, PostMetric, RawPostMetrics};
use crate::types::report::PerformanceReport;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("No posts tracked in the last {window_days} day(s)")]
    NoData { window_days: i64 },
    #[error("Invalid analysis window: {window_days} day(s)")]
    InvalidWindow { window_days: i64 },
}

/// Append-only engagement history.
///
/// Insertion order stands in for time order; nothing is ever re-sorted
/// or removed.
#[derive(Debug, Default)]
pub struct EngagementTracker<S = WeightedEngagement> {
    scorer: S,
    history: Vec<PostMetric>,
}

impl EngagementTracker<WeightedEngagement> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> EngagementTracker<S>
where
    S: EngagementScorer,
{
    pub fn with_scorer(scorer: S) -> Self {
        Self {
            scorer,
            history: Vec::new(),
        }
    }

    /// Validate, score and append one post.
    pub fn track_post(
        &mut self,
        platform: Platform,
        raw: &RawPostMetrics,
        at: DateTime<Utc>,
    ) -> Result<&PostMetric, MetricError> {
        let counts = raw.validate()?;
        let engagement_score = self.scorer.score(&counts);

        trace!(%platform, engagement_score, "tracked post");

        let index = self.history.len();
        self.history.push(PostMetric {
            platform,
            timestamp: at,
            likes: counts.likes,
            comments: counts.comments,
            shares: counts.shares,
            views: counts.views,
            content_type: raw.content_type().to_string(),
            engagement_score,
        });
        Ok(&self.history[index])
    }

    /// Track a post stamped with the current time.
    pub fn track_post_now(
        &mut self,
        platform: Platform,
        raw: &RawPostMetrics,
    ) -> Result<&PostMetric, MetricError> {
        self.track_post(platform, raw, Utc::now())
    }

    pub fn history(&self) -> &[PostMetric] {
        &self.history
    }

    /// Analyze posts newer than `now - window_days`.
    ///
    /// Negative windows, and windows reaching outside the representable
    /// date range, are rejected.
    pub fn analyze_performance(
        &self,
        window_days: i64,
        now: DateTime<Utc>,
    ) -> Result<PerformanceReport, AnalysisError> {
        let cutoff = (window_days >= 0)
            .then(|| Duration::try_days(window_days))
            .flatten()
            .and_then(|span| now.checked_sub_signed(span))
            .ok_or(AnalysisError::InvalidWindow { window_days })?;
        let recent: Vec<PostMetric> = self
            .history
            .iter()
            .filter(|post| post.timestamp > cutoff)
            .cloned()
            .collect();

        if recent.is_empty() {
            return Err(AnalysisError::NoData { window_days });
        }

        let by_platform = platform_breakdown(&recent);

        let engagement_trend = match analyze_trend(&recent) {
            Ok(trend) => Some(trend),
            Err(err) => {
                debug!(error = %err, "trend unavailable for window");
                None
            }
        };

        let recommendations = recommend(
            &platform_averages(&by_platform),
            recent.len(),
            engagement_trend.as_ref(),
        )
        .iter()
        .map(ToString::to_string)
        .collect();

        debug!(
            window_days,
            considered = self.history.len(),
            in_window = recent.len(),
            platforms = by_platform.len(),
            "performance analysis complete"
        );

        Ok(PerformanceReport {
            period_days: window_days,
            total_posts: recent.len(),
            best_performing: top_posts(&recent, TOP_POST_COUNT),
            by_platform,
            engagement_trend,
            recommendations,
        })
    }
}
