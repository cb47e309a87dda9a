use crate::scoring::round2;
use crate::types::metrics::InteractionCounts;

pub trait EngagementScorer {
    /// Weighted interaction total, before normalization by reach.
    fn weighted_interactions(&self, counts: &InteractionCounts) -> f64;

    /// Interactions per 100 views, rounded to 2 decimals.
    /// Zero views count as one so the ratio is always defined.
    fn score(&self, counts: &InteractionCounts) -> f64 {
        let reach = counts.views.max(1) as f64;
        let score = round2(self.weighted_interactions(counts) / reach * 100.0);
        debug_assert!(score >= 0.0, "engagement score {score} is negative");
        score
    }
}

/// v0: likes + 2 * comments + 3 * shares
#[derive(Debug, Default, Clone, Copy)]
pub struct WeightedEngagement;

impl WeightedEngagement {
    pub const LIKE_WEIGHT: f64 = 1.0;
    pub const COMMENT_WEIGHT: f64 = 2.0;
    pub const SHARE_WEIGHT: f64 = 3.0;
}

impl EngagementScorer for WeightedEngagement {
    fn weighted_interactions(&self, counts: &InteractionCounts) -> f64 {
        counts.likes as f64 * Self::LIKE_WEIGHT
            + counts.comments as f64 * Self::COMMENT_WEIGHT
            + counts.shares as f64 * Self::SHARE_WEIGHT
    }
}

/// Score raw counts with the default weighting.
pub fn engagement_score(likes: u64, comments: u64, shares: u64, views: u64) -> f64 {
    WeightedEngagement.score(&InteractionCounts::new(likes, comments, shares, views))
}
