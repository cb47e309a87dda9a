pub mod engagement;

pub use engagement::{engagement_score, EngagementScorer, WeightedEngagement};

/// Round to 2 decimal places, halves away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
