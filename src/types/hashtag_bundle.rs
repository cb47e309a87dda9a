use serde::{Deserialize, Serialize};

use crate::types::identifiers::{CatalogVersion, Hashtag, Platform};

/// Explanation for why a hashtag received its score.
/// Each boost is either zero or its full weight.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub base: f64,
    pub trending: f64,
    pub platform: f64,
    pub brand: f64,
    pub relevance: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.base + self.trending + self.platform + self.brand + self.relevance
    }
}

/// A hashtag with its score, in ranked order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedHashtag {
    pub tag: Hashtag,
    pub score: f64,
    pub why: ScoreBreakdown,
}

/// The final output of hashtag generation for one platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashtagSelection {
    pub platform: Platform,
    pub requested_count: usize,
    pub hashtags: Vec<RankedHashtag>,
    /// Mean content-independent score of the selected tags.
    pub set_score: f64,
    pub catalog_version: CatalogVersion,
}

impl HashtagSelection {
    pub fn tags(&self) -> Vec<&Hashtag> {
        self.hashtags.iter().map(|ranked| &ranked.tag).collect()
    }
}
