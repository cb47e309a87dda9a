use std::cmp::Ordering;

use crate::hashtags::catalog::HashtagCatalog;
use crate::types::hashtag_bundle::{RankedHashtag, ScoreBreakdown};
use crate::types::identifiers::{Hashtag, Platform};

pub trait HashtagScorer {
    fn score(&self, tag: &Hashtag, content: &str, platform: &Platform) -> ScoreBreakdown;

    fn score_value(&self, details: &ScoreBreakdown) -> f64 {
        let score = details.total();
        debug_assert!(score >= 0.0, "hashtag score {score} is negative");
        score
    }
}

/// v0: base score plus independent additive boosts. Uncapped.
#[derive(Debug, Clone, Copy)]
pub struct BoostScorer<'a> {
    catalog: &'a HashtagCatalog,
}

impl<'a> BoostScorer<'a> {
    pub const BASE: f64 = 0.5;
    pub const TRENDING_BOOST: f64 = 0.3;
    pub const PLATFORM_BOOST: f64 = 0.2;
    pub const BRAND_BOOST: f64 = 0.4;
    pub const RELEVANCE_BOOST: f64 = 0.3;

    pub fn new(catalog: &'a HashtagCatalog) -> Self {
        Self { catalog }
    }
}

impl HashtagScorer for BoostScorer<'_> {
    fn score(&self, tag: &Hashtag, content: &str, platform: &Platform) -> ScoreBreakdown {
        let boost = |hit: bool, weight: f64| if hit { weight } else { 0.0 };

        let brand_hit = tag
            .as_str()
            .to_lowercase()
            .contains(&self.catalog.brand_token.to_lowercase());
        let relevance_hit = content.to_lowercase().contains(&tag.normalized_body());

        ScoreBreakdown {
            base: Self::BASE,
            trending: boost(self.catalog.is_trending(tag), Self::TRENDING_BOOST),
            platform: boost(self.catalog.is_platform_tag(tag, platform), Self::PLATFORM_BOOST),
            brand: boost(brand_hit, Self::BRAND_BOOST),
            relevance: boost(relevance_hit, Self::RELEVANCE_BOOST),
        }
    }
}

/// Score every candidate and order by score, highest first.
///
/// The sort is stable: equal scores keep candidate order.
pub fn rank<S: HashtagScorer>(
    scorer: &S,
    candidates: &[Hashtag],
    content: &str,
    platform: &Platform,
) -> Vec<RankedHashtag> {
    let mut ranked: Vec<RankedHashtag> = candidates
        .iter()
        .map(|tag| {
            let why = scorer.score(tag, content, platform);
            RankedHashtag {
                tag: tag.clone(),
                score: scorer.score_value(&why),
                why,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    debug_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));

    ranked
}

/// [`rank`] without the score details.
pub fn rank_tags<S: HashtagScorer>(
    scorer: &S,
    candidates: &[Hashtag],
    content: &str,
    platform: &Platform,
) -> Vec<Hashtag> {
    rank(scorer, candidates, content, platform)
        .into_iter()
        .map(|ranked| ranked.tag)
        .collect()
}

/// Mean content-independent score of a tag set; 0.0 when empty.
pub fn set_score<S: HashtagScorer>(scorer: &S, tags: &[Hashtag], platform: &Platform) -> f64 {
    if tags.is_empty() {
        return 0.0;
    }
    let total: f64 = tags
        .iter()
        .map(|tag| scorer.score_value(&scorer.score(tag, "", platform)))
        .sum();
    total / tags.len() as f64
}
