use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::hashtags::catalog::HashtagCatalog;
use crate::types::identifiers::{Hashtag, Platform};

pub const MAX_TRENDING: usize = 5;
pub const MIN_TRENDING_MATCHES: usize = 3;
pub const TRENDING_BACKFILL: usize = 3;
pub const MAX_NICHE: usize = 5;
pub const MAX_PLATFORM: usize = 3;

/// Insertion-ordered, duplicate-suppressing hashtag sequence.
///
/// Assembly order is the tie-break order used by ranking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    seen: HashSet<Hashtag>,
    ordered: Vec<Hashtag>,
}

impl CandidatePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the tag was already present.
    pub fn insert(&mut self, tag: Hashtag) -> bool {
        if self.seen.contains(&tag) {
            return false;
        }
        self.seen.insert(tag.clone());
        self.ordered.push(tag);
        true
    }

    pub fn extend<I: IntoIterator<Item = Hashtag>>(&mut self, tags: I) {
        for tag in tags {
            self.insert(tag);
        }
    }

    pub fn contains(&self, tag: &Hashtag) -> bool {
        self.seen.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn as_slice(&self) -> &[Hashtag] {
        &self.ordered
    }

    pub fn into_vec(self) -> Vec<Hashtag> {
        self.ordered
    }
}

impl FromIterator<Hashtag> for CandidatePool {
    fn from_iter<I: IntoIterator<Item = Hashtag>>(iter: I) -> Self {
        let mut pool = CandidatePool::new();
        pool.extend(iter);
        pool
    }
}

/// Trending tags related to any keyword, backfilled at random when fewer
/// than [`MIN_TRENDING_MATCHES`] matched, capped at [`MAX_TRENDING`].
///
/// Backfill may repeat a matched tag; the pool drops the duplicate.
pub fn select_trending<R: Rng + ?Sized>(
    catalog: &HashtagCatalog,
    keywords: &[String],
    rng: &mut R,
) -> Vec<Hashtag> {
    let mut selected: Vec<Hashtag> = catalog
        .trending
        .iter()
        .filter(|tag| {
            let tag_words = tag.normalized_body();
            keywords
                .iter()
                .any(|kw| tag_words.contains(kw.as_str()) || kw.contains(tag_words.as_str()))
        })
        .cloned()
        .collect();

    if selected.len() < MIN_TRENDING_MATCHES {
        selected.extend(
            catalog
                .trending
                .choose_multiple(rng, TRENDING_BACKFILL)
                .cloned(),
        );
    }

    selected.truncate(MAX_TRENDING);
    selected
}

/// One tag per keyword longer than 3 characters.
pub fn tags_from_keywords(keywords: &[String]) -> Vec<Hashtag> {
    keywords
        .iter()
        .filter(|kw| kw.chars().count() > 3)
        .filter_map(|kw| Hashtag::from_keyword(kw).ok())
        .collect()
}

/// Assemble the candidate pool: trending, niche, platform, then keyword tags.
pub fn assemble_pool<R: Rng + ?Sized>(
    catalog: &HashtagCatalog,
    keywords: &[String],
    platform: &Platform,
    content_type: &str,
    rng: &mut R,
) -> CandidatePool {
    let mut pool = CandidatePool::new();

    pool.extend(select_trending(catalog, keywords, rng));
    pool.extend(catalog.niche_tags(content_type).iter().take(MAX_NICHE).cloned());
    pool.extend(catalog.platform_tags(platform).iter().take(MAX_PLATFORM).cloned());
    pool.extend(tags_from_keywords(keywords));

    pool
}
