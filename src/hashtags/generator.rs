use rand::Rng;
use tracing::debug;

use crate::hashtags::catalog::{CatalogError, HashtagCatalog};
use crate::hashtags::keywords::extract_keywords;
use crate::hashtags::pool::assemble_pool;
use crate::hashtags::ranking::{rank, set_score, BoostScorer};
use crate::types::hashtag_bundle::HashtagSelection;
use crate::types::identifiers::{CatalogVersion, Hashtag, Platform};

/// Content type used for campaign hashtags.
pub const CAMPAIGN_CONTENT_TYPE: &str = "exclusive";

/// A request for hashtags for one post.
#[derive(Debug, Clone)]
pub struct HashtagRequest {
    pub content_text: String,
    pub platform: Platform,
    pub content_type: String,
    /// Falls back to [`optimal_count`] when unset.
    pub count: Option<usize>,
}

impl HashtagRequest {
    pub fn new(content_text: impl Into<String>, platform: Platform) -> Self {
        Self {
            content_text: content_text.into(),
            platform,
            content_type: crate::types::DEFAULT_CONTENT_TYPE.to_string(),
            count: None,
        }
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// Hashtag count by content length (in characters), capped by the platform limit.
pub fn optimal_count(catalog: &HashtagCatalog, platform: &Platform, content: &str) -> usize {
    let bucket = match content.chars().count() {
        n if n < 50 => 5,
        n if n < 150 => 10,
        _ => 15,
    };
    bucket.min(catalog.platform_limit(platform))
}

pub struct HashtagGenerator {
    catalog: HashtagCatalog,
    version: CatalogVersion,
}

impl HashtagGenerator {
    pub fn new(catalog: HashtagCatalog) -> Result<Self, CatalogError> {
        let version = catalog.version()?;
        Ok(Self { catalog, version })
    }

    pub fn catalog(&self) -> &HashtagCatalog {
        &self.catalog
    }

    pub fn catalog_version(&self) -> &CatalogVersion {
        &self.version
    }

    pub fn generate<R: Rng + ?Sized>(&self, request: &HashtagRequest, rng: &mut R) -> HashtagSelection {
        let count = request
            .count
            .unwrap_or_else(|| optimal_count(&self.catalog, &request.platform, &request.content_text));

        // 1. Keywords
        let keywords = extract_keywords(&request.content_text);

        // 2. Candidate pool, in assembly order
        let pool = assemble_pool(
            &self.catalog,
            &keywords,
            &request.platform,
            &request.content_type,
            rng,
        );

        // 3. Rank and truncate
        let scorer = BoostScorer::new(&self.catalog);
        let mut hashtags = rank(&scorer, pool.as_slice(), &request.content_text, &request.platform);
        hashtags.truncate(count);

        let selected: Vec<Hashtag> = hashtags.iter().map(|ranked| ranked.tag.clone()).collect();
        let set_score = set_score(&scorer, &selected, &request.platform);

        debug!(
            platform = %request.platform,
            keywords = keywords.len(),
            candidates = pool.len(),
            selected = hashtags.len(),
            set_score,
            "generated hashtags"
        );

        HashtagSelection {
            platform: request.platform.clone(),
            requested_count: count,
            hashtags,
            set_score,
            catalog_version: self.version.clone(),
        }
    }

    /// Generate per platform for a campaign name, in the given platform order.
    pub fn generate_campaign<R: Rng + ?Sized>(
        &self,
        campaign_name: &str,
        platforms: &[Platform],
        rng: &mut R,
    ) -> Vec<HashtagSelection> {
        platforms
            .iter()
            .map(|platform| {
                let request = HashtagRequest::new(campaign_name, platform.clone())
                    .content_type(CAMPAIGN_CONTENT_TYPE);
                self.generate(&request, rng)
            })
            .collect()
    }
}
