use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::{CatalogVersion, Hashtag, Platform};

/// Ceiling used for platforms without a configured limit.
pub const DEFAULT_PLATFORM_LIMIT: usize = 10;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Brand token must not be empty")]
    EmptyBrandToken,
}

// Key point:
// Injected, never hard-coded at call sites
// Ordered maps so the serialized form (and its version) is stable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashtagCatalog {
    /// Matched case-insensitively as a substring of each tag.
    pub brand_token: String,
    #[serde(default = "default_platform_limit")]
    pub default_platform_limit: usize,
    /// Catalog order is the match order during pool assembly.
    pub trending: Vec<Hashtag>,
    #[serde(default)]
    pub niche: BTreeMap<String, Vec<Hashtag>>,
    #[serde(default)]
    pub platform_tags: BTreeMap<Platform, Vec<Hashtag>>,
    #[serde(default)]
    pub platform_limits: BTreeMap<Platform, usize>,
}

fn default_platform_limit() -> usize {
    DEFAULT_PLATFORM_LIMIT
}

impl HashtagCatalog {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: HashtagCatalog = serde_json::from_str(json)?;
        catalog.validated()
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let f = fs::File::open(path)?;
        let catalog: HashtagCatalog = serde_json::from_reader(f)?;
        catalog.validated()
    }

    fn validated(mut self) -> Result<Self, CatalogError> {
        self.brand_token = self.brand_token.trim().to_lowercase();
        if self.brand_token.is_empty() {
            return Err(CatalogError::EmptyBrandToken);
        }
        Ok(self)
    }

    /// Content hash over the canonical JSON form.
    pub fn version(&self) -> Result<CatalogVersion, CatalogError> {
        let bytes = serde_json::to_vec(self)?;
        Ok(CatalogVersion::from_content(&bytes))
    }

    pub fn is_trending(&self, tag: &Hashtag) -> bool {
        self.trending.contains(tag)
    }

    pub fn is_platform_tag(&self, tag: &Hashtag, platform: &Platform) -> bool {
        self.platform_tags
            .get(platform)
            .is_some_and(|tags| tags.contains(tag))
    }

    pub fn niche_tags(&self, content_type: &str) -> &[Hashtag] {
        self.niche.get(content_type).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn platform_tags(&self, platform: &Platform) -> &[Hashtag] {
        self.platform_tags
            .get(platform)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn platform_limit(&self, platform: &Platform) -> usize {
        self.platform_limits
            .get(platform)
            .copied()
            .unwrap_or(self.default_platform_limit)
    }

    /// The built-in data set.
    pub fn v0() -> Self {
        let niche = BTreeMap::from([
            (
                "exclusive".to_string(),
                tags(&[
                    "#ExclusiveContent", "#VIP", "#Premium", "#Exclusive",
                    "#PremiumContent", "#VIPAccess", "#ExclusiveDeal",
                ]),
            ),
            (
                "lifestyle".to_string(),
                tags(&[
                    "#Lifestyle", "#LifestyleContent", "#DailyLife", "#LivingMyBestLife",
                    "#LifestyleBlogger", "#LifestyleInfluencer",
                ]),
            ),
            (
                "creator".to_string(),
                tags(&[
                    "#TheSteeleZone", "#ContentCreation", "#CreativeContent",
                    "#DigitalCreator", "#OnlineCreator", "#CreatorEconomy",
                ]),
            ),
            (
                "fan_engagement".to_string(),
                tags(&[
                    "#Fans", "#FanLove", "#Supporters", "#Community",
                    "#FanBase", "#Subscribers", "#Subscribe",
                ]),
            ),
        ]);

        let platform_tags = BTreeMap::from([
            (
                Platform::new("onlyfans"),
                tags(&[
                    "#OnlyFans", "#OnlyFansCreator", "#OnlyFansModel",
                    "#OnlyFansLife", "#OF", "#OFModel", "#OnlyFansContent",
                ]),
            ),
            (
                Platform::new("instagram"),
                tags(&[
                    "#InstaDaily", "#InstaGood", "#InstaMood", "#InstaLife",
                    "#IGDaily", "#InstagramReels", "#ReelsInstagram",
                ]),
            ),
            (
                Platform::new("tiktok"),
                tags(&[
                    "#TikTok", "#TikTokViral", "#TikTokCreator", "#TikTokLife",
                    "#TikTokTrending", "#TikTokFamous",
                ]),
            ),
            (
                Platform::new("twitter"),
                tags(&[
                    "#TwitterLife", "#Tweet", "#TwitterCommunity",
                    "#SocialMediaLife", "#OnlineContent",
                ]),
            ),
        ]);

        let platform_limits = BTreeMap::from([
            (Platform::new("instagram"), 30),
            (Platform::new("twitter"), 10),
            (Platform::new("tiktok"), 20),
            (Platform::new("onlyfans"), 15),
        ]);

        Self {
            brand_token: "steelezone".into(),
            default_platform_limit: DEFAULT_PLATFORM_LIMIT,
            trending: tags(&[
                "#Trending", "#Viral", "#FYP", "#ForYou", "#Explore",
                "#ContentCreator", "#Creator", "#DigitalContent", "#SocialMedia",
                "#Influencer", "#InfluencerLife", "#ContentMarketing", "#SocialMediaMarketing",
            ]),
            niche,
            platform_tags,
            platform_limits,
        }
    }
}

fn tags(raw: &[&str]) -> Vec<Hashtag> {
    raw.iter().filter_map(|t| Hashtag::parse(t).ok()).collect()
}
