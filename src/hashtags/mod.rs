pub mod catalog;
pub mod generator;
pub mod keywords;
pub mod pool;
pub mod ranking;

pub use catalog::{CatalogError, HashtagCatalog, DEFAULT_PLATFORM_LIMIT};
pub use generator::{optimal_count, HashtagGenerator, HashtagRequest, CAMPAIGN_CONTENT_TYPE};
pub use keywords::{extract_keywords, MAX_KEYWORDS};
pub use pool::{assemble_pool, select_trending, tags_from_keywords, CandidatePool};
pub use ranking::{rank, rank_tags, set_score, BoostScorer, HashtagScorer};
