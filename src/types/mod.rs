pub mod hashtag_bundle;
pub mod identifiers;
pub mod metrics;
pub mod report;

pub use hashtag_bundle::{HashtagSelection, RankedHashtag, ScoreBreakdown};
pub use identifiers::{CatalogVersion, Hashtag, HashtagError, Platform, HASHTAG_MARKER};
pub use metrics::{InteractionCounts, MetricError, PostMetric, RawPostMetrics, DEFAULT_CONTENT_TYPE};
pub use report::{PerformanceReport, PlatformStats, TrendDirection, TrendResult};
