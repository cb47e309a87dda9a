pub mod breakdown;
pub mod recommend;
pub mod tracker;
pub mod trend;

pub use breakdown::{platform_averages, platform_breakdown, top_posts, TOP_POST_COUNT};
pub use recommend::{recommend, Recommendation, FREQUENCY_THRESHOLD};
pub use tracker::{AnalysisError, EngagementTracker};
pub use trend::{analyze_trend, TrendError, MIN_TREND_RECORDS};
