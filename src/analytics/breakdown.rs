use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::scoring::round2;
use crate::types::identifiers::Platform;
use crate::types::metrics::PostMetric;
use crate::types::report::PlatformStats;

/// Number of posts reported as best performing.
pub const TOP_POST_COUNT: usize = 5;

/// Per-platform aggregates, keyed in platform order.
///
/// Every platform present in `posts` gets an entry, including ones the
/// hashtag catalog does not know.
pub fn platform_breakdown(posts: &[PostMetric]) -> BTreeMap<Platform, PlatformStats> {
    let mut grouped: BTreeMap<&Platform, Vec<&PostMetric>> = BTreeMap::new();
    for post in posts {
        grouped.entry(&post.platform).or_default().push(post);
    }

    grouped
        .into_iter()
        .map(|(platform, platform_posts)| {
            let post_count = platform_posts.len();
            let score_sum: f64 = platform_posts.iter().map(|p| p.engagement_score).sum();
            let stats = PlatformStats {
                post_count,
                avg_engagement: round2(score_sum / post_count as f64),
                total_likes: platform_posts.iter().map(|p| p.likes).sum(),
                total_comments: platform_posts.iter().map(|p| p.comments).sum(),
                total_shares: platform_posts.iter().map(|p| p.shares).sum(),
            };
            (platform.clone(), stats)
        })
        .collect()
}

/// Average engagement per platform, as consumed by the recommender.
pub fn platform_averages(stats: &BTreeMap<Platform, PlatformStats>) -> BTreeMap<Platform, f64> {
    stats
        .iter()
        .map(|(platform, s)| (platform.clone(), s.avg_engagement))
        .collect()
}

/// The `count` highest-scoring posts. Equal scores keep history order.
pub fn top_posts(posts: &[PostMetric], count: usize) -> Vec<PostMetric> {
    let mut ranked: Vec<&PostMetric> = posts.iter().collect();
    ranked.sort_by(|a, b| {
        b.engagement_score
            .partial_cmp(&a.engagement_score)
            .unwrap_or(Ordering::Equal)
    });
    ranked.into_iter().take(count).cloned().collect()
}
