use chrono::{DateTime, Duration, TimeZone, Utc};
use engagement_core::analytics::{AnalysisError, EngagementTracker};
use engagement_core::scoring::{engagement_score, EngagementScorer};
use engagement_core::types::{InteractionCounts, MetricError, Platform, RawPostMetrics, TrendDirection};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap()
}

fn sample_tracker() -> EngagementTracker {
    let posts = [
        ("instagram", 523, 87, 23, 2450, "photo"),
        ("twitter", 234, 45, 67, 1230, "text"),
        ("tiktok", 1823, 234, 123, 8900, "video"),
        ("onlyfans", 892, 156, 0, 3200, "exclusive"),
        ("instagram", 678, 92, 34, 2890, "video"),
    ];

    let mut tracker = EngagementTracker::new();
    for (i, (platform, likes, comments, shares, views, content_type)) in posts.into_iter().enumerate() {
        let raw = RawPostMetrics::new(likes, comments, shares, views).with_content_type(content_type);
        let at = now() - Duration::days(5 - i as i64);
        tracker.track_post(Platform::new(platform), &raw, at).unwrap();
    }
    tracker
}

#[test]
fn tracking_scores_and_appends_in_order() {
    let tracker = sample_tracker();
    let history = tracker.history();

    assert_eq!(history.len(), 5);
    assert_eq!(history[0].platform.as_str(), "instagram");
    assert_eq!(history[0].engagement_score, 31.27);
    assert_eq!(history[1].engagement_score, 42.68);
    assert_eq!(history[2].content_type, "video");
    assert_eq!(history[3].engagement_score, engagement_score(892, 156, 0, 3200));
}

#[test]
fn invalid_metrics_are_rejected_and_not_stored() {
    let mut tracker = EngagementTracker::new();
    let err = tracker
        .track_post(Platform::new("twitter"), &RawPostMetrics::new(-3, 0, 0, 10), now())
        .unwrap_err();
    assert_eq!(err, MetricError::Negative { field: "likes", value: -3 });
    assert!(tracker.history().is_empty());
}

#[test]
fn performance_report_over_window() {
    let tracker = sample_tracker();
    let report = tracker.analyze_performance(30, now()).unwrap();

    assert_eq!(report.period_days, 30);
    assert_eq!(report.total_posts, 5);

    let instagram = &report.by_platform[&Platform::new("instagram")];
    assert_eq!(instagram.post_count, 2);
    assert_eq!(instagram.avg_engagement, 32.32);
    assert_eq!(instagram.total_likes, 1201);
    assert_eq!(instagram.total_comments, 179);
    assert_eq!(instagram.total_shares, 57);
    assert_eq!(report.by_platform.len(), 4);

    let best: Vec<&str> = report
        .best_performing
        .iter()
        .map(|p| p.platform.as_str())
        .collect();
    assert_eq!(best, vec!["twitter", "onlyfans", "instagram", "instagram", "tiktok"]);

    let trend = report.engagement_trend.as_ref().unwrap();
    assert_eq!(trend.direction, TrendDirection::Decreasing);
    assert_eq!(trend.change_percentage, -9.06);

    assert_eq!(
        report.recommendations,
        vec![
            "Focus more on twitter - highest engagement rate",
            "Increase posting frequency for better visibility",
            "Engagement declining - try new content formats",
        ]
    );
}

#[test]
fn posts_outside_window_are_excluded() {
    let mut tracker = sample_tracker();
    tracker
        .track_post(
            Platform::new("tiktok"),
            &RawPostMetrics::new(10, 0, 0, 10),
            now() - Duration::days(40),
        )
        .unwrap();

    let report = tracker.analyze_performance(30, now()).unwrap();
    assert_eq!(report.total_posts, 5);
    assert_eq!(report.by_platform[&Platform::new("tiktok")].post_count, 1);
}

#[test]
fn empty_window_is_no_data() {
    let tracker = sample_tracker();
    let later = now() + Duration::days(60);
    assert_eq!(
        tracker.analyze_performance(7, later),
        Err(AnalysisError::NoData { window_days: 7 })
    );
}

#[test]
fn single_post_window_has_no_trend() {
    let mut tracker = EngagementTracker::new();
    tracker
        .track_post(Platform::new("twitter"), &RawPostMetrics::new(5, 1, 0, 100), now())
        .unwrap();

    let report = tracker.analyze_performance(30, now()).unwrap();
    assert!(report.engagement_trend.is_none());
    assert_eq!(
        report.recommendations,
        vec![
            "Focus more on twitter - highest engagement rate",
            "Increase posting frequency for better visibility",
        ]
    );
}

struct LikesOnly;

impl EngagementScorer for LikesOnly {
    fn weighted_interactions(&self, counts: &InteractionCounts) -> f64 {
        counts.likes as f64
    }
}

#[test]
fn custom_scorer_is_used_at_ingestion() {
    let mut tracker = EngagementTracker::with_scorer(LikesOnly);
    let post = tracker
        .track_post(Platform::new("instagram"), &RawPostMetrics::new(10, 50, 50, 100), now())
        .unwrap();
    assert_eq!(post.engagement_score, 10.0);
}

#[test]
fn out_of_range_window_is_rejected() {
    let tracker = sample_tracker();
    assert_eq!(
        tracker.analyze_performance(1_000_000_000, now()),
        Err(AnalysisError::InvalidWindow { window_days: 1_000_000_000 })
    );
    assert_eq!(
        tracker.analyze_performance(i64::MAX, now()),
        Err(AnalysisError::InvalidWindow { window_days: i64::MAX })
    );
}

#[test]
fn negative_window_is_rejected() {
    let tracker = sample_tracker();
    assert_eq!(
        tracker.analyze_performance(-1, now()),
        Err(AnalysisError::InvalidWindow { window_days: -1 })
    );
}

#[test]
fn zero_day_window_is_valid_but_empty() {
    let tracker = sample_tracker();
    assert_eq!(
        tracker.analyze_performance(0, now()),
        Err(AnalysisError::NoData { window_days: 0 })
    );
}

#[test]
fn posts_tracked_now_fall_inside_a_recent_window() {
    let mut tracker = EngagementTracker::new();
    let before = Utc::now();
    let post = tracker
        .track_post_now(Platform::new("tiktok"), &RawPostMetrics::new(10, 0, 0, 100))
        .unwrap();
    assert!(post.timestamp >= before);
    assert_eq!(post.engagement_score, 10.0);

    let report = tracker.analyze_performance(1, Utc::now()).unwrap();
    assert_eq!(report.total_posts, 1);
}

#[test]
fn unknown_platforms_get_their_own_breakdown() {
    let mut tracker = EngagementTracker::new();
    tracker
        .track_post(Platform::new("Mastodon"), &RawPostMetrics::new(4, 0, 0, 100), now())
        .unwrap();

    let report = tracker.analyze_performance(30, now()).unwrap();
    assert_eq!(report.by_platform[&Platform::new("mastodon")].post_count, 1);
}
