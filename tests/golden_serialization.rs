use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};
use engagement_core::types::{
    CatalogVersion, Hashtag, HashtagSelection, PerformanceReport, Platform, PlatformStats, PostMetric,
    RankedHashtag, ScoreBreakdown, TrendDirection, TrendResult,
};

fn strip_ws(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn golden_performance_report_serialization() {
    let post = PostMetric {
        platform: Platform::new("twitter"),
        timestamp: Utc.timestamp_opt(0, 0).unwrap(),
        likes: 10,
        comments: 5,
        shares: 2,
        views: 100,
        content_type: "text".to_string(),
        engagement_score: 26.0,
    };

    let report = PerformanceReport {
        period_days: 30,
        total_posts: 1,
        by_platform: BTreeMap::from([(
            Platform::new("twitter"),
            PlatformStats {
                post_count: 1,
                avg_engagement: 26.0,
                total_likes: 10,
                total_comments: 5,
                total_shares: 2,
            },
        )]),
        best_performing: vec![post],
        engagement_trend: Some(TrendResult {
            direction: TrendDirection::Decreasing,
            change_percentage: -9.06,
            first_half_avg: 36.98,
            second_half_avg: 33.63,
        }),
        recommendations: vec!["Increase posting frequency for better visibility".to_string()],
    };

    let json_str = serde_json::to_string_pretty(&report).unwrap();

    const EXPECTED_JSON: &str = r#"{
      "period_days": 30,
      "total_posts": 1,
      "by_platform": {
        "twitter": {
          "post_count": 1,
          "avg_engagement": 26.0,
          "total_likes": 10,
          "total_comments": 5,
          "total_shares": 2
        }
      },
      "best_performing": [
        {
          "platform": "twitter",
          "timestamp": "1970-01-01T00:00:00Z",
          "likes": 10,
          "comments": 5,
          "shares": 2,
          "views": 100,
          "content_type": "text",
          "engagement_score": 26.0
        }
      ],
      "engagement_trend": {
        "direction": "decreasing",
        "change_percentage": -9.06,
        "first_half_avg": 36.98,
        "second_half_avg": 33.63
      },
      "recommendations": [
        "Increase posting frequency for better visibility"
      ]
    }"#;

    assert_eq!(strip_ws(&json_str), strip_ws(EXPECTED_JSON), "JSON structure mismatch against golden snapshot");

    let deserialized: PerformanceReport = serde_json::from_str(&json_str).expect("Deserialization failed");
    assert_eq!(deserialized, report);
}

#[test]
fn golden_hashtag_selection_serialization() {
    let selection = HashtagSelection {
        platform: Platform::new("instagram"),
        requested_count: 5,
        hashtags: vec![RankedHashtag {
            tag: Hashtag::parse("#SteeleZone").unwrap(),
            score: 0.9,
            why: ScoreBreakdown {
                base: 0.5,
                trending: 0.0,
                platform: 0.0,
                brand: 0.4,
                relevance: 0.0,
            },
        }],
        set_score: 0.9,
        catalog_version: CatalogVersion::from_content(b"catalog"),
    };

    let json_str = serde_json::to_string_pretty(&selection).unwrap();

    let platform_pos = json_str.find("\"platform\":").unwrap();
    let hashtags_pos = json_str.find("\"hashtags\":").unwrap();
    let version_pos = json_str.find("\"catalog_version\":").unwrap();
    assert!(platform_pos < hashtags_pos);
    assert!(hashtags_pos < version_pos);

    let value: serde_json::Value = serde_json::from_str(&json_str).unwrap();
    assert_eq!(value["hashtags"][0]["tag"], "#SteeleZone");
    assert_eq!(value["hashtags"][0]["why"]["brand"], 0.4);
    assert_eq!(value["platform"], "instagram");
    assert!(value["catalog_version"].as_str().unwrap().starts_with("sha256:"));

    let deserialized: HashtagSelection = serde_json::from_str(&json_str).unwrap();
    assert_eq!(deserialized, selection);
}

#[test]
fn hashtag_with_bad_text_fails_to_deserialize() {
    let result: Result<Hashtag, _> = serde_json::from_str("\"#\"");
    assert!(result.is_err());
}
