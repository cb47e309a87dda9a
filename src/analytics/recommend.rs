use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::identifiers::Platform;
use crate::types::report::{TrendDirection, TrendResult};

/// Below this many posts a frequency increase is suggested.
pub const FREQUENCY_THRESHOLD: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "platform", rename_all = "snake_case")]
pub enum Recommendation {
    FocusPlatform(Platform),
    IncreaseFrequency,
    EngagementDeclining,
    EngagementGrowing,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::FocusPlatform(platform) => {
                write!(f, "Focus more on {platform} - highest engagement rate")
            }
            Recommendation::IncreaseFrequency => {
                f.write_str("Increase posting frequency for better visibility")
            }
            Recommendation::EngagementDeclining => {
                f.write_str("Engagement declining - try new content formats")
            }
            Recommendation::EngagementGrowing => {
                f.write_str("Engagement growing - keep up the great work!")
            }
        }
    }
}

/// Derive advisories, in rule order:
/// best platform, posting frequency, trend direction.
///
/// On equal averages the platform that sorts first wins.
/// Without a trend the direction advisory is skipped.
pub fn recommend(
    platform_averages: &BTreeMap<Platform, f64>,
    total_posts: usize,
    trend: Option<&TrendResult>,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let best = platform_averages
        .iter()
        .fold(None::<(&Platform, f64)>, |best, (platform, &avg)| match best {
            Some((_, best_avg)) if best_avg >= avg => best,
            _ => Some((platform, avg)),
        });
    if let Some((platform, _)) = best {
        recommendations.push(Recommendation::FocusPlatform(platform.clone()));
    }

    if total_posts < FREQUENCY_THRESHOLD {
        recommendations.push(Recommendation::IncreaseFrequency);
    }

    if let Some(trend) = trend {
        recommendations.push(match trend.direction {
            TrendDirection::Decreasing => Recommendation::EngagementDeclining,
            TrendDirection::Increasing => Recommendation::EngagementGrowing,
        });
    }

    recommendations
}
