use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::Platform;

pub const DEFAULT_CONTENT_TYPE: &str = "general";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricError {
    #[error("Missing interaction count: {0}")]
    Missing(&'static str),
    #[error("Negative interaction count for {field}: {value}")]
    Negative { field: &'static str, value: i64 },
}

/// Post metrics as they arrive from a platform export, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPostMetrics {
    #[serde(default)]
    pub likes: Option<i64>,
    #[serde(default)]
    pub comments: Option<i64>,
    #[serde(default)]
    pub shares: Option<i64>,
    #[serde(default)]
    pub views: Option<i64>,
    #[serde(default)]
    pub content_type: Option<String>,
}

impl RawPostMetrics {
    pub fn new(likes: i64, comments: i64, shares: i64, views: i64) -> Self {
        Self {
            likes: Some(likes),
            comments: Some(comments),
            shares: Some(shares),
            views: Some(views),
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Reject missing or negative counts. Scoring only ever sees the result.
    pub fn validate(&self) -> Result<InteractionCounts, MetricError> {
        Ok(InteractionCounts {
            likes: non_negative("likes", self.likes)?,
            comments: non_negative("comments", self.comments)?,
            shares: non_negative("shares", self.shares)?,
            views: non_negative("views", self.views)?,
        })
    }

    pub fn content_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE)
    }
}

fn non_negative(field: &'static str, value: Option<i64>) -> Result<u64, MetricError> {
    let value = value.ok_or(MetricError::Missing(field))?;
    u64::try_from(value).map_err(|_| MetricError::Negative { field, value })
}

/// Validated interaction counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionCounts {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub views: u64,
}

impl InteractionCounts {
    pub fn new(likes: u64, comments: u64, shares: u64, views: u64) -> Self {
        Self {
            likes,
            comments,
            shares,
            views,
        }
    }
}

/// One tracked post. Built once at ingestion and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostMetric {
    pub platform: Platform,
    pub timestamp: DateTime<Utc>,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub views: u64,
    pub content_type: String,
    pub engagement_score: f64,
}

impl PostMetric {
    pub fn counts(&self) -> InteractionCounts {
        InteractionCounts::new(self.likes, self.comments, self.shares, self.views)
    }
}
