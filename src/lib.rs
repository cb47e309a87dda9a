//! Deterministic content performance scoring and hashtag ranking.
//!
//! `engagement-core` turns raw post metrics into engagement scores, compares
//! the two halves of a post history to detect a trend, derives advisories,
//! and ranks hashtag candidates by weighted relevance. All operations are
//! pure and synchronous; the only randomness (trending backfill) comes from
//! a caller-supplied RNG, so seeded runs are reproducible.

pub mod analytics;
pub mod hashtags;
pub mod scoring;
pub mod types;
