use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

/// Marker character every hashtag starts with.
pub const HASHTAG_MARKER: char = '#';

/// Normalized platform name (trimmed, lowercase).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Platform(String);

impl Platform {
    pub fn new(name: impl AsRef<str>) -> Self {
        Platform(name.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        Platform::new(value)
    }
}

impl From<&str> for Platform {
    fn from(value: &str) -> Self {
        Platform::new(value)
    }
}

impl From<Platform> for String {
    fn from(value: Platform) -> Self {
        value.0
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashtagError {
    #[error("Hashtag has no text after the marker")]
    Empty,
    #[error("Hashtag contains whitespace: {0:?}")]
    Whitespace(String),
}

/// A single hashtag, always starting with [`HASHTAG_MARKER`].
///
/// Equality is exact: `#Viral` and `#viral` are different tags.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hashtag(String);

impl Hashtag {
    /// Parse a tag, prepending the marker when it is missing.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, HashtagError> {
        let trimmed = raw.as_ref().trim();
        let body = trimmed.strip_prefix(HASHTAG_MARKER).unwrap_or(trimmed);

        if body.is_empty() {
            return Err(HashtagError::Empty);
        }
        if body.chars().any(char::is_whitespace) {
            return Err(HashtagError::Whitespace(trimmed.to_string()));
        }

        Ok(Hashtag(format!("{HASHTAG_MARKER}{body}")))
    }

    /// Build a tag from an extracted keyword: marker + capitalized keyword.
    pub fn from_keyword(keyword: &str) -> Result<Self, HashtagError> {
        let mut chars = keyword.chars();
        let capitalized = match chars.next() {
            Some(first) => {
                let rest = chars.as_str().to_lowercase();
                first.to_uppercase().chain(rest.chars()).collect::<String>()
            }
            None => String::new(),
        };
        Hashtag::parse(capitalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Tag text without the marker.
    pub fn body(&self) -> &str {
        &self.0[HASHTAG_MARKER.len_utf8()..]
    }

    /// Lowercased tag text without the marker, as used for matching.
    pub fn normalized_body(&self) -> String {
        self.body().to_lowercase()
    }
}

impl TryFrom<String> for Hashtag {
    type Error = HashtagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Hashtag::parse(value)
    }
}

impl From<Hashtag> for String {
    fn from(value: Hashtag) -> Self {
        value.0
    }
}

impl fmt::Display for Hashtag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash of a serialized hashtag catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogVersion(String);

impl CatalogVersion {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        CatalogVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
