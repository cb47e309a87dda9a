use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

/// Upper bound on extracted keywords.
pub const MAX_KEYWORDS: usize = 10;

/// Tokens of this many characters or fewer are dropped.
pub const MIN_KEYWORD_EXCLUSIVE_LEN: usize = 3;

lazy_static! {
    static ref URL_RE: Regex = Regex::new(r"http\S+").expect("valid regex");
    static ref PUNCT_RE: Regex = Regex::new(r"[^\w\s]").expect("valid regex");
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &["the", "a", "an", "in", "on", "at", "to", "for", "of", "and", "or", "but"];
        words.iter().copied().collect()
    };
}

fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Extract up to [`MAX_KEYWORDS`] keywords from free text, in order of appearance.
///
/// URLs and punctuation are stripped before lowercasing and splitting on
/// whitespace. Length is counted in characters.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let without_urls = URL_RE.replace_all(text, "");
    let cleaned = PUNCT_RE.replace_all(&without_urls, "").to_lowercase();

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_KEYWORD_EXCLUSIVE_LEN)
        .filter(|token| !is_stopword(token))
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}
