//! Text normalization for skill extraction and similarity scoring

use regex::Regex;
use std::fmt;

/// Text that has been lowercased, stripped of punctuation (periods kept),
/// and collapsed to single spaces. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Tokens in document order. Tokens may contain periods ("node.js").
    pub fn tokens(&self) -> Vec<&str> {
        self.0.split(' ').filter(|t| !t.is_empty()).collect()
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub struct TextNormalizer {
    noise_regex: Regex,
    whitespace_regex: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        let noise_regex = Regex::new(r"[^a-z0-9\s.]").expect("Invalid noise regex");
        let whitespace_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");

        Self {
            noise_regex,
            whitespace_regex,
        }
    }

    /// Lowercase, replace everything outside `[a-z0-9\s.]` with a space,
    /// collapse whitespace runs, trim. Empty input yields empty output.
    pub fn normalize(&self, text: &str) -> NormalizedText {
        let lowered = text.to_lowercase();
        let stripped = self.noise_regex.replace_all(&lowered, " ");
        let collapsed = self.whitespace_regex.replace_all(&stripped, " ");
        NormalizedText(collapsed.trim().to_string())
    }
}
