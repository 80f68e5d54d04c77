use regex::Regex;

use super::CharFilter;
use crate::error::{NominaError, Result};

/// Strips a trailing possessive `'s` from each word.
pub const POSSESSIVE_PATTERN: &str = r"['’]s\b";

/// Apostrophe-like glyphs, removed without leaving a token boundary.
pub const APOSTROPHE_PATTERN: &str = r"['`’ʻʼ]";

/// Everything that is neither piece content nor a piece boundary.
pub const PUNCTUATION_PATTERN: &str = r"[^\p{L}\p{N}\s-]";

/// Like [`PUNCTUATION_PATTERN`] but keeps the `?` and `*` wildcard glyphs.
pub const PUNCTUATION_KEEP_WILDCARDS_PATTERN: &str = r"[^\p{L}\p{N}\s?*-]";

/// A char filter that replaces every match of a regex pattern.
#[derive(Clone, Debug)]
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern).map_err(|e| {
                NominaError::analysis(format!("invalid pattern {pattern:?}: {e}"))
            })?,
            replacement: replacement.to_string(),
        })
    }

    /// Remove possessive suffixes.
    pub fn possessive() -> Result<Self> {
        Self::new(POSSESSIVE_PATTERN, "")
    }

    /// Remove apostrophes in place.
    pub fn apostrophes() -> Result<Self> {
        Self::new(APOSTROPHE_PATTERN, "")
    }

    /// Strip any remaining punctuation. Whitespace and hyphens stay as the
    /// only piece boundaries.
    pub fn punctuation(preserve_wildcards: bool) -> Result<Self> {
        let pattern = if preserve_wildcards {
            PUNCTUATION_KEEP_WILDCARDS_PATTERN
        } else {
            PUNCTUATION_PATTERN
        };
        Self::new(pattern, "")
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, self.replacement.as_str())
            .into_owned()
    }

    fn name(&self) -> &'static str {
        "pattern_replace"
    }
}
