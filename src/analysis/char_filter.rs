//! Char filter implementations for raw name normalization.
//!
//! Char filters pre-process the raw name string before it is tokenized. The
//! normalizer applies them in this order:
//!
//! ```text
//! Raw name → NFKC → Lowercase → Transliterate → Fold diacritics → Possessive → Apostrophes → Punctuation
//! ```
//!
//! # Available Filters
//!
//! - [`unicode_normalize::UnicodeNormalizationCharFilter`] - NFC or NFKC composition
//! - [`lowercase::LowercaseCharFilter`] - Unicode case folding to lowercase
//! - [`transliterate::TransliterationCharFilter`] - Non-Latin scripts to Latin
//! - [`fold::DiacriticFoldingCharFilter`] - Compatibility decomposition, marks removed
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use nomina::analysis::char_filter::CharFilter;
//! use nomina::analysis::char_filter::fold::DiacriticFoldingCharFilter;
//!
//! let filter = DiacriticFoldingCharFilter::new();
//! assert_eq!(filter.filter("conceição"), "conceicao");
//! ```

/// Trait for character filters that transform text before tokenization.
///
/// Filters are total: every input string produces an output string.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod fold;
pub mod lowercase;
pub mod pattern_replace;
pub mod transliterate;
pub mod unicode_normalize;
