//! Tokenizer implementations for name analysis.
//!
//! The tokenizer splits the char-filtered name into raw pieces. It runs after
//! all char filters, so it only ever sees lowercase Latin letters, digits,
//! whitespace, hyphens and (optionally) wildcard glyphs.
//!
//! # Examples
//!
//! ```
//! use nomina::analysis::tokenizer::Tokenizer;
//! use nomina::analysis::tokenizer::name::NameTokenizer;
//!
//! let tokenizer = NameTokenizer::new();
//! assert_eq!(tokenizer.tokenize("john-paul  smith"), vec!["john", "paul", "smith"]);
//! ```

/// Trait for tokenizers that split a name into pieces.
///
/// The trait requires `Send + Sync` so tokenizers can be shared by a
/// normalizer used from several threads.
pub trait Tokenizer: Send + Sync {
    /// Split the text into pieces, in reading order. Never yields empty pieces.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod name;
