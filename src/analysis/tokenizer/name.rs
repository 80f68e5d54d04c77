//! Whitespace and hyphen tokenizer.

use super::Tokenizer;

/// A tokenizer that splits on whitespace and hyphens.
#[derive(Clone, Debug, Default)]
pub struct NameTokenizer;

impl NameTokenizer {
    /// Create a new name tokenizer.
    pub fn new() -> Self {
        NameTokenizer
    }

    fn is_boundary(c: char) -> bool {
        c.is_whitespace() || c == '-'
    }
}

impl Tokenizer for NameTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(Self::is_boundary)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn name(&self) -> &'static str {
        "name"
    }
}
