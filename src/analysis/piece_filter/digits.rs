//! Digit handling for name pieces.
//!
//! Record transcriptions often carry ordinals and record numbers next to the
//! name (`"1st john"`), and OCR noise inside it (`"j0hn"`). The rules are
//! evaluated once over the whole piece list:
//!
//! - digits embedded in an otherwise alphabetic piece are stripped
//! - numeric pieces (including ordinals such as `1st`) are dropped when at
//!   least one non-numeric piece exists
//! - when every piece is numeric they are concatenated into one piece

use super::PieceFilter;

const ORDINAL_SUFFIXES: &[&str] = &["st", "nd", "rd", "th"];

/// A filter implementing the digit rules above.
#[derive(Clone, Debug, Default)]
pub struct DigitFilter;

impl DigitFilter {
    pub fn new() -> Self {
        DigitFilter
    }

    /// Whether a piece is a number or an ordinal like `2nd`.
    pub fn is_numeric(piece: &str) -> bool {
        match piece.find(|c: char| !c.is_numeric()) {
            None => !piece.is_empty(),
            Some(0) => false,
            Some(split) => ORDINAL_SUFFIXES.contains(&&piece[split..]),
        }
    }

    fn strip_digits(piece: String) -> String {
        if piece.chars().any(char::is_numeric) {
            piece.chars().filter(|c| !c.is_numeric()).collect()
        } else {
            piece
        }
    }
}

impl PieceFilter for DigitFilter {
    fn filter(&self, pieces: Vec<String>) -> Vec<String> {
        if pieces.is_empty() {
            return pieces;
        }

        if pieces.iter().all(|p| Self::is_numeric(p)) {
            return vec![pieces.concat()];
        }

        pieces
            .into_iter()
            .filter(|p| !Self::is_numeric(p))
            .map(Self::strip_digits)
            .filter(|p| !p.is_empty())
            .collect()
    }

    fn name(&self) -> &'static str {
        "digits"
    }
}
