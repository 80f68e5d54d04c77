use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::CharFilter;

/// A char filter that decomposes letters (NFKD) and drops the combining marks,
/// leaving the base letters: `é` becomes `e`, `ã` becomes `a`.
///
/// Compatibility decomposition also unfolds ligatures and full-width forms.
#[derive(Clone, Debug, Default)]
pub struct DiacriticFoldingCharFilter;

impl DiacriticFoldingCharFilter {
    pub fn new() -> Self {
        DiacriticFoldingCharFilter
    }
}

impl CharFilter for DiacriticFoldingCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            return input.to_string();
        }
        input.nfkd().filter(|c| !is_combining_mark(*c)).collect()
    }

    fn name(&self) -> &'static str {
        "diacritic_folding"
    }
}
