use std::sync::Arc;

use super::CharFilter;
use crate::analysis::transliteration::TransliterationTable;

/// A char filter that rewrites non-Latin scripts using a [`TransliterationTable`].
///
/// The table is shared, so many normalizers may hold the same one.
#[derive(Clone, Debug)]
pub struct TransliterationCharFilter {
    table: Arc<TransliterationTable>,
}

impl TransliterationCharFilter {
    pub fn new(table: Arc<TransliterationTable>) -> Self {
        Self { table }
    }
}

impl CharFilter for TransliterationCharFilter {
    fn filter(&self, input: &str) -> String {
        // Pure Latin input is the common case and needs no grapheme walk.
        if input.is_ascii() {
            return input.to_string();
        }
        self.table.transliterate(input)
    }

    fn name(&self) -> &'static str {
        "transliterate"
    }
}
