//! Script classification and transliteration to Latin.
//!
//! Transliteration is dispatched on a small closed set of scripts:
//!
//! - [`Script::Latin`] passes through untouched; diacritics are folded later by
//!   [`DiacriticFoldingCharFilter`](crate::analysis::char_filter::fold::DiacriticFoldingCharFilter).
//! - [`Script::Cyrillic`] and [`Script::Greek`] map letter by letter and stay
//!   inside the surrounding token.
//! - [`Script::Cjk`] maps each ideograph to a syllable surrounded by spaces, since
//!   CJK text has no word separators. Ideographs missing from the table fall
//!   back to toneless pinyin.
//! - [`Script::Other`] letters (Arabic, Hebrew, Hangul, kana, ...) without a
//!   table entry are romanized with `unidecode` and, like Cyrillic, stay inside
//!   the surrounding token. Letters with no romanization at all are dropped.
//!
//! # Examples
//!
//! ```
//! use nomina::analysis::transliteration::{Script, TransliterationTable};
//! use nomina::vocabulary::NameVocabulary;
//!
//! let table = TransliterationTable::from_vocabulary(&NameVocabulary::default());
//! assert_eq!(table.transliterate("смирнов"), "smirnov");
//! assert_eq!(table.transliterate("王李"), " wang  li ");
//! assert_eq!(table.transliterate("さくら"), "sakura");
//! assert_eq!(Script::of('ж'), Script::Cyrillic);
//! ```

use ahash::AHashMap;
use pinyin::ToPinyin;
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;
use unidecode::unidecode_char;

use crate::vocabulary::NameVocabulary;

/// The writing system a character belongs to, as far as transliteration cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Script {
    /// ASCII, Latin-1, Latin Extended, combining marks and anything non-alphabetic
    Latin,
    /// Cyrillic and Cyrillic Supplement
    Cyrillic,
    /// Greek and Greek Extended
    Greek,
    /// CJK Unified Ideographs and extensions
    Cjk,
    /// Any other alphabetic script
    Other,
}

impl Script {
    /// Classify a single character.
    pub fn of(c: char) -> Script {
        match c {
            '\u{0400}'..='\u{052F}' => Script::Cyrillic,
            '\u{0370}'..='\u{03FF}' | '\u{1F00}'..='\u{1FFF}' => Script::Greek,
            '\u{4E00}'..='\u{9FFF}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{20000}'..='\u{2A6DF}'
            | '\u{2A700}'..='\u{2B73F}'
            | '\u{2B740}'..='\u{2B81F}'
            | '\u{2B820}'..='\u{2CEAF}' => Script::Cjk,
            '\u{0000}'..='\u{036F}' | '\u{1E00}'..='\u{1EFF}' => Script::Latin,
            _ if !c.is_alphabetic() => Script::Latin,
            _ => Script::Other,
        }
    }

    /// Classify a grapheme by its first character.
    pub fn of_grapheme(grapheme: &str) -> Script {
        grapheme.chars().next().map_or(Script::Latin, Script::of)
    }

    /// Whether each character of this script forms a token of its own.
    pub fn splits_tokens(self) -> bool {
        matches!(self, Script::Cjk)
    }
}

/// Read-only mapping from non-Latin graphemes to Latin text.
#[derive(Clone, Debug, Default)]
pub struct TransliterationTable {
    entries: AHashMap<String, String>,
}

impl TransliterationTable {
    /// Create a table from explicit entries.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        TransliterationTable {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Create a table from the vocabulary's transliteration entries.
    pub fn from_vocabulary(vocabulary: &NameVocabulary) -> Self {
        Self::new(vocabulary.transliteration.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a grapheme, falling back to pinyin for CJK, and otherwise to its
    /// base character and then to `unidecode`. `None` means the grapheme should
    /// be kept as it is.
    /// `Some("")` means it should be dropped.
    pub fn lookup(&self, grapheme: &str) -> Option<String> {
        if let Some(latin) = self.entries.get(grapheme) {
            return Some(latin.clone());
        }

        let script = Script::of_grapheme(grapheme);
        match script {
            Script::Latin => None,
            Script::Cjk => Some(
                grapheme
                    .chars()
                    .filter_map(|c| c.to_pinyin())
                    .map(|p| p.plain())
                    .collect(),
            ),
            Script::Cyrillic | Script::Greek | Script::Other => {
                // Accented letters such as Greek tonos decompose to a mapped base.
                let base: String = grapheme.nfd().take(1).collect();
                if let Some(latin) = self.entries.get(&base) {
                    return Some(latin.clone());
                }
                let romanized = romanize(grapheme);
                if romanized.is_empty() {
                    log::debug!("dropping untransliterable grapheme {grapheme:?}");
                }
                Some(romanized)
            }
        }
    }

    /// Transliterate a whole string, grapheme by grapheme.
    ///
    /// Latin text is returned unchanged. CJK syllables are padded with spaces
    /// so that the tokenizer splits them apart.
    pub fn transliterate(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        for grapheme in text.graphemes(true) {
            match self.lookup(grapheme) {
                None => output.push_str(grapheme),
                Some(latin) if Script::of_grapheme(grapheme).splits_tokens() => {
                    if !latin.is_empty() {
                        output.push(' ');
                        output.push_str(&latin);
                        output.push(' ');
                    }
                }
                Some(latin) => output.push_str(&latin),
            }
        }
        output
    }
}

/// Romanize a grapheme, keeping only lowercase letters and digits so the
/// result cannot introduce boundaries or punctuation.
fn romanize(grapheme: &str) -> String {
    grapheme
        .chars()
        .flat_map(|c| unidecode_char(c).chars())
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
