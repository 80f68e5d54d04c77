//! Name vocabularies: the data assets that drive normalization.
//!
//! A [`NameVocabulary`] bundles everything the normalizer treats as configuration
//! rather than algorithm:
//!
//! - surname prefixes (`"della"`, `"van der"`, ...), multi-token entries written
//!   space-separated
//! - titles and honorifics, removed from any name
//! - surname-only noise particles, removed from surnames only
//! - connectors (`"y"`, `"o"`), removed contextually
//! - the transliteration table, keyed by lowercase character or grapheme
//!
//! The built-in [`Default`] is a reasonable starting point; a JSON file may
//! replace any of the fields. Fields missing from the file keep their defaults.
//!
//! # Examples
//!
//! ```
//! use nomina::vocabulary::NameVocabulary;
//!
//! let vocabulary = NameVocabulary::from_json_str(r#"{"titles": ["sir", "dame"]}"#).unwrap();
//! assert_eq!(vocabulary.titles, vec!["sir", "dame"]);
//! assert!(vocabulary.prefixes.iter().any(|p| p == "van der"));
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NominaError, Result};

const DEFAULT_PREFIXES: &[&str] = &[
    "al", "da", "das", "de", "de la", "de las", "de los", "del", "della", "der", "des",
    "di", "do", "dos", "du", "el", "la", "las", "le", "lo", "los", "st", "ste", "ten",
    "ter", "van", "van de", "van den", "van der", "vande", "vanden", "vander", "von",
    "von der", "vom", "zu",
];

const DEFAULT_TITLES: &[&str] = &[
    "baron", "brother", "capt", "captain", "col", "colonel", "count", "dame", "dr", "duke",
    "esq", "father", "fr", "gen", "general", "jr", "judge", "king", "lady", "lord", "lt",
    "madam", "major", "miss", "mr", "mrs", "ms", "prince", "princess", "prof", "queen", "rev",
    "reverend", "sgt", "sir", "sister", "sr",
];

const DEFAULT_SURNAME_NOISE: &[&str] = &["ua", "ui"];

const DEFAULT_CONNECTORS: &[&str] = &["and", "et", "o", "und", "y"];

// Latin letters without a canonical decomposition, then Cyrillic and Greek.
const DEFAULT_TRANSLITERATION: &[(&str, &str)] = &[
    ("ß", "ss"), ("æ", "ae"), ("œ", "oe"), ("ø", "o"), ("ł", "l"), ("đ", "d"), ("ð", "d"),
    ("þ", "th"), ("ı", "i"),
    ("а", "a"), ("б", "b"), ("в", "v"), ("г", "g"), ("д", "d"), ("е", "e"), ("ё", "e"),
    ("ж", "zh"), ("з", "z"), ("и", "i"), ("й", "i"), ("к", "k"), ("л", "l"), ("м", "m"),
    ("н", "n"), ("о", "o"), ("п", "p"), ("р", "r"), ("с", "s"), ("т", "t"), ("у", "u"),
    ("ф", "f"), ("х", "kh"), ("ц", "ts"), ("ч", "ch"), ("ш", "sh"), ("щ", "shch"), ("ъ", ""),
    ("ы", "y"), ("ь", ""), ("э", "e"), ("ю", "iu"), ("я", "ia"), ("і", "i"), ("ї", "i"),
    ("є", "ie"), ("ґ", "g"), ("ў", "u"),
    ("α", "a"), ("β", "v"), ("γ", "g"), ("δ", "d"), ("ε", "e"), ("ζ", "z"), ("η", "i"),
    ("θ", "th"), ("ι", "i"), ("κ", "k"), ("λ", "l"), ("μ", "m"), ("ν", "n"), ("ξ", "x"),
    ("ο", "o"), ("π", "p"), ("ρ", "r"), ("σ", "s"), ("ς", "s"), ("τ", "t"), ("υ", "y"),
    ("φ", "f"), ("χ", "ch"), ("ψ", "ps"), ("ω", "o"),
];

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|&w| w.to_string()).collect()
}

/// The externally supplied vocabularies used by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameVocabulary {
    /// Surname prefixes; multi-token entries are space-separated.
    pub prefixes: Vec<String>,
    /// Titles and honorifics, removed from given names and surnames.
    pub titles: Vec<String>,
    /// Particles removed from surnames only.
    pub surname_noise: Vec<String>,
    /// Conjunction-like tokens linking name components.
    pub connectors: Vec<String>,
    /// Character or grapheme to Latin replacement.
    pub transliteration: BTreeMap<String, String>,
}

impl Default for NameVocabulary {
    fn default() -> Self {
        NameVocabulary {
            prefixes: to_strings(DEFAULT_PREFIXES),
            titles: to_strings(DEFAULT_TITLES),
            surname_noise: to_strings(DEFAULT_SURNAME_NOISE),
            connectors: to_strings(DEFAULT_CONNECTORS),
            transliteration: DEFAULT_TRANSLITERATION
                .iter()
                .map(|&(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl NameVocabulary {
    /// Parse a vocabulary from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let vocabulary: NameVocabulary = serde_json::from_str(json)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Load a vocabulary from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        log::debug!("loading name vocabulary from {}", path.as_ref().display());
        Self::from_json_str(&content)
    }

    /// Check that every entry is usable as a lookup key.
    ///
    /// Entries must be non-empty and lowercase. Only prefixes may contain
    /// spaces, and then only single spaces between tokens.
    pub fn validate(&self) -> Result<()> {
        for prefix in &self.prefixes {
            check_entry("prefix", prefix)?;
            if prefix.split(' ').any(str::is_empty) {
                return Err(NominaError::vocabulary(format!(
                    "prefix entry {prefix:?} has stray whitespace"
                )));
            }
        }

        let single_words = self
            .titles
            .iter()
            .map(|w| ("title", w))
            .chain(self.surname_noise.iter().map(|w| ("surname noise", w)))
            .chain(self.connectors.iter().map(|w| ("connector", w)));
        for (category, word) in single_words {
            check_entry(category, word)?;
            if word.chars().any(char::is_whitespace) {
                return Err(NominaError::vocabulary(format!(
                    "{category} entry {word:?} must be a single token"
                )));
            }
        }

        for key in self.transliteration.keys() {
            if key.is_empty() {
                return Err(NominaError::vocabulary("empty transliteration key"));
            }
        }

        Ok(())
    }

    /// Layer `other` over this vocabulary.
    ///
    /// Word lists are unioned, keeping this vocabulary's order first.
    /// Transliteration entries from `other` override entries with the same key.
    pub fn merged_with(&self, other: &NameVocabulary) -> NameVocabulary {
        fn union(base: &[String], extra: &[String]) -> Vec<String> {
            let mut words = base.to_vec();
            for word in extra {
                if !words.contains(word) {
                    words.push(word.clone());
                }
            }
            words
        }

        let mut transliteration = self.transliteration.clone();
        transliteration.extend(other.transliteration.clone());

        NameVocabulary {
            prefixes: union(&self.prefixes, &other.prefixes),
            titles: union(&self.titles, &other.titles),
            surname_noise: union(&self.surname_noise, &other.surname_noise),
            connectors: union(&self.connectors, &other.connectors),
            transliteration,
        }
    }

    /// Prefix entries split into their tokens.
    pub fn prefix_sequences(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.prefixes
            .iter()
            .map(|p| p.split(' ').map(str::to_string).collect())
    }
}

fn check_entry(category: &str, word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(NominaError::vocabulary(format!("empty {category} entry")));
    }
    if word.chars().any(char::is_uppercase) {
        return Err(NominaError::vocabulary(format!(
            "{category} entry {word:?} must be lowercase"
        )));
    }
    Ok(())
}
