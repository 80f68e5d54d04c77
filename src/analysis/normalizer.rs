//! The name normalizer.
//!
//! [`Normalizer`] turns a raw name field into its canonical pieces:
//!
//! ```text
//! Raw name
//!   → Char filters (NFKC, lowercase, transliterate, fold diacritics, possessive, apostrophes, punctuation)
//!   → Tokenizer (whitespace and hyphens)
//!   → Digit filter
//!   → Given-name or surname policy
//!   → Canonical pieces
//! ```
//!
//! A normalizer is immutable once built and can be shared across threads.
//!
//! # Examples
//!
//! ```
//! use nomina::analysis::normalizer::Normalizer;
//! use nomina::analysis::policy::NameKind;
//!
//! let normalizer = Normalizer::with_defaults().unwrap();
//!
//! let pieces = normalizer.normalize("Quitéria Da Conceição", NameKind::Surname, false);
//! assert_eq!(pieces, vec!["quiteria", "daconceicao"]);
//!
//! let pieces = normalizer.normalize("Jo?n* Sm?th", NameKind::GivenName, true);
//! assert_eq!(pieces, vec!["jo?n*", "sm?th"]);
//! ```

use std::sync::Arc;

use crate::analysis::char_filter::CharFilter;
use crate::analysis::char_filter::fold::DiacriticFoldingCharFilter;
use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::transliterate::TransliterationCharFilter;
use crate::analysis::char_filter::unicode_normalize::{
    NormalizationForm, UnicodeNormalizationCharFilter,
};
use crate::analysis::piece_filter::PieceFilter;
use crate::analysis::piece_filter::digits::DigitFilter;
use crate::analysis::piece_filter::noise::NoiseWords;
use crate::analysis::piece_filter::prefix::PrefixMerger;
use crate::analysis::policy::{
    GivenNameNormalizationPolicy, NameKind, NormalizationPolicy, SurnameNormalizationPolicy,
};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::name::NameTokenizer;
use crate::analysis::transliteration::TransliterationTable;
use crate::error::Result;
use crate::vocabulary::NameVocabulary;

/// Canonicalizes raw name strings into ordered name pieces.
#[derive(Clone)]
pub struct Normalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
    punctuation: Arc<dyn CharFilter>,
    wildcard_punctuation: Arc<dyn CharFilter>,
    tokenizer: Arc<dyn Tokenizer>,
    digits: DigitFilter,
    prefixes: Arc<PrefixMerger>,
    noise: Arc<NoiseWords>,
    given_name_policy: GivenNameNormalizationPolicy,
    surname_policy: SurnameNormalizationPolicy,
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let char_filters: Vec<_> = self.char_filters.iter().map(|c| c.name()).collect();
        f.debug_struct("Normalizer")
            .field("char_filters", &char_filters)
            .field("tokenizer", &self.tokenizer.name())
            .field("prefixes", &self.prefixes.len())
            .field("noise_words", &self.noise.len())
            .finish()
    }
}

impl Normalizer {
    /// Build a normalizer from a vocabulary.
    ///
    /// Fails if the vocabulary does not validate.
    pub fn new(vocabulary: &NameVocabulary) -> Result<Self> {
        vocabulary.validate()?;

        let table = Arc::new(TransliterationTable::from_vocabulary(vocabulary));
        let prefixes = Arc::new(PrefixMerger::from_vocabulary(vocabulary));
        let noise = Arc::new(NoiseWords::from_vocabulary(vocabulary));

        log::debug!(
            "building normalizer: {} transliterations, {} prefixes, {} noise words",
            table.len(),
            prefixes.len(),
            noise.len()
        );

        let char_filters: Vec<Arc<dyn CharFilter>> = vec![
            Arc::new(UnicodeNormalizationCharFilter::new(NormalizationForm::Nfkc)),
            Arc::new(LowercaseCharFilter::new()),
            Arc::new(TransliterationCharFilter::new(table)),
            Arc::new(DiacriticFoldingCharFilter::new()),
            Arc::new(PatternReplaceCharFilter::possessive()?),
            Arc::new(PatternReplaceCharFilter::apostrophes()?),
        ];

        Ok(Normalizer {
            char_filters,
            punctuation: Arc::new(PatternReplaceCharFilter::punctuation(false)?),
            wildcard_punctuation: Arc::new(PatternReplaceCharFilter::punctuation(true)?),
            tokenizer: Arc::new(NameTokenizer::new()),
            digits: DigitFilter::new(),
            given_name_policy: GivenNameNormalizationPolicy::new(noise.clone()),
            surname_policy: SurnameNormalizationPolicy::new(prefixes.clone(), noise.clone()),
            prefixes,
            noise,
        })
    }

    /// Build a normalizer from the built-in vocabulary.
    pub fn with_defaults() -> Result<Self> {
        Self::new(&NameVocabulary::default())
    }

    fn policy(&self, kind: NameKind) -> &dyn NormalizationPolicy {
        match kind {
            NameKind::GivenName => &self.given_name_policy,
            NameKind::Surname => &self.surname_policy,
        }
    }

    /// Normalize a raw name into canonical pieces.
    ///
    /// Returns an empty sequence only when the input has no usable content.
    /// With `preserve_wildcards`, `?` and `*` survive as piece content, which is
    /// how search patterns are normalized.
    pub fn normalize(&self, raw: &str, kind: NameKind, preserve_wildcards: bool) -> Vec<String> {
        let policy = self.policy(kind);

        let mut text = raw.to_string();
        for char_filter in &self.char_filters {
            text = char_filter.filter(&text);
        }
        text = if preserve_wildcards {
            self.wildcard_punctuation.filter(&text)
        } else {
            self.punctuation.filter(&text)
        };

        let pieces = self.tokenizer.tokenize(&text);
        let pieces = self.digits.filter(pieces);
        let pieces = policy.apply(pieces);

        log::trace!("normalized {raw:?} ({kind}) -> {pieces:?}");
        pieces
    }

    /// Normalize with the boolean surname flag used by record fields.
    pub fn normalize_field(&self, raw: &str, is_surname: bool) -> Vec<String> {
        self.normalize(raw, NameKind::from_surname_flag(is_surname), false)
    }

    /// Fuse surname prefix runs with the following piece.
    pub fn merge_surname_prefixes(&self, pieces: &[String]) -> Vec<String> {
        self.prefixes.merge(pieces)
    }

    /// Remove titles, particles and connectors, never emptying the sequence.
    pub fn remove_noise_words(&self, pieces: &[String], kind: NameKind) -> Vec<String> {
        self.noise.remove(pieces, kind)
    }
}
