//! Name-kind specific normalization policies.
//!
//! Given names and surnames share the char filters, the tokenizer and the digit
//! rules, but diverge afterwards. Each kind gets an explicit policy holding its
//! own piece filter chain, selected once at the top of
//! [`Normalizer::normalize`](crate::analysis::normalizer::Normalizer::normalize):
//!
//! ```text
//! GivenName: Noise words (connectors anywhere)
//! Surname:   Initial runs → Prefixes → Noise words (connectors between pieces) → Leading initial
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::piece_filter::PieceFilter;
use crate::analysis::piece_filter::collapse::LeadingInitialFilter;
use crate::analysis::piece_filter::initials::InitialRunFilter;
use crate::analysis::piece_filter::noise::{NoiseWordFilter, NoiseWords};
use crate::analysis::piece_filter::prefix::PrefixMerger;

/// Which field a raw name came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameKind {
    #[default]
    GivenName,
    Surname,
}

impl NameKind {
    pub fn from_surname_flag(is_surname: bool) -> Self {
        if is_surname {
            NameKind::Surname
        } else {
            NameKind::GivenName
        }
    }

    pub fn is_surname(self) -> bool {
        matches!(self, NameKind::Surname)
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::GivenName => write!(f, "given name"),
            NameKind::Surname => write!(f, "surname"),
        }
    }
}

/// The kind-specific tail of the normalization pipeline.
pub trait NormalizationPolicy: Send + Sync {
    /// The kind of name this policy handles.
    fn kind(&self) -> NameKind;

    /// The piece filters, in application order.
    fn filters(&self) -> &[Arc<dyn PieceFilter>];

    /// Run every filter over the tokenized pieces.
    fn apply(&self, pieces: Vec<String>) -> Vec<String> {
        self.filters().iter().fold(pieces, |pieces, filter| {
            let filtered = filter.filter(pieces);
            log::trace!("{} {}: {:?}", self.kind(), filter.name(), filtered);
            filtered
        })
    }
}

/// Policy for given names: noise removal only.
#[derive(Clone)]
pub struct GivenNameNormalizationPolicy {
    filters: Vec<Arc<dyn PieceFilter>>,
}

impl GivenNameNormalizationPolicy {
    pub fn new(noise: Arc<NoiseWords>) -> Self {
        GivenNameNormalizationPolicy {
            filters: vec![Arc::new(NoiseWordFilter::new(noise, NameKind::GivenName))],
        }
    }
}

impl NormalizationPolicy for GivenNameNormalizationPolicy {
    fn kind(&self) -> NameKind {
        NameKind::GivenName
    }

    fn filters(&self) -> &[Arc<dyn PieceFilter>] {
        &self.filters
    }
}

/// Policy for surnames: initial runs, prefix merging, noise removal and the
/// leading-initial collapse.
#[derive(Clone)]
pub struct SurnameNormalizationPolicy {
    filters: Vec<Arc<dyn PieceFilter>>,
}

impl SurnameNormalizationPolicy {
    pub fn new(prefixes: Arc<PrefixMerger>, noise: Arc<NoiseWords>) -> Self {
        SurnameNormalizationPolicy {
            filters: vec![
                Arc::new(InitialRunFilter::new()),
                prefixes,
                Arc::new(NoiseWordFilter::new(noise.clone(), NameKind::Surname)),
                Arc::new(LeadingInitialFilter::new(noise)),
            ],
        }
    }
}

impl NormalizationPolicy for SurnameNormalizationPolicy {
    fn kind(&self) -> NameKind {
        NameKind::Surname
    }

    fn filters(&self) -> &[Arc<dyn PieceFilter>] {
        &self.filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::NameVocabulary;

    fn pieces(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn noise() -> Arc<NoiseWords> {
        Arc::new(NoiseWords::from_vocabulary(&NameVocabulary::default()))
    }

    fn prefixes() -> Arc<PrefixMerger> {
        Arc::new(PrefixMerger::from_vocabulary(&NameVocabulary::default()))
    }

    #[test]
    fn test_name_kind_flag() {
        assert_eq!(NameKind::from_surname_flag(true), NameKind::Surname);
        assert_eq!(NameKind::from_surname_flag(false), NameKind::GivenName);
        assert!(NameKind::Surname.is_surname());
        assert_eq!(NameKind::Surname.to_string(), "surname");
    }

    #[test]
    fn test_given_name_policy() {
        let policy = GivenNameNormalizationPolicy::new(noise());
        assert_eq!(policy.kind(), NameKind::GivenName);
        assert_eq!(policy.apply(pieces(&["d", "r", "john"])), vec!["d", "r", "john"]);
        assert_eq!(policy.apply(pieces(&["d", "gutierres"])), vec!["d", "gutierres"]);
    }

    #[test]
    fn test_surname_policy() {
        let policy = SurnameNormalizationPolicy::new(prefixes(), noise());
        assert_eq!(policy.filters().len(), 4);
        assert_eq!(policy.apply(pieces(&["d", "r", "jones"])), vec!["jones"]);
        assert_eq!(policy.apply(pieces(&["d", "x", "jones"])), vec!["dx", "jones"]);
        assert_eq!(policy.apply(pieces(&["o", "ochoa"])), vec!["oochoa"]);
        assert_eq!(
            policy.apply(pieces(&["de", "ochoa", "de", "gutierrez"])),
            vec!["deochoa", "degutierrez"]
        );
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&NameKind::GivenName).unwrap();
        assert_eq!(json, "\"given_name\"");
    }
}
