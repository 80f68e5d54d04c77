//! Noise word removal.
//!
//! Three categories of noise are recognised:
//!
//! - titles and honorifics (`"sir"`, `"major"`, `"king"`) are removed from any name
//! - surname particles (`"ui"`) are removed from surnames only
//! - connectors (`"y"`, `"o"`) are removed from given names anywhere, and from
//!   surnames only strictly between two other pieces; at a surname boundary the
//!   leading-initial rule decides instead
//!
//! The filter never empties a non-empty sequence: when every piece is noise,
//! the last piece is kept.
//!
//! # Examples
//!
//! ```
//! use nomina::analysis::piece_filter::noise::NoiseWords;
//! use nomina::analysis::policy::NameKind;
//! use nomina::vocabulary::NameVocabulary;
//!
//! let words = NoiseWords::from_vocabulary(&NameVocabulary::default());
//! let pieces = vec!["sir".to_string(), "king".to_string()];
//! assert_eq!(words.remove(&pieces, NameKind::GivenName), vec!["king"]);
//! ```

use std::sync::Arc;

use ahash::AHashSet;

use super::PieceFilter;
use crate::analysis::policy::NameKind;
use crate::vocabulary::NameVocabulary;

/// The noise vocabularies, compiled into lookup sets.
#[derive(Clone, Debug, Default)]
pub struct NoiseWords {
    titles: AHashSet<String>,
    surname_noise: AHashSet<String>,
    connectors: AHashSet<String>,
}

impl NoiseWords {
    pub fn new<I, S>(titles: I, surname_noise: I, connectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NoiseWords {
            titles: titles.into_iter().map(Into::into).collect(),
            surname_noise: surname_noise.into_iter().map(Into::into).collect(),
            connectors: connectors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_vocabulary(vocabulary: &NameVocabulary) -> Self {
        Self::new(
            vocabulary.titles.iter().cloned(),
            vocabulary.surname_noise.iter().cloned(),
            vocabulary.connectors.iter().cloned(),
        )
    }

    pub fn is_title(&self, piece: &str) -> bool {
        self.titles.contains(piece)
    }

    pub fn is_surname_noise(&self, piece: &str) -> bool {
        self.surname_noise.contains(piece)
    }

    pub fn is_connector(&self, piece: &str) -> bool {
        self.connectors.contains(piece)
    }

    /// Noise that may open a surname: a title or a surname particle.
    pub fn is_initial_noise(&self, piece: &str) -> bool {
        self.is_title(piece) || self.is_surname_noise(piece)
    }

    /// Total number of entries across all categories.
    pub fn len(&self) -> usize {
        self.titles.len() + self.surname_noise.len() + self.connectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_noise_at(&self, piece: &str, index: usize, last: usize, kind: NameKind) -> bool {
        if self.is_title(piece) {
            return true;
        }
        match kind {
            NameKind::GivenName => self.is_connector(piece),
            NameKind::Surname => {
                self.is_surname_noise(piece)
                    || (self.is_connector(piece) && index > 0 && index < last)
            }
        }
    }

    /// Remove noise pieces, keeping the last piece if nothing else survives.
    pub fn remove(&self, pieces: &[String], kind: NameKind) -> Vec<String> {
        let last = pieces.len().saturating_sub(1);
        let kept: Vec<String> = pieces
            .iter()
            .enumerate()
            .filter(|(index, piece)| !self.is_noise_at(piece, *index, last, kind))
            .map(|(_, piece)| piece.clone())
            .collect();

        match (kept.is_empty(), pieces.last()) {
            (true, Some(retained)) => vec![retained.clone()],
            _ => kept,
        }
    }
}

/// A [`PieceFilter`] applying [`NoiseWords::remove`] for one kind of name.
#[derive(Clone, Debug)]
pub struct NoiseWordFilter {
    words: Arc<NoiseWords>,
    kind: NameKind,
}

impl NoiseWordFilter {
    pub fn new(words: Arc<NoiseWords>, kind: NameKind) -> Self {
        NoiseWordFilter { words, kind }
    }
}

impl PieceFilter for NoiseWordFilter {
    fn filter(&self, pieces: Vec<String>) -> Vec<String> {
        self.words.remove(&pieces, self.kind)
    }

    fn name(&self) -> &'static str {
        "noise_words"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn default_words() -> NoiseWords {
        NoiseWords::from_vocabulary(&NameVocabulary::default())
    }

    #[test]
    fn test_given_name_connectors() {
        let words = default_words();
        assert_eq!(
            words.remove(&pieces(&["mendoza", "y", "gutierres"]), NameKind::GivenName),
            vec!["mendoza", "gutierres"]
        );
        assert_eq!(
            words.remove(&pieces(&["y", "gutierres"]), NameKind::GivenName),
            vec!["gutierres"]
        );
    }

    #[test]
    fn test_titles() {
        let words = default_words();
        let given = NameKind::GivenName;
        assert_eq!(words.remove(&pieces(&["major", "mendoza"]), given), vec!["mendoza"]);
        assert_eq!(words.remove(&pieces(&["major"]), given), vec!["major"]);
        assert_eq!(words.remove(&pieces(&["sir", "smith"]), given), vec!["smith"]);
        assert_eq!(words.remove(&pieces(&["sir", "king"]), given), vec!["king"]);
        assert_eq!(words.remove(&pieces(&["smith", "king"]), given), vec!["smith"]);
        assert_eq!(words.remove(&pieces(&["king", "smith"]), given), vec!["smith"]);
    }

    #[test]
    fn test_surname_connectors_only_between_pieces() {
        let words = default_words();
        let surname = NameKind::Surname;
        assert_eq!(
            words.remove(&pieces(&["garcia", "o", "ochoa"]), surname),
            vec!["garcia", "ochoa"]
        );
        assert_eq!(words.remove(&pieces(&["o", "ochoa"]), surname), vec!["o", "ochoa"]);
        assert_eq!(words.remove(&pieces(&["ochoa", "y"]), surname), vec!["ochoa", "y"]);
    }

    #[test]
    fn test_surname_noise() {
        let words = default_words();
        assert_eq!(words.remove(&pieces(&["ui", "li"]), NameKind::Surname), vec!["li"]);
        assert_eq!(
            words.remove(&pieces(&["ui", "li"]), NameKind::GivenName),
            vec!["ui", "li"]
        );
        assert_eq!(words.remove(&pieces(&["ui"]), NameKind::Surname), vec!["ui"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(default_words().remove(&[], NameKind::Surname).is_empty());
    }

    #[test]
    fn test_filter_wrapper() {
        let filter = NoiseWordFilter::new(Arc::new(default_words()), NameKind::Surname);
        assert_eq!(
            filter.filter(pieces(&["sir", "jones", "king"])),
            vec!["jones"]
        );
        assert_eq!(filter.name(), "noise_words");
    }
}
