//! Surname prefix merging.
//!
//! Compound surnames are written with their particles split off as often as
//! not (`"van der leek"`, `"vander leek"`, `"vanderleek"`). Fusing every run of
//! prefixes with the piece that follows gives all spellings the same pieces.
//!
//! # Examples
//!
//! ```
//! use nomina::analysis::piece_filter::prefix::PrefixMerger;
//!
//! let merger = PrefixMerger::new(["van", "der", "de la"]);
//! let pieces = vec!["van".to_string(), "der".to_string(), "leek".to_string()];
//! assert_eq!(merger.merge(&pieces), vec!["vanderleek"]);
//! ```

use ahash::AHashSet;

use super::PieceFilter;
use crate::vocabulary::NameVocabulary;

/// Fuses contiguous runs of surname prefixes with the following piece.
#[derive(Clone, Debug, Default)]
pub struct PrefixMerger {
    entries: AHashSet<Vec<String>>,
    longest: usize,
}

impl PrefixMerger {
    /// Build a merger from prefix entries; multi-token entries are space-separated.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_sequences(
            prefixes
                .into_iter()
                .map(|p| p.as_ref().split_whitespace().map(str::to_string).collect()),
        )
    }

    /// Build a merger from the vocabulary's prefix entries.
    pub fn from_vocabulary(vocabulary: &NameVocabulary) -> Self {
        Self::from_sequences(vocabulary.prefix_sequences())
    }

    fn from_sequences<I: IntoIterator<Item = Vec<String>>>(sequences: I) -> Self {
        let entries: AHashSet<Vec<String>> =
            sequences.into_iter().filter(|s| !s.is_empty()).collect();
        let longest = entries.iter().map(Vec::len).max().unwrap_or(0);
        PrefixMerger { entries, longest }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the longest prefix entry starting at `pieces[start]`.
    fn prefix_len_at(&self, pieces: &[String], start: usize) -> Option<usize> {
        let available = pieces.len() - start;
        (1..=self.longest.min(available))
            .rev()
            .find(|&len| self.entries.contains(&pieces[start..start + len]))
    }

    /// Fuse prefix runs with the following piece.
    ///
    /// A run left over at the end of the sequence becomes a piece of its own.
    /// Character content is preserved; only piece boundaries move.
    pub fn merge(&self, pieces: &[String]) -> Vec<String> {
        let mut merged = Vec::with_capacity(pieces.len());
        let mut run = String::new();
        let mut i = 0;

        while i < pieces.len() {
            if let Some(len) = self.prefix_len_at(pieces, i) {
                for prefix in &pieces[i..i + len] {
                    run.push_str(prefix);
                }
                i += len;
                continue;
            }

            if run.is_empty() {
                merged.push(pieces[i].clone());
            } else {
                run.push_str(&pieces[i]);
                merged.push(std::mem::take(&mut run));
            }
            i += 1;
        }

        if !run.is_empty() {
            merged.push(run);
        }

        merged
    }
}

impl PieceFilter for PrefixMerger {
    fn filter(&self, pieces: Vec<String>) -> Vec<String> {
        self.merge(&pieces)
    }

    fn name(&self) -> &'static str {
        "prefix_merge"
    }
}
