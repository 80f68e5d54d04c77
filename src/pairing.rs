//! Pairing of name pieces between two variants of a name.
//!
//! Every combination of a piece from the name and a piece from the alternate
//! name is scored with [`similarity`]. The best-scoring combination of two
//! unused pieces is selected repeatedly until one side runs out, so the number
//! of pairs is the length of the shorter side. Unmatched pieces are dropped.
//!
//! Selection is greedy, not an optimal assignment. Ties go to the combination
//! whose name piece comes first, then whose alternate piece comes first, and
//! the output is ordered by descending score with the same tie-breaking.
//!
//! # Examples
//!
//! ```
//! use nomina::pairing::match_name_pairs;
//!
//! let name = vec!["john".to_string(), "smith".to_string()];
//! let alt = vec!["jan".to_string(), "smythe".to_string(), "brown".to_string()];
//!
//! let pairs = match_name_pairs(&name, &alt);
//! assert_eq!(
//!     pairs,
//!     vec![
//!         ("smith".to_string(), "smythe".to_string()),
//!         ("john".to_string(), "jan".to_string()),
//!     ]
//! );
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::similarity::similarity;

/// A matched pair of pieces with its similarity score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchPair {
    /// Piece from the name.
    pub name_piece: String,
    /// Piece from the alternate name.
    pub alt_piece: String,
    /// Similarity of the two pieces.
    pub score: f64,
    /// Position of `name_piece` in the name.
    #[serde(skip)]
    name_index: usize,
}

impl MatchPair {
    pub fn into_tuple(self) -> (String, String) {
        (self.name_piece, self.alt_piece)
    }
}

struct Candidate {
    name_index: usize,
    alt_index: usize,
    score: f64,
}

/// Greedily pair pieces, returning the pairs with their scores.
pub fn match_name_pairs_scored(name_pieces: &[String], alt_pieces: &[String]) -> Vec<MatchPair> {
    let mut candidates: Vec<Candidate> = Vec::with_capacity(name_pieces.len() * alt_pieces.len());
    for (name_index, name_piece) in name_pieces.iter().enumerate() {
        for (alt_index, alt_piece) in alt_pieces.iter().enumerate() {
            candidates.push(Candidate {
                name_index,
                alt_index,
                score: similarity(name_piece, alt_piece),
            });
        }
    }

    // Stable sort keeps row-major order among equal scores.
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let wanted = name_pieces.len().min(alt_pieces.len());
    let mut name_used = vec![false; name_pieces.len()];
    let mut alt_used = vec![false; alt_pieces.len()];
    let mut pairs = Vec::with_capacity(wanted);

    for candidate in candidates {
        if pairs.len() == wanted {
            break;
        }
        if name_used[candidate.name_index] || alt_used[candidate.alt_index] {
            continue;
        }
        name_used[candidate.name_index] = true;
        alt_used[candidate.alt_index] = true;
        pairs.push(MatchPair {
            name_piece: name_pieces[candidate.name_index].clone(),
            alt_piece: alt_pieces[candidate.alt_index].clone(),
            score: candidate.score,
            name_index: candidate.name_index,
        });
    }

    pairs.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.name_index.cmp(&b.name_index))
    });
    pairs
}

/// Greedily pair pieces of two name variants, most similar first.
pub fn match_name_pairs(name_pieces: &[String], alt_pieces: &[String]) -> Vec<(String, String)> {
    match_name_pairs_scored(name_pieces, alt_pieces)
        .into_iter()
        .map(MatchPair::into_tuple)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_string(), b.to_string())
    }

    #[test]
    fn test_match_name_pairs() {
        let pairs = match_name_pairs(
            &pieces(&["john", "smith"]),
            &pieces(&["jan", "smythe", "brown"]),
        );
        assert_eq!(pairs, vec![pair("smith", "smythe"), pair("john", "jan")]);
    }

    #[test]
    fn test_scores_are_reported() {
        let pairs = match_name_pairs_scored(&pieces(&["smith"]), &pieces(&["smyth"]));
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].score, 0.8);
    }

    #[test]
    fn test_best_pair_is_selected_first() {
        // "ab" would also score well against "abc", but "abcd" claims it first.
        let pairs = match_name_pairs(&pieces(&["abcd", "ab"]), &pieces(&["abc", "zzzz"]));
        assert_eq!(pairs, vec![pair("abcd", "abc"), pair("ab", "zzzz")]);
    }

    #[test]
    fn test_ties_follow_name_order() {
        let pairs = match_name_pairs(&pieces(&["ab", "cd"]), &pieces(&["cd", "ab"]));
        assert_eq!(pairs, vec![pair("ab", "ab"), pair("cd", "cd")]);

        // Equal scores everywhere: first name piece takes first alt piece.
        let pairs = match_name_pairs(&pieces(&["x", "y"]), &pieces(&["p", "q"]));
        assert_eq!(pairs, vec![pair("x", "p"), pair("y", "q")]);
    }

    #[test]
    fn test_empty_sides() {
        assert!(match_name_pairs(&[], &pieces(&["a"])).is_empty());
        assert!(match_name_pairs(&pieces(&["a"]), &[]).is_empty());
    }

    #[test]
    fn test_duplicate_pieces_are_used_once_each() {
        let pairs = match_name_pairs(&pieces(&["ann", "ann"]), &pieces(&["ann"]));
        assert_eq!(pairs, vec![pair("ann", "ann")]);
    }
}
