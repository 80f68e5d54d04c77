//! Edit-distance similarity between name pieces.
//!
//! Similarity is `1 - distance / max(len(a), len(b))`, where distance is the
//! Levenshtein distance with unit-cost insertions, deletions and substitutions
//! and lengths count characters, not bytes. Two empty strings are identical.
//!
//! Cost is quadratic in the piece lengths; name pieces are short enough that
//! no early termination is attempted.
//!
//! # Examples
//!
//! ```
//! use nomina::similarity::{edit_distance, similarity};
//!
//! assert_eq!(edit_distance("smith", "smyth"), 1);
//! assert_eq!(similarity("smith", "smyth"), 0.8);
//! assert_eq!(similarity("john", "jan"), 0.5);
//! ```

use std::cmp::min;

/// Levenshtein distance between two strings, counted in characters.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two rows of the distance matrix are enough.
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = min(min(previous[j + 1] + 1, current[j] + 1), substitution);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Normalized similarity in `[0, 1]`; `1.0` means identical strings.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - edit_distance(a, b) as f64 / longest as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("john", "jan"), 2);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("same", "same"), 0);
    }

    #[test]
    fn test_edit_distance_counts_characters() {
        assert_eq!(edit_distance("josé", "jose"), 1);
        assert_eq!(edit_distance("王", "李"), 1);
    }

    #[test]
    fn test_similarity() {
        assert_eq!(similarity("smith", "smyth"), 0.8);
        assert_eq!(similarity("john", "jan"), 0.5);
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_similarity_of_empty_strings() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("", "a"), 0.0);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        for (a, b) in [("smith", "smythe"), ("jan", "johannes"), ("", "x")] {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }
}
