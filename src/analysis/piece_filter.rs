//! Piece filter implementations for name piece sequences.
//!
//! Piece filters receive the tokenizer's output and produce a new piece
//! sequence, modifying, removing or fusing pieces. Unlike char filters they see
//! token boundaries, so all rules that depend on a piece's neighbours live here.
//!
//! # Available Filters
//!
//! - [`digits::DigitFilter`] - Drops numeric noise, strips embedded digits
//! - [`initials::InitialRunFilter`] - Fuses runs of single-letter surname pieces
//! - [`prefix::PrefixMerger`] - Fuses surname prefixes with the following piece
//! - [`noise::NoiseWordFilter`] - Removes titles, particles and connectors
//! - [`collapse::LeadingInitialFilter`] - Fuses a leading initial into a two-piece surname
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Digits → [Initials → Prefixes] → Noise words → [Leading initial]
//! ```
//!
//! Bracketed stages only run for surnames; see
//! [`policy`](crate::analysis::policy).

/// Trait for filters that transform a sequence of name pieces.
///
/// Filters are total functions over owned piece sequences and must be
/// `Send + Sync` so that a normalizer can be shared across threads.
///
/// # Examples
///
/// ```
/// use nomina::analysis::piece_filter::PieceFilter;
///
/// struct ReverseFilter;
///
/// impl PieceFilter for ReverseFilter {
///     fn filter(&self, mut pieces: Vec<String>) -> Vec<String> {
///         pieces.reverse();
///         pieces
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
///
/// let pieces = vec!["john".to_string(), "smith".to_string()];
/// assert_eq!(ReverseFilter.filter(pieces), vec!["smith", "john"]);
/// ```
pub trait PieceFilter: Send + Sync {
    /// Apply this filter to a piece sequence.
    fn filter(&self, pieces: Vec<String>) -> Vec<String>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Whether a piece is exactly one character long.
pub(crate) fn is_single_letter(piece: &str) -> bool {
    let mut chars = piece.chars();
    chars.next().is_some() && chars.next().is_none()
}

pub mod collapse;
pub mod digits;
pub mod initials;
pub mod noise;
pub mod prefix;
