//! Name analysis for Nomina.
//!
//! This module turns raw name fields into canonical pieces. It follows the
//! classic analysis-chain layout: char filters normalize the raw string, a
//! tokenizer splits it, and piece filters rewrite the piece sequence.

pub mod char_filter;
pub mod normalizer;
pub mod piece_filter;
pub mod policy;
pub mod tokenizer;
pub mod transliteration;

// Re-export commonly used types
pub use normalizer::Normalizer;
pub use policy::NameKind;
pub use transliteration::{Script, TransliterationTable};
