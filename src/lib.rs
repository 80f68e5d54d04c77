//! # Nomina
//!
//! Canonicalization and pairing of genealogical personal names.
//!
//! ## Features
//!
//! - Script-aware transliteration to Latin, with pinyin for CJK
//! - Surname prefix merging and noise-word removal driven by vocabularies
//! - Edit-distance similarity between name pieces
//! - Greedy piece pairing for training-pair extraction
//! - Parallel bulk processing of CSV record files

pub mod analysis;
pub mod batch;
pub mod cli;
pub mod error;
pub mod pairing;
pub mod similarity;
pub mod vocabulary;

pub mod prelude {
    pub use crate::analysis::normalizer::Normalizer;
    pub use crate::analysis::policy::NameKind;
    pub use crate::error::{NominaError, Result};
    pub use crate::pairing::{MatchPair, match_name_pairs, match_name_pairs_scored};
    pub use crate::similarity::{edit_distance, similarity};
    pub use crate::vocabulary::NameVocabulary;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
