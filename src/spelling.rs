//! Spelling correction for lexnorm.
//!
//! This module maps possibly misspelled words to their most probable
//! dictionary form using a symmetric-deletion index built once over a
//! term/frequency dictionary.

pub mod corrector;
pub mod dictionary;
pub mod levenshtein;
pub mod suggest;
pub mod symspell;

pub use corrector::{CorrectedWords, Correction, CorrectorConfig, SpellingCorrector};
pub use dictionary::{DictionaryEntry, SpellingDictionary};
pub use suggest::Suggestion;
pub use symspell::DeletionIndex;
