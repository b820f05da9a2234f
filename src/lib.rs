//! # lexnorm
//!
//! Lexical normalization of free-text survey answers about professions.
//!
//! ## Features
//!
//! - Abbreviation expansion from a `;`-separated table
//! - Symmetric-deletion spelling correction against a domain dictionary
//! - Unicode word tokenization
//! - Morphological classification behind a pluggable analyzer, with overrides
//! - Canonical lemma sets with stop word removal
//! - Per-answer feature scan (word and verb counts, negation, temporal markers)
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use lexnorm::abbreviation::AbbreviationMap;
//! use lexnorm::analysis::morphology::{DictionaryMorphAnalyzer, MorphAnalysis, tags};
//! use lexnorm::pipeline::Pipeline;
//! use lexnorm::resources::ResourceStore;
//! use lexnorm::spelling::{DictionaryEntry, SpellingDictionary};
//!
//! let analyzer = DictionaryMorphAnalyzer::from_entries([
//!     ("электрик", MorphAnalysis::new("электрик", [tags::NOUN])),
//! ]);
//! let store = ResourceStore::builder(Arc::new(analyzer))
//!     .dictionary(SpellingDictionary::from_entries([DictionaryEntry::new("электрик", 5)]))
//!     .abbreviations(AbbreviationMap::new())
//!     .build()
//!     .unwrap();
//!
//! let pipeline = Pipeline::new(Arc::new(store));
//! let record = pipeline.derive("элетрик");
//! assert_eq!(record.corrected, vec!["электрик"]);
//! assert_eq!(record.normalized, vec!["электрик"]);
//! ```

pub mod abbreviation;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod resources;
pub mod spelling;

pub mod prelude {
    pub use crate::abbreviation::AbbreviationMap;
    pub use crate::analysis::morphology::{MorphAnalysis, MorphAnalyzer};
    pub use crate::config::ResourceConfig;
    pub use crate::error::{LexnormError, Result};
    pub use crate::pipeline::{AnswerRecord, Pipeline};
    pub use crate::resources::ResourceStore;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
