//! Per-answer derivation pipeline.
//!
//! Each raw answer moves through a fixed sequence of stages:
//!
//! ```text
//! RawAnswer -> CategorySplit -> WordSplit -> AbbreviationExpanded
//!   -> SpellCorrected -> FeatureScan -> Tokenized -> Normalized -> Persisted
//! ```
//!
//! Derivation is total and depends only on the answer and the shared
//! [`ResourceStore`](crate::resources::ResourceStore).

pub mod category;
pub mod features;
pub mod orchestrator;
pub mod record;

pub use category::CategoryRules;
pub use features::{FeatureKeywords, Features};
pub use orchestrator::{Pipeline, Stage};
pub use record::{AnswerRecord, OUTPUT_COLUMNS};
