//! Analyzers combine a tokenizer with a chain of token filters.
//!
//! ```text
//! text → Tokenizer → Filter 1 → Filter 2 → ... → TokenStream
//! ```

use crate::analysis::token::TokenStream;

pub mod pipeline;

pub use pipeline::PipelineAnalyzer;

/// Trait for analyzers that turn raw text into a filtered token stream.
///
/// The trait requires `Send + Sync` so one analyzer can serve every worker
/// thread of a batch.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a lazy stream of tokens.
    fn analyze<'a>(&'a self, text: &'a str) -> TokenStream<'a>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;
}
