//! Token filter implementations for token transformation.
//!
//! Filters receive a lazy token stream and produce a new one. They can modify,
//! remove, or rewrite tokens.
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`part_of_speech::PartOfSpeechFilter`] - Keeps content words and replaces them by lemmas
//! - [`stop::StopFilter`] - Removes stop words
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Lowercase → PartOfSpeech (lemmatize) → Stop Words → dedup + sort
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
///
/// The returned stream may borrow the filter, which keeps filtering lazy.
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use lexnorm::analysis::token::TokenStream;
/// use lexnorm::analysis::token_filter::Filter;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> TokenStream<'a> {
///         Box::new(tokens.map(|t| {
///             let reversed: String = t.text.chars().rev().collect();
///             t.rewrite(reversed)
///         }))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> TokenStream<'a>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod lowercase;
pub mod part_of_speech;
pub mod stop;

pub use lowercase::LowercaseFilter;
pub use part_of_speech::PartOfSpeechFilter;
pub use stop::StopFilter;
