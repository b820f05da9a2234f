//! Lowercase filter implementation.
//!
//! # Examples
//!
//! ```
//! use lexnorm::analysis::token_filter::Filter;
//! use lexnorm::analysis::token_filter::lowercase::LowercaseFilter;
//! use lexnorm::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Повар", 0), Token::new("IT", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(filtered[0].text, "повар");
//! assert_eq!(filtered[1].text, "it");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// A filter that converts tokens to lowercase using Unicode case mapping.
///
/// Positions and offsets are preserved.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> TokenStream<'a> {
        Box::new(tokens.map(|mut token| {
            token.text = token.text.to_lowercase();
            token
        }))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
