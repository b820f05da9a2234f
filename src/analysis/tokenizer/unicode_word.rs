//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word
//! boundary rules (UAX #29) and keeps only word-shaped tokens: runs of
//! letters, digits, underscores and hyphens at least two characters long.
//! Hyphenated compounds written without spaces (`IT-специалист`) stay a
//! single token.
//!
//! # Examples
//!
//! ```
//! use lexnorm::analysis::tokenizer::Tokenizer;
//! use lexnorm::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("IT-специалист, т.д. и 1С!").collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "IT-специалист");
//! assert_eq!(tokens[1].text, "1С");
//! ```

use std::collections::VecDeque;
use std::iter::Peekable;
use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::{UWordBoundIndices, UnicodeSegmentation};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;

/// Default shape of a kept token.
static WORD_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\w-]{2,}").expect("word shape pattern is valid")
});

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug)]
pub struct UnicodeWordTokenizer {
    shape: Regex,
}

impl Default for UnicodeWordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer with the default word shape.
    pub fn new() -> Self {
        UnicodeWordTokenizer {
            shape: WORD_SHAPE.clone(),
        }
    }

    /// Create a tokenizer keeping only matches of a custom word shape.
    pub fn with_shape(shape: Regex) -> Self {
        UnicodeWordTokenizer { shape }
    }
}

fn is_word_segment(segment: &str) -> bool {
    segment.chars().any(|c| c.is_alphanumeric())
}

fn is_hyphen_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c == '-')
}

/// Lazy iterator over word-shaped tokens.
struct WordShapeTokens<'a> {
    text: &'a str,
    shape: &'a Regex,
    segments: Peekable<UWordBoundIndices<'a>>,
    pending: VecDeque<(usize, usize)>,
    position: usize,
}

impl<'a> WordShapeTokens<'a> {
    /// Pull the next span of word segments glued by hyphens and queue the
    /// word-shaped pieces inside it. Returns false when the text is exhausted.
    fn fill(&mut self) -> bool {
        loop {
            let Some((start, segment)) = self.segments.next() else {
                return false;
            };
            if !is_word_segment(segment) {
                continue;
            }

            let mut end = start + segment.len();
            while let Some(&(next_start, next)) = self.segments.peek() {
                if next_start != end || !(is_word_segment(next) || is_hyphen_segment(next)) {
                    break;
                }
                end += next.len();
                self.segments.next();
            }

            let span = &self.text[start..end];
            self.pending.extend(
                self.shape
                    .find_iter(span)
                    .map(|m| (start + m.start(), start + m.end())),
            );
            if !self.pending.is_empty() {
                return true;
            }
        }
    }
}

impl Iterator for WordShapeTokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.pending.is_empty() && !self.fill() {
            return None;
        }
        let (start, end) = self.pending.pop_front()?;
        let token = Token::with_offsets(&self.text[start..end], self.position, start, end);
        self.position += 1;
        Some(token)
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize<'a>(&'a self, text: &'a str) -> TokenStream<'a> {
        Box::new(WordShapeTokens {
            text,
            shape: &self.shape,
            segments: text.split_word_bound_indices().peekable(),
            pending: VecDeque::new(),
            position: 0,
        })
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
