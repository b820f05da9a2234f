//! Text analysis module for lexnorm.
//!
//! This module provides tokenization, token filtering, morphological
//! classification and the normalization filter that turns a token stream into
//! a canonical, order-independent lemma set.

pub mod analyzer;
pub mod morphology;
pub mod normalizer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer};
pub use morphology::{MorphAnalysis, MorphAnalyzer, MorphClassifier, MorphOverrides};
pub use normalizer::Normalizer;
pub use token::{Token, TokenStream};
pub use token_filter::Filter;
pub use tokenizer::Tokenizer;
