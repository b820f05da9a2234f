//! Normalization of an analyzed token sequence into a canonical lemma set.
//!
//! Content words are lemmatized, stop lemmas are removed, and the remainder is
//! deduplicated and sorted, so two answers that use the same content words in
//! a different order, or repeat them, normalize to the same sequence.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::analysis::morphology::MorphClassifier;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::part_of_speech::PartOfSpeechFilter;
use crate::analysis::token_filter::stop::StopFilter;

/// Turns a token stream into a strictly increasing sequence of lemmas.
#[derive(Clone)]
pub struct Normalizer {
    filters: Vec<Arc<dyn Filter>>,
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Normalizer {
    /// Part-of-speech filtering and lemmatization followed by stop word removal.
    pub fn new(classifier: Arc<MorphClassifier>, stop_filter: StopFilter) -> Self {
        Normalizer {
            filters: vec![
                Arc::new(PartOfSpeechFilter::new(classifier)),
                Arc::new(stop_filter),
            ],
        }
    }

    /// Normalize a token stream: filter, dedup, sort.
    pub fn normalize<'a>(&'a self, tokens: TokenStream<'a>) -> Vec<String> {
        let mut tokens = tokens;
        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }
        tokens
            .map(|token| token.text)
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect()
    }
}
