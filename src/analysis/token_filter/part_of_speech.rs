//! Part-of-speech filter implementation.
//!
//! Keeps only content words (nouns, full and short adjectives) and replaces
//! each kept token by its lemma. Classification goes through a
//! [`MorphClassifier`], so the override table applies here exactly as it does
//! when verbs are counted.

use std::sync::Arc;

use crate::analysis::morphology::MorphClassifier;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// A filter that keeps nouns and adjectives and lemmatizes them.
#[derive(Clone, Debug)]
pub struct PartOfSpeechFilter {
    classifier: Arc<MorphClassifier>,
}

impl PartOfSpeechFilter {
    pub fn new(classifier: Arc<MorphClassifier>) -> Self {
        PartOfSpeechFilter { classifier }
    }
}

impl Filter for PartOfSpeechFilter {
    fn filter<'a>(&'a self, tokens: TokenStream<'a>) -> TokenStream<'a> {
        Box::new(tokens.filter_map(move |token| {
            let analysis = self.classifier.classify(&token.text);
            analysis
                .is_content_word()
                .then(|| token.rewrite(analysis.lemma))
        }))
    }

    fn name(&self) -> &'static str {
        "part_of_speech"
    }
}
