//! Sequencing of the derivation stages.

use std::fmt;
use std::sync::Arc;

use log::trace;
use rayon::prelude::*;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::normalizer::Normalizer;
use crate::pipeline::features::Features;
use crate::pipeline::record::AnswerRecord;
use crate::resources::ResourceStore;

/// Stages a record passes through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    RawAnswer,
    CategorySplit,
    WordSplit,
    AbbreviationExpanded,
    SpellCorrected,
    FeatureScan,
    Tokenized,
    Normalized,
    Persisted,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::RawAnswer => "raw_answer",
            Stage::CategorySplit => "category_split",
            Stage::WordSplit => "word_split",
            Stage::AbbreviationExpanded => "abbreviation_expanded",
            Stage::SpellCorrected => "spell_corrected",
            Stage::FeatureScan => "feature_scan",
            Stage::Tokenized => "tokenized",
            Stage::Normalized => "normalized",
            Stage::Persisted => "persisted",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derives [`AnswerRecord`]s from raw answers against a shared store.
#[derive(Debug, Clone)]
pub struct Pipeline {
    store: Arc<ResourceStore>,
    analyzer: PipelineAnalyzer,
    normalizer: Normalizer,
}

impl Pipeline {
    pub fn new(store: Arc<ResourceStore>) -> Self {
        let normalizer = Normalizer::new(store.classifier().clone(), store.stop_filter().clone());
        Pipeline {
            store,
            analyzer: PipelineAnalyzer::survey(),
            normalizer,
        }
    }

    pub fn store(&self) -> &Arc<ResourceStore> {
        &self.store
    }

    /// Derive the full record of one answer.
    pub fn derive(&self, raw: &str) -> AnswerRecord {
        let store = &self.store;
        trace!("{}: {:?}", Stage::RawAnswer, raw);

        let selected = store.category_rules().select(raw);
        trace!("{}: {:?}", Stage::CategorySplit, selected);

        let words: Vec<&str> = selected.split_whitespace().collect();
        trace!("{}: {:?}", Stage::WordSplit, words);

        let expanded = store.abbreviations().expand(&words);
        trace!("{}: {:?}", Stage::AbbreviationExpanded, expanded);

        let corrected = store.corrector().correct_words(&expanded);
        trace!(
            "{}: {:?} ({} out of vocabulary)",
            Stage::SpellCorrected,
            corrected.words,
            corrected.out_of_vocabulary
        );

        let features = Features::scan(&corrected.words, store.keywords(), store.classifier());
        trace!("{}: {:?}", Stage::FeatureScan, features);

        let joined = corrected.words.join(" ");
        let tokens: Vec<_> = self.analyzer.analyze(&joined).collect();
        let token_texts: Vec<String> = tokens.iter().map(|t| t.text.clone()).collect();
        trace!("{}: {:?}", Stage::Tokenized, token_texts);

        let normalized = self.normalizer.normalize(Box::new(tokens.into_iter()));
        trace!("{}: {:?}", Stage::Normalized, normalized);

        let record = AnswerRecord {
            raw: raw.to_string(),
            selected,
            corrected: corrected.words,
            out_of_vocabulary: corrected.out_of_vocabulary,
            word_count: features.word_count,
            verb_count: features.verb_count,
            has_negation: features.has_negation,
            has_temporal: features.has_temporal,
            tokens: token_texts,
            normalized,
        };
        trace!("{}", Stage::Persisted);
        record
    }

    /// Derive records for many answers in parallel, preserving input order.
    pub fn derive_batch<S: AsRef<str> + Sync>(&self, answers: &[S]) -> Vec<AnswerRecord> {
        answers
            .par_iter()
            .map(|answer| self.derive(answer.as_ref()))
            .collect()
    }
}
