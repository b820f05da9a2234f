//! The immutable resource store shared by every record.
//!
//! A [`ResourceStore`] is loaded once at startup, from a [`ResourceConfig`]
//! and an injected [`MorphAnalyzer`], and is read-only afterwards. Share it
//! between threads behind an `Arc`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use log::debug;

use crate::abbreviation::AbbreviationMap;
use crate::analysis::morphology::{MorphAnalyzer, MorphClassifier, MorphOverrides};
use crate::analysis::token_filter::stop::{
    DEFAULT_EXTRA_STOP_WORDS, DEFAULT_RUSSIAN_STOP_WORDS, StopFilter,
};
use crate::config::ResourceConfig;
use crate::error::{LexnormError, Result};
use crate::pipeline::category::CategoryRules;
use crate::pipeline::features::{DEFAULT_NEGATIONS, DEFAULT_TEMPORAL_MARKERS, FeatureKeywords};
use crate::spelling::corrector::{CorrectorConfig, SpellingCorrector};
use crate::spelling::dictionary::SpellingDictionary;

/// Dictionaries, keyword sets and the morphology capability.
#[derive(Debug)]
pub struct ResourceStore {
    corrector: SpellingCorrector,
    abbreviations: AbbreviationMap,
    classifier: Arc<MorphClassifier>,
    stop_filter: StopFilter,
    keywords: FeatureKeywords,
    category_rules: CategoryRules,
}

impl ResourceStore {
    /// Start building a store around a morphology analyzer.
    pub fn builder(analyzer: Arc<dyn MorphAnalyzer>) -> ResourceStoreBuilder {
        ResourceStoreBuilder::new(analyzer)
    }

    /// Load every resource named by `config`.
    ///
    /// Fails on the first missing, unreadable or malformed resource.
    pub fn load(config: &ResourceConfig, analyzer: Arc<dyn MorphAnalyzer>) -> Result<Self> {
        config.validate()?;

        let dictionary = SpellingDictionary::load_from_frequency_file(config.dictionary_path()?)?;
        let abbreviations = AbbreviationMap::load_from_csv(config.abbreviations_path()?)?;

        let base_stop_words = match &config.stopwords_path {
            Some(path) => load_word_list(path)?,
            None => to_strings(DEFAULT_RUSSIAN_STOP_WORDS),
        };
        let extra_stop_words = match &config.extra_stopwords_path {
            Some(path) => load_word_list(path)?,
            None => to_strings(DEFAULT_EXTRA_STOP_WORDS),
        };
        let negations = match &config.negations_path {
            Some(path) => load_word_list(path)?,
            None => to_strings(DEFAULT_NEGATIONS),
        };
        let temporal_markers = match &config.temporal_markers_path {
            Some(path) => load_word_list(path)?,
            None => to_strings(DEFAULT_TEMPORAL_MARKERS),
        };

        let mut overrides = MorphOverrides::builtin();
        for (surface, analysis) in config.morphology_overrides.iter() {
            overrides.insert(surface.clone(), analysis.clone());
        }

        let store = ResourceStore::builder(analyzer)
            .dictionary(dictionary)
            .corrector_config(config.spelling.clone())
            .abbreviations(abbreviations)
            .stop_filter(StopFilter::from_base_and_extra(base_stop_words, extra_stop_words))
            .keywords(FeatureKeywords::new(negations, temporal_markers))
            .overrides(overrides)
            .category_rules(config.category_rules.clone())
            .build()?;

        debug!(
            "resource store ready: {} terms, {} delete variants, {} abbreviations, {} stop words",
            store.corrector.index().term_count(),
            store.corrector.index().variant_count(),
            store.abbreviations.len(),
            store.stop_filter.len()
        );
        Ok(store)
    }

    pub fn corrector(&self) -> &SpellingCorrector {
        &self.corrector
    }

    pub fn abbreviations(&self) -> &AbbreviationMap {
        &self.abbreviations
    }

    pub fn classifier(&self) -> &Arc<MorphClassifier> {
        &self.classifier
    }

    pub fn stop_filter(&self) -> &StopFilter {
        &self.stop_filter
    }

    pub fn keywords(&self) -> &FeatureKeywords {
        &self.keywords
    }

    pub fn category_rules(&self) -> &CategoryRules {
        &self.category_rules
    }
}

/// Assembles a [`ResourceStore`] from in-memory parts.
///
/// Unset parts default to an empty dictionary and abbreviation map and the
/// built-in word lists and override table.
pub struct ResourceStoreBuilder {
    analyzer: Arc<dyn MorphAnalyzer>,
    dictionary: SpellingDictionary,
    corrector_config: CorrectorConfig,
    abbreviations: AbbreviationMap,
    stop_filter: StopFilter,
    keywords: FeatureKeywords,
    overrides: MorphOverrides,
    category_rules: CategoryRules,
}

impl ResourceStoreBuilder {
    fn new(analyzer: Arc<dyn MorphAnalyzer>) -> Self {
        ResourceStoreBuilder {
            analyzer,
            dictionary: SpellingDictionary::new(),
            corrector_config: CorrectorConfig::default(),
            abbreviations: AbbreviationMap::new(),
            stop_filter: StopFilter::new(),
            keywords: FeatureKeywords::default(),
            overrides: MorphOverrides::builtin(),
            category_rules: CategoryRules::default(),
        }
    }

    pub fn dictionary(mut self, dictionary: SpellingDictionary) -> Self {
        self.dictionary = dictionary;
        self
    }

    pub fn corrector_config(mut self, config: CorrectorConfig) -> Self {
        self.corrector_config = config;
        self
    }

    pub fn abbreviations(mut self, abbreviations: AbbreviationMap) -> Self {
        self.abbreviations = abbreviations;
        self
    }

    pub fn stop_filter(mut self, stop_filter: StopFilter) -> Self {
        self.stop_filter = stop_filter;
        self
    }

    pub fn keywords(mut self, keywords: FeatureKeywords) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn overrides(mut self, overrides: MorphOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn category_rules(mut self, rules: CategoryRules) -> Self {
        self.category_rules = rules;
        self
    }

    /// Build the deletion index and freeze the store.
    pub fn build(self) -> Result<ResourceStore> {
        let corrector = SpellingCorrector::with_config(&self.dictionary, self.corrector_config)?;
        let classifier = MorphClassifier::with_overrides(self.analyzer, self.overrides);
        Ok(ResourceStore {
            corrector,
            abbreviations: self.abbreviations,
            classifier: Arc::new(classifier),
            stop_filter: self.stop_filter,
            keywords: self.keywords,
            category_rules: self.category_rules,
        })
    }
}

/// Read a word list: one entry per line, blank lines and `#` comments skipped.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LexnormError::resource(path, e.to_string()))?;
    let mut words = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| LexnormError::resource(path, e.to_string()))?;
        let word = line.trim();
        if word.is_empty() || word.starts_with('#') {
            continue;
        }
        words.push(word.to_string());
    }
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
