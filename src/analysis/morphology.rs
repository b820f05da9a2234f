//! Morphological classification of surface tokens.
//!
//! Part-of-speech and lemma decisions are delegated to a [`MorphAnalyzer`]
//! capability injected at startup. [`MorphClassifier`] wraps an analyzer with
//! an explicit override table consulted first, for surface forms whose
//! top-ranked parse is known to be wrong.
//!
//! Tags follow the OpenCorpora grammeme names (`NOUN`, `ADJF`, `ADJS`,
//! `VERB`, `INFN`, ...).

use std::collections::BTreeSet;
use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

pub mod dictionary;

pub use dictionary::DictionaryMorphAnalyzer;

/// Grammeme names consumers test for.
pub mod tags {
    pub const NOUN: &str = "NOUN";
    /// Full adjective form
    pub const ADJF: &str = "ADJF";
    /// Short adjective form
    pub const ADJS: &str = "ADJS";
    /// Finite verb form
    pub const VERB: &str = "VERB";
    /// Infinitive
    pub const INFN: &str = "INFN";
}

/// The top-ranked parse of a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphAnalysis {
    pub lemma: String,
    pub tags: BTreeSet<String>,
}

impl MorphAnalysis {
    pub fn new<S, I, T>(lemma: S, tags: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        MorphAnalysis {
            lemma: lemma.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Analysis used when the analyzer knows nothing about a token.
    pub fn unknown<S: Into<String>>(word: S) -> Self {
        MorphAnalysis {
            lemma: word.into(),
            tags: BTreeSet::new(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Finite verb or infinitive.
    pub fn is_verb(&self) -> bool {
        self.has_tag(tags::VERB) || self.has_tag(tags::INFN)
    }

    /// Noun or adjective (full or short form).
    pub fn is_content_word(&self) -> bool {
        self.has_tag(tags::NOUN) || self.has_tag(tags::ADJF) || self.has_tag(tags::ADJS)
    }
}

/// A morphological analyzer capability.
///
/// Implementations return their best parse, or `None` when the token is not
/// known at all. Implementations must be deterministic.
pub trait MorphAnalyzer: Send + Sync {
    /// Analyze a single token and return its top-ranked parse.
    fn analyze(&self, token: &str) -> Option<MorphAnalysis>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Surface forms whose analysis is fixed regardless of the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MorphOverrides {
    entries: AHashMap<String, MorphAnalysis>,
}

impl MorphOverrides {
    /// An empty override table.
    pub fn empty() -> Self {
        MorphOverrides::default()
    }

    /// The default table: profession nouns the analyzer's top parse treats as
    /// verb derivations.
    pub fn builtin() -> Self {
        MorphOverrides::empty().with_noun("слесарь")
    }

    /// Add or replace an override.
    pub fn with_override<S: Into<String>>(mut self, surface: S, analysis: MorphAnalysis) -> Self {
        self.insert(surface, analysis);
        self
    }

    /// Force `surface` to be a noun with itself as the lemma.
    pub fn with_noun<S: Into<String>>(self, surface: S) -> Self {
        let surface = surface.into();
        let analysis = MorphAnalysis::new(surface.clone(), [tags::NOUN]);
        self.with_override(surface, analysis)
    }

    pub fn insert<S: Into<String>>(&mut self, surface: S, analysis: MorphAnalysis) {
        self.entries.insert(surface.into(), analysis);
    }

    pub fn get(&self, surface: &str) -> Option<&MorphAnalysis> {
        self.entries.get(surface)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MorphAnalysis)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Classifies tokens, consulting the override table before the analyzer.
#[derive(Clone)]
pub struct MorphClassifier {
    analyzer: Arc<dyn MorphAnalyzer>,
    overrides: MorphOverrides,
}

impl std::fmt::Debug for MorphClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MorphClassifier")
            .field("analyzer", &self.analyzer.name())
            .field("overrides", &self.overrides.len())
            .finish()
    }
}

impl MorphClassifier {
    /// Create a classifier with the built-in override table.
    pub fn new(analyzer: Arc<dyn MorphAnalyzer>) -> Self {
        Self::with_overrides(analyzer, MorphOverrides::builtin())
    }

    pub fn with_overrides(analyzer: Arc<dyn MorphAnalyzer>, overrides: MorphOverrides) -> Self {
        MorphClassifier {
            analyzer,
            overrides,
        }
    }

    pub fn overrides(&self) -> &MorphOverrides {
        &self.overrides
    }

    /// Classify a token. Never fails: unknown tokens get no tags and
    /// themselves as the lemma.
    pub fn classify(&self, token: &str) -> MorphAnalysis {
        if let Some(analysis) = self.overrides.get(token) {
            return analysis.clone();
        }
        self.analyzer
            .analyze(token)
            .unwrap_or_else(|| MorphAnalysis::unknown(token))
    }

    /// Number of words whose analysis is a finite verb or an infinitive.
    pub fn count_verbs<S: AsRef<str>>(&self, words: &[S]) -> usize {
        words
            .iter()
            .filter(|word| self.classify(word.as_ref()).is_verb())
            .count()
    }
}
