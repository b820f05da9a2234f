//! Scalar features computed over the corrected word sequence.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::analysis::morphology::MorphClassifier;

/// Default negation keywords.
pub const DEFAULT_NEGATIONS: &[&str] = &["не", "ни", "нет", "без"];

/// Default past and future markers.
pub const DEFAULT_TEMPORAL_MARKERS: &[&str] = &[
    "был",
    "была",
    "было",
    "были",
    "бывший",
    "бывшая",
    "бывшее",
    "бывшие",
    "раньше",
    "ранее",
    "прежде",
    "когда-то",
    "буду",
    "будет",
    "будем",
    "будут",
    "будущий",
    "будущая",
    "планирую",
    "планируем",
    "собираюсь",
    "скоро",
];

/// Keyword sets the feature scan tests words against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureKeywords {
    negations: AHashSet<String>,
    temporal_markers: AHashSet<String>,
}

impl Default for FeatureKeywords {
    fn default() -> Self {
        FeatureKeywords::new(
            DEFAULT_NEGATIONS.iter().copied(),
            DEFAULT_TEMPORAL_MARKERS.iter().copied(),
        )
    }
}

impl FeatureKeywords {
    pub fn new<I, J, S, T>(negations: I, temporal_markers: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        FeatureKeywords {
            negations: negations.into_iter().map(Into::into).collect(),
            temporal_markers: temporal_markers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    pub fn is_temporal_marker(&self, word: &str) -> bool {
        self.temporal_markers.contains(word)
    }

    pub fn negation_count(&self) -> usize {
        self.negations.len()
    }

    pub fn temporal_marker_count(&self) -> usize {
        self.temporal_markers.len()
    }
}

/// Features of one answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Features {
    pub word_count: usize,
    pub verb_count: usize,
    pub has_negation: bool,
    pub has_temporal: bool,
}

impl Features {
    /// Scan a word sequence. Keyword membership is exact.
    pub fn scan<S: AsRef<str>>(
        words: &[S],
        keywords: &FeatureKeywords,
        classifier: &MorphClassifier,
    ) -> Self {
        Features {
            word_count: words.len(),
            verb_count: classifier.count_verbs(words),
            has_negation: words.iter().any(|w| keywords.is_negation(w.as_ref())),
            has_temporal: words.iter().any(|w| keywords.is_temporal_marker(w.as_ref())),
        }
    }
}
