//! Single-best spelling correction over a deletion index.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::{LexnormError, Result};
use crate::spelling::dictionary::SpellingDictionary;
use crate::spelling::suggest::Suggestion;
use crate::spelling::symspell::DeletionIndex;

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Maximum edit distance for candidates (K).
    pub max_edit_distance: usize,
    /// Number of leading characters delete-variants are generated from (P).
    pub prefix_length: usize,
    /// Words of at most this many characters are never corrected and always
    /// counted as out-of-vocabulary.
    pub short_word_length: usize,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            max_edit_distance: 3,
            prefix_length: 7,
            short_word_length: 3,
        }
    }
}

impl CorrectorConfig {
    /// Reject constant combinations the deletion index cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_edit_distance == 0 {
            return Err(LexnormError::config("max_edit_distance must be at least 1"));
        }
        if self.prefix_length <= self.max_edit_distance {
            return Err(LexnormError::config(format!(
                "prefix_length ({}) must be greater than max_edit_distance ({})",
                self.prefix_length, self.max_edit_distance
            )));
        }
        Ok(())
    }
}

/// Result of correcting a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// The accepted dictionary term, or the original word when not accepted.
    pub term: String,
    /// Whether a dictionary term with non-zero frequency was selected.
    pub accepted: bool,
}

impl Correction {
    fn out_of_vocabulary(word: &str) -> Self {
        Correction {
            term: word.to_string(),
            accepted: false,
        }
    }
}

/// Result of correcting a word sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectedWords {
    pub words: Vec<String>,
    /// Number of words for which no correction was accepted.
    pub out_of_vocabulary: usize,
}

/// Spelling corrector answering "closest" queries.
///
/// Immutable once built and safe to share between threads.
#[derive(Debug, Clone)]
pub struct SpellingCorrector {
    index: DeletionIndex,
    config: CorrectorConfig,
}

impl SpellingCorrector {
    /// Create a corrector with the default configuration.
    pub fn new(dictionary: &SpellingDictionary) -> Self {
        let config = CorrectorConfig::default();
        let index = DeletionIndex::build(dictionary, config.max_edit_distance, config.prefix_length);
        SpellingCorrector { index, config }
    }

    /// Create a corrector with a custom configuration.
    pub fn with_config(dictionary: &SpellingDictionary, config: CorrectorConfig) -> Result<Self> {
        config.validate()?;
        let index = DeletionIndex::build(dictionary, config.max_edit_distance, config.prefix_length);
        Ok(SpellingCorrector { index, config })
    }

    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    pub fn index(&self) -> &DeletionIndex {
        &self.index
    }

    fn is_short(&self, word: &str) -> bool {
        word.chars().count() <= self.config.short_word_length
    }

    /// All candidates within the edit-distance bound, best first.
    ///
    /// Short words yield no candidates. When nothing in the dictionary is close
    /// enough the word itself is returned as a zero-frequency candidate.
    pub fn lookup(&self, word: &str) -> Vec<Suggestion> {
        if self.is_short(word) {
            return Vec::new();
        }
        let suggestions = self.index.lookup(word);
        if suggestions.is_empty() {
            vec![Suggestion::unknown(word, self.config.max_edit_distance)]
        } else {
            suggestions
        }
    }

    /// Correct a single word.
    pub fn correct(&self, word: &str) -> Correction {
        if self.is_short(word) {
            return Correction::out_of_vocabulary(word);
        }

        let best = self
            .index
            .lookup(word)
            .into_iter()
            .next()
            .unwrap_or_else(|| Suggestion::unknown(word, self.config.max_edit_distance));

        if best.frequency > 0 {
            if best.term != word {
                trace!("corrected '{}' -> '{}' (distance {})", word, best.term, best.distance);
            }
            Correction {
                term: best.term,
                accepted: true,
            }
        } else {
            Correction::out_of_vocabulary(word)
        }
    }

    /// Correct every word of a sequence and count the out-of-vocabulary ones.
    pub fn correct_words<S: AsRef<str>>(&self, words: &[S]) -> CorrectedWords {
        let mut result = CorrectedWords::default();
        for word in words {
            let correction = self.correct(word.as_ref());
            if !correction.accepted {
                result.out_of_vocabulary += 1;
            }
            result.words.push(correction.term);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::dictionary::DictionaryEntry;

    fn corrector(entries: &[(&str, u64)]) -> SpellingCorrector {
        let dictionary = SpellingDictionary::from_entries(
            entries
                .iter()
                .map(|(term, freq)| DictionaryEntry::new(*term, *freq)),
        );
        SpellingCorrector::new(&dictionary)
    }

    #[test]
    fn test_corrects_single_deletion() {
        let c = corrector(&[("электрик", 5)]);
        assert_eq!(
            c.correct("элетрик"),
            Correction {
                term: "электрик".to_string(),
                accepted: true
            }
        );
    }

    #[test]
    fn test_short_words_are_out_of_vocabulary() {
        let c = corrector(&[("ит", 100), ("врач", 4), ("без", 9)]);
        for word in ["ит", "без", "вра", "a", ""] {
            let correction = c.correct(word);
            assert_eq!(correction.term, word);
            assert!(!correction.accepted);
            assert!(c.lookup(word).is_empty());
        }
    }

    #[test]
    fn test_exact_term_is_accepted_unchanged() {
        let c = corrector(&[("водитель", 3), ("водители", 300)]);
        let correction = c.correct("водитель");
        assert_eq!(correction.term, "водитель");
        assert!(correction.accepted);
    }

    #[test]
    fn test_frequency_breaks_distance_ties() {
        let c = corrector(&[("повар", 2), ("товар", 20)]);
        assert_eq!(c.correct("ховар").term, "товар");
    }

    #[test]
    fn test_repeated_dictionary_rows_rank_by_summed_frequency() {
        let c = corrector(&[
            ("электрик", 5),
            ("электрик", 0),
            ("повар", 2),
            ("повар", 3),
            ("товар", 4),
        ]);
        assert_eq!(
            c.correct("электрик"),
            Correction {
                term: "электрик".to_string(),
                accepted: true
            }
        );
        assert_eq!(c.correct("ховар").term, "повар");
    }

    #[test]
    fn test_zero_frequency_match_is_out_of_vocabulary() {
        let c = corrector(&[("слесарь", 0)]);
        let correction = c.correct("слесар");
        assert_eq!(correction.term, "слесар");
        assert!(!correction.accepted);
    }

    #[test]
    fn test_unknown_word_is_echoed() {
        let c = corrector(&[("водитель", 3)]);
        let correction = c.correct("астроном");
        assert_eq!(correction.term, "астроном");
        assert!(!correction.accepted);

        let suggestions = c.lookup("астроном");
        assert_eq!(suggestions, vec![Suggestion::unknown("астроном", 3)]);
    }

    #[test]
    fn test_correct_words_counts_out_of_vocabulary() {
        let c = corrector(&[("электрик", 5), ("монтажник", 2)]);
        let words = vec!["элетрик", "и", "монтажнек", "астроном"];
        let result = c.correct_words(&words);
        assert_eq!(
            result.words,
            vec!["электрик", "и", "монтажник", "астроном"]
        );
        assert_eq!(result.out_of_vocabulary, 2);
    }

    #[test]
    fn test_config_validation() {
        let dictionary = SpellingDictionary::new();
        let bad = CorrectorConfig {
            max_edit_distance: 3,
            prefix_length: 3,
            ..Default::default()
        };
        assert!(SpellingCorrector::with_config(&dictionary, bad).is_err());

        let bad = CorrectorConfig {
            max_edit_distance: 0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
        assert!(CorrectorConfig::default().validate().is_ok());
    }
}
