//! The derived record of one answer.

use serde::{Deserialize, Serialize};

/// Names of the columns appended to the input table, in output order.
pub const OUTPUT_COLUMNS: [&str; 8] = [
    "corrected",
    "n_out_of_vocab",
    "n_words",
    "n_verbs",
    "has_negative",
    "has_temporal",
    "tokenized",
    "normalized",
];

/// Everything derived from a raw answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub raw: String,
    /// The answer after category|value selection.
    pub selected: String,
    /// Words after abbreviation expansion and spelling correction.
    pub corrected: Vec<String>,
    pub out_of_vocabulary: usize,
    pub word_count: usize,
    pub verb_count: usize,
    pub has_negation: bool,
    pub has_temporal: bool,
    pub tokens: Vec<String>,
    /// Deduplicated, sorted content-word lemmas.
    pub normalized: Vec<String>,
}

impl AnswerRecord {
    pub fn corrected_text(&self) -> String {
        self.corrected.join(" ")
    }

    pub fn tokenized_text(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn normalized_text(&self) -> String {
        self.normalized.join(" ")
    }

    /// Values for [`OUTPUT_COLUMNS`], flags rendered as `0`/`1`.
    pub fn output_values(&self) -> [String; 8] {
        [
            self.corrected_text(),
            self.out_of_vocabulary.to_string(),
            self.word_count.to_string(),
            self.verb_count.to_string(),
            flag(self.has_negation),
            flag(self.has_temporal),
            self.tokenized_text(),
            self.normalized_text(),
        ]
    }
}

fn flag(value: bool) -> String {
    if value { "1" } else { "0" }.to_string()
}
