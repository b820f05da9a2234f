//! Spelling suggestions and their ranking.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A dictionary term found within the edit-distance bound of a query word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested term.
    pub term: String,
    /// Edit distance from the query word.
    pub distance: usize,
    /// Frequency of the term in the dictionary.
    pub frequency: u64,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new<S: Into<String>>(term: S, distance: usize, frequency: u64) -> Self {
        Suggestion {
            term: term.into(),
            distance,
            frequency,
        }
    }

    /// The implicit candidate used when nothing in the dictionary is close enough:
    /// the query word itself with zero frequency.
    pub fn unknown<S: Into<String>>(word: S, max_edit_distance: usize) -> Self {
        Suggestion::new(word, max_edit_distance + 1, 0)
    }
}

impl Ord for Suggestion {
    /// Best first: smaller distance, then higher frequency, then lexicographic term.
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.frequency.cmp(&self.frequency))
            .then_with(|| self.term.cmp(&other.term))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
