//! Term/frequency dictionary backing the spelling corrector.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{LexnormError, Result};

/// A single dictionary row: a known orthographic form and how often it was observed.
///
/// A frequency of 0 marks a form that is known to exist but was never
/// observed; the corrector treats such a match as out-of-vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub term: String,
    pub frequency: u64,
}

impl DictionaryEntry {
    pub fn new<S: Into<String>>(term: S, frequency: u64) -> Self {
        DictionaryEntry {
            term: term.into(),
            frequency,
        }
    }
}

/// A dictionary that stores terms and their frequencies.
///
/// Terms are stored exactly as given: no case folding is applied, so
/// `"Менеджер"` and `"менеджер"` are different entries.
#[derive(Debug, Clone, Default)]
pub struct SpellingDictionary {
    /// Terms and their frequencies
    terms: AHashMap<String, u64>,
    /// Length (in chars) of the longest term
    max_length: usize,
}

impl SpellingDictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        SpellingDictionary::default()
    }

    /// Build a dictionary from entries. Repeated terms add their frequencies.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = DictionaryEntry>,
    {
        let mut dictionary = SpellingDictionary::new();
        for entry in entries {
            dictionary.add_term(entry.term, entry.frequency);
        }
        dictionary
    }

    /// Add a term with the given frequency. A term already present keeps
    /// the sum of its frequencies.
    pub fn add_term<S: Into<String>>(&mut self, term: S, frequency: u64) {
        let term = term.into();
        self.max_length = self.max_length.max(term.chars().count());
        let count = self.terms.entry(term).or_insert(0);
        *count = count.saturating_add(frequency);
    }

    /// Check if a term exists in the dictionary (regardless of frequency).
    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Get the frequency of a term, `None` if it is not in the dictionary.
    pub fn frequency(&self, term: &str) -> Option<u64> {
        self.terms.get(term).copied()
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Length in chars of the longest term.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Iterate over `(term, frequency)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.terms.iter().map(|(term, freq)| (term.as_str(), *freq))
    }

    /// Load a dictionary from a frequency file with format "term count" per line.
    ///
    /// Blank lines are skipped. Any other line must have a term in the first
    /// column and a non-negative integer count in the second; a malformed row
    /// is reported with its 1-based line number.
    pub fn load_from_frequency_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LexnormError::resource(path, e.to_string()))?;
        let reader = BufReader::new(file);
        let mut dictionary = SpellingDictionary::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| LexnormError::resource(path, e.to_string()))?;
            let entry = parse_frequency_line(&line)
                .map_err(|message| LexnormError::dictionary(path, index + 1, message))?;
            if let Some(entry) = entry {
                dictionary.add_term(entry.term, entry.frequency);
            }
        }

        debug!(
            "loaded {} spelling terms from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }
}

/// Parse one "term count" line. `Ok(None)` for blank lines.
fn parse_frequency_line(line: &str) -> std::result::Result<Option<DictionaryEntry>, String> {
    let mut parts = line.split_whitespace();
    let Some(term) = parts.next() else {
        return Ok(None);
    };
    let count = parts
        .next()
        .ok_or_else(|| format!("missing count for term '{term}'"))?;
    let frequency = count
        .parse::<u64>()
        .map_err(|_| format!("invalid count '{count}' for term '{term}'"))?;
    Ok(Some(DictionaryEntry::new(term, frequency)))
}
