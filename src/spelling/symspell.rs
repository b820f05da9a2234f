//! Symmetric-deletion index for approximate dictionary lookup.
//!
//! Every dictionary term contributes all strings obtained by deleting up to
//! `max_edit_distance` characters from its first `prefix_length` characters.
//! A query generates the same variants, so two words within the edit-distance
//! bound share at least one variant, and candidates are found with hash
//! lookups instead of scanning the whole dictionary. The prefix bound keeps the
//! number of variants per term independent of the term's length.

use ahash::{AHashMap, AHashSet};
use log::debug;

use crate::spelling::dictionary::{DictionaryEntry, SpellingDictionary};
use crate::spelling::levenshtein::damerau_levenshtein_distance_threshold;
use crate::spelling::suggest::Suggestion;

/// Generate all delete-variants of `word`: up to `max_deletes` characters
/// removed from its first `prefix_length` characters (the prefix itself included).
pub fn delete_variants(word: &str, max_deletes: usize, prefix_length: usize) -> AHashSet<String> {
    let prefix: Vec<char> = word.chars().take(prefix_length).collect();

    let mut variants = AHashSet::new();
    variants.insert(prefix.iter().collect::<String>());

    let mut frontier = vec![prefix];
    for _ in 0..max_deletes {
        let mut next = Vec::new();
        for chars in &frontier {
            for i in 0..chars.len() {
                let mut deleted: Vec<char> = chars.clone();
                deleted.remove(i);
                if variants.insert(deleted.iter().collect()) {
                    next.push(deleted);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    variants
}

/// Mapping from delete-variant to the dictionary terms that produced it.
///
/// Built once; read-only afterwards.
#[derive(Debug, Clone)]
pub struct DeletionIndex {
    entries: Vec<DictionaryEntry>,
    deletes: AHashMap<String, Vec<u32>>,
    max_edit_distance: usize,
    prefix_length: usize,
    max_length: usize,
}

impl DeletionIndex {
    /// Index every term of `dictionary`.
    pub fn build(
        dictionary: &SpellingDictionary,
        max_edit_distance: usize,
        prefix_length: usize,
    ) -> Self {
        let mut entries: Vec<DictionaryEntry> = dictionary
            .iter()
            .map(|(term, frequency)| DictionaryEntry::new(term, frequency))
            .collect();
        // Stable ids regardless of hash map iteration order.
        entries.sort_by(|a, b| a.term.cmp(&b.term));

        let mut deletes: AHashMap<String, Vec<u32>> = AHashMap::new();
        for (id, entry) in entries.iter().enumerate() {
            for variant in delete_variants(&entry.term, max_edit_distance, prefix_length) {
                deletes.entry(variant).or_default().push(id as u32);
            }
        }

        debug!(
            "built deletion index: {} terms, {} delete-variants (max_edit_distance={}, prefix_length={})",
            entries.len(),
            deletes.len(),
            max_edit_distance,
            prefix_length
        );

        DeletionIndex {
            entries,
            deletes,
            max_edit_distance,
            prefix_length,
            max_length: dictionary.max_length(),
        }
    }

    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    pub fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    /// Number of indexed terms.
    pub fn term_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of distinct delete-variants.
    pub fn variant_count(&self) -> usize {
        self.deletes.len()
    }

    /// Terms that produced `variant`, if any.
    pub fn terms_for(&self, variant: &str) -> impl Iterator<Item = &DictionaryEntry> {
        self.deletes
            .get(variant)
            .into_iter()
            .flatten()
            .map(|&id| &self.entries[id as usize])
    }

    /// Every dictionary term within `max_edit_distance` of `word`, best first.
    pub fn lookup(&self, word: &str) -> Vec<Suggestion> {
        let word_len = word.chars().count();
        if word_len > self.max_length + self.max_edit_distance {
            return Vec::new();
        }

        let mut candidates: AHashSet<u32> = AHashSet::new();
        for variant in delete_variants(word, self.max_edit_distance, self.prefix_length) {
            if let Some(ids) = self.deletes.get(&variant) {
                candidates.extend(ids.iter().copied());
            }
        }

        let mut suggestions: Vec<Suggestion> = candidates
            .into_iter()
            .filter_map(|id| {
                let entry = &self.entries[id as usize];
                damerau_levenshtein_distance_threshold(word, &entry.term, self.max_edit_distance)
                    .map(|distance| Suggestion::new(entry.term.clone(), distance, entry.frequency))
            })
            .collect();

        suggestions.sort();
        suggestions
    }
}
