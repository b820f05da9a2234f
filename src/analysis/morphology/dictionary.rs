//! Lexicon-backed morphological analyzer.
//!
//! The lexicon is a tab-separated file with one parse per line:
//!
//! ```text
//! # surface<TAB>lemma<TAB>tags
//! продажам	продажа	NOUN,inan,femn plur,datv
//! старший	старший	ADJF,Qual masc,sing,nomn
//! работаю	работать	VERB,impf,intr sing,1per,pres,indc
//! ```
//!
//! Tags are separated by commas or spaces. When a surface form appears more
//! than once, the first line is its top-ranked parse. Lookups are
//! case-insensitive.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use log::debug;

use crate::analysis::morphology::{MorphAnalysis, MorphAnalyzer};
use crate::error::{LexnormError, Result};

/// A morphological analyzer answering from an in-memory lexicon.
#[derive(Debug, Clone, Default)]
pub struct DictionaryMorphAnalyzer {
    parses: AHashMap<String, MorphAnalysis>,
}

impl DictionaryMorphAnalyzer {
    /// Create an empty analyzer.
    pub fn new() -> Self {
        DictionaryMorphAnalyzer::default()
    }

    /// Build an analyzer from `(surface, analysis)` pairs; the first parse of
    /// a surface form wins.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, MorphAnalysis)>,
        S: AsRef<str>,
    {
        let mut analyzer = DictionaryMorphAnalyzer::new();
        for (surface, analysis) in entries {
            analyzer.add_parse(surface.as_ref(), analysis);
        }
        analyzer
    }

    /// Add a parse unless the surface form already has one.
    pub fn add_parse(&mut self, surface: &str, analysis: MorphAnalysis) {
        self.parses
            .entry(surface.to_lowercase())
            .or_insert(analysis);
    }

    /// Number of known surface forms.
    pub fn len(&self) -> usize {
        self.parses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parses.is_empty()
    }

    /// Load a lexicon file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LexnormError::resource(path, e.to_string()))?;
        let reader = BufReader::new(file);
        let mut analyzer = DictionaryMorphAnalyzer::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| LexnormError::resource(path, e.to_string()))?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut columns = trimmed.split('\t');
            let (Some(surface), Some(lemma), Some(tags)) =
                (columns.next(), columns.next(), columns.next())
            else {
                return Err(LexnormError::dictionary(
                    path,
                    index + 1,
                    "expected 'surface<TAB>lemma<TAB>tags'",
                ));
            };

            let tags = tags
                .split([',', ' '])
                .map(str::trim)
                .filter(|tag| !tag.is_empty());
            analyzer.add_parse(surface.trim(), MorphAnalysis::new(lemma.trim(), tags));
        }

        debug!(
            "loaded {} morphology parses from {}",
            analyzer.len(),
            path.display()
        );
        Ok(analyzer)
    }
}

impl MorphAnalyzer for DictionaryMorphAnalyzer {
    fn analyze(&self, token: &str) -> Option<MorphAnalysis> {
        self.parses.get(&token.to_lowercase()).cloned()
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}
