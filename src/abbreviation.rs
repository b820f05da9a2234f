//! Abbreviation expansion.
//!
//! Words that are keys of the [`AbbreviationMap`] are replaced in place by
//! their expansion, split on whitespace. Expansion is a single pass: words
//! produced by an expansion are never looked up again.
//!
//! # Examples
//!
//! ```
//! use lexnorm::abbreviation::AbbreviationMap;
//!
//! let map = AbbreviationMap::from_pairs([("ИТ", "информационные технологии")]);
//! let words = map.expand(&["ИТ", "специалист"]);
//! assert_eq!(words, vec!["информационные", "технологии", "специалист"]);
//! ```

use std::path::Path;

use ahash::AHashMap;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};

use crate::error::{LexnormError, Result};

/// Mapping from abbreviation to its expansion words.
#[derive(Debug, Clone, Default)]
pub struct AbbreviationMap {
    entries: AHashMap<String, Vec<String>>,
}

impl AbbreviationMap {
    pub fn new() -> Self {
        AbbreviationMap::default()
    }

    /// Build a map from `(abbreviation, expansion phrase)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut map = AbbreviationMap::new();
        for (abbreviation, expansion) in pairs {
            map.insert(abbreviation, expansion.as_ref());
        }
        map
    }

    /// Add or replace an abbreviation.
    pub fn insert<K: Into<String>>(&mut self, abbreviation: K, expansion: &str) {
        let words = expansion.split_whitespace().map(str::to_string).collect();
        self.entries.insert(abbreviation.into(), words);
    }

    /// Expansion words for `word`, if it is an abbreviation. Lookup is exact.
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every abbreviation in `words` by its expansion, in one pass.
    pub fn expand<S: AsRef<str>>(&self, words: &[S]) -> Vec<String> {
        let mut expanded = Vec::with_capacity(words.len());
        for word in words {
            let word = word.as_ref();
            match self.lookup(word) {
                Some(expansion) => expanded.extend(expansion.iter().cloned()),
                None => expanded.push(word.to_string()),
            }
        }
        expanded
    }

    /// Load an abbreviation table: `;`-separated CSV whose header row names an
    /// `abbreviation` and a `meaning` column, in any order.
    pub fn load_from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut reader = ReaderBuilder::new()
            .delimiter(b';')
            .trim(Trim::All)
            .flexible(true)
            .from_path(path)
            .map_err(|e| LexnormError::resource(path, e.to_string()))?;

        let headers = reader
            .headers()
            .map_err(|e| LexnormError::resource(path, e.to_string()))?;
        let column = |name: &str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| LexnormError::resource(path, format!("missing '{name}' column")))
        };
        let abbreviation_column = column("abbreviation")?;
        let meaning_column = column("meaning")?;

        let mut map = AbbreviationMap::new();
        for (index, record) in reader.records().enumerate() {
            // Header is line 1.
            let line = index + 2;
            let record = record.map_err(|e| LexnormError::dictionary(path, line, e.to_string()))?;
            if record.iter().all(str::is_empty) {
                warn!("skipping blank row at {}:{}", path.display(), line);
                continue;
            }
            match (record.get(abbreviation_column), record.get(meaning_column)) {
                (Some(abbreviation), Some(meaning))
                    if !abbreviation.is_empty() && !meaning.is_empty() =>
                {
                    map.insert(abbreviation, meaning);
                }
                _ => {
                    return Err(LexnormError::dictionary(
                        path,
                        line,
                        "expected 'abbreviation;meaning'",
                    ));
                }
            }
        }

        debug!("loaded {} abbreviations from {}", map.len(), path.display());
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_expand() {
        let map = AbbreviationMap::from_pairs([("ИТ", "информационные технологии")]);
        assert_eq!(
            map.expand(&["ИТ", "специалист"]),
            vec!["информационные", "технологии", "специалист"]
        );
    }

    #[test]
    fn test_expansion_is_single_pass() {
        let map = AbbreviationMap::from_pairs([
            ("ГИП", "главный инженер ГП"),
            ("ГП", "генеральный подрядчик"),
        ]);
        assert_eq!(map.expand(&["ГИП"]), vec!["главный", "инженер", "ГП"]);
        assert_eq!(map.expand(&["ГП"]), vec!["генеральный", "подрядчик"]);
    }

    #[test]
    fn test_unknown_words_pass_through() {
        let map = AbbreviationMap::from_pairs([("ИТ", "информационные технологии")]);
        assert_eq!(map.expand(&["ит", "отдел"]), vec!["ит", "отдел"]);
        assert!(map.expand::<&str>(&[]).is_empty());
        assert!(map.lookup("ит").is_none());
    }

    #[test]
    fn test_load_from_csv() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "abbreviation;meaning").unwrap();
        writeln!(file, "ИТ; информационные технологии").unwrap();
        writeln!(file, "ЗАМ;заместитель").unwrap();

        let map = AbbreviationMap::load_from_csv(file.path()).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.lookup("ИТ").unwrap(),
            &["информационные".to_string(), "технологии".to_string()]
        );
    }

    #[test]
    fn test_load_rejects_row_without_meaning() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "abbreviation;meaning").unwrap();
        writeln!(file, "ИТ;информационные технологии").unwrap();
        writeln!(file, "ЗАМ").unwrap();

        let err = AbbreviationMap::load_from_csv(file.path()).unwrap_err();
        assert!(matches!(err, LexnormError::Dictionary { line: 3, .. }));
    }

    #[test]
    fn test_load_reads_columns_by_header() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "meaning;source;abbreviation").unwrap();
        writeln!(file, "заместитель;словарь;ЗАМ").unwrap();

        let map = AbbreviationMap::load_from_csv(file.path()).unwrap();
        assert_eq!(map.lookup("ЗАМ").unwrap(), &["заместитель".to_string()]);
        assert!(map.lookup("заместитель").is_none());
    }

    #[test]
    fn test_load_requires_both_headers() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "abbreviation;expansion").unwrap();
        writeln!(file, "ЗАМ;заместитель").unwrap();

        let err = AbbreviationMap::load_from_csv(file.path()).unwrap_err();
        match err {
            LexnormError::Resource { path, message } => {
                assert_eq!(path.as_path(), file.path());
                assert!(message.contains("'meaning'"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
