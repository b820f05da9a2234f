//! Configuration for loading the resource store.
//!
//! Resource locations are supplied explicitly at startup, either built in
//! code, read from a JSON file, or assembled from command line flags.
//!
//! ```json
//! {
//!   "dictionary_path": "models/symspell/professions.txt",
//!   "abbreviations_path": "datasets/external/abbreviation.csv",
//!   "morphology_path": "models/morph/lexicon.tsv",
//!   "extra_stopwords_path": "datasets/external/extra_stopwords.txt",
//!   "spelling": { "max_edit_distance": 3, "prefix_length": 7 },
//!   "morphology_overrides": {
//!     "слесарь": { "lemma": "слесарь", "tags": ["NOUN"] }
//!   }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::morphology::MorphOverrides;
use crate::error::{LexnormError, Result};
use crate::pipeline::category::CategoryRules;
use crate::spelling::corrector::CorrectorConfig;

/// Locations of every resource file plus the tuning constants.
///
/// Optional word lists fall back to the built-in defaults when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// "term count" frequency dictionary for the spelling corrector (required).
    pub dictionary_path: Option<PathBuf>,
    /// `;`-separated abbreviation table (required).
    pub abbreviations_path: Option<PathBuf>,
    /// Tab-separated morphology lexicon for the bundled analyzer.
    pub morphology_path: Option<PathBuf>,
    /// Base stop word list, one word per line.
    pub stopwords_path: Option<PathBuf>,
    /// Extra stop word list, one word per line.
    pub extra_stopwords_path: Option<PathBuf>,
    /// Negation keywords, one per line.
    pub negations_path: Option<PathBuf>,
    /// Past/future markers, one per line.
    pub temporal_markers_path: Option<PathBuf>,
    /// Spelling corrector constants.
    pub spelling: CorrectorConfig,
    /// Overrides added on top of the built-in morphology override table.
    pub morphology_overrides: MorphOverrides,
    /// Category|value splitting rules.
    pub category_rules: CategoryRules,
}

impl ResourceConfig {
    /// Read a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|e| LexnormError::resource(path, e.to_string()))?;
        let config: ResourceConfig = serde_json::from_str(&content)
            .map_err(|e| LexnormError::resource(path, format!("invalid configuration: {e}")))?;
        Ok(config)
    }

    /// Check that required resources are named and constants are usable.
    pub fn validate(&self) -> Result<()> {
        if self.dictionary_path.is_none() {
            return Err(LexnormError::config("dictionary_path is not set"));
        }
        if self.abbreviations_path.is_none() {
            return Err(LexnormError::config("abbreviations_path is not set"));
        }
        self.spelling.validate()
    }

    /// The dictionary path, or a configuration error if unset.
    pub fn dictionary_path(&self) -> Result<&Path> {
        self.dictionary_path
            .as_deref()
            .ok_or_else(|| LexnormError::config("dictionary_path is not set"))
    }

    /// The abbreviation table path, or a configuration error if unset.
    pub fn abbreviations_path(&self) -> Result<&Path> {
        self.abbreviations_path
            .as_deref()
            .ok_or_else(|| LexnormError::config("abbreviations_path is not set"))
    }

    /// The morphology lexicon path, or a configuration error if unset.
    pub fn morphology_path(&self) -> Result<&Path> {
        self.morphology_path
            .as_deref()
            .ok_or_else(|| LexnormError::config("morphology_path is not set"))
    }
}
