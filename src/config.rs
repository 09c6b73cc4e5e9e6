// File: src/config.rs
use crate::core::types::{SuggestionLimits, MAX_SUGGESTIONS_DEFAULT, SUGGESTION_DEPTH_DEFAULT};
use crate::error::{KeypadError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DICTIONARY_PATH: &str = "data/dictionary.txt";

/// Engine settings. Every field has a default, so a config file only needs
/// the values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Newline-delimited base vocabulary, most popular words first.
    pub dictionary_path: PathBuf,
    /// Binary cache of the built trie. Disabled when unset.
    pub snapshot_path: Option<PathBuf>,
    pub max_suggestions: usize,
    pub suggestion_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DICTIONARY_PATH),
            snapshot_path: None,
            max_suggestions: MAX_SUGGESTIONS_DEFAULT,
            suggestion_depth: SUGGESTION_DEPTH_DEFAULT,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let config_err = |source: crate::error::BoxedSource| KeypadError::Config { path: path.to_path_buf(), source };
        let content = std::fs::read_to_string(path).map_err(|e| config_err(e.into()))?;
        serde_json::from_str(&content).map_err(|e| config_err(e.into()))
    }

    /// The query tunables, depth clamped.
    pub fn limits(&self) -> SuggestionLimits {
        SuggestionLimits::new(self.max_suggestions, self.suggestion_depth)
    }
}
