use crate::config::EngineConfig;
use crate::core::trie::Trie;
use crate::core::types::{Digit, SuggestionLimits};
use crate::learning;
use crate::persistence::{self, WordStore};
use crate::error::Result;
use std::path::Path;

/// The prediction engine handed to the input layer.
///
/// Queries take `&self`; learning takes `&mut self`. Callers that share an
/// engine between threads wrap it in their own lock.
pub struct PredictiveEngine {
    trie: Trie,
    store: WordStore,
}

impl PredictiveEngine {
    /// Builds the engine described by `config`.
    ///
    /// With a snapshot path set, a snapshot stamped with the dictionary's
    /// current size and modification time is loaded instead of re-reading the
    /// word list; otherwise the trie is built from the word list and the
    /// snapshot rewritten. Snapshot problems are logged and never fatal. A
    /// missing dictionary is.
    pub fn open(config: &EngineConfig) -> Result<Self> {
        let limits = config.limits();

        if let Some(snapshot) = config.snapshot_path.as_deref().filter(|p| p.exists()) {
            match persistence::load_snapshot(snapshot) {
                Ok(state) if state.matches(&config.dictionary_path) => {
                    let (trie, store) = state.into_parts(config.dictionary_path.clone());
                    log::info!(
                        "trie loaded from snapshot {} with {} words",
                        snapshot.display(),
                        trie.word_count()
                    );
                    return Ok(Self { trie: trie.with_limits(limits), store });
                }
                Ok(_) => log::info!(
                    "snapshot {} is out of date with {}, rebuilding",
                    snapshot.display(),
                    config.dictionary_path.display()
                ),
                Err(e) => log::warn!("ignoring snapshot: {}", e),
            }
        }

        let engine = Self::from_store(WordStore::open(&config.dictionary_path)?, limits);

        if let Some(snapshot) = &config.snapshot_path {
            if let Err(e) = engine.save_snapshot(snapshot) {
                log::warn!("could not write snapshot: {}", e);
            }
        }
        Ok(engine)
    }

    /// Bulk-loads every word of `store` in line order.
    /// Lines with characters off the keypad stay in the store but are not inserted.
    pub fn from_store(store: WordStore, limits: SuggestionLimits) -> Self {
        let mut trie = Trie::new(limits);
        for word in store.words() {
            if let Err(e) = trie.insert(word) {
                log::warn!("skipping dictionary word {:?}: {}", word, e);
            }
        }
        log::info!("trie loaded with {} words", trie.word_count());
        Self { trie, store }
    }

    pub fn get_suggestions(&self, keys: &[Digit]) -> Vec<String> {
        self.trie.get_suggestions(keys)
    }

    /// Inserts `word` and appends it to the dictionary file.
    pub fn learn_word(&mut self, word: &str) -> Result<()> {
        learning::learn_word(&mut self.trie, &mut self.store, word)
    }

    pub fn word_exists_at(&self, word: &str, keys: &[Digit]) -> bool {
        self.trie.word_exists_at(word, keys)
    }

    pub fn save_snapshot(&self, path: &Path) -> Result<()> {
        persistence::save_snapshot(&self.trie, &self.store, path)
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn invalid_dictionary_lines_are_skipped() {
        let store = WordStore::from_parts(
            "dict.txt".into(),
            vec!["cab".into(), "Car".into(), "it's".into(), "care".into()],
        );
        let engine = PredictiveEngine::from_store(store, SuggestionLimits::default());
        assert_eq!(engine.trie().word_count(), 2);
        assert_eq!(engine.store().words().len(), 4);
        assert_eq!(engine.get_suggestions(&[2, 2]), ["cab", "care"]);
    }

    #[test]
    fn open_without_dictionary_fails() {
        let dir = tempdir().unwrap();
        let config = EngineConfig { dictionary_path: dir.path().join("none.txt"), ..EngineConfig::default() };
        assert!(matches!(
            PredictiveEngine::open(&config),
            Err(crate::error::KeypadError::ResourceUnavailable { .. })
        ));
    }

    #[test]
    fn unreadable_snapshot_falls_back_to_word_list() {
        let dir = tempdir().unwrap();
        let dict = dir.path().join("dict.txt");
        let snap = dir.path().join("dict.bin");
        fs::write(&dict, "cab\ncar\ncare\n").unwrap();
        fs::write(&snap, b"not a snapshot").unwrap();

        let config = EngineConfig {
            dictionary_path: dict,
            snapshot_path: Some(snap.clone()),
            ..EngineConfig::default()
        };
        let engine = PredictiveEngine::open(&config).unwrap();
        assert_eq!(engine.get_suggestions(&[2, 2, 7]), ["car", "care"]);

        // The rebuilt trie replaced the bad snapshot.
        assert!(persistence::load_snapshot(&snap).is_ok());
    }

    #[test]
    fn dictionary_replaced_with_older_file_is_reloaded() {
        let dir = tempdir().unwrap();
        let dict = dir.path().join("dict.txt");
        let snap = dir.path().join("dict.bin");
        fs::write(&dict, "cab\ncar\n").unwrap();
        let config = EngineConfig {
            dictionary_path: dict.clone(),
            snapshot_path: Some(snap.clone()),
            ..EngineConfig::default()
        };
        assert_eq!(PredictiveEngine::open(&config).unwrap().get_suggestions(&[2, 2, 7]), ["car"]);

        let older = fs::metadata(&snap).unwrap().modified().unwrap() - Duration::from_secs(60);
        fs::write(&dict, "home\ngood\n").unwrap();
        fs::File::options().append(true).open(&dict).unwrap().set_modified(older).unwrap();

        let engine = PredictiveEngine::open(&config).unwrap();
        assert_eq!(engine.get_suggestions(&[4, 6, 6, 3]), ["home", "good"]);
        assert!(engine.get_suggestions(&[2, 2, 7]).is_empty());
    }
}
