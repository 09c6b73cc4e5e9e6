// File: src/learning.rs
use crate::core::trie::Trie;
use crate::error::{KeypadError, Result};
use crate::persistence::WordStore;

/// Teaches the engine a word the user typed out manually.
///
/// The word goes into the live trie first and is then appended to the word
/// store. A failed append is reported, but the in-memory insertion stands.
/// Learning the same word twice stores it twice.
pub fn learn_word(trie: &mut Trie, store: &mut WordStore, word: &str) -> Result<()> {
    if word.is_empty() {
        return Err(KeypadError::EmptyWord);
    }

    trie.insert(word)?;
    log::debug!("learned {:?}", word);

    store.append(word)
}
