// File: src/core/node.rs
use crate::core::types::{Digit, NodeId};
use crate::error::{KeypadError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A trie vertex. Children are arena indices keyed by digit; the ordered map
/// keeps child iteration ascending so suggestion output is reproducible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Node {
    children: BTreeMap<Digit, NodeId>,
    /// Words whose digit path ends here, in insertion order (= rank).
    words: Vec<String>,
    terminal: bool,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_word(&mut self, word: &str) {
        self.words.push(word.to_string());
        self.terminal = true;
    }

    pub fn has_child(&self, digit: Digit) -> bool {
        self.children.contains_key(&digit)
    }

    /// Only valid after `has_child` returned true.
    pub fn child_at(&self, digit: Digit) -> Result<NodeId> {
        self.child(digit).ok_or(KeypadError::MissingChild(digit))
    }

    pub(crate) fn child(&self, digit: Digit) -> Option<NodeId> {
        self.children.get(&digit).copied()
    }

    /// Inserts or overwrites the branch at `digit`.
    pub fn put_child(&mut self, digit: Digit, node: NodeId) {
        self.children.insert(digit, node);
    }

    /// Children in ascending digit order.
    pub fn children(&self) -> impl Iterator<Item = (Digit, NodeId)> + '_ {
        self.children.iter().map(|(&digit, &id)| (digit, id))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn shortest_word_len(&self) -> Option<usize> {
        self.words.iter().map(|w| w.chars().count()).min()
    }
}
