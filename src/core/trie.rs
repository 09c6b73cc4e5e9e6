// --- File: src/core/trie.rs
use crate::core::codec;
use crate::core::gatherer::SuggestionGatherer;
use crate::core::node::Node;
use crate::core::types::{Digit, NodeId, SuggestionLimits, ROOT};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A trie keyed by ambiguous key digits rather than letters.
///
/// Every word sharing a digit path lands in the same node, so a node's word
/// list holds all spellings of one key sequence, ranked by insertion order.
/// Nodes live in an arena; the root is always at index 0.
#[derive(Clone, Serialize, Deserialize)]
pub struct Trie {
    nodes: Vec<Node>,
    word_count: usize,
    limits: SuggestionLimits,
}

impl Trie {
    pub fn new(limits: SuggestionLimits) -> Self {
        Self { nodes: vec![Node::new()], word_count: 0, limits }
    }

    /// Same tree, new tunables. Used when a snapshot is restored under a different config.
    pub fn with_limits(mut self, limits: SuggestionLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> SuggestionLimits {
        self.limits
    }

    /// Number of words ever inserted, duplicates included.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The node at `id`, if the arena has one.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Inserts a word along its digit path.
    /// O(k) complexity where k is word length. The whole word is encoded
    /// before the tree is touched, so an invalid character leaves it unchanged.
    pub fn insert(&mut self, word: &str) -> Result<()> {
        let path = codec::encode(word)?;

        let mut node_idx = ROOT;
        for digit in path {
            if !self.nodes[node_idx].has_child(digit) {
                let new_node_id = self.nodes.len();
                self.nodes.push(Node::new());
                self.nodes[node_idx].put_child(digit, new_node_id);
            }
            node_idx = self.nodes[node_idx].child_at(digit)?;
        }

        self.nodes[node_idx].add_word(word);
        self.word_count += 1;
        Ok(())
    }

    /// Walks `keys` from the root. A key with no matching branch means the
    /// prefix is absent, including when it is the last key typed.
    pub fn resolve_prefix(&self, keys: &[Digit]) -> Option<NodeId> {
        keys.iter()
            .try_fold(ROOT, |node_idx, &digit| self.nodes[node_idx].child(digit))
    }

    pub fn resolve_node(&self, keys: &[Digit]) -> Option<&Node> {
        self.resolve_prefix(keys).map(|id| &self.nodes[id])
    }

    /// Ranked predictions for `keys`: exact-length matches in insertion order,
    /// then deeper completions, shortest first. Never more than `max_suggestions`.
    pub fn get_suggestions(&self, keys: &[Digit]) -> Vec<String> {
        let SuggestionLimits { max_suggestions, suggestion_depth } = self.limits;

        let Some(prefix_idx) = self.resolve_prefix(keys) else {
            log::debug!("no prefix for {:?}", keys);
            return vec![];
        };
        let prefix = &self.nodes[prefix_idx];

        let mut suggestions: Vec<String> = Vec::new();
        let mut corrupt = false;
        if prefix.is_terminal() {
            match prefix.shortest_word_len() {
                Some(len) if len < keys.len() => {
                    log::warn!(
                        "word list at {:?} holds a {}-letter word, skipping exact matches",
                        keys,
                        len
                    );
                    corrupt = true;
                }
                _ => suggestions.extend(prefix.words().iter().take(max_suggestions).cloned()),
            }
        }

        if suggestion_depth > 1 && suggestions.len() < max_suggestions {
            // A skipped list must not come back through the gatherer's first level.
            let excluded: &[String] = if corrupt { prefix.words() } else { &suggestions };
            let deeper: Vec<String> = SuggestionGatherer::new(&self.nodes, suggestion_depth)
                .min_len(keys.len())
                .gather(prefix_idx, max_suggestions - suggestions.len(), excluded)
                .into_iter()
                .map(str::to_string)
                .collect();
            suggestions.extend(deeper);
        }

        log::debug!("{:?} -> {:?}", keys, suggestions);
        suggestions
    }

    /// True if `word` is stored exactly at the node for `keys`.
    pub fn word_exists_at(&self, word: &str, keys: &[Digit]) -> bool {
        self.resolve_node(keys)
            .is_some_and(|node| node.is_terminal() && node.words().iter().any(|w| w == word))
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new(SuggestionLimits::default())
    }
}
