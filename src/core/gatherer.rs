// File: src/core/gatherer.rs
use crate::core::node::Node;
use crate::core::types::NodeId;
use std::collections::{HashSet, VecDeque};

/// Breadth-first scan of a subtree for longer completions.
///
/// Levels are visited in order, so shorter completions come first. Within a
/// level, children are taken in ascending digit order and the words of one
/// node in insertion order.
pub struct SuggestionGatherer<'t> {
    nodes: &'t [Node],
    max_depth: usize,
    min_len: usize,
}

impl<'t> SuggestionGatherer<'t> {
    /// `max_depth` is the number of levels below the start node that may be visited.
    pub fn new(nodes: &'t [Node], max_depth: usize) -> Self {
        Self { nodes, max_depth, min_len: 0 }
    }

    /// Words shorter than `min_len` letters are never emitted.
    pub fn min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Collects up to `budget` words under `start`, skipping any in `already_found`.
    /// O(S) where S is the number of nodes visited before the budget fills.
    pub fn gather(&self, start: NodeId, budget: usize, already_found: &[String]) -> Vec<&'t str> {
        let mut found = Vec::new();
        if budget == 0 {
            return found;
        }

        let excluded: HashSet<&str> = already_found.iter().map(String::as_str).collect();
        let mut queue = VecDeque::from([(start, 0usize)]);

        while let Some((node_idx, level)) = queue.pop_front() {
            let node = &self.nodes[node_idx];
            for word in node.words() {
                if word.chars().count() < self.min_len || excluded.contains(word.as_str()) {
                    continue;
                }
                found.push(word.as_str());
                if found.len() == budget {
                    return found;
                }
            }

            if level < self.max_depth {
                queue.extend(node.children().map(|(_, child)| (child, level + 1)));
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::trie::Trie;
    use crate::core::types::{SuggestionLimits, ROOT};

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new(SuggestionLimits::default());
        for word in words {
            trie.insert(word).unwrap();
        }
        trie
    }

    #[test]
    fn shorter_completions_come_first() {
        let trie = trie_of(&["care", "cab", "car"]);
        let start = trie.resolve_prefix(&[2, 2]).unwrap();
        let gatherer = SuggestionGatherer::new(trie.nodes(), 3);
        assert_eq!(gatherer.gather(start, 10, &[]), ["cab", "car", "care"]);
    }

    #[test]
    fn stops_when_budget_is_full() {
        let trie = trie_of(&["cab", "car", "care"]);
        let start = trie.resolve_prefix(&[2, 2]).unwrap();
        let gatherer = SuggestionGatherer::new(trie.nodes(), 3);
        assert_eq!(gatherer.gather(start, 2, &[]), ["cab", "car"]);
        assert!(gatherer.gather(start, 0, &[]).is_empty());
    }

    #[test]
    fn respects_depth_limit() {
        let trie = trie_of(&["cab", "car", "care", "cares"]);
        let start = trie.resolve_prefix(&[2, 2]).unwrap();
        assert_eq!(SuggestionGatherer::new(trie.nodes(), 1).gather(start, 10, &[]), ["cab", "car"]);
        assert_eq!(
            SuggestionGatherer::new(trie.nodes(), 2).gather(start, 10, &[]),
            ["cab", "car", "care"]
        );
    }

    #[test]
    fn skips_words_already_found() {
        let trie = trie_of(&["car", "care"]);
        let start = trie.resolve_prefix(&[2, 2, 7]).unwrap();
        let already = vec!["car".to_string()];
        let gatherer = SuggestionGatherer::new(trie.nodes(), 3);
        assert_eq!(gatherer.gather(start, 5, &already), ["care"]);
    }

    #[test]
    fn skips_words_shorter_than_min_len() {
        let trie = trie_of(&["a", "ab", "abc"]);
        let gatherer = SuggestionGatherer::new(trie.nodes(), 5).min_len(2);
        assert_eq!(gatherer.gather(ROOT, 5, &[]), ["ab", "abc"]);
    }

    #[test]
    fn ascending_digit_order_within_a_level() {
        // "go" = 46, "in" = 46, "he" = 43, "if" = 43
        let trie = trie_of(&["go", "he", "in", "if"]);
        let start = trie.resolve_prefix(&[4]).unwrap();
        let gatherer = SuggestionGatherer::new(trie.nodes(), 2);
        assert_eq!(gatherer.gather(start, 10, &[]), ["he", "if", "go", "in"]);
    }
}
