// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A single key press on the pad. Only 2 through 9 carry letters.
pub type Digit = u8;

/// Index of a node inside the trie's node arena.
pub type NodeId = usize;

/// The root always lives at the start of the arena.
pub const ROOT: NodeId = 0;

pub const MAX_SUGGESTIONS_DEFAULT: usize = 5;
pub const SUGGESTION_DEPTH_DEFAULT: usize = 3;
pub const SUGGESTION_DEPTH_MIN: usize = 0;
pub const SUGGESTION_DEPTH_MAX: usize = 10;

/// The two query tunables, fixed when a trie is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionLimits {
    /// Cap on the number of words a single query returns.
    pub max_suggestions: usize,
    /// How many digits past the typed prefix the gatherer may descend.
    pub suggestion_depth: usize,
}

impl SuggestionLimits {
    /// Builds limits, clamping the depth into the supported range.
    pub fn new(max_suggestions: usize, suggestion_depth: usize) -> Self {
        let clamped = suggestion_depth.clamp(SUGGESTION_DEPTH_MIN, SUGGESTION_DEPTH_MAX);
        if clamped != suggestion_depth {
            log::warn!(
                "suggestion depth {} is out of range, using {}",
                suggestion_depth,
                clamped
            );
        }
        Self { max_suggestions, suggestion_depth: clamped }
    }
}

impl Default for SuggestionLimits {
    fn default() -> Self {
        Self::new(MAX_SUGGESTIONS_DEFAULT, SUGGESTION_DEPTH_DEFAULT)
    }
}
