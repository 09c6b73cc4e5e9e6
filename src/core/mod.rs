// src/core/mod.rs

pub mod codec;
pub mod engine;
pub mod gatherer;
pub mod node;
pub mod trie;
pub mod types;
