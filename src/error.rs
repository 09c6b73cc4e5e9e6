// File: src/error.rs
use crate::core::types::Digit;
use std::path::PathBuf;

/// Boxed source for failures coming from several libraries (bincode, tempfile, serde_json, io).
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Error type for the keypad prediction engine.
#[derive(Debug, thiserror::Error)]
pub enum KeypadError {
    #[error("invalid character {0:?}: only the letters a-z are on the keypad")]
    InvalidCharacter(char),
    #[error("invalid key {0:?}: keypad digits run from 2 to 9")]
    InvalidDigit(char),
    #[error("no branch for digit {0}")]
    MissingChild(Digit),
    #[error("cannot learn an empty word")]
    EmptyWord,
    #[error("dictionary {} is unavailable: {source}", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("learned {word:?} but could not append it to {}: {source}", .path.display())]
    StorageAppendFailed {
        word: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("snapshot {}: {source}", .path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: BoxedSource,
    },
    #[error("could not encode output: {0}")]
    Output(#[source] serde_json::Error),
    #[error("config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: BoxedSource,
    },
}

pub type Result<T> = std::result::Result<T, KeypadError>;
