// File: src/persistence.rs
use crate::core::trie::Trie;
use crate::error::{BoxedSource, KeypadError, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::NamedTempFile;

/// The plain-text dictionary backing the trie: one word per line, earliest
/// lines rank highest. Learned words are appended, never rewritten.
#[derive(Debug, Clone)]
pub struct WordStore {
    path: PathBuf,
    words: Vec<String>,
    /// Loading stopped at a blank line, so anything appended after it is lost on reload.
    cut_short: bool,
}

impl WordStore {
    /// Reads the word list at `path`. A missing or unreadable file is fatal.
    pub fn open(path: &Path) -> Result<Self> {
        let unavailable = |source| KeypadError::ResourceUnavailable { path: path.to_path_buf(), source };
        let file = File::open(path).map_err(unavailable)?;
        let (words, cut_short) = read_word_list(BufReader::new(file)).map_err(unavailable)?;
        if cut_short {
            log::warn!("{} has a blank line; words after it are ignored", path.display());
        }
        log::info!("read {} words from {}", words.len(), path.display());
        Ok(Self { path: path.to_path_buf(), words, cut_short })
    }

    pub fn from_parts(path: PathBuf, words: Vec<String>) -> Self {
        Self { path, words, cut_short: false }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_cut_short(&self) -> bool {
        self.cut_short
    }

    /// Records `word` in memory, then appends it as a new line on disk.
    /// The file is opened and closed on every call.
    ///
    /// When the file has a blank line the word would never be read back, so
    /// the disk write is refused and `StorageAppendFailed` returned.
    pub fn append(&mut self, word: &str) -> Result<()> {
        self.words.push(word.to_string());
        let written = if self.cut_short {
            Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "a blank line ends the word list, appended words would not be loaded",
            ))
        } else {
            append_line(&self.path, word)
        };
        written.map_err(|source| KeypadError::StorageAppendFailed {
            word: word.to_string(),
            path: self.path.clone(),
            source,
        })
    }
}

/// Lines up to the first empty one, and whether an empty line was hit.
/// Windows line endings are tolerated.
fn read_word_list(reader: impl BufRead) -> io::Result<(Vec<String>, bool)> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.strip_suffix('\r').unwrap_or(&line);
        if word.is_empty() {
            return Ok((words, true));
        }
        words.push(word.to_string());
    }
    Ok((words, false))
}

fn append_line(path: &Path, word: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().read(true).append(true).open(path)?;

    // A file saved without a trailing newline would glue the new word onto its last line.
    let mut needs_separator = false;
    if file.metadata()?.len() > 0 {
        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        needs_separator = last[0] != b'\n';
    }

    let mut line = String::with_capacity(word.len() + 2);
    if needs_separator {
        line.push('\n');
    }
    line.push_str(word);
    line.push('\n');
    file.write_all(line.as_bytes())?;
    file.flush()
}

/// Size and modification time of a dictionary file.
/// A snapshot is only reused while its dictionary still has the same stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryStamp {
    len: u64,
    modified: SystemTime,
}

impl DictionaryStamp {
    pub fn read(path: &Path) -> io::Result<Self> {
        let meta = fs::metadata(path)?;
        Ok(Self { len: meta.len(), modified: meta.modified()? })
    }
}

/// The serializable state of the engine.
#[derive(Serialize)]
struct SerializableState<'a> {
    stamp: DictionaryStamp,
    cut_short: bool,
    trie: &'a Trie,
    words: &'a [String],
}

/// A trie and word list read back by [`load_snapshot`].
#[derive(Deserialize)]
pub struct Snapshot {
    stamp: DictionaryStamp,
    cut_short: bool,
    trie: Trie,
    words: Vec<String>,
}

impl Snapshot {
    /// True when `dictionary` has the size and modification time it had when the snapshot was taken.
    pub fn matches(&self, dictionary: &Path) -> bool {
        DictionaryStamp::read(dictionary).is_ok_and(|stamp| stamp == self.stamp)
    }

    /// The restored trie and a word store appending to `dictionary`.
    pub fn into_parts(self, dictionary: PathBuf) -> (Trie, WordStore) {
        let store = WordStore { path: dictionary, words: self.words, cut_short: self.cut_short };
        (self.trie, store)
    }
}

fn snapshot_error(path: &Path, source: impl Into<BoxedSource>) -> KeypadError {
    KeypadError::Snapshot { path: path.to_path_buf(), source: source.into() }
}

/// Writes the trie and its word list to `path` atomically, stamped with the
/// current state of the store's dictionary file.
pub fn save_snapshot(trie: &Trie, store: &WordStore, path: &Path) -> Result<()> {
    let stamp = DictionaryStamp::read(store.path()).map_err(|e| snapshot_error(path, e))?;

    let parent_dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir).map_err(|e| snapshot_error(path, e))?;

    let state = SerializableState { stamp, cut_short: store.is_cut_short(), trie, words: store.words() };

    let temp_file = NamedTempFile::new_in(parent_dir).map_err(|e| snapshot_error(path, e))?;
    {
        let mut writer = BufWriter::new(&temp_file);
        bincode::serialize_into(&mut writer, &state).map_err(|e| snapshot_error(path, e))?;
        writer.flush().map_err(|e| snapshot_error(path, e))?;
    }

    temp_file.persist(path).map_err(|e| snapshot_error(path, e))?;
    log::info!("snapshot written to {}", path.display());
    Ok(())
}

/// Reads a snapshot written by [`save_snapshot`].
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let file = File::open(path).map_err(|e| snapshot_error(path, e))?;
    bincode::deserialize_from(BufReader::new(file)).map_err(|e| snapshot_error(path, e))
}
