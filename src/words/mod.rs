// src/words/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::generators::random::RandomSource;

mod builtin;

pub use builtin::BUILTIN_WORDS;

const SHARD_COUNT: u8 = 26;

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("IO error reading {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    JsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Word list is empty")]
    Empty,

    #[error("Word {0:?} is empty or contains whitespace")]
    InvalidWord(String),

    #[error("No words-a?.json shards found in {0}")]
    NoShards(PathBuf),
}

pub type Result<T> = std::result::Result<T, WordListError>;

/// Provider of dictionary words for the password base.
pub trait WordSource {
    /// Draw a batch of candidate words. The batch size follows the
    /// policy's byte length: one word per byte.
    fn words_for_entropy(&self, byte_length: usize, rng: &mut dyn RandomSource) -> Result<Vec<String>>;

    fn all_words(&self) -> &[String];
}

// An in-memory word list, loaded once
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        if let Some(bad) = words.iter().find(|w| w.is_empty() || w.chars().any(char::is_whitespace)) {
            return Err(WordListError::InvalidWord(bad.clone()));
        }
        Ok(Self { words })
    }

    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    // A JSON array of strings, the format of the sharded word files
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = read(path)?;
        let words: Vec<String> = serde_json::from_str(&content).map_err(|source| WordListError::JsonError {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded {} words from {}", words.len(), path.display());
        Self::new(words)
    }

    // One word per line; blank lines and '#' comments are skipped
    pub fn from_text_file(path: &Path) -> Result<Self> {
        let content = read(path)?;
        let words: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();
        log::debug!("Loaded {} words from {}", words.len(), path.display());
        Self::new(words)
    }

    /// Load one shard at random from a directory of `words-aa.json` ..
    /// `words-az.json`. Missing shards are skipped.
    pub fn from_shard_dir(dir: &Path, rng: &mut dyn RandomSource) -> Result<Self> {
        let shards: Vec<PathBuf> = shard_file_names()
            .into_iter()
            .map(|name| dir.join(name))
            .filter(|path| path.is_file())
            .collect();

        if shards.is_empty() {
            return Err(WordListError::NoShards(dir.to_path_buf()));
        }

        let chosen = &shards[rng.index(shards.len())];
        log::debug!("Using word shard {}", chosen.display());
        Self::from_json_file(chosen)
    }

    /// Pick a loader from the shape of `path`: a directory is treated as a
    /// shard directory, `.json` as a JSON array, anything else as text.
    pub fn from_path(path: &Path, rng: &mut dyn RandomSource) -> Result<Self> {
        if path.is_dir() {
            return Self::from_shard_dir(path, rng);
        }
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_file(path),
            _ => Self::from_text_file(path),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for WordList {
    fn words_for_entropy(&self, byte_length: usize, rng: &mut dyn RandomSource) -> Result<Vec<String>> {
        if self.words.is_empty() {
            return Err(WordListError::Empty);
        }
        let batch = (0..byte_length.max(1))
            .map(|_| self.words[rng.index(self.words.len())].clone())
            .collect();
        Ok(batch)
    }

    fn all_words(&self) -> &[String] {
        &self.words
    }
}

// words-aa.json .. words-az.json
pub fn shard_file_names() -> Vec<String> {
    (0..SHARD_COUNT)
        .map(|i| format!("words-a{}.json", (b'a' + i) as char))
        .collect()
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| WordListError::IoError {
        path: path.to_path_buf(),
        source,
    })
}
