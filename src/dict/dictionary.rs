use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const WORDS_KEY: &str = "words";

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("{} is not valid JSON (comments are not supported): {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} must contain a JSON object", .path.display())]
    NotAnObject { path: PathBuf },

    #[error("`words` in {} must be an array of strings", .path.display())]
    InvalidWords { path: PathBuf },

    #[error("failed to serialize dictionary: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The cspell configuration file, of which only `words` is interpreted.
///
/// Every other field is carried through untouched and keeps its position.
#[derive(Debug, Clone)]
pub struct WordDictionary {
    path: PathBuf,
    config: Map<String, Value>,
    words: Vec<String>,
}

impl WordDictionary {
    /// Read the dictionary at `path`. A missing file is an empty dictionary.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(Self {
                    path: path.to_path_buf(),
                    config: Map::new(),
                    words: Vec::new(),
                });
            }
            Err(source) => {
                return Err(DictionaryError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let value: Value =
            serde_json::from_str(&contents).map_err(|source| DictionaryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let Value::Object(config) = value else {
            return Err(DictionaryError::NotAnObject {
                path: path.to_path_buf(),
            });
        };

        let words = match config.get(WORDS_KEY) {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .ok_or_else(|| DictionaryError::InvalidWords {
                    path: path.to_path_buf(),
                })?,
            Some(_) => {
                return Err(DictionaryError::InvalidWords {
                    path: path.to_path_buf(),
                })
            }
        };

        Ok(Self {
            path: path.to_path_buf(),
            config,
            words,
        })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Union `word` into the word set, keeping it sorted by code point.
    ///
    /// Returns `false` if the word was already known.
    pub fn insert(&mut self, word: &str) -> bool {
        let added = !self.contains(word);
        if added {
            self.words.push(word.to_string());
        }
        self.words.sort();
        self.words.dedup();
        added
    }

    /// Pretty-print the whole configuration back to its file.
    pub fn save(&self) -> Result<(), DictionaryError> {
        let mut config = self.config.clone();
        let words = self.words.iter().cloned().map(Value::String).collect();
        config.insert(WORDS_KEY.to_string(), Value::Array(words));

        let mut json = serde_json::to_string_pretty(&Value::Object(config))?;
        json.push('\n');

        fs::write(&self.path, json).map_err(|source| DictionaryError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Read the file fresh, add `word`, and write it back.
pub fn add_word(path: &Path, word: &str) -> Result<bool, DictionaryError> {
    let mut dictionary = WordDictionary::load(path)?;
    let added = dictionary.insert(word);
    dictionary.save()?;
    tracing::debug!(word, added, path = %path.display(), "dictionary written");
    Ok(added)
}
