use crate::cli::output;
use crate::cli::prompt::Prompter;
use crate::dict::dictionary::{self, DictionaryError};
use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// How a batch of unknown words was settled.
#[derive(Debug, Default)]
pub struct Resolution {
    pub accepted: Vec<String>,
    pub declined: Vec<String>,
    pub failed: Vec<(String, DictionaryError)>,
}

impl Resolution {
    /// Every word was accepted and written.
    pub fn is_complete(&self) -> bool {
        self.declined.is_empty() && self.failed.is_empty()
    }

    pub fn unresolved(&self) -> usize {
        self.declined.len() + self.failed.len()
    }
}

/// Drop repeated words, keeping the first occurrence.
pub fn unique_words(words: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .iter()
        .filter(|word| seen.insert(word.as_str()))
        .cloned()
        .collect()
}

pub struct DictionaryUpdater {
    path: PathBuf,
    colored: bool,
}

impl DictionaryUpdater {
    pub fn new(path: &Path, colored: bool) -> Self {
        Self {
            path: path.to_path_buf(),
            colored,
        }
    }

    /// Ask about each word in turn and persist the accepted ones.
    ///
    /// Each accepted word is its own read-modify-write of the file, so a failed
    /// write only costs that word.
    pub fn resolve(&self, words: &[String], prompter: &mut dyn Prompter) -> Result<Resolution> {
        let mut resolution = Resolution::default();
        let words = unique_words(words);
        if words.is_empty() {
            return Ok(resolution);
        }

        output::print_walkthrough_intro(words.len(), self.colored);

        for word in words {
            if !prompter.confirm_add(&word, &self.path)? {
                info!(word = %word, "word declined");
                resolution.declined.push(word);
                continue;
            }

            match self.add(&word) {
                Ok(()) => resolution.accepted.push(word),
                Err(e) => resolution.failed.push((word, e)),
            }
        }

        Ok(resolution)
    }

    /// Add a single word, reporting the result on the console.
    pub fn add(&self, word: &str) -> Result<(), DictionaryError> {
        match dictionary::add_word(&self.path, word) {
            Ok(added) => {
                output::print_word_added(word, &self.path, added, self.colored);
                Ok(())
            }
            Err(e) => {
                warn!(word, err = %e, "failed to persist word");
                output::print_persist_error(word, &e, self.colored);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::{DeclineAll, LinePrompter};
    use crate::dict::dictionary::WordDictionary;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    const BASE: &str = "{\n  \"version\": \"0.2\",\n  \"words\": [\"cspell\"],\n  \"flagWords\": []\n}";

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn answers(script: &str) -> LinePrompter<Cursor<String>, Vec<u8>> {
        LinePrompter::new(Cursor::new(script.to_string()), Vec::new())
    }

    #[test]
    fn test_empty_list_is_trivially_complete() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cSpell.json");
        let updater = DictionaryUpdater::new(&path, false);

        let mut prompter = answers("");
        let resolution = updater.resolve(&[], &mut prompter).unwrap();
        assert!(resolution.is_complete());
        assert!(prompter.into_output().is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_accept_all() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cSpell.json");
        fs::write(&path, BASE).unwrap();
        let updater = DictionaryUpdater::new(&path, false);

        let resolution = updater
            .resolve(&words(&["foo", "bar"]), &mut answers("yes\ny\n"))
            .unwrap();
        assert!(resolution.is_complete());
        assert_eq!(resolution.accepted, words(&["foo", "bar"]));

        let dict = WordDictionary::load(&path).unwrap();
        assert_eq!(dict.words(), words(&["bar", "cspell", "foo"]).as_slice());
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["version"], "0.2");
        assert_eq!(value["flagWords"], serde_json::json!([]));
    }

    #[test]
    fn test_partial_acceptance() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cSpell.json");
        fs::write(&path, BASE).unwrap();
        let updater = DictionaryUpdater::new(&path, false);

        let resolution = updater
            .resolve(&words(&["foo", "bar"]), &mut answers("YES\nno\n"))
            .unwrap();
        assert!(!resolution.is_complete());
        assert_eq!(resolution.accepted, words(&["foo"]));
        assert_eq!(resolution.declined, words(&["bar"]));

        let dict = WordDictionary::load(&path).unwrap();
        assert!(dict.contains("foo"));
        assert!(!dict.contains("bar"));
    }

    #[test]
    fn test_declining_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cSpell.json");
        fs::write(&path, BASE).unwrap();
        let updater = DictionaryUpdater::new(&path, false);

        let resolution = updater
            .resolve(&words(&["typo"]), &mut answers("no\n"))
            .unwrap();
        assert!(!resolution.is_complete());
        assert_eq!(resolution.unresolved(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), BASE);
    }

    #[test]
    fn test_decline_all_prompter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cSpell.json");
        fs::write(&path, BASE).unwrap();
        let updater = DictionaryUpdater::new(&path, false);

        let resolution = updater
            .resolve(&words(&["foo", "bar"]), &mut DeclineAll)
            .unwrap();
        assert_eq!(resolution.declined, words(&["foo", "bar"]));
        assert_eq!(fs::read_to_string(&path).unwrap(), BASE);
    }

    #[test]
    fn test_duplicates_prompted_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cSpell.json");
        let updater = DictionaryUpdater::new(&path, false);

        let mut prompter = answers("y\ny\n");
        let resolution = updater
            .resolve(&words(&["teh", "recieve", "teh"]), &mut prompter)
            .unwrap();
        assert!(resolution.is_complete());
        assert_eq!(resolution.accepted, words(&["teh", "recieve"]));

        let transcript = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(transcript.matches("\"teh\"").count(), 1);
    }

    #[test]
    fn test_persist_failure_continues() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cSpell.json");
        fs::write(&path, "not json").unwrap();
        let updater = DictionaryUpdater::new(&path, false);

        let mut prompter = answers("y\ny\n");
        let resolution = updater
            .resolve(&words(&["foo", "bar"]), &mut prompter)
            .unwrap();
        assert!(!resolution.is_complete());
        assert_eq!(resolution.failed.len(), 2);

        // Both words were still asked about
        let transcript = String::from_utf8(prompter.into_output()).unwrap();
        assert!(transcript.contains("\"bar\""));
    }

    #[test]
    fn test_unique_words_keeps_first_occurrence() {
        assert_eq!(
            unique_words(&words(&["b", "a", "b", "c", "a"])),
            words(&["b", "a", "c"])
        );
    }
}
