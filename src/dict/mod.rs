pub mod dictionary;
pub mod updater;

pub use dictionary::{add_word, DictionaryError, WordDictionary};
pub use updater::{DictionaryUpdater, Resolution};
