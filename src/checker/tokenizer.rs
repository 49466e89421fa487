use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\w+").expect("word pattern is valid");
}

/// Extract unknown words from engine output.
///
/// The engine is run with `--words-only --no-summary`, so every word-like run
/// in its stdout is a reported word. Order follows the output; duplicates are kept.
pub fn extract_words(output: &str) -> Vec<String> {
    WORD.find_iter(output)
        .map(|m| m.as_str().to_string())
        .collect()
}
