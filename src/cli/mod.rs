pub mod output;
pub mod prompt;

/// Value parser for words given on the command line.
pub fn parse_word(raw: &str) -> Result<String, String> {
    let word = raw.trim();
    if word.is_empty() {
        return Err("word must not be blank".to_string());
    }
    Ok(word.to_string())
}
