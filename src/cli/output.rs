use crate::checker::CheckScope;
use crate::dict::dictionary::DictionaryError;
use crate::dict::updater::Resolution;
use colored::*;
use std::fs;
use std::path::Path;

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "word"
    } else {
        "words"
    }
}

fn absolute(path: &Path) -> String {
    fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

pub fn print_check_passed(scope: CheckScope, colored: bool) {
    let message = format!("✓ The {} spell check passed.", scope);
    if colored {
        println!("{}", message.green().bold());
    } else {
        println!("{}", message);
    }
}

pub fn print_unknown_words(scope: CheckScope, words: &[String], colored: bool) {
    let headline = match scope {
        CheckScope::Message => "The commit message contains unknown word(s).",
        CheckScope::Files => "Files contain unknown word(s).",
    };
    let count = format!("Spell checker found {} unknown {}:", words.len(), plural(words.len()));

    if colored {
        println!("{}", headline.red().bold());
        println!(
            "{} {}",
            count.red(),
            words
                .iter()
                .map(|w| w.yellow().to_string())
                .collect::<Vec<_>>()
                .join(&", ".dimmed().to_string())
        );
    } else {
        println!("{}", headline);
        println!("{} {}", count, words.join(", "));
    }
}

pub fn print_tool_error(detail: &str, colored: bool) {
    if colored {
        eprintln!("{} {}", "cspell error:".red().bold(), detail);
    } else {
        eprintln!("cspell error: {}", detail);
    }
}

pub fn print_walkthrough_intro(count: usize, colored: bool) {
    let message = format!("Let's go over the {} unknown {} one by one.", count, plural(count));
    if colored {
        println!("{}", message.cyan());
    } else {
        println!("{}", message);
    }
}

pub fn print_word_added(word: &str, path: &Path, added: bool, colored: bool) {
    let quoted = format!("\"{}\"", word);
    let verb = if added { "Added" } else { "Already known:" };
    if colored {
        println!(
            "{} {} {} to {}",
            "✔".green().bold(),
            verb.green(),
            quoted.cyan(),
            absolute(path).dimmed()
        );
    } else {
        println!("✔ {} {} to {}", verb, quoted, absolute(path));
    }
}

pub fn print_persist_error(word: &str, error: &DictionaryError, colored: bool) {
    if colored {
        eprintln!(
            "{} could not add \"{}\": {}",
            "✗".red().bold(),
            word.yellow(),
            error
        );
    } else {
        eprintln!("✗ could not add \"{}\": {}", word, error);
    }
}

pub fn print_resolution_summary(resolution: &Resolution, colored: bool) {
    println!();
    if resolution.is_complete() {
        let message = format!(
            "✓ All {} unknown {} added to the dictionary.",
            resolution.accepted.len(),
            plural(resolution.accepted.len())
        );
        if colored {
            println!("{}", message.green().bold());
        } else {
            println!("{}", message);
        }
        return;
    }

    let unresolved: Vec<&str> = resolution
        .declined
        .iter()
        .map(String::as_str)
        .chain(resolution.failed.iter().map(|(word, _)| word.as_str()))
        .collect();
    let count = resolution.unresolved();

    if colored {
        println!(
            "{} {} unknown {} left unresolved: {}",
            "✗".red().bold(),
            count.to_string().red().bold(),
            plural(count),
            unresolved.join(", ").yellow()
        );
        println!("{}", "Fix the typos or add the words to continue.".dimmed());
    } else {
        println!(
            "✗ {} unknown {} left unresolved: {}",
            count,
            plural(count),
            unresolved.join(", ")
        );
        println!("Fix the typos or add the words to continue.");
    }
}
