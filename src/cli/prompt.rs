use anyhow::{Context, Result};
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// How unknown words are put to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    /// Interactive prompt on the controlling terminal
    Terminal,
    /// One answer per line from stdin
    Lines,
    /// Decline everything without asking
    Skip,
}

impl PromptMode {
    /// Git runs hooks with stdin on /dev/null, so a terminal on stderr is
    /// enough: console reads keys from /dev/tty in that case.
    pub fn select(no_prompt: bool, stdin_is_term: bool, stderr_is_term: bool) -> Self {
        if no_prompt {
            PromptMode::Skip
        } else if stdin_is_term || stderr_is_term {
            PromptMode::Terminal
        } else {
            PromptMode::Lines
        }
    }

    pub fn prompter(self) -> Box<dyn Prompter> {
        match self {
            PromptMode::Terminal => Box::new(TerminalPrompter::new()),
            PromptMode::Lines => Box::new(LinePrompter::new(io::stdin().lock(), io::stdout())),
            PromptMode::Skip => Box::new(DeclineAll),
        }
    }
}

/// Asks whether an unknown word should join the dictionary.
pub trait Prompter {
    fn confirm_add(&mut self, word: &str, dictionary: &Path) -> Result<bool>;
}

/// `y` or `yes` in any case; everything else declines.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn question(word: &str, dictionary: &Path) -> String {
    format!(
        "Add \"{}\" to the known words in {}? (y)es/no",
        word,
        dictionary.display()
    )
}

/// Prompts on the controlling terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn confirm_add(&mut self, word: &str, dictionary: &Path) -> Result<bool> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(question(word, dictionary))
            .allow_empty(true)
            .interact_text_on(&Term::stderr())
            .context("Failed to read answer from terminal")?;
        Ok(is_affirmative(&answer))
    }
}

/// Reads one answer per line, for piped input. End of input declines.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn confirm_add(&mut self, word: &str, dictionary: &Path) -> Result<bool> {
        write!(self.output, "{} ", question(word, dictionary))?;
        self.output.flush()?;

        let mut answer = String::new();
        let read = self
            .input
            .read_line(&mut answer)
            .context("Failed to read answer")?;
        if read == 0 {
            writeln!(self.output)?;
        }
        Ok(is_affirmative(&answer))
    }
}

/// Declines every word without asking.
pub struct DeclineAll;

impl Prompter for DeclineAll {
    fn confirm_add(&mut self, _word: &str, _dictionary: &Path) -> Result<bool> {
        Ok(false)
    }
}
