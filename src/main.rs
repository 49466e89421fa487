use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use console::Term;
use spellgate::cli::{self, output};
use spellgate::cli::prompt::PromptMode;
use spellgate::{
    exit_code, logging, CheckOutcome, CheckScope, DictionaryUpdater, Settings, SpellChecker,
};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spellgate")]
#[command(version, about = "Run cspell from git hooks and whitelist unknown words", long_about = None)]
struct Cli {
    /// cspell configuration file holding the known words
    #[arg(short, long, global = true, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Spell checker command, e.g. "npx cspell"
    #[arg(long, global = true, value_name = "CMD")]
    engine: Option<String>,

    /// Report unknown words without asking to add them
    #[arg(long, global = true)]
    no_prompt: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check the pending commit message
    Message {
        /// Commit message file (defaults to the path in $HUSKY_GIT_PARAMS)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
    /// Check every file in the working tree
    Files,
    /// Add words to the dictionary without checking
    Add {
        #[arg(value_name = "WORD", required = true, value_parser = cli::parse_word)]
        words: Vec<String>,
    },
}

fn main() {
    logging::init();

    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code::TOOL_ERROR
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let colored = !cli.no_color;
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spellgate", &mut io::stdout());
        return Ok(exit_code::SUCCESS);
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(exit_code::TOOL_ERROR);
    };

    let settings = Settings::load(cli.dictionary, cli.engine)?;
    let updater = DictionaryUpdater::new(&settings.dictionary, colored);

    let (scope, message_file) = match command {
        Commands::Message { path } => (CheckScope::Message, path),
        Commands::Files => (CheckScope::Files, None),
        Commands::Add { words } => return Ok(add_words(&updater, &words)),
    };

    let checker = SpellChecker::new(&settings)
        .with_message_file(message_file)
        .with_progress(Term::stderr().is_term());

    let words = match checker.check(scope) {
        CheckOutcome::Passed => {
            output::print_check_passed(scope, colored);
            return Ok(exit_code::SUCCESS);
        }
        CheckOutcome::ToolError(detail) => {
            output::print_tool_error(&detail, colored);
            return Ok(exit_code::TOOL_ERROR);
        }
        CheckOutcome::UnknownWordsFound(words) => words,
    };

    output::print_unknown_words(scope, &words, colored);

    let mode = PromptMode::select(
        cli.no_prompt,
        io::stdin().is_terminal(),
        Term::stderr().is_term(),
    );
    let mut prompter = mode.prompter();
    let resolution = updater.resolve(&words, prompter.as_mut())?;

    output::print_resolution_summary(&resolution, colored);

    // Any word left behind blocks the commit
    if resolution.is_complete() {
        Ok(exit_code::SUCCESS)
    } else {
        Ok(exit_code::UNRESOLVED)
    }
}

fn add_words(updater: &DictionaryUpdater, words: &[String]) -> i32 {
    let mut failures = 0;
    for word in words {
        if updater.add(word).is_err() {
            failures += 1;
        }
    }

    if failures == 0 {
        exit_code::SUCCESS
    } else {
        exit_code::UNRESOLVED
    }
}
