pub mod engine;
pub mod tokenizer;

use crate::Settings;
use engine::EngineOutput;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// What the engine is pointed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckScope {
    Message,
    Files,
}

impl fmt::Display for CheckScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckScope::Message => write!(f, "commit message"),
            CheckScope::Files => write!(f, "files"),
        }
    }
}

/// Result of one spell check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    UnknownWordsFound(Vec<String>),
    ToolError(String),
}

/// Classify a finished engine run.
///
/// Order matters: a failing run that reported words wins over stderr noise, and a
/// failing run that printed nothing at all is an engine error, never a pass.
pub fn classify(output: &EngineOutput) -> CheckOutcome {
    if !output.success {
        let words = tokenizer::extract_words(&output.stdout);
        if !words.is_empty() {
            return CheckOutcome::UnknownWordsFound(words);
        }
    }

    let stderr = output.stderr.trim();
    if !stderr.is_empty() {
        return CheckOutcome::ToolError(stderr.to_string());
    }

    if !output.success {
        let status = output
            .code
            .map_or_else(|| "a signal".to_string(), |code| format!("status {}", code));
        return CheckOutcome::ToolError(format!(
            "spell checker exited with {} without reporting any words",
            status
        ));
    }

    CheckOutcome::Passed
}

pub struct SpellChecker {
    settings: Settings,
    message_file: Option<PathBuf>,
    progress: bool,
}

impl SpellChecker {
    pub fn new(settings: &Settings) -> Self {
        Self {
            settings: settings.clone(),
            message_file: None,
            progress: false,
        }
    }

    /// Use an explicit commit message path instead of the environment variable.
    pub fn with_message_file(mut self, path: Option<PathBuf>) -> Self {
        self.message_file = path;
        self
    }

    /// Show a spinner while the engine runs.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    fn target(&self, scope: CheckScope) -> Result<String, String> {
        match scope {
            CheckScope::Files => Ok(self.settings.files_glob.clone()),
            CheckScope::Message => {
                if let Some(path) = &self.message_file {
                    return Ok(path.display().to_string());
                }
                let var = &self.settings.message_env;
                match std::env::var(var) {
                    Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
                    _ => Err(format!(
                        "no commit message file: pass a path or set ${}",
                        var
                    )),
                }
            }
        }
    }

    pub fn check(&self, scope: CheckScope) -> CheckOutcome {
        let target = match self.target(scope) {
            Ok(target) => target,
            Err(message) => return CheckOutcome::ToolError(message),
        };

        let output = match engine::build_command(&self.settings, &target)
            .and_then(|cmd| self.run_with_spinner(cmd))
        {
            Ok(output) => output,
            Err(e) => {
                warn!(err = %e, "engine did not run");
                return CheckOutcome::ToolError(format!("{:#}", e));
            }
        };

        let outcome = classify(&output);
        match &outcome {
            CheckOutcome::Passed => info!(%scope, "spell check passed"),
            CheckOutcome::UnknownWordsFound(words) => {
                info!(%scope, count = words.len(), "unknown words found");
            }
            CheckOutcome::ToolError(detail) => warn!(%scope, %detail, "engine error"),
        }
        outcome
    }

    fn run_with_spinner(&self, cmd: std::process::Command) -> anyhow::Result<EngineOutput> {
        if !self.progress {
            return engine::run(cmd);
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message("Checking spelling...");
        pb.enable_steady_tick(Duration::from_millis(100));
        let result = engine::run(cmd);
        pb.finish_and_clear();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(success: bool, stdout: &str, stderr: &str) -> EngineOutput {
        EngineOutput {
            success,
            code: Some(if success { 0 } else { 1 }),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
        }
    }

    #[test]
    fn test_clean_run_passes() {
        assert_eq!(classify(&output(true, "", "")), CheckOutcome::Passed);
    }

    #[test]
    fn test_failure_with_words() {
        assert_eq!(
            classify(&output(false, "foo bar baz", "")),
            CheckOutcome::UnknownWordsFound(vec!["foo".into(), "bar".into(), "baz".into()])
        );
    }

    #[test]
    fn test_words_take_priority_over_stderr() {
        assert_eq!(
            classify(&output(false, "teh\n", "warning: something\n")),
            CheckOutcome::UnknownWordsFound(vec!["teh".into()])
        );
    }

    #[test]
    fn test_stderr_is_tool_error() {
        assert_eq!(
            classify(&output(false, "", "Configuration Error: bad json\n")),
            CheckOutcome::ToolError("Configuration Error: bad json".into())
        );
        // Even on a zero exit status
        assert_eq!(
            classify(&output(true, "", "boom")),
            CheckOutcome::ToolError("boom".into())
        );
    }

    #[test]
    fn test_silent_failure_is_tool_error() {
        match classify(&output(false, "", "")) {
            CheckOutcome::ToolError(detail) => assert!(detail.contains("status 1")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_stdout_ignored_on_success() {
        assert_eq!(classify(&output(true, "noise\n", "")), CheckOutcome::Passed);
    }

    #[test]
    fn test_explicit_message_file_target() {
        let checker = SpellChecker::new(&Settings::default())
            .with_message_file(Some(PathBuf::from(".git/COMMIT_EDITMSG")));
        assert_eq!(
            checker.target(CheckScope::Message).unwrap(),
            ".git/COMMIT_EDITMSG"
        );
    }

    #[test]
    fn test_message_target_from_env() {
        let settings = Settings {
            message_env: "SPELLGATE_TEST_MESSAGE_PATH".into(),
            ..Default::default()
        };
        std::env::set_var("SPELLGATE_TEST_MESSAGE_PATH", " .git/COMMIT_EDITMSG ");
        let checker = SpellChecker::new(&settings);
        assert_eq!(
            checker.target(CheckScope::Message).unwrap(),
            ".git/COMMIT_EDITMSG"
        );
    }

    #[test]
    fn test_missing_message_path_is_tool_error() {
        let settings = Settings {
            message_env: "SPELLGATE_TEST_UNSET_VARIABLE".into(),
            ..Default::default()
        };
        let checker = SpellChecker::new(&settings);
        match checker.check(CheckScope::Message) {
            CheckOutcome::ToolError(detail) => {
                assert!(detail.contains("SPELLGATE_TEST_UNSET_VARIABLE"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_files_target_is_glob() {
        let checker = SpellChecker::new(&Settings::default());
        assert_eq!(checker.target(CheckScope::Files).unwrap(), "**");
    }

    #[cfg(unix)]
    #[test]
    fn test_check_runs_engine() {
        // Trailing engine arguments land in $0.. and are ignored by the script
        let settings = Settings {
            engine: vec![
                "sh".into(),
                "-c".into(),
                "printf 'recieve\\nteh\\n'; exit 1".into(),
            ],
            ..Default::default()
        };
        let checker = SpellChecker::new(&settings);
        assert_eq!(
            checker.check(CheckScope::Files),
            CheckOutcome::UnknownWordsFound(vec!["recieve".into(), "teh".into()])
        );
    }

    #[test]
    fn test_unspawnable_engine_is_tool_error() {
        let settings = Settings {
            engine: vec!["spellgate-no-such-engine-binary".into()],
            ..Default::default()
        };
        let checker = SpellChecker::new(&settings);
        assert!(matches!(
            checker.check(CheckScope::Files),
            CheckOutcome::ToolError(_)
        ));
    }
}
