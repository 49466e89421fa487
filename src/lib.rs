pub mod checker;
pub mod cli;
pub mod config;
pub mod dict;
pub mod logging;

pub use checker::{CheckOutcome, CheckScope, SpellChecker};
pub use config::Settings;
pub use dict::{DictionaryUpdater, Resolution};

/// Process exit codes.
pub mod exit_code {
    /// Passed, or every unknown word was added.
    pub const SUCCESS: i32 = 0;
    /// Some unknown words were declined or could not be saved.
    pub const UNRESOLVED: i32 = 1;
    /// The engine or the tool's own setup failed.
    pub const TOOL_ERROR: i32 = 2;
}
