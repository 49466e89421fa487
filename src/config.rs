use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".spellgate.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Engine program followed by its leading arguments
    pub engine: Vec<String>,
    /// cspell configuration file holding the `words` list
    pub dictionary: PathBuf,
    /// Environment variable carrying the commit message path
    pub message_env: String,
    /// Glob handed to the engine when checking the whole tree
    pub files_glob: String,
    /// Appended verbatim after the built-in engine flags
    pub extra_args: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            engine: vec!["npx".to_string(), "cspell".to_string()],
            dictionary: PathBuf::from("cSpell.json"),
            message_env: "HUSKY_GIT_PARAMS".to_string(),
            files_glob: "**".to_string(),
            extra_args: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings with priority: CLI args > local config > global config > defaults
    pub fn load(dictionary: Option<PathBuf>, engine: Option<String>) -> Result<Self> {
        Self::load_layers(
            Self::global_config_path().as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
            dictionary,
            engine,
        )
    }

    pub fn load_layers(
        global_path: Option<&Path>,
        local_path: &Path,
        dictionary: Option<PathBuf>,
        engine: Option<String>,
    ) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(global_path) = global_path {
            if global_path.exists() {
                let global = Self::from_file(global_path)?;
                settings = settings.merge(global);
            }
        }

        if local_path.exists() {
            let local = Self::from_file(local_path)?;
            settings = settings.merge(local);
        }

        if let Some(dictionary) = dictionary {
            settings.dictionary = dictionary;
        }
        if let Some(engine) = engine {
            let parts: Vec<String> = engine.split_whitespace().map(str::to_string).collect();
            if parts.is_empty() {
                anyhow::bail!("--engine must name a program");
            }
            settings.engine = parts;
        }

        tracing::debug!(?settings, "settings loaded");
        Ok(settings)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Only values that differ from the defaults override
        let defaults = Self::default();
        if !other.engine.is_empty() && other.engine != defaults.engine {
            self.engine = other.engine;
        }
        if other.dictionary != defaults.dictionary {
            self.dictionary = other.dictionary;
        }
        if other.message_env != defaults.message_env {
            self.message_env = other.message_env;
        }
        if other.files_glob != defaults.files_glob {
            self.files_glob = other.files_glob;
        }
        if !other.extra_args.is_empty() {
            self.extra_args = other.extra_args;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellgate").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
