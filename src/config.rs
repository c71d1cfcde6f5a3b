//! Calculator configuration.
//!
//! Resolved through a chain, later sources overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. A TOML file: `--config <path>`, or `~/.calculator/config.toml` if present
//! 3. `CALCULATOR_*` environment variables
//! 4. Command-line flags (applied by the caller)

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value for {key}: '{value}'")]
    InvalidEnv { key: &'static str, value: String },

    #[error("failed to create {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
}

/// Calculator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Directory for the application log and the calculation log.
    pub log_dir: PathBuf,

    /// Directory for saved and auto-saved history.
    pub history_dir: PathBuf,

    /// File name of the calculation log inside `log_dir`.
    pub log_file: String,

    /// Most calculations kept in the session history and the auto-save file.
    pub max_history_size: usize,

    /// Rewrite the auto-save file after every calculation.
    pub auto_save: bool,

    /// Decimal places used when logging results.
    pub precision: usize,

    /// Largest operand magnitude the REPL accepts.
    pub max_input_value: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            history_dir: PathBuf::from("history"),
            log_file: "calculations.log".to_string(),
            max_history_size: 100,
            auto_save: true,
            precision: 4,
            max_input_value: 1e9,
        }
    }
}

impl Config {
    /// Load configuration from file and process environment.
    ///
    /// An explicit `path` must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        config.with_env(|key| env::var(key).ok())
    }

    /// Parse a TOML config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `CALCULATOR_*` overrides read through `lookup`.
    ///
    /// Empty values are ignored.
    pub fn with_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = var("CALCULATOR_LOG_DIR") {
            self.log_dir = PathBuf::from(v);
        }
        if let Some(v) = var("CALCULATOR_HISTORY_DIR") {
            self.history_dir = PathBuf::from(v);
        }
        if let Some(v) = var("CALCULATOR_LOG_FILE") {
            self.log_file = v;
        }
        if let Some(v) = var("CALCULATOR_MAX_HISTORY_SIZE") {
            self.max_history_size = parse_env("CALCULATOR_MAX_HISTORY_SIZE", v)?;
        }
        if let Some(v) = var("CALCULATOR_AUTO_SAVE") {
            self.auto_save = matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "true" | "1" | "t" | "yes"
            );
        }
        if let Some(v) = var("CALCULATOR_PRECISION") {
            self.precision = parse_env("CALCULATOR_PRECISION", v)?;
        }
        if let Some(v) = var("CALCULATOR_MAX_INPUT_VALUE") {
            self.max_input_value = parse_env("CALCULATOR_MAX_INPUT_VALUE", v)?;
        }

        Ok(self)
    }

    /// Create the log and history directories.
    pub fn ensure_dirs(&self) -> Result<(), ConfigError> {
        for dir in [&self.log_dir, &self.history_dir] {
            fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// Path of the calculation log.
    pub fn log_file_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file)
    }

    /// Path of the application log written by `env_logger`.
    pub fn app_log_path(&self) -> PathBuf {
        self.log_dir.join("calculator.log")
    }

    /// The default config file path: `~/.calculator/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".calculator").join("config.toml"))
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { key, value })
}
