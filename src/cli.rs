//! Process arguments.
//!
//! The calculator itself is interactive; flags only adjust configuration
//! before the REPL starts.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Interactive calculator with undo/redo and persistent history.
#[derive(Debug, Parser)]
#[command(name = "calc", version, after_long_help = COMMANDS_HELP)]
pub struct Cli {
    /// Config file (TOML). Defaults to `~/.calculator/config.toml` when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory for the application and calculation logs.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Directory for saved and auto-saved history.
    #[arg(long)]
    pub history_dir: Option<PathBuf>,

    /// Do not rewrite the auto-save file after each calculation.
    #[arg(long)]
    pub no_auto_save: bool,
}

const COMMANDS_HELP: &str = r"Commands (inside the calculator):
  add|subtract|multiply|divide|power|root|modulus|int_divide|percent|abs_diff <a> <b>
  undo, redo       step through results
  history, clear   show or clear this session's calculations
  save, load       write or read history/manual_history.jsonl
  help, exit

Environment:
  CALCULATOR_LOG_DIR, CALCULATOR_HISTORY_DIR, CALCULATOR_LOG_FILE,
  CALCULATOR_MAX_HISTORY_SIZE, CALCULATOR_AUTO_SAVE, CALCULATOR_PRECISION,
  CALCULATOR_MAX_INPUT_VALUE";

impl Cli {
    /// Load configuration and apply flag overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(dir) = &self.log_dir {
            config.log_dir.clone_from(dir);
        }
        if let Some(dir) = &self.history_dir {
            config.history_dir.clone_from(dir);
        }
        if self.no_auto_save {
            config.auto_save = false;
        }
        Ok(config)
    }
}
