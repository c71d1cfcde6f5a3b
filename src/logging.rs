//! Application log setup.
//!
//! Everything logged through the `log` macros goes to
//! `<log-dir>/calculator.log`, never the terminal, so it cannot interleave
//! with REPL output. The level comes from `RUST_LOG`, defaulting to `info`.

use std::{fs, io};

use env_logger::{Builder, Env, Target};

use crate::config::Config;

/// Install the global logger. Call once, after the log directory exists.
pub fn init(config: &Config) -> io::Result<()> {
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.app_log_path())?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init()
        .map_err(io::Error::other)
}
