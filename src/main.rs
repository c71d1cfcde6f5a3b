use std::io::{self, IsTerminal};
use std::process;

use clap::Parser;

use calc::calculator::Calculator;
use calc::cli::Cli;
use calc::logging;
use calc::observer::{AutoSaveObserver, LoggingObserver};
use calc::repl::Repl;
use calc::storage::Storage;

fn main() {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = config.ensure_dirs() {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    if let Err(e) = logging::init(&config) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(1);
    }

    let storage = match Storage::new(config.history_dir.clone()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to initialize storage: {e}");
            process::exit(1);
        }
    };

    let mut calculator = Calculator::new();
    calculator.register_observer(Box::new(LoggingObserver::new(
        config.log_file_path(),
        config.precision,
    )));
    calculator.register_observer(Box::new(AutoSaveObserver::new(
        storage.clone(),
        config.auto_save,
        config.max_history_size,
    )));

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut repl = Repl::new(calculator, storage, &config, stdout.lock()).with_color(color);

    if let Err(e) = repl.run(io::stdin().lock()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
