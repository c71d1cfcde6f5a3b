//! Interactive read-eval-print loop.
//!
//! Reads one command per line, drives the [`Calculator`], and keeps the
//! session's list of calculations for `history`, `save`, and `load`.
//! Every failure is reported to the user and the loop carries on; only
//! I/O errors on the terminal itself end it.

mod command;
mod format;

use std::io::{self, BufRead, Write};

use log::{error, info, warn};

use crate::calculator::Calculator;
use crate::config::Config;
use crate::input::validate_operands;
use crate::model::{Calculation, HistoryRecord, format_number};
use crate::operation::Operation;
use crate::storage::{MANUAL_SAVE_FILE, Storage};

pub use command::Command;

use format::{Tone, format_history, help_text, paint};

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The REPL state: calculator, session history, and output sink.
pub struct Repl<W: Write> {
    calculator: Calculator,
    storage: Storage,
    max_history_size: usize,
    max_input_value: f64,
    /// Calculations made (or loaded) this session, oldest first.
    history: Vec<Calculation>,
    /// Entries removed by `undo`, restored by `redo`.
    undone: Vec<Calculation>,
    out: W,
    color: bool,
}

impl<W: Write> Repl<W> {
    pub fn new(calculator: Calculator, storage: Storage, config: &Config, out: W) -> Self {
        Self {
            calculator,
            storage,
            max_history_size: config.max_history_size,
            max_input_value: config.max_input_value,
            history: Vec::new(),
            undone: Vec::new(),
            out,
            color: true,
        }
    }

    /// Turn terminal colors on or off.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn history(&self) -> &[Calculation] {
        &self.history
    }

    /// Run until `exit` or end of input.
    pub fn run(&mut self, mut input: impl BufRead) -> io::Result<()> {
        info!("calculator started");
        self.say(Tone::Banner, "Welcome to the calculator!")?;
        self.say(Tone::Banner, "Type 'help' for available commands or 'exit' to quit.")?;

        let mut line = String::new();
        loop {
            write!(self.out, "{}", paint(Tone::Notice, ">>> ", self.color))?;
            self.out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(self.out)?;
                return self.exit();
            }

            if self.handle(&line)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Execute one line of input.
    fn handle(&mut self, line: &str) -> io::Result<Flow> {
        let Some(command) = Command::parse(line) else {
            return Ok(Flow::Continue);
        };

        match command {
            Command::Calculate { operation, args } => self.calculate(operation, &args)?,
            Command::Undo => self.undo()?,
            Command::Redo => self.redo()?,
            Command::History => self.show_history()?,
            Command::Clear => {
                self.history.clear();
                self.undone.clear();
                info!("session history cleared");
                self.say(Tone::Notice, "History cleared.")?;
            }
            Command::Save => self.save()?,
            Command::Load => self.load()?,
            Command::Help => {
                let help = help_text();
                self.say(Tone::Plain, &help)?;
            }
            Command::Exit => {
                self.exit()?;
                return Ok(Flow::Exit);
            }
            Command::Unknown(name) => {
                warn!("unknown command entered: '{name}'");
                self.say(Tone::Error, &format!("Unknown command: '{name}'"))?;
            }
        }
        Ok(Flow::Continue)
    }

    fn calculate(&mut self, operation: Operation, args: &[&str]) -> io::Result<()> {
        let (a, b) = match validate_operands(args, self.max_input_value) {
            Ok(operands) => operands,
            Err(e) => {
                error!("invalid operands for {operation} {args:?}: {e}");
                return self.say(Tone::Error, &format!("Error: {e}"));
            }
        };

        match self.calculator.execute(operation.command_name(), a, b) {
            Ok(calculation) => {
                self.history.push(calculation);
                if self.history.len() > self.max_history_size {
                    let excess = self.history.len() - self.max_history_size;
                    self.history.drain(..excess);
                }
                self.undone.clear();
                let text = format!("Result: {}", format_number(calculation.result));
                self.say(Tone::Success, &text)
            }
            Err(e) => {
                error!("calculation {operation} {a} {b} failed: {e}");
                self.say(Tone::Error, &format!("Error: {e}"))
            }
        }
    }

    fn undo(&mut self) -> io::Result<()> {
        match self.calculator.undo() {
            Some(result) => {
                if let Some(calc) = self.history.pop() {
                    self.undone.push(calc);
                }
                let text = format!("Undone. Current result: {}", format_number(result));
                self.say(Tone::Success, &text)
            }
            None => self.say(Tone::Notice, "Nothing to undo."),
        }
    }

    fn redo(&mut self) -> io::Result<()> {
        match self.calculator.redo() {
            Some(result) => {
                if let Some(calc) = self.undone.pop() {
                    self.history.push(calc);
                }
                let text = format!("Redone. Current result: {}", format_number(result));
                self.say(Tone::Success, &text)
            }
            None => self.say(Tone::Notice, "Nothing to redo."),
        }
    }

    fn show_history(&mut self) -> io::Result<()> {
        if self.history.is_empty() {
            return self.say(Tone::Notice, "No history to display.");
        }
        let text = format_history(&self.history);
        self.say(Tone::Plain, &text)
    }

    fn save(&mut self) -> io::Result<()> {
        if self.history.is_empty() {
            return self.say(Tone::Notice, "History is empty. Nothing to save.");
        }
        let records: Vec<HistoryRecord> = self
            .history
            .iter()
            .map(HistoryRecord::from_calculation)
            .collect();
        match self.storage.save_history(MANUAL_SAVE_FILE, &records) {
            Ok(path) => {
                info!("history saved to {}", path.display());
                let text = format!("History saved to {}", path.display());
                self.say(Tone::Success, &text)
            }
            Err(e) => {
                error!("failed to save history: {e}");
                self.say(Tone::Error, &format!("Error saving history: {e}"))
            }
        }
    }

    fn load(&mut self) -> io::Result<()> {
        match self.storage.load_calculations(MANUAL_SAVE_FILE) {
            Ok(calculations) => {
                self.history = calculations;
                self.undone.clear();
                let path = self.storage.path(MANUAL_SAVE_FILE);
                info!(
                    "loaded {} calculations from {}",
                    self.history.len(),
                    path.display()
                );
                let text = format!("History loaded from {}", path.display());
                self.say(Tone::Success, &text)?;
                self.show_history()
            }
            Err(e) => {
                error!("failed to load history: {e}");
                self.say(Tone::Error, &format!("Error loading history: {e}"))
            }
        }
    }

    fn exit(&mut self) -> io::Result<()> {
        info!("calculator exiting");
        self.say(Tone::Banner, "Goodbye!")
    }

    fn say(&mut self, tone: Tone, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", paint(tone, text, self.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::observer::AutoSaveObserver;
    use crate::storage::AUTO_SAVE_FILE;

    struct Session {
        _dir: TempDir,
        storage: Storage,
        config: Config,
    }

    fn session() -> Session {
        let dir = TempDir::new().unwrap();
        let config = Config {
            log_dir: dir.path().join("logs"),
            history_dir: dir.path().join("history"),
            ..Config::default()
        };
        let storage = Storage::new(&config.history_dir).unwrap();
        Session {
            _dir: dir,
            storage,
            config,
        }
    }

    fn repl(s: &Session) -> Repl<Vec<u8>> {
        Repl::new(Calculator::new(), s.storage.clone(), &s.config, Vec::new()).with_color(false)
    }

    /// Feed `script` to a fresh REPL and return it with its output.
    fn run(s: &Session, script: &str) -> (Repl<Vec<u8>>, String) {
        let mut repl = repl(s);
        repl.run(script.as_bytes()).unwrap();
        let out = String::from_utf8(repl.out.clone()).unwrap();
        (repl, out)
    }

    #[test]
    fn calculates_and_exits() {
        let s = session();
        let (repl, out) = run(&s, "add 10 5\nexit\n");

        assert!(out.contains("Welcome"));
        assert!(out.contains("Result: 15.0"));
        assert!(out.contains("Goodbye!"));
        assert_eq!(repl.calculator().current_result(), 15.0);
        assert_eq!(repl.history().len(), 1);
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let s = session();
        let (_repl, out) = run(&s, "multiply 3 4\n");

        assert!(out.contains("Result: 12.0"));
        assert!(out.trim_end().ends_with("Goodbye!"));
    }

    #[test]
    fn lines_after_exit_are_not_read() {
        let s = session();
        let (repl, _out) = run(&s, "exit\nadd 1 1\n");
        assert!(repl.history().is_empty());
    }

    #[test]
    fn errors_are_reported_and_loop_continues() {
        let s = session();
        let (repl, out) = run(&s, "divide 10 0\nadd 1\nadd x 2\nbogus 1 2\nadd 2 2\n");

        assert!(out.contains("Error: cannot divide by zero"));
        assert!(out.contains("Error: exactly two numerical arguments are required, got 1"));
        assert!(out.contains("Error: 'x' is not a valid number"));
        assert!(out.contains("Unknown command: 'bogus'"));
        assert!(out.contains("Result: 4.0"));
        assert_eq!(repl.history().len(), 1);
    }

    #[test]
    fn operands_beyond_limit_are_rejected() {
        let mut s = session();
        s.config.max_input_value = 100.0;
        let (repl, out) = run(&s, "add 1000 1\n");

        assert!(out.contains("Error: operands must be between"));
        assert_eq!(repl.calculator().history().undo_len(), 1);
    }

    #[test]
    fn undo_and_redo_track_session_history() {
        let s = session();
        let (repl, out) = run(&s, "add 10 5\nsubtract 15 3\nundo\nundo\nundo\nredo\n");

        assert!(out.contains("Undone. Current result: 15.0"));
        assert!(out.contains("Undone. Current result: 0.0"));
        assert!(out.contains("Nothing to undo."));
        assert!(out.contains("Redone. Current result: 15.0"));
        assert_eq!(repl.calculator().current_result(), 15.0);
        assert_eq!(repl.history().len(), 1);
        assert_eq!(repl.history()[0].to_string(), "10.0 add 5.0 = 15.0");
    }

    #[test]
    fn new_calculation_discards_redo() {
        let s = session();
        let (repl, out) = run(&s, "add 10 5\nadd 15 5\nundo\nmultiply 10 2\nredo\n");

        assert!(out.contains("Nothing to redo."));
        assert_eq!(repl.calculator().current_result(), 20.0);
        let rendered: Vec<String> = repl.history().iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            ["10.0 add 5.0 = 15.0", "10.0 multiply 2.0 = 20.0"]
        );
    }

    #[test]
    fn history_and_clear() {
        let s = session();
        let (repl, out) = run(&s, "history\nadd 1 2\nhistory\nclear\nhistory\n");

        assert_eq!(out.matches("No history to display.").count(), 2);
        assert!(out.contains("1. 1.0 add 2.0 = 3.0"));
        assert!(out.contains("History cleared."));
        assert!(repl.history().is_empty());
    }

    #[test]
    fn session_history_is_bounded() {
        let mut s = session();
        s.config.max_history_size = 2;
        let (repl, _out) = run(&s, "add 1 0\nadd 2 0\nadd 3 0\n");

        let firsts: Vec<f64> = repl.history().iter().map(|c| c.a).collect();
        assert_eq!(firsts, [2.0, 3.0]);
    }

    #[test]
    fn save_then_load_in_new_session() {
        let s = session();
        let (_repl, out) = run(&s, "save\npower 2 3\nint_divide 7 2\nsave\n");
        assert!(out.contains("History is empty. Nothing to save."));
        assert!(out.contains("History saved to"));

        let (repl, out) = run(&s, "load\n");
        assert!(out.contains("History loaded from"));
        assert!(out.contains("2. 7.0 integerdivide 2.0 = 3.0"));
        assert_eq!(repl.history().len(), 2);
        // Loading restores the list, not the calculator state.
        assert_eq!(repl.calculator().current_result(), 0.0);
    }

    #[test]
    fn load_without_file_reports_error() {
        let s = session();
        let (repl, out) = run(&s, "add 1 1\nload\n");

        assert!(out.contains("Error loading history: history file not found"));
        assert_eq!(repl.history().len(), 1);
    }

    #[test]
    fn help_lists_commands() {
        let s = session();
        let (_repl, out) = run(&s, "help\n");
        assert!(out.contains("Available Commands:"));
        assert!(out.contains("abs_diff"));
    }

    #[test]
    fn observers_see_repl_calculations() {
        let s = session();
        let mut calculator = Calculator::new();
        calculator.register_observer(Box::new(AutoSaveObserver::new(
            s.storage.clone(),
            true,
            s.config.max_history_size,
        )));
        let mut repl =
            Repl::new(calculator, s.storage.clone(), &s.config, Vec::new()).with_color(false);

        repl.run("percent 25 200\ndivide 1 0\nabs_diff 3 10\n".as_bytes())
            .unwrap();

        let saved = s.storage.load_calculations(AUTO_SAVE_FILE).unwrap();
        let results: Vec<f64> = saved.iter().map(|c| c.result).collect();
        assert_eq!(results, [12.5, 7.0]);
    }
}
