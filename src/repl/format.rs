//! Output styling and fixed text for the REPL.

use std::fmt::Write;

use crossterm::style::Stylize;

use crate::model::Calculation;
use crate::operation::Operation;

/// How a line of output should look.
#[derive(Debug, Clone, Copy)]
pub(super) enum Tone {
    Success,
    Error,
    Notice,
    Banner,
    Plain,
}

/// Style `text` for the terminal, or leave it plain when color is off.
pub(super) fn paint(tone: Tone, text: &str, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match tone {
        Tone::Success => text.green().to_string(),
        Tone::Error => text.red().to_string(),
        Tone::Notice => text.yellow().to_string(),
        Tone::Banner => text.cyan().bold().to_string(),
        Tone::Plain => text.to_string(),
    }
}

pub(super) fn format_history(history: &[Calculation]) -> String {
    let mut out = String::from("Calculation History:");
    for (i, calc) in history.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = write!(out, "\n  {}. {calc}", i + 1);
    }
    out
}

pub(super) fn help_text() -> String {
    let operations = Operation::ALL
        .iter()
        .map(|op| op.command_name())
        .collect::<Vec<_>>()
        .join("/");
    format!(
        "Available Commands:\n  \
         {operations} <a> <b>\n  \
         history       : Display the calculation history for this session.\n  \
         clear         : Clear the session history.\n  \
         undo / redo   : Undo or redo the last calculation.\n  \
         save / load   : Manually save or load the session history.\n  \
         help          : Show this help message.\n  \
         exit          : Exit the calculator."
    )
}
