//! Command-line text to REPL commands.

use crate::operation::Operation;

/// One parsed line of REPL input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<'a> {
    /// A calculation with its raw, unvalidated operands.
    Calculate {
        operation: Operation,
        args: Vec<&'a str>,
    },
    Undo,
    Redo,
    History,
    Clear,
    Save,
    Load,
    Help,
    Exit,
    Unknown(String),
}

impl<'a> Command<'a> {
    /// Parse a line. Returns `None` for blank input.
    ///
    /// The first word, lowercased, names the command; the rest are arguments.
    /// Calculations are named only by their command name (`int_divide`).
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let name = words.next()?.to_lowercase();

        let command = match name.as_str() {
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            "history" => Self::History,
            "clear" => Self::Clear,
            "save" => Self::Save,
            "load" => Self::Load,
            "help" => Self::Help,
            "exit" => Self::Exit,
            _ => match Operation::ALL
                .into_iter()
                .find(|op| op.command_name() == name)
            {
                Some(operation) => Self::Calculate {
                    operation,
                    args: words.collect(),
                },
                None => Self::Unknown(name.clone()),
            },
        };
        Some(command)
    }
}
