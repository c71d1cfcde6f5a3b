//! Interactive calculator with undo/redo history and pluggable observers.
//!
//! The core is [`calculator::Calculator`]: it resolves operations through
//! [`operation::Operation`], keeps snapshots in a
//! [`history::HistoryManager`], and notifies [`observer::Observer`]s after
//! each calculation. Everything else is the shell around it: config,
//! logging, persistence, and the REPL.

pub mod calculator;
pub mod cli;
pub mod config;
pub mod history;
pub mod input;
pub mod logging;
pub mod model;
pub mod observer;
pub mod operation;
pub mod repl;
pub mod storage;
