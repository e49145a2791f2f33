// src/shell/mod.rs
//!
//! Shell Module
//!
//! Line tokenizer, command table, help text and the read-eval-print loop
//! that drives the filesystem operations.

pub mod command;
pub mod dispatcher;
pub mod help;
pub mod parser;


pub use command::Command;
pub use dispatcher::{Shell, ShellState};
pub use parser::tokenize;
