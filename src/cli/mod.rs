//! CLI module for pharmacy
//!
//! Contains argument parsing, command implementations and the interactive menu.

pub mod args;
pub mod commands;
pub mod completions;
pub mod menu;

pub use args::{Cli, Commands, ConfigCommand};
