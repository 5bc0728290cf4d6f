//! Hexpath CLI library.
//!
//! Subcommand handlers and output formatting for the `hexpath` binary.

pub mod commands;
pub mod output;
