//! CLI module - argument parsing and subcommand runners

pub mod args;
pub mod evaluate;
pub mod recipes;
pub mod summarize;

pub use args::{Cli, Commands, EvaluateArgs, SummarizeArgs};
