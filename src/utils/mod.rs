//! Terminal helpers shared by the CLI commands

mod progress;
mod styling;

pub use progress::*;
pub use styling::*;
