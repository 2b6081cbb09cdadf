//! featbench CLI
//!
//! Summarizes categorical columns and scores manual preprocessing variants
//! with two baseline classifiers.

use anyhow::Result;
use clap::Parser;

use featbench::cli::{evaluate::run_evaluate, recipes::run_recipes, summarize::run_summarize};
use featbench::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Summarize(args) => run_summarize(args),
        Commands::Evaluate(args) => run_evaluate(args),
        Commands::Recipes => run_recipes(),
    }
}
