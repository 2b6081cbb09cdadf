//! Command-line argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::pipeline::{ExperimentSettings, ForestConfig, LogisticConfig};

/// featbench - Summarize categorical columns and benchmark manual feature engineering
#[derive(Parser, Debug)]
#[command(name = "featbench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the distinct values of categorical columns, highest cardinality first
    Summarize(SummarizeArgs),

    /// Score scaling and encoding variants of a recipe with two baseline models
    Evaluate(EvaluateArgs),

    /// List the built-in recipes
    Recipes,
}

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Columns to summarize (comma-separated).
    /// Defaults to every text or categorical column.
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Write the summary as JSON to this path
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Extra CSV cells to read as missing (comma-separated, e.g. "NA,?")
    #[arg(long, value_delimiter = ',')]
    pub null_values: Vec<String>,

    /// Distinct values shown per column in the terminal table
    #[arg(long, default_value = "8")]
    pub max_values: usize,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Built-in recipe name (weather, mushroom, media) or path to a recipe JSON file
    #[arg(short, long)]
    pub recipe: String,

    /// Seed for the train/test split and the forest
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Fraction of rows held out for scoring, strictly between 0 and 1
    #[arg(long, default_value = "0.25", value_parser = validate_test_size)]
    pub test_size: f64,

    /// Keep the event rate equal in both splits
    #[arg(long, default_value = "false")]
    pub stratify: bool,

    /// Number of trees in the random forest
    #[arg(long, default_value = "100")]
    pub trees: usize,

    /// Maximum tree depth (unbounded when omitted)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Inverse L2 regularization strength for logistic regression
    #[arg(long, default_value = "1.0", value_parser = validate_positive)]
    pub c: f64,

    /// Gradient descent iterations for logistic regression
    #[arg(long, default_value = "1000")]
    pub max_iter: usize,

    /// Gradient descent step size for logistic regression
    #[arg(long, default_value = "0.1", value_parser = validate_positive)]
    pub learning_rate: f64,

    /// Write the results as JSON to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Extra CSV cells to read as missing, added to the recipe's own list
    #[arg(long, value_delimiter = ',')]
    pub null_values: Vec<String>,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}

impl EvaluateArgs {
    /// Split and model settings from the flags
    pub fn settings(&self) -> ExperimentSettings {
        ExperimentSettings {
            test_size: self.test_size,
            seed: self.seed,
            stratify: self.stratify,
            logistic: LogisticConfig::default()
                .c(self.c)
                .learning_rate(self.learning_rate)
                .max_iter(self.max_iter),
            forest: ForestConfig::default()
                .n_trees(self.trees)
                .max_depth(self.max_depth)
                .seed(self.seed),
        }
    }
}

/// Validator for test_size parameter
fn validate_test_size(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value > 0.0 && value < 1.0 {
        Ok(value)
    } else {
        Err(format!(
            "test_size must be strictly between 0.0 and 1.0, got {}",
            value
        ))
    }
}

/// Validator for strictly positive parameters
fn validate_positive(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(format!("value must be greater than 0, got {}", value))
    }
}
