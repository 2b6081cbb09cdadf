//! featbench: categorical summaries and preprocessing benchmarks
//!
//! A library for summarizing categorical columns by cardinality and for
//! measuring how manual preprocessing (scaling, ordinal or one-hot
//! encoding) changes the AUC of two baseline classifiers.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
