//! Dataset loader for CSV and Parquet files

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::utils::{create_spinner, finish_with_success};

/// File formats the loader understands, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Csv,
    Parquet,
}

impl InputFormat {
    /// Detect the format from a path's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "csv" => Ok(InputFormat::Csv),
            "parquet" => Ok(InputFormat::Parquet),
            _ => anyhow::bail!(
                "Unsupported file format: '{}'. Supported formats: csv, parquet",
                extension
            ),
        }
    }
}

/// Options for reading a dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Rows used for CSV schema inference (0 = full table scan)
    pub infer_schema_length: usize,
    /// CSV cells read as null in addition to empty fields
    pub null_values: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            infer_schema_length: 10_000,
            null_values: Vec::new(),
        }
    }
}

impl LoadOptions {
    pub fn new(infer_schema_length: usize) -> Self {
        Self {
            infer_schema_length,
            ..Default::default()
        }
    }

    pub fn with_null_values(mut self, values: impl IntoIterator<Item = String>) -> Self {
        for value in values {
            if !self.null_values.contains(&value) {
                self.null_values.push(value);
            }
        }
        self
    }
}

fn scan(path: &Path, options: &LoadOptions) -> Result<LazyFrame> {
    let schema_length = if options.infer_schema_length == 0 {
        None
    } else {
        Some(options.infer_schema_length)
    };

    let null_values = if options.null_values.is_empty() {
        None
    } else {
        Some(NullValues::AllColumns(
            options.null_values.iter().map(|v| v.as_str().into()).collect(),
        ))
    };

    let lf = match InputFormat::from_path(path)? {
        InputFormat::Csv => LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(schema_length)
            .with_null_values(null_values)
            .finish()
            .with_context(|| format!("Failed to load CSV file: {}", path.display()))?,
        InputFormat::Parquet => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
    };

    Ok(lf)
}

/// Load a dataset fully into memory
pub fn load_dataset(path: &Path, options: &LoadOptions) -> Result<DataFrame> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    scan(path, options)?
        .collect()
        .with_context(|| format!("Failed to read dataset: {}", path.display()))
}

/// Load a dataset behind a spinner, returning the frame with its row and column counts
pub fn load_dataset_with_progress(
    path: &Path,
    options: &LoadOptions,
) -> Result<(DataFrame, usize, usize)> {
    let spinner = create_spinner(&format!("Loading {}...", path.display()));
    let df = load_dataset(path, options)?;
    let (rows, cols) = df.shape();
    finish_with_success(&spinner, &format!("Loaded {} rows × {} columns", rows, cols));
    Ok((df, rows, cols))
}

/// Read the column names without loading any rows
pub fn get_column_names(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let schema = scan(path, &LoadOptions::new(100))?
        .collect_schema()
        .with_context(|| format!("Failed to read schema: {}", path.display()))?;

    Ok(schema.iter_names().map(|name| name.to_string()).collect())
}
