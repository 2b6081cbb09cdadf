//! Categorical variable summaries
//!
//! For each requested column this reports how many distinct raw values it
//! holds and what they are. Rows come back ordered by cardinality, highest
//! first, so the columns that will explode under one-hot encoding are listed
//! at the top.

use std::collections::HashSet;

use polars::prelude::*;
use serde::Serialize;

use super::error::{FeatureError, Result};
use super::values::{column_to_strings, ensure_columns, require_column};

/// Distinct-value summary of one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoricalSummary {
    /// Column name as requested
    pub column: String,
    /// Number of distinct raw values, a null counting as one value
    pub cardinality: usize,
    /// Distinct raw values in order of first appearance (`None` is a null cell)
    pub values: Vec<Option<String>>,
}

impl CategoricalSummary {
    /// Whether the column holds the given raw value
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v.as_deref() == Some(value))
    }
}

/// Summarize the distinct values of each named column.
///
/// Returns exactly one row per requested name, sorted by cardinality
/// descending. The sort is stable, so ties keep the order in which the
/// columns were requested. Values are compared raw: missing markers such as
/// `?` are ordinary values and a null is counted once.
///
/// Fails with [`FeatureError::ColumnNotFound`] if any name is absent (nothing
/// is computed in that case) and with [`FeatureError::NoColumns`] if the list
/// is empty.
pub fn summarize_categorical<S: AsRef<str>>(
    df: &DataFrame,
    columns: &[S],
) -> Result<Vec<CategoricalSummary>> {
    if columns.is_empty() {
        return Err(FeatureError::NoColumns);
    }
    ensure_columns(df, columns)?;

    let mut rows = columns
        .iter()
        .map(|name| summarize_column(df, name.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    rows.sort_by(|a, b| b.cardinality.cmp(&a.cardinality));

    Ok(rows)
}

fn summarize_column(df: &DataFrame, name: &str) -> Result<CategoricalSummary> {
    let raw = column_to_strings(require_column(df, name)?)?;

    let mut seen: HashSet<Option<String>> = HashSet::new();
    let mut values = Vec::new();
    for value in raw {
        if seen.insert(value.clone()) {
            values.push(value);
        }
    }

    Ok(CategoricalSummary {
        column: name.to_string(),
        cardinality: values.len(),
        values,
    })
}

/// Names of the string-typed columns, in table order
pub fn categorical_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|c| matches!(c.dtype(), DataType::String | DataType::Categorical(_, _)))
        .map(|c| c.name().to_string())
        .collect()
}
