//! Row and column selection ahead of encoding

use std::collections::HashSet;

use polars::prelude::*;

use super::error::Result;
use super::values::{column_to_strings, ensure_columns, require_column};

/// Keep rows whose value in `column`, rendered as text, is one of `values`.
///
/// Nulls never match.
pub fn filter_rows_in<S: AsRef<str>>(df: &DataFrame, column: &str, values: &[S]) -> Result<DataFrame> {
    let wanted: HashSet<&str> = values.iter().map(|v| v.as_ref()).collect();
    let raw = column_to_strings(require_column(df, column)?)?;

    let mask: BooleanChunked = raw
        .iter()
        .map(|v| v.as_deref().is_some_and(|s| wanted.contains(s)))
        .collect();

    Ok(df.filter(&mask)?)
}

/// Drop rows holding a null in any of `columns` (in any column when empty)
pub fn drop_incomplete_rows<S: AsRef<str>>(df: &DataFrame, columns: &[S]) -> Result<DataFrame> {
    if columns.is_empty() {
        return Ok(df.drop_nulls::<String>(None)?);
    }

    ensure_columns(df, columns)?;
    let subset: Vec<String> = columns.iter().map(|c| c.as_ref().to_string()).collect();
    Ok(df.drop_nulls(Some(subset.as_slice()))?)
}

/// Project onto the named columns, in the given order
pub fn select_columns<S: AsRef<str>>(df: &DataFrame, columns: &[S]) -> Result<DataFrame> {
    ensure_columns(df, columns)?;
    Ok(df.select(columns.iter().map(|c| c.as_ref()))?)
}
