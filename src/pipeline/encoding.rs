//! Categorical and numeric feature encoding
//!
//! Turns table columns into `f64` feature vectors ready for the feature
//! matrix. Numeric columns pass through (and are the only ones the scalers
//! touch). Categorical columns go through one of two encoders:
//!
//! - **One-hot**: one 0/1 indicator per distinct value, values sorted, with
//!   the first category optionally dropped as the reference level.
//! - **Ordinal letters**: single lowercase letters map to their alphabet
//!   position (`a` = 1 ... `z` = 26) and the missing marker maps to 0. Any
//!   other value is rejected rather than silently given a code.

use std::collections::BTreeSet;

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::{FeatureError, Result};
use super::values::{column_to_f64, column_to_strings, require_column};

/// Marker used for missing values in single-letter coded datasets
pub const DEFAULT_MISSING_MARKER: char = '?';

/// Code assigned to the missing marker by the ordinal letter encoder
pub const MISSING_SENTINEL: f64 = 0.0;

/// How categorical columns are turned into numbers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalEncoding {
    /// One indicator column per category
    #[default]
    OneHot,
    /// Alphabet position of single-letter codes
    OrdinalLetters,
}

impl std::fmt::Display for CategoricalEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoricalEncoding::OneHot => write!(f, "one_hot"),
            CategoricalEncoding::OrdinalLetters => write!(f, "ordinal_letters"),
        }
    }
}

impl std::str::FromStr for CategoricalEncoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "one_hot" | "onehot" => Ok(CategoricalEncoding::OneHot),
            "ordinal_letters" | "ordinal" => Ok(CategoricalEncoding::OrdinalLetters),
            _ => Err(format!(
                "Unknown encoding: '{}'. Use 'one_hot' or 'ordinal_letters'.",
                s
            )),
        }
    }
}

/// A single encoded feature column
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedFeature {
    pub name: String,
    pub values: Vec<f64>,
    /// True for features derived from numeric columns; only these are scaled
    pub scalable: bool,
}

/// Pass a numeric or boolean column through as a feature
pub fn numeric_feature(df: &DataFrame, column: &str) -> Result<EncodedFeature> {
    let values = column_to_f64(require_column(df, column)?)?;
    Ok(EncodedFeature {
        name: column.to_string(),
        values,
        scalable: true,
    })
}

fn non_null_strings(df: &DataFrame, column: &str) -> Result<Vec<String>> {
    column_to_strings(require_column(df, column)?)?
        .into_iter()
        .map(|v| {
            v.ok_or_else(|| FeatureError::NullValue {
                column: column.to_string(),
            })
        })
        .collect()
}

/// One-hot encode a column.
///
/// Indicator columns are named `<column>_<value>` and ordered by value. With
/// `drop_first` the alphabetically first category is the reference level and
/// gets no column, so a two-valued column yields a single indicator.
pub fn one_hot(df: &DataFrame, column: &str, drop_first: bool) -> Result<Vec<EncodedFeature>> {
    let raw = non_null_strings(df, column)?;
    let categories: BTreeSet<&str> = raw.iter().map(|s| s.as_str()).collect();

    let skip = usize::from(drop_first);
    let features = categories
        .into_iter()
        .skip(skip)
        .map(|category| EncodedFeature {
            name: format!("{}_{}", column, category),
            values: raw
                .iter()
                .map(|v| if v == category { 1.0 } else { 0.0 })
                .collect(),
            scalable: false,
        })
        .collect();

    Ok(features)
}

/// Code for a single value under ordinal letter encoding, if it has one
pub fn ordinal_letter_code(value: &str, missing_marker: char) -> Option<f64> {
    let mut chars = value.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    if c == missing_marker {
        Some(MISSING_SENTINEL)
    } else if c.is_ascii_lowercase() {
        Some((c as u8 - b'a' + 1) as f64)
    } else {
        None
    }
}

/// Ordinal-encode a column of single lowercase letters.
///
/// Fails with [`FeatureError::UnencodableValue`] on the first value that is
/// neither a lowercase ASCII letter nor `missing_marker`.
pub fn ordinal_letters(df: &DataFrame, column: &str, missing_marker: char) -> Result<EncodedFeature> {
    let values = non_null_strings(df, column)?
        .into_iter()
        .map(|v| {
            ordinal_letter_code(&v, missing_marker).ok_or_else(|| FeatureError::UnencodableValue {
                column: column.to_string(),
                value: v,
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(EncodedFeature {
        name: column.to_string(),
        values,
        scalable: false,
    })
}

/// Encode a categorical column with the chosen encoding.
///
/// `missing_marker` only matters for ordinal letter codes.
pub fn encode_categorical(
    df: &DataFrame,
    column: &str,
    encoding: CategoricalEncoding,
    drop_first: bool,
    missing_marker: char,
) -> Result<Vec<EncodedFeature>> {
    match encoding {
        CategoricalEncoding::OneHot => one_hot(df, column, drop_first),
        CategoricalEncoding::OrdinalLetters => {
            Ok(vec![ordinal_letters(df, column, missing_marker)?])
        }
    }
}
