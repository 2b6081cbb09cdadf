//! Error types for the feature-engineering pipeline.
//!
//! Every library operation returns [`FeatureError`]. The CLI layer wraps these
//! with `anyhow` context before surfacing them to the user.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while summarizing, encoding, splitting, fitting or scoring.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// A requested column is not present in the table.
    #[error("Column '{column}' not found. Available columns: {available:?}")]
    ColumnNotFound {
        /// Name that was requested
        column: String,
        /// Columns the table actually has
        available: Vec<String>,
    },

    /// The summarizer was asked to summarize nothing.
    #[error("At least one column must be requested")]
    NoColumns,

    /// The ordinal letter encoder met a value outside `a..=z` that is not
    /// the missing marker.
    #[error("Column '{column}' contains value '{value}' which cannot be ordinal-encoded (expected a single lowercase letter or the missing marker)")]
    UnencodableValue { column: String, value: String },

    /// A numeric feature column holds non-numeric data.
    #[error("Column '{column}' is not numeric (dtype {dtype})")]
    NotNumeric { column: String, dtype: String },

    /// A feature or target column still holds nulls.
    #[error("Column '{column}' contains null values; drop incomplete rows first")]
    NullValue { column: String },

    /// A numeric feature column holds NaN or an infinity.
    #[error("Column '{column}' contains non-finite values (NaN or infinity)")]
    NonFiniteValue { column: String },

    /// A model input or score is NaN or infinite.
    #[error("Non-finite {0} encountered")]
    NonFinite(&'static str),

    /// Only one class is present in the labels.
    #[error("Only one class present in labels; AUC and model fitting need both classes")]
    SingleClass,

    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Test size must be strictly between 0 and 1, got {0}")]
    InvalidTestSize(f64),

    /// A split left one side without rows.
    #[error("Split produced an empty side ({train} train rows, {test} test rows)")]
    EmptySplit { train: usize, test: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A model or scaler was used before `fit`.
    #[error("{0} must be fitted before use")]
    NotFitted(&'static str),

    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

/// Result alias for pipeline operations.
pub type Result<T> = std::result::Result<T, FeatureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_not_found_message_lists_columns() {
        let err = FeatureError::ColumnNotFound {
            column: "odor".to_string(),
            available: vec!["cap-shape".to_string(), "class".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("'odor'"));
        assert!(msg.contains("cap-shape"));
    }

    #[test]
    fn test_unencodable_value_message() {
        let err = FeatureError::UnencodableValue {
            column: "stalk-root".to_string(),
            value: "B".to_string(),
        };
        assert!(err.to_string().contains("'B'"));
    }

    #[test]
    fn test_non_finite_value_names_column() {
        let err = FeatureError::NonFiniteValue {
            column: "WindGustSpeed".to_string(),
        };
        assert!(err.to_string().contains("'WindGustSpeed'"));
    }
}
