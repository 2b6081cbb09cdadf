//! Binary target encoding
//!
//! Classifiers and AUC work on 0/1 labels. A target is described by its
//! column and the value that marks the event (e.g. `"Yes"` for rain
//! tomorrow, `"p"` for a poisonous mushroom); every other value is a
//! non-event.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use super::error::{FeatureError, Result};
use super::values::{column_to_strings, require_column};

/// Which column is the target and which of its values maps to 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSpec {
    pub column: String,
    /// Value that maps to 1 (event), compared as text
    pub event_value: String,
}

impl TargetSpec {
    pub fn new(column: impl Into<String>, event_value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            event_value: event_value.into(),
        }
    }
}

/// Encode the target column as 0/1 labels.
///
/// Fails on nulls, since a row without a label cannot be scored.
pub fn encode_target(df: &DataFrame, target: &TargetSpec) -> Result<Vec<u8>> {
    let raw = column_to_strings(require_column(df, &target.column)?)?;

    raw.into_iter()
        .map(|v| match v {
            Some(s) if s == target.event_value => Ok(1),
            Some(_) => Ok(0),
            None => Err(FeatureError::NullValue {
                column: target.column.clone(),
            }),
        })
        .collect()
}

/// Count (events, non_events) in a label vector
pub fn count_classes(labels: &[u8]) -> (usize, usize) {
    let events = labels.iter().filter(|&&l| l == 1).count();
    (events, labels.len() - events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_string_target() {
        let df = df! {
            "class" => ["p", "e", "e", "p", "e"],
        }
        .unwrap();

        let labels = encode_target(&df, &TargetSpec::new("class", "p")).unwrap();
        assert_eq!(labels, vec![1, 0, 0, 1, 0]);
        assert_eq!(count_classes(&labels), (2, 3));
    }

    #[test]
    fn test_encode_numeric_target() {
        let df = df! {
            "target" => [0.0f64, 1.0, 1.0, 0.0],
        }
        .unwrap();

        let labels = encode_target(&df, &TargetSpec::new("target", "1")).unwrap();
        assert_eq!(labels, vec![0, 1, 1, 0]);
    }

    #[test]
    fn test_unknown_values_are_non_events() {
        let df = df! {
            "type" => ["Movie", "TV Show", "Documentary"],
        }
        .unwrap();

        let labels = encode_target(&df, &TargetSpec::new("type", "TV Show")).unwrap();
        assert_eq!(labels, vec![0, 1, 0]);
    }

    #[test]
    fn test_null_target_rejected() {
        let df = df! {
            "RainTomorrow" => [Some("Yes"), None],
        }
        .unwrap();

        let err = encode_target(&df, &TargetSpec::new("RainTomorrow", "Yes")).unwrap_err();
        assert!(matches!(err, FeatureError::NullValue { .. }));
    }

    #[test]
    fn test_missing_target_column() {
        let df = df! { "a" => [1i32] }.unwrap();
        let err = encode_target(&df, &TargetSpec::new("class", "p")).unwrap_err();
        assert!(matches!(err, FeatureError::ColumnNotFound { .. }));
    }
}
