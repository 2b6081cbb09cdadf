//! Dense feature matrix assembled from encoded columns

use faer::Mat;
use polars::prelude::*;

use super::encoding::{encode_categorical, numeric_feature, CategoricalEncoding, EncodedFeature};
use super::error::{FeatureError, Result};

/// Rows × features matrix with per-feature metadata
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    pub data: Mat<f64>,
    pub names: Vec<String>,
    /// Which features came from numeric columns and may be scaled
    pub scalable: Vec<bool>,
}

impl FeatureMatrix {
    /// Assemble encoded features (all of equal length) into a matrix
    pub fn from_features(features: Vec<EncodedFeature>, n_rows: usize) -> Result<Self> {
        if features.is_empty() {
            return Err(FeatureError::InvalidParameter(
                "feature matrix needs at least one feature".to_string(),
            ));
        }

        let mut data = Mat::<f64>::zeros(n_rows, features.len());
        for (col_idx, feature) in features.iter().enumerate() {
            if feature.values.len() != n_rows {
                return Err(FeatureError::LengthMismatch {
                    expected: n_rows,
                    actual: feature.values.len(),
                });
            }
            for (row_idx, &val) in feature.values.iter().enumerate() {
                data[(row_idx, col_idx)] = val;
            }
        }

        Ok(Self {
            data,
            names: features.iter().map(|f| f.name.clone()).collect(),
            scalable: features.iter().map(|f| f.scalable).collect(),
        })
    }

    /// Encode numeric columns then categorical columns from a table
    pub fn build<S: AsRef<str>>(
        df: &DataFrame,
        numeric: &[S],
        categorical: &[S],
        encoding: CategoricalEncoding,
        drop_first: bool,
        missing_marker: char,
    ) -> Result<Self> {
        let mut features = Vec::new();
        for column in numeric {
            features.push(numeric_feature(df, column.as_ref())?);
        }
        for column in categorical {
            features.extend(encode_categorical(
                df,
                column.as_ref(),
                encoding,
                drop_first,
                missing_marker,
            )?);
        }

        Self::from_features(features, df.height())
    }

    pub fn n_rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.data.ncols()
    }

    /// Copy out a subset of rows, keeping feature metadata
    pub fn take_rows(&self, indices: &[usize]) -> Self {
        let n_cols = self.n_features();
        let mut data = Mat::<f64>::zeros(indices.len(), n_cols);
        for (new_row, &old_row) in indices.iter().enumerate() {
            for col in 0..n_cols {
                data[(new_row, col)] = self.data[(old_row, col)];
            }
        }

        Self {
            data,
            names: self.names.clone(),
            scalable: self.scalable.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_numeric_then_categorical() {
        let df = df! {
            "MinTemp" => [13.4f64, 7.4, 12.9],
            "RainToday" => ["No", "Yes", "No"],
        }
        .unwrap();

        let m = FeatureMatrix::build(
            &df,
            &["MinTemp"],
            &["RainToday"],
            CategoricalEncoding::OneHot,
            true,
            '?',
        )
        .unwrap();

        assert_eq!(m.n_rows(), 3);
        assert_eq!(m.names, vec!["MinTemp", "RainToday_Yes"]);
        assert_eq!(m.scalable, vec![true, false]);
        assert_eq!(m.data[(1, 1)], 1.0);
        assert_eq!(m.data[(2, 0)], 12.9);
    }

    #[test]
    fn test_take_rows() {
        let features = vec![EncodedFeature {
            name: "x".to_string(),
            values: vec![10.0, 20.0, 30.0, 40.0],
            scalable: true,
        }];
        let m = FeatureMatrix::from_features(features, 4).unwrap();

        let subset = m.take_rows(&[3, 0]);
        assert_eq!(subset.n_rows(), 2);
        assert_eq!(subset.data[(0, 0)], 40.0);
        assert_eq!(subset.data[(1, 0)], 10.0);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let features = vec![EncodedFeature {
            name: "x".to_string(),
            values: vec![1.0, 2.0],
            scalable: true,
        }];
        let err = FeatureMatrix::from_features(features, 3).unwrap_err();
        assert!(matches!(err, FeatureError::LengthMismatch { expected: 3, actual: 2 }));
    }

    #[test]
    fn test_no_features_rejected() {
        assert!(FeatureMatrix::from_features(Vec::new(), 3).is_err());
    }

    #[test]
    fn test_build_uses_given_missing_marker() {
        let df = df! { "stalk-root" => ["b", "-", "e"] }.unwrap();
        let empty: [&str; 0] = [];

        let m = FeatureMatrix::build(
            &df,
            &empty,
            &["stalk-root"],
            CategoricalEncoding::OrdinalLetters,
            true,
            '-',
        )
        .unwrap();
        assert_eq!(m.data[(1, 0)], 0.0);
        assert_eq!(m.data[(2, 0)], 5.0);

        let err = FeatureMatrix::build(
            &df,
            &empty,
            &["stalk-root"],
            CategoricalEncoding::OrdinalLetters,
            true,
            '?',
        )
        .unwrap_err();
        assert!(matches!(err, FeatureError::UnencodableValue { .. }));
    }
}
