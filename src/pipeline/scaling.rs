//! Feature scaling fitted on the training split
//!
//! Only features flagged as scalable (those from numeric columns) are
//! transformed; indicator and ordinal codes pass through unchanged.

use serde::{Deserialize, Serialize};

use super::error::{FeatureError, Result};
use super::matrix::FeatureMatrix;

/// Spread below which a feature is treated as constant
const MIN_SPREAD: f64 = 1e-10;

/// Which scaling to apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalerKind {
    /// Leave features untouched
    #[default]
    None,
    /// Zero mean, unit (population) standard deviation
    Standard,
    /// Map the training range onto [0, 1]
    MinMax,
}

impl std::fmt::Display for ScalerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalerKind::None => write!(f, "none"),
            ScalerKind::Standard => write!(f, "standard"),
            ScalerKind::MinMax => write!(f, "min_max"),
        }
    }
}

impl std::str::FromStr for ScalerKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "none" => Ok(ScalerKind::None),
            "standard" => Ok(ScalerKind::Standard),
            "min_max" | "minmax" => Ok(ScalerKind::MinMax),
            _ => Err(format!(
                "Unknown scaler: '{}'. Use 'none', 'standard' or 'min_max'.",
                s
            )),
        }
    }
}

/// Per-feature affine map `(x - offset) / scale`
#[derive(Debug, Clone)]
pub struct Scaler {
    kind: ScalerKind,
    offset: Vec<f64>,
    scale: Vec<f64>,
    is_fitted: bool,
}

impl Scaler {
    pub fn new(kind: ScalerKind) -> Self {
        Self {
            kind,
            offset: Vec::new(),
            scale: Vec::new(),
            is_fitted: false,
        }
    }

    /// Learn offsets and scales from the scalable features of `x`
    pub fn fit(&mut self, x: &FeatureMatrix) -> Result<()> {
        let n_rows = x.n_rows();
        if n_rows == 0 {
            return Err(FeatureError::InvalidParameter(
                "cannot fit a scaler on an empty matrix".to_string(),
            ));
        }

        let n_cols = x.n_features();
        self.offset = vec![0.0; n_cols];
        self.scale = vec![1.0; n_cols];

        for col in 0..n_cols {
            if !x.scalable[col] {
                continue;
            }
            let column: Vec<f64> = (0..n_rows).map(|row| x.data[(row, col)]).collect();

            let (offset, spread) = match self.kind {
                ScalerKind::None => (0.0, 1.0),
                ScalerKind::Standard => {
                    let mean = column.iter().sum::<f64>() / n_rows as f64;
                    let var = column.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n_rows as f64;
                    (mean, var.sqrt())
                }
                ScalerKind::MinMax => {
                    let min = column.iter().copied().fold(f64::INFINITY, f64::min);
                    let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                    (min, max - min)
                }
            };

            self.offset[col] = offset;
            // Avoid division by zero on constant features
            self.scale[col] = if spread < MIN_SPREAD { 1.0 } else { spread };
        }

        self.is_fitted = true;
        Ok(())
    }

    /// Apply the learned map to a matrix with the same features
    pub fn transform(&self, x: &FeatureMatrix) -> Result<FeatureMatrix> {
        if !self.is_fitted {
            return Err(FeatureError::NotFitted("Scaler"));
        }
        if x.n_features() != self.offset.len() {
            return Err(FeatureError::LengthMismatch {
                expected: self.offset.len(),
                actual: x.n_features(),
            });
        }

        let mut scaled = x.clone();
        for col in 0..x.n_features() {
            if !x.scalable[col] {
                continue;
            }
            for row in 0..x.n_rows() {
                scaled.data[(row, col)] = (x.data[(row, col)] - self.offset[col]) / self.scale[col];
            }
        }

        Ok(scaled)
    }

    pub fn fit_transform(&mut self, x: &FeatureMatrix) -> Result<FeatureMatrix> {
        self.fit(x)?;
        self.transform(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::encoding::EncodedFeature;

    fn matrix() -> FeatureMatrix {
        FeatureMatrix::from_features(
            vec![
                EncodedFeature {
                    name: "Pressure9am".to_string(),
                    values: vec![1000.0, 1010.0, 1020.0, 1030.0],
                    scalable: true,
                },
                EncodedFeature {
                    name: "RainToday_Yes".to_string(),
                    values: vec![0.0, 1.0, 1.0, 0.0],
                    scalable: false,
                },
                EncodedFeature {
                    name: "constant".to_string(),
                    values: vec![5.0; 4],
                    scalable: true,
                },
            ],
            4,
        )
        .unwrap()
    }

    #[test]
    fn test_standard_scaling() {
        let x = matrix();
        let scaled = Scaler::new(ScalerKind::Standard).fit_transform(&x).unwrap();

        let mean: f64 = (0..4).map(|r| scaled.data[(r, 0)]).sum::<f64>() / 4.0;
        let var: f64 = (0..4).map(|r| scaled.data[(r, 0)].powi(2)).sum::<f64>() / 4.0;
        assert!(mean.abs() < 1e-12);
        assert!((var - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_indicators_untouched() {
        let x = matrix();
        let scaled = Scaler::new(ScalerKind::Standard).fit_transform(&x).unwrap();
        for r in 0..4 {
            assert_eq!(scaled.data[(r, 1)], x.data[(r, 1)]);
        }
    }

    #[test]
    fn test_constant_feature_centered_not_divided() {
        let x = matrix();
        let scaled = Scaler::new(ScalerKind::Standard).fit_transform(&x).unwrap();
        for r in 0..4 {
            assert_eq!(scaled.data[(r, 2)], 0.0);
        }
    }

    #[test]
    fn test_min_max_scaling() {
        let x = matrix();
        let scaled = Scaler::new(ScalerKind::MinMax).fit_transform(&x).unwrap();
        assert_eq!(scaled.data[(0, 0)], 0.0);
        assert_eq!(scaled.data[(3, 0)], 1.0);
        assert!((scaled.data[(1, 0)] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_fitted_on_train_applied_to_test() {
        let train = matrix();
        let mut scaler = Scaler::new(ScalerKind::MinMax);
        scaler.fit(&train).unwrap();

        // A test value above the training range maps above 1
        let test = train.take_rows(&[3]);
        let mut shifted = test.clone();
        shifted.data[(0, 0)] = 1060.0;
        let scaled = scaler.transform(&shifted).unwrap();
        assert!((scaled.data[(0, 0)] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_none_is_identity() {
        let x = matrix();
        let scaled = Scaler::new(ScalerKind::None).fit_transform(&x).unwrap();
        assert_eq!(scaled.data[(2, 0)], 1020.0);
    }

    #[test]
    fn test_transform_before_fit() {
        let err = Scaler::new(ScalerKind::Standard).transform(&matrix()).unwrap_err();
        assert!(matches!(err, FeatureError::NotFitted(_)));
    }

    #[test]
    fn test_scaler_kind_from_str() {
        assert_eq!("MinMax".parse::<ScalerKind>().unwrap(), ScalerKind::MinMax);
        assert_eq!("standard".parse::<ScalerKind>().unwrap(), ScalerKind::Standard);
        assert!("robust".parse::<ScalerKind>().is_err());
    }
}
