//! Baseline binary classifiers
//!
//! Two models are compared on every preprocessing variant: an L2-regularized
//! logistic regression, which is sensitive to feature scale, and a random
//! forest, which is not. Both expose the same [`Classifier`] interface.

pub mod forest;
pub mod logistic;

use faer::Mat;

use super::error::{FeatureError, Result};

pub use forest::{ForestConfig, RandomForest};
pub use logistic::{LogisticConfig, LogisticRegression};

/// A binary classifier producing event probabilities
pub trait Classifier: Send + Sync {
    /// Short display name
    fn name(&self) -> &'static str;

    /// Fit on a rows × features matrix and 0/1 labels
    fn fit(&mut self, x: &Mat<f64>, y: &[u8]) -> Result<()>;

    /// Probability of the event class for each row
    fn predict_proba(&self, x: &Mat<f64>) -> Result<Vec<f64>>;
}

/// Shared input checks for `fit`
pub(crate) fn validate_training(x: &Mat<f64>, y: &[u8]) -> Result<()> {
    if x.nrows() != y.len() {
        return Err(FeatureError::LengthMismatch {
            expected: x.nrows(),
            actual: y.len(),
        });
    }
    if x.ncols() == 0 {
        return Err(FeatureError::InvalidParameter(
            "training matrix has no features".to_string(),
        ));
    }
    if let Some(&bad) = y.iter().find(|&&l| l > 1) {
        return Err(FeatureError::InvalidParameter(format!(
            "labels must be 0 or 1, found {}",
            bad
        )));
    }

    let events = y.iter().filter(|&&l| l == 1).count();
    if events == 0 || events == y.len() {
        return Err(FeatureError::SingleClass);
    }

    for j in 0..x.ncols() {
        for i in 0..x.nrows() {
            if !x[(i, j)].is_finite() {
                return Err(FeatureError::NonFinite("feature value"));
            }
        }
    }
    Ok(())
}

/// Both baseline models configured from the given settings
pub fn baseline_models(logistic: LogisticConfig, forest: ForestConfig) -> Vec<Box<dyn Classifier>> {
    vec![
        Box::new(LogisticRegression::new(logistic)),
        Box::new(RandomForest::new(forest)),
    ]
}

#[cfg(test)]
pub(crate) mod test_data {
    use faer::Mat;

    /// Two noisy clusters along the first feature; the second feature is noise
    pub fn two_clusters(n_per_class: usize) -> (Mat<f64>, Vec<u8>) {
        let n = 2 * n_per_class;
        let mut x = Mat::<f64>::zeros(n, 2);
        let mut y = Vec::with_capacity(n);
        for i in 0..n {
            let class = (i >= n_per_class) as u8;
            let jitter = ((i * 37) % 11) as f64 / 10.0;
            x[(i, 0)] = if class == 1 { 3.0 + jitter } else { -3.0 - jitter };
            x[(i, 1)] = ((i * 13) % 7) as f64;
            y.push(class);
        }
        (x, y)
    }
}
