//! L2-regularized logistic regression fitted by gradient descent
//!
//! Minimizes the mean log-loss plus `||w||² / (2·C·n)`, which is the
//! `C`-parameterized objective (`C · Σ loss + ½||w||²`) divided by `C·n`.
//! The intercept is not penalized. No feature scaling happens here, so
//! unscaled inputs converge visibly worse within the iteration budget.

use faer::Mat;
use serde::Serialize;

use super::{validate_training, Classifier};
use crate::pipeline::error::{FeatureError, Result};

/// Hyper-parameters for [`LogisticRegression`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogisticConfig {
    /// Inverse regularization strength (must be > 0)
    pub c: f64,
    pub learning_rate: f64,
    pub max_iter: usize,
    /// Stop once the gradient norm falls below this
    pub tolerance: f64,
}

impl Default for LogisticConfig {
    fn default() -> Self {
        Self {
            c: 1.0,
            learning_rate: 0.1,
            max_iter: 1000,
            tolerance: 1e-6,
        }
    }
}

impl LogisticConfig {
    pub fn c(mut self, c: f64) -> Self {
        self.c = c;
        self
    }

    pub fn learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    pub fn max_iter(mut self, n: usize) -> Self {
        self.max_iter = n;
        self
    }

    fn validate(&self) -> Result<()> {
        if !(self.c > 0.0) {
            return Err(FeatureError::InvalidParameter(format!("C must be > 0, got {}", self.c)));
        }
        if !(self.learning_rate > 0.0) {
            return Err(FeatureError::InvalidParameter(format!(
                "learning rate must be > 0, got {}",
                self.learning_rate
            )));
        }
        if self.max_iter == 0 {
            return Err(FeatureError::InvalidParameter(
                "max_iter must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Binary logistic regression
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    config: LogisticConfig,
    weights: Option<Mat<f64>>,
    intercept: f64,
    iterations: usize,
}

/// Sigmoid that never overflows `exp`
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl LogisticRegression {
    pub fn new(config: LogisticConfig) -> Self {
        Self {
            config,
            weights: None,
            intercept: 0.0,
            iterations: 0,
        }
    }

    /// Learned coefficients, one per feature
    pub fn coefficients(&self) -> Option<Vec<f64>> {
        self.weights
            .as_ref()
            .map(|w| (0..w.nrows()).map(|j| w[(j, 0)]).collect())
    }

    /// Gradient steps taken during the last fit
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self::new(LogisticConfig::default())
    }
}

impl Classifier for LogisticRegression {
    fn name(&self) -> &'static str {
        "logistic_regression"
    }

    fn fit(&mut self, x: &Mat<f64>, y: &[u8]) -> Result<()> {
        self.config.validate()?;
        validate_training(x, y)?;

        let n = x.nrows();
        let p = x.ncols();
        let n_f = n as f64;
        let l2 = 1.0 / (self.config.c * n_f);
        let lr = self.config.learning_rate;

        let mut w = Mat::<f64>::zeros(p, 1);
        let mut b = 0.0;
        let mut residual = Mat::<f64>::zeros(n, 1);
        self.iterations = 0;

        for _ in 0..self.config.max_iter {
            self.iterations += 1;

            let z = x * &w;
            let mut grad_b = 0.0;
            for i in 0..n {
                let r = sigmoid(z[(i, 0)] + b) - y[i] as f64;
                residual[(i, 0)] = r;
                grad_b += r;
            }
            grad_b /= n_f;

            // Gradient of the mean log-loss: X^T (p - y) / n
            let xt_r = x.transpose() * &residual;

            let mut norm_sq = grad_b * grad_b;
            for j in 0..p {
                let g = xt_r[(j, 0)] / n_f + l2 * w[(j, 0)];
                norm_sq += g * g;
                w[(j, 0)] -= lr * g;
            }
            b -= lr * grad_b;

            if norm_sq.sqrt() < self.config.tolerance {
                break;
            }
        }

        self.weights = Some(w);
        self.intercept = b;
        Ok(())
    }

    fn predict_proba(&self, x: &Mat<f64>) -> Result<Vec<f64>> {
        let w = self
            .weights
            .as_ref()
            .ok_or(FeatureError::NotFitted("LogisticRegression"))?;
        if x.ncols() != w.nrows() {
            return Err(FeatureError::LengthMismatch {
                expected: w.nrows(),
                actual: x.ncols(),
            });
        }

        let z = x * w;
        Ok((0..x.nrows())
            .map(|i| sigmoid(z[(i, 0)] + self.intercept))
            .collect())
    }
}
