//! Random forest of CART trees
//!
//! Each tree is grown on a bootstrap sample, choosing among a random subset
//! of `sqrt(n_features)` candidate features at every node. Splits maximize
//! the reduction in Gini impurity. The forest probability is the mean of the
//! leaf event rates across trees.
//!
//! Trees are grown in parallel; tree `t` draws from its own RNG seeded with
//! `seed + t`, so results do not depend on thread scheduling.

use faer::Mat;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use super::{validate_training, Classifier};
use crate::pipeline::error::{FeatureError, Result};

/// Values closer than this are not split apart
const VALUE_TOLERANCE: f64 = 1e-10;

/// Hyper-parameters for [`RandomForest`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForestConfig {
    pub n_trees: usize,
    /// Maximum depth (None = grow until pure or too small)
    pub max_depth: Option<usize>,
    /// Minimum samples a node needs to be split
    pub min_samples_split: usize,
    /// Candidate features per split (None = sqrt of the feature count)
    pub max_features: Option<usize>,
    pub seed: u64,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: None,
            min_samples_split: 2,
            max_features: None,
            seed: 42,
        }
    }
}

impl ForestConfig {
    pub fn n_trees(mut self, n: usize) -> Self {
        self.n_trees = n;
        self
    }

    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.n_trees == 0 {
            return Err(FeatureError::InvalidParameter(
                "forest needs at least one tree".to_string(),
            ));
        }
        if self.min_samples_split < 2 {
            return Err(FeatureError::InvalidParameter(format!(
                "min_samples_split must be at least 2, got {}",
                self.min_samples_split
            )));
        }
        if self.max_features == Some(0) {
            return Err(FeatureError::InvalidParameter(
                "max_features must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn features_per_split(&self, n_features: usize) -> usize {
        self.max_features
            .unwrap_or_else(|| (n_features as f64).sqrt().round() as usize)
            .clamp(1, n_features)
    }
}

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        /// Fraction of events among the training rows in this leaf
        probability: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    fn predict(&self, x: &Mat<f64>, row: usize) -> f64 {
        let mut node = self;
        loop {
            match node {
                Node::Leaf { probability } => return *probability,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if x[(row, *feature)] <= *threshold {
                        left.as_ref()
                    } else {
                        right.as_ref()
                    };
                }
            }
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Gini impurity for a binary node: 2p(1 - p)
fn gini_impurity(events: f64, non_events: f64) -> f64 {
    let total = events + non_events;
    if total == 0.0 {
        return 0.0;
    }
    let p = events / total;
    2.0 * p * (1.0 - p)
}

/// Best threshold on one feature for the rows in `indices`.
///
/// Returns (threshold, gain), or None when no split separates distinct values
/// with positive gain.
fn find_best_split(x: &Mat<f64>, y: &[u8], indices: &[usize], feature: usize) -> Option<(f64, f64)> {
    let n = indices.len();
    if n < 2 {
        return None;
    }

    let mut sorted: Vec<(f64, u8)> = indices.iter().map(|&i| (x[(i, feature)], y[i])).collect();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let total_events = sorted.iter().filter(|(_, t)| *t == 1).count() as f64;
    let total_non_events = n as f64 - total_events;
    let parent_gini = gini_impurity(total_events, total_non_events);

    let mut best_gain = 0.0;
    let mut best = None;

    // Running counts for the left side
    let mut left_events = 0.0f64;
    let mut left_non_events = 0.0f64;

    for i in 0..n - 1 {
        if sorted[i].1 == 1 {
            left_events += 1.0;
        } else {
            left_non_events += 1.0;
        }

        // Never split between equal values
        if (sorted[i + 1].0 - sorted[i].0).abs() < VALUE_TOLERANCE {
            continue;
        }

        let right_events = total_events - left_events;
        let right_non_events = total_non_events - left_non_events;

        let left_prop = (i + 1) as f64 / n as f64;
        let right_prop = 1.0 - left_prop;
        let weighted_child_gini = left_prop * gini_impurity(left_events, left_non_events)
            + right_prop * gini_impurity(right_events, right_non_events);

        let gain = parent_gini - weighted_child_gini;
        if gain > best_gain {
            best_gain = gain;
            best = Some((split_threshold(sorted[i].0, sorted[i + 1].0), gain));
        }
    }

    best
}

/// Midpoint between two sorted values, falling back to the lower one when
/// the midpoint rounds up to the upper value
fn split_threshold(lower: f64, upper: f64) -> f64 {
    let mid = (lower + upper) / 2.0;
    if mid < upper {
        mid
    } else {
        lower
    }
}

fn grow(
    x: &Mat<f64>,
    y: &[u8],
    indices: Vec<usize>,
    depth: usize,
    config: &ForestConfig,
    n_candidates: usize,
    rng: &mut StdRng,
) -> Node {
    let events = indices.iter().filter(|&&i| y[i] == 1).count();
    let probability = events as f64 / indices.len() as f64;

    let pure = events == 0 || events == indices.len();
    let depth_reached = config.max_depth.is_some_and(|max| depth >= max);
    if pure || depth_reached || indices.len() < config.min_samples_split {
        return Node::Leaf { probability };
    }

    let mut best: Option<(usize, f64, f64)> = None;
    for feature in sample(rng, x.ncols(), n_candidates).into_iter() {
        if let Some((threshold, gain)) = find_best_split(x, y, &indices, feature) {
            if best.map_or(true, |(_, _, g)| gain > g) {
                best = Some((feature, threshold, gain));
            }
        }
    }

    let Some((feature, threshold, _)) = best else {
        return Node::Leaf { probability };
    };

    let (left, right): (Vec<usize>, Vec<usize>) =
        indices.into_iter().partition(|&i| x[(i, feature)] <= threshold);
    if left.is_empty() || right.is_empty() {
        return Node::Leaf { probability };
    }

    Node::Split {
        feature,
        threshold,
        left: Box::new(grow(x, y, left, depth + 1, config, n_candidates, rng)),
        right: Box::new(grow(x, y, right, depth + 1, config, n_candidates, rng)),
    }
}

/// Bagged ensemble of CART trees
#[derive(Debug, Clone)]
pub struct RandomForest {
    config: ForestConfig,
    trees: Vec<Node>,
    n_features: usize,
}

impl RandomForest {
    pub fn new(config: ForestConfig) -> Self {
        Self {
            config,
            trees: Vec::new(),
            n_features: 0,
        }
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Depth of the deepest tree
    pub fn max_tree_depth(&self) -> usize {
        self.trees.iter().map(Node::depth).max().unwrap_or(0)
    }
}

impl Default for RandomForest {
    fn default() -> Self {
        Self::new(ForestConfig::default())
    }
}

impl Classifier for RandomForest {
    fn name(&self) -> &'static str {
        "random_forest"
    }

    fn fit(&mut self, x: &Mat<f64>, y: &[u8]) -> Result<()> {
        self.config.validate()?;
        validate_training(x, y)?;

        let n = x.nrows();
        let n_candidates = self.config.features_per_split(x.ncols());
        let config = self.config;

        self.trees = (0..config.n_trees)
            .into_par_iter()
            .map(|t| {
                let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(t as u64));
                let bootstrap: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
                grow(x, y, bootstrap, 0, &config, n_candidates, &mut rng)
            })
            .collect();
        self.n_features = x.ncols();

        Ok(())
    }

    fn predict_proba(&self, x: &Mat<f64>) -> Result<Vec<f64>> {
        if self.trees.is_empty() {
            return Err(FeatureError::NotFitted("RandomForest"));
        }
        if x.ncols() != self.n_features {
            return Err(FeatureError::LengthMismatch {
                expected: self.n_features,
                actual: x.ncols(),
            });
        }

        let n_trees = self.trees.len() as f64;
        Ok((0..x.nrows())
            .into_par_iter()
            .map(|row| self.trees.iter().map(|t| t.predict(x, row)).sum::<f64>() / n_trees)
            .collect())
    }
}
