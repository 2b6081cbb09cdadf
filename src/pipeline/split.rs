//! Seeded train/test splitting

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::error::{FeatureError, Result};

/// Row indices of each side of a split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

fn test_count(n: usize, test_size: f64) -> usize {
    (n as f64 * test_size).ceil() as usize
}

/// Shuffle rows and hold out `ceil(n * test_size)` of them for testing.
///
/// With `stratify`, each class is split separately so both sides keep the
/// label balance. The result is deterministic for a given seed; indices on
/// each side come back sorted.
pub fn train_test_split(labels: &[u8], test_size: f64, seed: u64, stratify: bool) -> Result<Split> {
    if !(test_size > 0.0 && test_size < 1.0) {
        return Err(FeatureError::InvalidTestSize(test_size));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train = Vec::new();
    let mut test = Vec::new();

    let groups: Vec<Vec<usize>> = if stratify {
        [0u8, 1]
            .iter()
            .map(|&class| (0..labels.len()).filter(|&i| labels[i] == class).collect())
            .collect()
    } else {
        vec![(0..labels.len()).collect()]
    };

    for mut group in groups {
        group.shuffle(&mut rng);
        let n_test = test_count(group.len(), test_size).min(group.len());
        test.extend_from_slice(&group[..n_test]);
        train.extend_from_slice(&group[n_test..]);
    }

    if train.is_empty() || test.is_empty() {
        return Err(FeatureError::EmptySplit {
            train: train.len(),
            test: test.len(),
        });
    }

    train.sort_unstable();
    test.sort_unstable();
    Ok(Split { train, test })
}

/// Pick labels by index
pub fn take_labels(labels: &[u8], indices: &[usize]) -> Vec<u8> {
    indices.iter().map(|&i| labels[i]).collect()
}
