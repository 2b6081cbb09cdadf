//! Classifier scoring

use super::error::{FeatureError, Result};

/// Scores closer than this are treated as ties
const TIE_TOLERANCE: f64 = 1e-12;

/// Area under the ROC curve via the Mann-Whitney U statistic.
///
/// Tied scores get their mid-rank, so a constant scorer gets exactly 0.5.
/// Fails if the inputs differ in length, only one class is present or a
/// score is NaN or infinite.
pub fn roc_auc(labels: &[u8], scores: &[f64]) -> Result<f64> {
    if labels.len() != scores.len() {
        return Err(FeatureError::LengthMismatch {
            expected: labels.len(),
            actual: scores.len(),
        });
    }

    let total_pos = labels.iter().filter(|&&l| l == 1).count() as f64;
    let total_neg = labels.len() as f64 - total_pos;
    if total_pos == 0.0 || total_neg == 0.0 {
        return Err(FeatureError::SingleClass);
    }
    if scores.iter().any(|s| !s.is_finite()) {
        return Err(FeatureError::NonFinite("score"));
    }

    let mut pairs: Vec<(f64, u8)> = scores.iter().copied().zip(labels.iter().copied()).collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    let n = pairs.len();
    let mut rank_sum_pos = 0.0;
    let mut i = 0;

    while i < n {
        let current = pairs[i].0;
        let mut j = i + 1;

        // Find all ties with same score
        while j < n && (pairs[j].0 - current).abs() < TIE_TOLERANCE {
            j += 1;
        }

        // 1-based ranks i+1..=j share their average
        let avg_rank = (i + 1 + j) as f64 / 2.0;
        let positives = pairs[i..j].iter().filter(|(_, l)| *l == 1).count() as f64;
        rank_sum_pos += avg_rank * positives;

        i = j;
    }

    let u = rank_sum_pos - total_pos * (total_pos + 1.0) / 2.0;
    Ok((u / (total_pos * total_neg)).clamp(0.0, 1.0))
}
