//! Recipe execution: filter, encode, split, scale, fit and score
//!
//! Each variant of a recipe is scored independently with both baseline
//! models on the same seeded split, so AUC differences come from the
//! preprocessing alone.

use polars::prelude::*;
use serde::Serialize;

use super::categorical::{summarize_categorical, CategoricalSummary};
use super::error::{FeatureError, Result};
use super::filter::{drop_incomplete_rows, filter_rows_in, select_columns};
use super::matrix::FeatureMatrix;
use super::metrics::roc_auc;
use super::models::{baseline_models, ForestConfig, LogisticConfig};
use super::recipe::{Recipe, Variant};
use super::scaling::Scaler;
use super::split::{take_labels, train_test_split};
use super::target::{count_classes, encode_target};

/// Split and model settings shared by every variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExperimentSettings {
    pub test_size: f64,
    /// Seeds both the split and the forest
    pub seed: u64,
    pub stratify: bool,
    pub logistic: LogisticConfig,
    pub forest: ForestConfig,
}

impl Default for ExperimentSettings {
    fn default() -> Self {
        Self {
            test_size: 0.25,
            seed: 42,
            stratify: false,
            logistic: LogisticConfig::default(),
            forest: ForestConfig::default(),
        }
    }
}

/// AUC of one model on one preprocessing variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRow {
    pub variant: String,
    pub scaler: String,
    pub encoding: String,
    pub model: String,
    pub auc: f64,
    pub train_rows: usize,
    pub test_rows: usize,
    pub features: usize,
}

/// Everything a recipe run produced
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    pub recipe: String,
    pub rows_loaded: usize,
    pub rows_used: usize,
    pub events: usize,
    pub non_events: usize,
    pub summaries: Vec<CategoricalSummary>,
    pub scores: Vec<ScoreRow>,
}

impl ExperimentReport {
    /// Highest-AUC row, if any
    pub fn best(&self) -> Option<&ScoreRow> {
        self.scores
            .iter()
            .max_by(|a, b| a.auc.partial_cmp(&b.auc).unwrap_or(std::cmp::Ordering::Equal))
    }
}

/// Apply the recipe's row filter, keep only the columns it uses and drop
/// rows with a null in any of them
pub fn prepare_frame(df: &DataFrame, recipe: &Recipe) -> Result<DataFrame> {
    let filtered = match &recipe.filter {
        Some(filter) => filter_rows_in(df, &filter.column, &filter.values)?,
        None => df.clone(),
    };

    let columns = recipe.required_columns();
    let selected = select_columns(&filtered, &columns)?;
    drop_incomplete_rows(&selected, &columns)
}

/// Score both models on one variant of a prepared frame
pub fn run_variant(
    df: &DataFrame,
    labels: &[u8],
    recipe: &Recipe,
    variant: &Variant,
    settings: &ExperimentSettings,
) -> Result<Vec<ScoreRow>> {
    let matrix = FeatureMatrix::build(
        df,
        &recipe.numeric,
        &recipe.categorical,
        variant.encoding,
        variant.drop_first,
        recipe.missing_marker,
    )?;

    let split = train_test_split(labels, settings.test_size, settings.seed, settings.stratify)?;
    let y_train = take_labels(labels, &split.train);
    let y_test = take_labels(labels, &split.test);

    // Scaler statistics come from the training rows only
    let mut scaler = Scaler::new(variant.scaler);
    let train = scaler.fit_transform(&matrix.take_rows(&split.train))?;
    let test = scaler.transform(&matrix.take_rows(&split.test))?;

    let forest = settings.forest.seed(settings.seed);
    let mut rows = Vec::new();
    for mut model in baseline_models(settings.logistic, forest) {
        model.fit(&train.data, &y_train)?;
        let scores = model.predict_proba(&test.data)?;
        rows.push(ScoreRow {
            variant: variant.name.clone(),
            scaler: variant.scaler.to_string(),
            encoding: variant.encoding.to_string(),
            model: model.name().to_string(),
            auc: roc_auc(&y_test, &scores)?,
            train_rows: split.train.len(),
            test_rows: split.test.len(),
            features: matrix.n_features(),
        });
    }

    Ok(rows)
}

/// Run every variant of a recipe against a loaded table
pub fn run_experiment(
    df: &DataFrame,
    recipe: &Recipe,
    settings: &ExperimentSettings,
) -> Result<ExperimentReport> {
    run_experiment_with_progress(df, recipe, settings, |_, _| {})
}

/// [`run_experiment`], calling `on_variant` after each variant is scored
pub fn run_experiment_with_progress<F>(
    df: &DataFrame,
    recipe: &Recipe,
    settings: &ExperimentSettings,
    mut on_variant: F,
) -> Result<ExperimentReport>
where
    F: FnMut(&Variant, &[ScoreRow]),
{
    let prepared = prepare_frame(df, recipe)?;
    let labels = encode_target(&prepared, &recipe.target)?;
    let (events, non_events) = count_classes(&labels);
    if events == 0 || non_events == 0 {
        return Err(FeatureError::SingleClass);
    }

    let summaries = if recipe.categorical.is_empty() {
        Vec::new()
    } else {
        summarize_categorical(&prepared, &recipe.categorical)?
    };

    let mut scores = Vec::new();
    for variant in &recipe.variants {
        let rows = run_variant(&prepared, &labels, recipe, variant, settings)?;
        on_variant(variant, &rows);
        scores.extend(rows);
    }

    Ok(ExperimentReport {
        recipe: recipe.name.clone(),
        rows_loaded: df.height(),
        rows_used: prepared.height(),
        events,
        non_events,
        summaries,
        scores,
    })
}
