//! JSON export of summaries and experiment results

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{CategoricalSummary, ExperimentReport, ExperimentSettings};

/// Metadata about the run
#[derive(Debug, Serialize)]
pub struct RunMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    pub featbench_version: String,
    pub input_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
}

impl RunMetadata {
    pub fn new(input_file: &Path, recipe: Option<&str>) -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            featbench_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: input_file.display().to_string(),
            recipe: recipe.map(|s| s.to_string()),
        }
    }
}

/// Categorical summary export
#[derive(Debug, Serialize)]
pub struct SummaryExport<'a> {
    pub metadata: RunMetadata,
    pub columns: &'a [CategoricalSummary],
}

/// Experiment export: metadata, the settings used and every score
#[derive(Debug, Serialize)]
pub struct ExperimentExport<'a> {
    pub metadata: RunMetadata,
    pub settings: &'a ExperimentSettings,
    #[serde(flatten)]
    pub report: &'a ExperimentReport,
}

fn write_json<T: Serialize>(value: &T, output_path: &Path, what: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {} to JSON", what))?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write {} to {}", what, output_path.display()))?;

    Ok(())
}

/// Write categorical summaries to a JSON file
pub fn export_summaries(
    summaries: &[CategoricalSummary],
    input_file: &Path,
    output_path: &Path,
) -> Result<()> {
    let export = SummaryExport {
        metadata: RunMetadata::new(input_file, None),
        columns: summaries,
    };
    write_json(&export, output_path, "categorical summary")
}

/// Write an experiment report with its settings to a JSON file
pub fn export_experiment(
    report: &ExperimentReport,
    settings: &ExperimentSettings,
    input_file: &Path,
    output_path: &Path,
) -> Result<()> {
    let export = ExperimentExport {
        metadata: RunMetadata::new(input_file, Some(&report.recipe)),
        settings,
        report,
    };
    write_json(&export, output_path, "experiment results")
}
