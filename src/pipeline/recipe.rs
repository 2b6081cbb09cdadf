//! Dataset recipes
//!
//! A recipe describes one experiment: which column is the target, how rows
//! are filtered, which columns are numeric or categorical, and which
//! preprocessing variants to compare. Recipes are JSON; three ship with the
//! crate and can be referenced by name.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::encoding::{CategoricalEncoding, DEFAULT_MISSING_MARKER};
use super::error::{FeatureError, Result};
use super::scaling::ScalerKind;
use super::target::TargetSpec;

const WEATHER: &str = include_str!("../../recipes/weather.json");
const MUSHROOM: &str = include_str!("../../recipes/mushroom.json");
const MEDIA: &str = include_str!("../../recipes/media.json");

/// Names of the recipes embedded in the binary
pub const BUILTIN_RECIPES: [&str; 3] = ["weather", "mushroom", "media"];

/// Keep only rows whose `column` value is one of `values`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFilter {
    pub column: String,
    pub values: Vec<String>,
}

/// One preprocessing combination to score both models on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    #[serde(default)]
    pub scaler: ScalerKind,
    #[serde(default)]
    pub encoding: CategoricalEncoding,
    /// Omit the reference category when one-hot encoding
    #[serde(default = "default_drop_first")]
    pub drop_first: bool,
}

fn default_drop_first() -> bool {
    true
}

fn default_missing_marker() -> char {
    DEFAULT_MISSING_MARKER
}

/// A complete experiment description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub target: TargetSpec,
    /// Extra CSV cells to read as null (e.g. `NA`)
    #[serde(default)]
    pub null_values: Vec<String>,
    #[serde(default)]
    pub filter: Option<RowFilter>,
    #[serde(default)]
    pub numeric: Vec<String>,
    #[serde(default)]
    pub categorical: Vec<String>,
    /// Raw value that ordinal letter codes map to the sentinel 0
    #[serde(default = "default_missing_marker")]
    pub missing_marker: char,
    pub variants: Vec<Variant>,
}

impl Recipe {
    /// Parse and validate a recipe from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let recipe: Recipe =
            serde_json::from_str(json).map_err(|e| FeatureError::InvalidRecipe(e.to_string()))?;
        recipe.validate()?;
        Ok(recipe)
    }

    /// One of the embedded recipes, by name.
    ///
    /// Fails with [`FeatureError::InvalidRecipe`] for unknown names and for
    /// embedded JSON that does not parse.
    pub fn builtin(name: &str) -> Result<Self> {
        let json = embedded_json(name).ok_or_else(|| {
            FeatureError::InvalidRecipe(format!(
                "unknown built-in recipe '{}' (available: {})",
                name,
                BUILTIN_RECIPES.join(", ")
            ))
        })?;
        Self::from_json(json)
            .map_err(|e| FeatureError::InvalidRecipe(format!("built-in recipe '{}': {}", name, e)))
    }

    /// Resolve a built-in name or read a JSON file
    pub fn load(name_or_path: &str) -> Result<Self> {
        if embedded_json(name_or_path).is_some() {
            return Self::builtin(name_or_path);
        }

        let path = Path::new(name_or_path);
        let json = std::fs::read_to_string(path).map_err(|e| {
            FeatureError::InvalidRecipe(format!(
                "'{}' is neither a built-in recipe ({}) nor a readable file: {}",
                name_or_path,
                BUILTIN_RECIPES.join(", "),
                e
            ))
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| -> Result<()> { Err(FeatureError::InvalidRecipe(msg)) };

        if self.name.trim().is_empty() {
            return invalid("name must not be empty".to_string());
        }
        if self.target.column.is_empty() {
            return invalid("target column must not be empty".to_string());
        }
        if self.numeric.is_empty() && self.categorical.is_empty() {
            return invalid("at least one numeric or categorical feature is required".to_string());
        }
        if self.variants.is_empty() {
            return invalid("at least one variant is required".to_string());
        }

        let mut seen = HashSet::new();
        for variant in &self.variants {
            if !seen.insert(variant.name.as_str()) {
                return invalid(format!("duplicate variant name '{}'", variant.name));
            }
        }

        if self.features().any(|c| c == &self.target.column) {
            return invalid(format!(
                "target column '{}' is also listed as a feature",
                self.target.column
            ));
        }

        if let Some(filter) = &self.filter {
            if filter.values.is_empty() {
                return invalid(format!("filter on '{}' has no values", filter.column));
            }
        }

        Ok(())
    }

    /// Numeric then categorical feature columns
    pub fn features(&self) -> impl Iterator<Item = &String> {
        self.numeric.iter().chain(self.categorical.iter())
    }

    /// Target followed by every feature column
    pub fn required_columns(&self) -> Vec<String> {
        std::iter::once(&self.target.column)
            .chain(self.features())
            .cloned()
            .collect()
    }
}

fn embedded_json(name: &str) -> Option<&'static str> {
    match name {
        "weather" => Some(WEATHER),
        "mushroom" => Some(MUSHROOM),
        "media" => Some(MEDIA),
        _ => None,
    }
}
