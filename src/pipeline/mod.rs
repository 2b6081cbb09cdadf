//! Pipeline module - loading, summarizing, encoding and scoring

pub mod categorical;
pub mod encoding;
pub mod error;
pub mod experiment;
pub mod filter;
pub mod loader;
pub mod matrix;
pub mod metrics;
pub mod models;
pub mod recipe;
pub mod scaling;
pub mod split;
pub mod target;
pub mod values;

pub use categorical::*;
pub use encoding::*;
pub use error::FeatureError;
pub use experiment::*;
pub use filter::*;
pub use loader::*;
pub use matrix::FeatureMatrix;
pub use metrics::roc_auc;
pub use models::{
    baseline_models, Classifier, ForestConfig, LogisticConfig, LogisticRegression, RandomForest,
};
pub use recipe::*;
pub use scaling::*;
pub use split::*;
pub use target::*;
