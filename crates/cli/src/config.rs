//! CLI configuration

use anyhow::{Context, Result};
use serde::Deserialize;

/// Runtime settings, loadable from ADMIT_* environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Path to the trained ONNX model
    #[serde(default = "default_model_path")]
    pub model_path: String,
}

fn default_model_path() -> String {
    "admission_model.onnx".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
        }
    }
}

impl Settings {
    /// Load settings from ADMIT_* environment variables
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("ADMIT"))
            .build()
            .context("failed to read environment configuration")?;
        Ok(config.try_deserialize().unwrap_or_default())
    }
}
