use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::pipeline::metric::ColorMetric;
use crate::pipeline::resample::SamplingConfig;
use crate::pipeline::select::SelectionConfig;

/// Tunable settings, loadable from a TOML file. Every field has a default.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub metric: ColorMetric,
    pub sampling: SamplingConfig,
    pub selection: SelectionConfig,
}

impl Config {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("invalid config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> crate::error::Result<()> {
        self.metric.validate()?;
        self.sampling.validate()?;
        self.selection.validate()?;
        Ok(())
    }
}
