// src/config/mod.rs
pub mod types;

pub use self::types::{FilterMode, LayoutConfig, PipelineConfig};

use crate::error::{Result, TitleGraphError};
use std::fs;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "titlegraph.toml";

impl PipelineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, is not valid TOML, or fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| TitleGraphError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let config = Self::parse_toml(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parses and validates configuration text.
    ///
    /// # Errors
    /// Returns error on malformed TOML or out-of-range values.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects thresholds the pipeline cannot honour.
    ///
    /// # Errors
    /// Returns `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.min_cooccurrence == 0 {
            return Err(TitleGraphError::invalid("min_cooccurrence", "must be at least 1"));
        }
        if !(0.0..1.0).contains(&self.min_similarity) {
            return Err(TitleGraphError::invalid(
                "min_similarity",
                format!("must be in [0, 1), got {}", self.min_similarity),
            ));
        }
        if self.max_terms == 0 {
            return Err(TitleGraphError::invalid("max_terms", "must be at least 1"));
        }
        self.layout.validate()
    }
}

impl LayoutConfig {
    /// # Errors
    /// Returns `InvalidConfig` for a non-positive spring constant or threshold.
    pub fn validate(&self) -> Result<()> {
        check_spring_constant("layout.spring_constant", self.spring_constant)?;
        check_spring_constant("layout.keyword_spring_constant", self.keyword_spring_constant)?;
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(TitleGraphError::invalid(
                "layout.threshold",
                format!("must be non-negative, got {}", self.threshold),
            ));
        }
        Ok(())
    }
}

fn check_spring_constant(field: &'static str, value: Option<f64>) -> Result<()> {
    match value {
        Some(k) if !k.is_finite() || k <= 0.0 => Err(TitleGraphError::invalid(
            field,
            format!("must be a positive number or \"auto\", got {k}"),
        )),
        _ => Ok(()),
    }
}
