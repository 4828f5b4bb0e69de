// src/core/config.rs

use crate::core::common::TesseraError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for a labelled nearest-neighbor index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Number of coordinates per point (K).
    pub dimension: usize,
    /// Indexes holding fewer entries than this answer queries by linear scan.
    pub linear_scan_threshold: usize,
    pub index_name: String,
}

/// Builder for [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    dimension: Option<usize>,
    linear_scan_threshold: Option<usize>,
    index_name: Option<String>,
}

impl ConfigBuilder {
    /// Creates a new ConfigBuilder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the point dimension
    pub fn dimension(mut self, dimension: usize) -> Self {
        self.dimension = Some(dimension);
        self
    }

    /// Sets the entry count below which queries use a linear scan
    pub fn linear_scan_threshold(mut self, threshold: usize) -> Self {
        self.linear_scan_threshold = Some(threshold);
        self
    }

    pub fn index_name<S: Into<String>>(mut self, name: S) -> Self {
        self.index_name = Some(name.into());
        self
    }

    /// Builds the Config instance with validation
    pub fn build(self) -> Result<Config, TesseraError> {
        let defaults = Config::default();
        let config = Config {
            dimension: self.dimension.unwrap_or(defaults.dimension),
            linear_scan_threshold: self
                .linear_scan_threshold
                .unwrap_or(defaults.linear_scan_threshold),
            index_name: self.index_name.unwrap_or(defaults.index_name),
        };

        config.validate()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dimension: 3,
            linear_scan_threshold: 0,
            index_name: "kdtree".to_string(),
        }
    }
}

impl Config {
    /// Creates a new ConfigBuilder for fluent configuration
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), TesseraError> {
        if self.dimension == 0 {
            return Err(TesseraError::Configuration(
                "dimension must be greater than 0".to_string(),
            ));
        }

        if self.index_name.trim().is_empty() {
            return Err(TesseraError::Configuration(
                "index_name must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `TesseraError::Configuration` if the file cannot be parsed or fails
    /// validation, and `TesseraError::Io` for any other read failure.
    pub fn load_from_file(path: &Path) -> Result<Self, TesseraError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config: Self = toml::from_str(&contents).map_err(|e| {
                    TesseraError::Configuration(format!(
                        "Failed to parse config file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;

                config.validate()?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(TesseraError::Io(e)),
        }
    }

    /// Loads configuration from an optional TOML file path.
    ///
    /// If `optional_path` is `None`, it returns the default configuration.
    pub fn load_or_default(optional_path: Option<&Path>) -> Result<Self, TesseraError> {
        match optional_path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Configuration for a K-dimensional index with otherwise default settings.
    pub fn for_dimension(dimension: usize) -> Result<Self, TesseraError> {
        Self::builder().dimension(dimension).build()
    }
}
