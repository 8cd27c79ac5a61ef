//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading garage
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::PricingPolicy;

use super::types::{GarageConfig, GarageMetadata, GarageSettings};

/// Loads and provides access to garage configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── garage.yaml     # Garage metadata
/// └── settings.yaml   # Default capacity and prices
/// ```
///
/// # Example
///
/// ```no_run
/// use parking_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Loaded garage: {}", loader.garage().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: GarageConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The settings break their invariants (`InvalidSettings`, `InvalidRate`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<GarageMetadata>(&path.join("garage.yaml"))?;
        let settings = Self::load_yaml::<GarageSettings>(&path.join("settings.yaml"))?;
        settings.validate()?;

        debug!(
            garage = %metadata.code,
            total_slots = settings.total_slots,
            "Loaded garage configuration"
        );

        Ok(Self {
            config: GarageConfig::new(metadata, settings),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: GarageConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying garage configuration.
    pub fn config(&self) -> &GarageConfig {
        &self.config
    }

    /// Returns the garage metadata.
    pub fn garage(&self) -> &GarageMetadata {
        self.config.garage()
    }

    /// Returns the default settings.
    pub fn settings(&self) -> &GarageSettings {
        self.config.settings()
    }

    /// Returns the default pricing policy.
    pub fn pricing_policy(&self) -> PricingPolicy {
        self.config.settings().pricing_policy()
    }
}
