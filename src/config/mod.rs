//! Configuration loading and management for the Parking Engine.
//!
//! This module provides functionality to load the garage configuration
//! from YAML files: garage metadata and the default operator settings.
//!
//! # Example
//!
//! ```no_run
//! use parking_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded garage: {}", config.garage().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_TOTAL_SLOTS, GarageConfig, GarageMetadata, GarageSettings, MAX_TOTAL_SLOTS,
};
