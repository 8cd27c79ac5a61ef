//! Application state for the Parking Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::garage::Garage;

/// Shared application state.
///
/// Holds the loaded configuration and the live garage. Handlers take the
/// garage lock only for synchronous work and never across an `.await`.
#[derive(Clone)]
pub struct AppState {
    /// The loaded garage configuration.
    config: Arc<ConfigLoader>,
    /// Slots, transactions and current settings.
    garage: Arc<RwLock<Garage>>,
}

impl AppState {
    /// Creates the application state, seeding the garage from the
    /// configured default settings.
    pub fn new(config: ConfigLoader) -> EngineResult<Self> {
        let garage = Garage::new(*config.settings())?;

        Ok(Self {
            config: Arc::new(config),
            garage: Arc::new(RwLock::new(garage)),
        })
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the lock guarding the garage.
    pub fn garage(&self) -> &RwLock<Garage> {
        &self.garage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // axum state must be Clone
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_garage_seeded_from_config() {
        let config = ConfigLoader::load("./config/default").unwrap();
        let state = AppState::new(config).unwrap();

        assert_eq!(state.garage().read().slots().len(), 30);
        assert_eq!(state.config().garage().code, "main");
    }

    #[test]
    fn test_invalid_settings_cannot_seed_garage() {
        use crate::config::{GarageConfig, GarageMetadata, GarageSettings};

        let config = ConfigLoader::from_config(GarageConfig::new(
            GarageMetadata {
                code: "empty".to_string(),
                name: "Empty Lot".to_string(),
                currency: "USD".to_string(),
            },
            GarageSettings {
                total_slots: 0,
                ..GarageSettings::default()
            },
        ));

        assert!(AppState::new(config).is_err());
    }

    #[test]
    fn test_clones_share_one_garage() {
        let config = ConfigLoader::load("./config/default").unwrap();
        let state = AppState::new(config).unwrap();
        let other = state.clone();

        other
            .garage()
            .write()
            .check_in(1, "ABC123", chrono::Utc::now())
            .unwrap();

        assert!(state.garage().read().slot(1).unwrap().is_occupied());
    }
}
