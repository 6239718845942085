// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config service and storage port for the story viewer.

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::config_port::SettingsPort;
use crate::settings::StorySettings;

/// Logical key the settings blob is stored under.
pub const SETTINGS_KEY: &str = "story";

/// Storage port for raw config blobs (keyed by logical name).
pub trait ConfigStore {
    /// Load a raw config blob. Returns `NotFound` when missing.
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Persist a raw config blob.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Error type for config operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Key not present in store.
    #[error("not found")]
    NotFound,
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Catch-all error variant.
    #[error("other: {0}")]
    Other(String),
}

/// Thin service that serializes config values and delegates storage to a `ConfigStore`.
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Create a new service using the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the inner store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the service and return the inner store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Load and deserialize a config value for `key`. Returns `Ok(None)` if missing.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        match self.store.load_raw(key) {
            Ok(bytes) if bytes.is_empty() => Ok(None),
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(ConfigError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Serialize and persist a config value for `key`.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let data = serde_json::to_vec_pretty(value)?;
        self.store.save_raw(key, &data)
    }
}

impl<S> SettingsPort for ConfigService<S>
where
    S: ConfigStore,
{
    fn load_settings(&self) -> Result<Option<StorySettings>, ConfigError> {
        self.load(SETTINGS_KEY)
    }

    fn save_settings(&self, settings: &StorySettings) -> Result<(), ConfigError> {
        self.save(SETTINGS_KEY, settings)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemStore {
        blobs: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl ConfigStore for MemStore {
        fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
            self.blobs
                .borrow()
                .get(key)
                .cloned()
                .ok_or(ConfigError::NotFound)
        }

        fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
            self.blobs.borrow_mut().insert(key.to_owned(), data.to_vec());
            Ok(())
        }
    }

    #[test]
    fn missing_settings_load_as_none() {
        let svc = ConfigService::new(MemStore::default());
        assert!(svc.load_settings().expect("load").is_none());
    }

    #[test]
    fn settings_round_trip_through_store() {
        let svc = ConfigService::new(MemStore::default());
        let mut settings = StorySettings::default();
        settings.narrative.default_start = 2000;
        svc.save_settings(&settings).expect("save");
        let back = svc.load_settings().expect("load").expect("present");
        assert_eq!(back, settings);
    }

    #[test]
    fn empty_blob_loads_as_none() {
        let store = MemStore::default();
        store.save_raw(SETTINGS_KEY, b"").expect("save");
        let svc = ConfigService::new(store);
        assert!(svc.load_settings().expect("load").is_none());
    }

    #[test]
    fn malformed_blob_is_a_serde_error() {
        let store = MemStore::default();
        store.save_raw(SETTINGS_KEY, b"{oops").expect("save");
        let svc = ConfigService::new(store);
        assert!(matches!(svc.load_settings(), Err(ConfigError::Serde(_))));
    }
}
