// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Stored configuration for Sweep tools.
//!
//! Values are kept as JSON blobs under string keys. Hosts pick the storage by
//! implementing [`ConfigStore`]; callers go through [`ConfigService`].

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::debug;

/// Key the sensor config is stored under.
pub const SENSOR_CONFIG_KEY: &str = "sweep_sensor";

/// Where JSON config blobs live. One blob per key.
pub trait ConfigStore {
    /// Bytes stored under `key`, or [`ConfigError::NotFound`].
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Replaces whatever is stored under `key`.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Failure to read, write or decode a stored config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Nothing stored under the key.
    #[error("no config stored under this key")]
    NotFound,
    /// The backing storage failed.
    #[error("config storage failed: {0}")]
    Io(#[from] std::io::Error),
    /// The blob is not valid JSON for the requested type.
    #[error("config is not valid JSON for this type: {0}")]
    Serde(#[from] serde_json::Error),
    /// Store-specific failure.
    #[error("config store error: {0}")]
    Other(String),
}

/// Typed JSON access on top of a [`ConfigStore`].
pub struct ConfigService<S> {
    store: S,
}

impl<S> ConfigService<S> {
    /// Wraps `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwraps the store.
    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> ConfigService<S>
where
    S: ConfigStore,
{
    /// Decodes the value under `key`; `None` when the key is absent or its
    /// blob is empty.
    pub fn load<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: DeserializeOwned,
    {
        let bytes = match self.store.load_raw(key) {
            Err(ConfigError::NotFound) => return Ok(None),
            other => other?,
        };
        if bytes.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Like [`Self::load`], with `T::default()` standing in for a missing key.
    ///
    /// Storage and decode errors still propagate; a corrupt blob is never
    /// replaced by defaults.
    pub fn load_or_default<T>(&self, key: &str) -> Result<T, ConfigError>
    where
        T: DeserializeOwned + Default,
    {
        if let Some(value) = self.load(key)? {
            return Ok(value);
        }
        debug!(key, "config key missing; using defaults");
        Ok(T::default())
    }

    /// Stores `value` under `key` as pretty-printed JSON.
    pub fn save<T>(&self, key: &str, value: &T) -> Result<(), ConfigError>
    where
        T: Serialize,
    {
        let json = serde_json::to_vec_pretty(value)?;
        debug!(key, bytes = json.len(), "saving config");
        self.store.save_raw(key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapStore {
        data: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl ConfigStore for MapStore {
        fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
            self.data
                .borrow()
                .get(key)
                .cloned()
                .ok_or(ConfigError::NotFound)
        }

        fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
            self.data.borrow_mut().insert(key.to_owned(), data.to_vec());
            Ok(())
        }
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        count: u32,
    }

    #[test]
    fn missing_key_loads_as_none_and_default() {
        let svc = ConfigService::new(MapStore::default());
        assert_eq!(svc.load::<Sample>("nope").unwrap(), None);
        assert_eq!(svc.load_or_default::<Sample>("nope").unwrap(), Sample::default());
    }

    #[test]
    fn save_then_load() {
        let svc = ConfigService::new(MapStore::default());
        svc.save("s", &Sample { count: 7 }).unwrap();
        assert_eq!(svc.load::<Sample>("s").unwrap(), Some(Sample { count: 7 }));
    }

    #[test]
    fn corrupt_blob_is_an_error() {
        let svc = ConfigService::new(MapStore::default());
        svc.store().save_raw("s", b"{not json").unwrap();
        assert!(matches!(
            svc.load_or_default::<Sample>("s"),
            Err(ConfigError::Serde(_))
        ));
    }
}
