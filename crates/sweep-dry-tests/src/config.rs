// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config store kept in memory, for tests that must not touch disk.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use sweep_app_core::config::{ConfigError, ConfigStore};

/// [`ConfigStore`] over a shared map. Counts every load and save.
///
/// Clones share state, so a test can hand one clone to a
/// [`sweep_app_core::config::ConfigService`] and inspect another.
///
/// ```
/// use sweep_dry_tests::InMemoryConfigStore;
/// use sweep_app_core::config::ConfigService;
///
/// let store = InMemoryConfigStore::new();
/// let service = ConfigService::new(store.clone());
///
/// service.save("sensor", &serde_json::json!({"sensor_count": 4})).unwrap();
/// assert_eq!(store.save_count(), 1);
/// assert!(store.contains_key("sensor"));
/// ```
#[derive(Clone, Default)]
pub struct InMemoryConfigStore {
    inner: Arc<Mutex<Blobs>>,
}

#[derive(Default)]
struct Blobs {
    by_key: HashMap<String, Vec<u8>>,
    loads: usize,
    saves: usize,
    broken: bool,
}

impl InMemoryConfigStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store already holding `json` under `key`.
    pub fn with_json(key: &str, json: &str) -> Self {
        let store = Self::new();
        store.lock().by_key.insert(key.to_owned(), json.as_bytes().to_vec());
        store
    }

    /// While set, every load fails with [`ConfigError::Other`].
    pub fn set_fail_on_load(&self, fail: bool) {
        self.lock().broken = fail;
    }

    /// `load_raw` calls so far, failed ones included.
    pub fn load_count(&self) -> usize {
        self.lock().loads
    }

    /// `save_raw` calls so far.
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    /// Whether anything is stored under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().by_key.contains_key(key)
    }

    fn lock(&self) -> MutexGuard<'_, Blobs> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let mut blobs = self.lock();
        blobs.loads += 1;
        if blobs.broken {
            return Err(ConfigError::Other(format!("load of {key} refused")));
        }
        blobs.by_key.get(key).cloned().ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let mut blobs = self.lock();
        blobs.saves += 1;
        blobs.by_key.insert(key.to_owned(), data.to_vec());
        Ok(())
    }
}
