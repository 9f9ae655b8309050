// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Resolves the effective sensor config for a command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sweep_app_core::config::{ConfigService, SENSOR_CONFIG_KEY};
use sweep_config_fs::FsConfigStore;
use sweep_sensor::SensorConfig;
use tracing::debug;

/// Opens the config store at `dir`, or the platform config directory.
pub fn open_store(dir: Option<&Path>) -> Result<ConfigService<FsConfigStore>> {
    let store = match dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    }
    .context("failed to open config store")?;
    debug!(base = %store.base().display(), "config store opened");
    Ok(ConfigService::new(store))
}

/// Reads `file` if given, else the stored key, else defaults. Always validated.
pub fn resolve(file: Option<&Path>, store_dir: Option<&Path>) -> Result<SensorConfig> {
    let config = match file {
        Some(path) => read_file(path)?,
        None => open_store(store_dir)?
            .load_or_default(SENSOR_CONFIG_KEY)
            .context("failed to load stored sensor config")?,
    };
    config.validate().context("invalid sensor config")?;
    Ok(config)
}

fn read_file(path: &Path) -> Result<SensorConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}
