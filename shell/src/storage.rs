//! Storage layer initialization.

use mosaic_core::core::{Database, MemorySlots};
use mosaic_core::types::{AppConfig, Config, DATA_DIR_ENV};
use std::sync::Arc;
use tracing::{info, warn};

/// The slot backend the workspace runs on.
pub enum Slots {
    Durable(Arc<Database>),
    /// Used when the data directory can't be opened. Nothing is remembered.
    Memory(Arc<MemorySlots>),
}

/// Opens the slot database and reads config.toml from the data directory.
///
/// Never fails: a missing data directory, an unreadable config or a database
/// that can't be opened are logged and replaced by in-memory defaults.
pub fn init() -> (Slots, AppConfig) {
    let Some(config) = Config::from_env() else {
        warn!("No data directory ({DATA_DIR_ENV} and HOME unset), layout will not be saved");
        return (Slots::Memory(Arc::new(MemorySlots::new())), AppConfig::default());
    };

    let app_config = AppConfig::load(&config.config_path()).unwrap_or_else(|e| {
        warn!("Failed to read {}, using defaults: {e}", config.config_path().display());
        AppConfig::default()
    });

    match Database::new(&config) {
        Ok(db) => {
            info!("Storage initialized at {}", config.base_path.display());
            write_default_config(&config);
            (Slots::Durable(Arc::new(db)), app_config)
        }
        Err(e) => {
            warn!("Failed to open {}, layout will not be saved: {e}", config.db_path().display());
            (Slots::Memory(Arc::new(MemorySlots::new())), app_config)
        }
    }
}

/// Writes the defaults to config.toml on first launch so there is a file to edit.
fn write_default_config(config: &Config) {
    let path = config.config_path();
    if path.exists() {
        return;
    }
    match AppConfig::default().save(&path) {
        Ok(()) => info!("Wrote default config to {}", path.display()),
        Err(e) => warn!("Failed to write {}: {e}", path.display()),
    }
}
