//! Saves the panel arrangement and restores it on the next launch.
//!
//! The document is stored as JSON text in one slot and the schema version tag
//! in another. A saved document is only restored when its tag equals the
//! running tag exactly; anything else falls back to the caller's default.
//!
//! The store never inspects the document. Any `Serialize`/`DeserializeOwned`
//! type works, from a typed [`LayoutModel`](crate::layout::LayoutModel) to a
//! raw `serde_json::Value`.

use crate::core::slots::SlotStore;
use crate::types::{LayoutConfig, SchemaVersion, SlotKey, SlotKeyError};
use error::LayoutStoreError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum LayoutStoreError {
        #[error("Slot storage error: {0}")]
        Slots(#[source] Box<dyn std::error::Error + Send + Sync>),

        #[error("Failed to serialize layout: {0}")]
        Serialize(#[source] serde_json::Error),

        #[error("Failed to parse saved layout: {0}")]
        Parse(#[source] serde_json::Error),
    }
}

fn slot_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> LayoutStoreError {
    LayoutStoreError::Slots(Box::new(e))
}

/// Slot names and schema tag used by a [`LayoutStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSlots {
    pub data: SlotKey,
    pub version: SlotKey,
    pub schema_version: SchemaVersion,
}

impl LayoutSlots {
    pub fn from_config(config: &LayoutConfig) -> Result<Self, SlotKeyError> {
        Ok(Self {
            data: SlotKey::try_from(config.data_key.as_str())?,
            version: SlotKey::try_from(config.version_key.as_str())?,
            schema_version: config.schema_version(),
        })
    }
}

pub struct LayoutStore<S> {
    slots: S,
    keys: LayoutSlots,
}

impl<S: SlotStore> LayoutStore<S> {
    pub fn new(slots: S, keys: LayoutSlots) -> Self {
        Self { slots, keys }
    }

    /// The tag written by [`save`](Self::save) and required by [`load`](Self::load).
    pub fn schema_version(&self) -> &SchemaVersion {
        &self.keys.schema_version
    }

    pub fn slots(&self) -> &LayoutSlots {
        &self.keys
    }
}

/// Swallowing operations. Failures are logged and never reach the caller.
impl<S: SlotStore> LayoutStore<S> {
    /// Writes the document and the current schema tag, overwriting both slots.
    pub fn save<D: Serialize + ?Sized>(&self, document: &D) {
        if let Err(e) = self.try_save(document) {
            warn!("Failed to save layout to storage: {e}");
        }
    }

    /// Returns the saved document, or `default` if nothing loadable was saved.
    pub fn load<D: DeserializeOwned>(&self, default: D) -> D {
        match self.try_load() {
            Ok(Some(document)) => document,
            Ok(None) => default,
            Err(e) => {
                warn!("Failed to load layout from storage, using default: {e}");
                default
            }
        }
    }

    /// Deletes both slots. The next [`load`](Self::load) returns its default.
    pub fn clear(&self) {
        for key in [&self.keys.data, &self.keys.version] {
            if let Err(e) = self.slots.remove(key) {
                warn!("Failed to clear layout slot {key}: {e}");
            }
        }
        debug!("layout storage cleared");
    }
}

/// Fallible operations backing the swallowing ones.
impl<S: SlotStore> LayoutStore<S> {
    pub fn try_save<D: Serialize + ?Sized>(&self, document: &D) -> Result<(), LayoutStoreError> {
        let json = serde_json::to_string(document).map_err(LayoutStoreError::Serialize)?;

        self.slots.set(&self.keys.data, &json).map_err(slot_error)?;
        self.slots
            .set(&self.keys.version, self.keys.schema_version.as_str())
            .map_err(slot_error)?;

        debug!(bytes = json.len(), version = %self.keys.schema_version, "layout saved");
        Ok(())
    }

    /// Returns `Ok(None)` when either slot is missing or empty, or when the
    /// saved tag differs from the running one.
    pub fn try_load<D: DeserializeOwned>(&self) -> Result<Option<D>, LayoutStoreError> {
        let saved_version = self.slots.get(&self.keys.version).map_err(slot_error)?;
        let saved_data = self.slots.get(&self.keys.data).map_err(slot_error)?;

        let (Some(version), Some(data)) = (saved_version, saved_data) else {
            debug!("no saved layout");
            return Ok(None);
        };

        if data.is_empty() {
            debug!("saved layout is empty");
            return Ok(None);
        }

        if !self.keys.schema_version.accepts(&version) {
            debug!(
                saved = %version,
                current = %self.keys.schema_version,
                "discarding layout saved under another schema version"
            );
            return Ok(None);
        }

        let document = serde_json::from_str(&data).map_err(LayoutStoreError::Parse)?;
        debug!(bytes = data.len(), "layout restored");
        Ok(Some(document))
    }
}
