//! Durable key-value slots.

use crate::types::SlotKey;
use error::MemorySlotsError;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum MemorySlotsError {
        #[error("Slot map lock poisoned")]
        Poisoned,
    }
}

/// A flat map of named text cells.
///
/// Writes overwrite. Removing a slot that was never written is not an error.
pub trait SlotStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn get(&self, key: &SlotKey) -> Result<Option<String>, Self::Error>;

    fn set(&self, key: &SlotKey, value: &str) -> Result<(), Self::Error>;

    fn remove(&self, key: &SlotKey) -> Result<(), Self::Error>;
}

impl<S: SlotStore + ?Sized> SlotStore for &S {
    type Error = S::Error;

    fn get(&self, key: &SlotKey) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&self, key: &SlotKey, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &SlotKey) -> Result<(), Self::Error> {
        (**self).remove(key)
    }
}

impl<S: SlotStore + ?Sized> SlotStore for Arc<S> {
    type Error = S::Error;

    fn get(&self, key: &SlotKey) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&self, key: &SlotKey, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &SlotKey) -> Result<(), Self::Error> {
        (**self).remove(key)
    }
}

impl<S: SlotStore + ?Sized> SlotStore for Rc<S> {
    type Error = S::Error;

    fn get(&self, key: &SlotKey) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&self, key: &SlotKey, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &SlotKey) -> Result<(), Self::Error> {
        (**self).remove(key)
    }
}

/// Process-local slots. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemorySlots {
    slots: Mutex<HashMap<SlotKey, String>>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots currently holding a value.
    pub fn len(&self) -> Result<usize, MemorySlotsError> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, MemorySlotsError> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<SlotKey, String>>, MemorySlotsError> {
        self.slots.lock().map_err(|_| MemorySlotsError::Poisoned)
    }
}

impl SlotStore for MemorySlots {
    type Error = MemorySlotsError;

    fn get(&self, key: &SlotKey) -> Result<Option<String>, Self::Error> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &SlotKey, value: &str) -> Result<(), Self::Error> {
        self.lock()?.insert(key.clone(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &SlotKey) -> Result<(), Self::Error> {
        self.lock()?.remove(key);
        Ok(())
    }
}
