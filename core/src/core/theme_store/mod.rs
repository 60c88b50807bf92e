//! Persists the theme picked in the toolbar.

use crate::core::slots::SlotStore;
use crate::types::{SlotKey, Theme};
use tracing::warn;

pub struct ThemeStore<S> {
    slots: S,
    key: SlotKey,
}

impl<S: SlotStore> ThemeStore<S> {
    pub fn new(slots: S, key: SlotKey) -> Self {
        Self { slots, key }
    }

    /// Returns the saved theme, or the default if none is saved or it can't be read.
    pub fn load(&self) -> Theme {
        match self.slots.get(&self.key) {
            Ok(Some(saved)) => saved.parse().unwrap_or_else(|e| {
                warn!("Ignoring saved theme: {e}");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("Failed to read theme from storage: {e}");
                Theme::default()
            }
        }
    }

    pub fn save(&self, theme: Theme) {
        if let Err(e) = self.slots.set(&self.key, theme.as_str()) {
            warn!("Failed to save theme to storage: {e}");
        }
    }
}
