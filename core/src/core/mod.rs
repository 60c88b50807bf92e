//! Persistence layer: slot backends and the stores built on top of them.
//!
//! A [`SlotStore`] is a flat map of named text cells. [`LayoutStore`] and
//! [`ThemeStore`] each own a handle to one and never let a backend failure
//! escape to the UI.

pub(crate) mod db;
pub(crate) mod layout_store;
pub(crate) mod slots;
pub(crate) mod theme_store;

pub use db::Database;
pub use db::error::DatabaseError;
pub use layout_store::LayoutStore;
pub use layout_store::LayoutSlots;
pub use layout_store::error::LayoutStoreError;
pub use slots::error::MemorySlotsError;
pub use slots::{MemorySlots, SlotStore};
pub use theme_store::ThemeStore;
