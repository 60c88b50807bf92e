pub mod core;
pub mod layout;
pub mod types;
pub mod workspace;

pub use crate::core::{LayoutStore, MemorySlots, SlotStore};
pub use layout::LayoutModel;
pub use workspace::{PanelTarget, Workspace, WorkspaceError};
