//! The UI root: owns the live layout and persists it on every change.
//!
//! Constructed once at startup with an explicit slot backend. Nothing here is
//! global; two workspaces over two backends never see each other.

use crate::core::{LayoutSlots, LayoutStore, SlotStore, ThemeStore};
use crate::layout::catalog::{self, OptionType, PanelKind, PanelPreset};
use crate::layout::{
    BorderLocation, CONSOLE_TAB, DockLocation, INSPECTOR_TAB_SET, LayoutError, LayoutModel,
    MARKET_DEPTH_TAB_SET, TabNode, WORKSPACE_TAB_SET,
};
use crate::types::{AppConfig, SlotKey, SlotKeyError, Theme};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Invalid slot key: {0}")]
    InvalidKey(#[from] SlotKeyError),
}

/// Which tab-set the "Add Panel" menu drops into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelTarget {
    #[default]
    Center,
    Right,
}

pub struct Workspace<S> {
    model: LayoutModel,
    theme: Theme,
    layout_store: LayoutStore<S>,
    theme_store: ThemeStore<S>,
}

impl<S: SlotStore + Clone> Workspace<S> {
    /// Restores the saved layout and theme from `slots`.
    ///
    /// Invalid config values are replaced by their defaults.
    pub fn open(slots: S, config: &AppConfig) -> Result<Self, WorkspaceError> {
        let errors = config.validate();
        let config = if errors.is_empty() {
            config.clone()
        } else {
            for e in &errors {
                warn!("Invalid config, using default: {e}");
            }
            config.with_defaults_for_invalid()
        };

        let layout_store = LayoutStore::new(slots.clone(), LayoutSlots::from_config(&config.layout)?);
        let theme_store = ThemeStore::new(slots, SlotKey::try_from(config.general.theme_key.as_str())?);

        let model = layout_store.load(LayoutModel::default());
        let theme = theme_store.load();
        info!(
            tabs = model.tabs().len(),
            %theme,
            version = %layout_store.schema_version(),
            "workspace opened"
        );

        Ok(Self {
            model,
            theme,
            layout_store,
            theme_store,
        })
    }
}

impl<S: SlotStore> Workspace<S> {
    pub fn model(&self) -> &LayoutModel {
        &self.model
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.theme_store.save(theme);
    }

    /// Forgets the saved layout and goes back to the default arrangement.
    ///
    /// The default is not written until the next change.
    pub fn reset(&mut self) {
        self.layout_store.clear();
        self.model = LayoutModel::default();
        debug!("layout reset to default");
    }

    /// Applies a change to the model and saves it if the change went through.
    pub fn update<T>(
        &mut self,
        change: impl FnOnce(&mut LayoutModel) -> Result<T, LayoutError>,
    ) -> Result<T, LayoutError> {
        let result = change(&mut self.model)?;
        self.layout_store.save(&self.model);
        Ok(result)
    }
}

/// Toolbar actions.
impl<S: SlotStore> Workspace<S> {
    /// Adds a preset as a new tab of the workspace or inspector tab-set.
    pub fn add_panel(&mut self, preset: &PanelPreset, target: PanelTarget) -> Result<String, LayoutError> {
        let tab_set = match target {
            PanelTarget::Center => WORKSPACE_TAB_SET,
            PanelTarget::Right => INSPECTOR_TAB_SET,
        };
        self.update(|model| model.add_tab(preset.to_tab(), tab_set, DockLocation::Center))
    }

    /// Adds a preset in a new tab-set to the right of the workspace.
    pub fn add_panel_as_new_tab_set(&mut self, preset: &PanelPreset) -> Result<String, LayoutError> {
        self.update(|model| model.add_tab(preset.to_tab(), WORKSPACE_TAB_SET, DockLocation::Right))
    }

    /// Opens another console next to the one in the bottom border.
    pub fn add_terminal(&mut self, now: SystemTime) -> Result<String, LayoutError> {
        let suffix = now
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() % 1000)
            .unwrap_or(0);
        let tab = TabNode::new(format!("Terminal {suffix}"), PanelKind::Console.as_str()).closable(true);
        self.update(|model| model.add_tab(tab, CONSOLE_TAB, DockLocation::Center))
    }

    /// The "+" button of a tab-set.
    pub fn add_editor(&mut self, tab_set_id: &str) -> Result<String, LayoutError> {
        let tab = TabNode::new("New Editor", PanelKind::Editor.as_str()).closable(true);
        self.update(|model| model.add_tab(tab, tab_set_id, DockLocation::Center))
    }

    /// Opens market depth for one strike of an option chain.
    pub fn open_market_depth(
        &mut self,
        symbol: &str,
        strike_price: f64,
        option_type: OptionType,
    ) -> Result<String, LayoutError> {
        let preset = catalog::market_depth(symbol, strike_price, option_type);
        let tab_set = if self.model.find_tab_set(MARKET_DEPTH_TAB_SET).is_some() {
            MARKET_DEPTH_TAB_SET
        } else {
            WORKSPACE_TAB_SET
        };
        self.update(|model| model.add_tab(preset.to_tab(), tab_set, DockLocation::Center))
    }
}

/// Layout interactions.
impl<S: SlotStore> Workspace<S> {
    pub fn close_tab(&mut self, id: &str) -> Result<TabNode, LayoutError> {
        self.update(|model| model.close_tab(id))
    }

    pub fn select_tab(&mut self, id: &str) -> Result<(), LayoutError> {
        self.update(|model| model.select_tab(id))
    }

    /// Drags the splitter next to a row or tab-set.
    pub fn resize(&mut self, id: &str, weight: f64) -> Result<(), LayoutError> {
        self.update(|model| model.set_weight(id, weight))
    }

    pub fn resize_border(&mut self, location: BorderLocation, size: f64) -> Result<(), LayoutError> {
        self.update(|model| model.set_border_size(location, size))
    }
}
