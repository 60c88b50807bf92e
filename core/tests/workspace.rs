use mosaic_core::core::MemorySlots;
use mosaic_core::layout::catalog;
use mosaic_core::layout::{LayoutModel, WORKSPACE_TAB_SET};
use mosaic_core::types::{AppConfig, Theme};
use mosaic_core::{PanelTarget, Workspace};
use std::sync::Arc;

#[test]
fn test_workspace_session_round_trip() {
    let slots = Arc::new(MemorySlots::new());
    let config = AppConfig::default();

    let mut workspace = Workspace::open(Arc::clone(&slots), &config).unwrap();
    for preset in catalog::chart_presets() {
        workspace.add_panel(&preset, PanelTarget::Center).unwrap();
    }
    workspace.close_tab("design-main").unwrap();
    workspace.set_theme(Theme::Dark);
    let expected = workspace.model().clone();
    drop(workspace);

    let restored = Workspace::open(Arc::clone(&slots), &config).unwrap();
    assert_eq!(restored.model(), &expected);
    assert_eq!(restored.theme(), Theme::Dark);

    let names: Vec<&str> = restored
        .model()
        .find_tab_set(WORKSPACE_TAB_SET)
        .unwrap()
        .children
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(
        names,
        ["Editor", "Charts - AAPL", "Charts - GOOGL", "Charts - MSFT", "Charts - TSLA"]
    );
}

#[test]
fn test_reset_survives_restart() {
    let slots = Arc::new(MemorySlots::new());
    let config = AppConfig::default();

    let mut workspace = Workspace::open(Arc::clone(&slots), &config).unwrap();
    workspace.close_tab("inspector-main").unwrap();
    workspace.reset();

    let restored = Workspace::open(slots, &config).unwrap();
    assert_eq!(restored.model(), &LayoutModel::default());
}
