//! The arrangement shown on first launch and after a reset.

use super::catalog::PanelKind;
use super::{Attributes, BorderLocation, BorderNode, LayoutModel, Node, RowNode, TabNode, TabSetNode};
use serde_json::json;

/// Tab-set receiving panels added from the toolbar.
pub const WORKSPACE_TAB_SET: &str = "workspace";
/// Tab-set on the right receiving panels added with `PanelTarget::Right`.
pub const INSPECTOR_TAB_SET: &str = "inspector-panel";
/// Tab-set that market depth panels opened from an option chain go to.
pub const MARKET_DEPTH_TAB_SET: &str = "market-depth-tabset";
/// Console tab living in the bottom border. New terminals dock next to it.
pub const CONSOLE_TAB: &str = "console";

impl Default for LayoutModel {
    fn default() -> Self {
        let global = match json!({
            "tabSetEnableMaximize": true,
            "tabSetEnableTabStrip": true,
            "tabEnablePopout": true,
            "splitterSize": 6,
            "borderSize": 250,
            "borderMinSize": 100,
        }) {
            serde_json::Value::Object(map) => map,
            _ => Attributes::new(),
        };

        let mut left = BorderNode::new(
            BorderLocation::Left,
            250.0,
            vec![
                fixed_tab("navigator", "Navigator", PanelKind::Navigator),
                fixed_tab("search", "Search", PanelKind::Search),
            ],
        );
        left.selected = 0;

        let bottom = BorderNode::new(
            BorderLocation::Bottom,
            200.0,
            vec![fixed_tab(CONSOLE_TAB, "Console", PanelKind::Console)],
        );

        let workspace = TabSetNode::new(
            WORKSPACE_TAB_SET,
            70.0,
            vec![
                TabNode::new("Editor", PanelKind::Editor.as_str()).with_id("editor-main"),
                TabNode::new("Design", PanelKind::Design.as_str()).with_id("design-main"),
            ],
        );

        let inspector = TabSetNode::new(
            INSPECTOR_TAB_SET,
            30.0,
            vec![TabNode::new("Inspector", PanelKind::Inspector.as_str()).with_id("inspector-main")],
        );

        Self {
            global,
            borders: vec![left, bottom],
            layout: RowNode {
                weight: Some(100.0),
                children: vec![Node::TabSet(workspace), Node::TabSet(inspector)],
                ..RowNode::default()
            },
            attributes: Attributes::new(),
        }
    }
}

fn fixed_tab(id: &str, name: &str, kind: PanelKind) -> TabNode {
    TabNode::new(name, kind.as_str()).with_id(id).closable(false)
}
