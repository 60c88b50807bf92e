//! Typed view of the dockable-layout JSON document.
//!
//! The document is owned by the layout library, so every node keeps the
//! attributes this model does not name in a flattened `attributes` map and
//! writes them back untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

mod actions;
pub mod catalog;
mod default;

pub use actions::{DockLocation, LayoutError};
pub use default::{CONSOLE_TAB, INSPECTOR_TAB_SET, MARKET_DEPTH_TAB_SET, WORKSPACE_TAB_SET};

/// Free-form per-node attributes.
pub type Attributes = Map<String, Value>;

/// The whole arrangement: global settings, edge borders and the main tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutModel {
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub global: Attributes,
    #[serde(default)]
    pub borders: Vec<BorderNode>,
    #[serde(with = "root_row")]
    pub layout: RowNode,
    #[serde(flatten)]
    pub attributes: Attributes,
}

/// A node of the main tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Row(RowNode),
    TabSet(TabSetNode),
}

/// Splits its children along one axis. Rows alternate direction by depth;
/// the root row lays its children out horizontally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabSetNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<i32>,
    #[serde(default)]
    pub children: Vec<TabNode>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

/// One panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabNode {
    #[serde(rename = "type", default)]
    kind: TabKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Attributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_close: Option<bool>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum TabKind {
    #[default]
    Tab,
}

/// A collapsible strip of tabs along one window edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderNode {
    #[serde(rename = "type", default)]
    kind: BorderKind,
    pub location: BorderLocation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Index of the open tab, `-1` when collapsed.
    #[serde(default = "collapsed")]
    pub selected: i32,
    #[serde(default)]
    pub children: Vec<TabNode>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum BorderKind {
    #[default]
    Border,
}

fn collapsed() -> i32 {
    -1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderLocation {
    Left,
    Right,
    Top,
    Bottom,
}

impl BorderLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            BorderLocation::Left => "left",
            BorderLocation::Right => "right",
            BorderLocation::Top => "top",
            BorderLocation::Bottom => "bottom",
        }
    }
}

impl fmt::Display for BorderLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TabNode {
    pub fn new(name: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            component: Some(component.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_config(mut self, config: Attributes) -> Self {
        self.config = Some(config);
        self
    }

    pub fn closable(mut self, enable_close: bool) -> Self {
        self.enable_close = Some(enable_close);
        self
    }

    /// Tabs are closable unless they opt out.
    pub fn is_closable(&self) -> bool {
        self.enable_close.unwrap_or(true)
    }

    /// Looks up a string entry of the per-tab config.
    pub fn config_str(&self, key: &str) -> Option<&str> {
        self.config.as_ref()?.get(key)?.as_str()
    }
}

impl TabSetNode {
    pub fn new(id: impl Into<String>, weight: f64, children: Vec<TabNode>) -> Self {
        Self {
            id: Some(id.into()),
            weight: Some(weight),
            children,
            ..Self::default()
        }
    }

    /// The visible tab, if any.
    pub fn selected_tab(&self) -> Option<&TabNode> {
        let index = usize::try_from(self.selected.unwrap_or(0)).ok()?;
        self.children.get(index)
    }
}

impl BorderNode {
    pub fn new(location: BorderLocation, size: f64, children: Vec<TabNode>) -> Self {
        Self {
            kind: BorderKind::Border,
            location,
            size: Some(size),
            selected: collapsed(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Borders carry no id in the document; the library addresses them as
    /// `border_<location>`.
    pub fn id(&self) -> String {
        format!("border_{}", self.location)
    }

    pub fn is_collapsed(&self) -> bool {
        self.selected < 0
    }

    pub fn selected_tab(&self) -> Option<&TabNode> {
        let index = usize::try_from(self.selected).ok()?;
        self.children.get(index)
    }
}

impl Node {
    pub fn id(&self) -> Option<&str> {
        match self {
            Node::Row(row) => row.id.as_deref(),
            Node::TabSet(tab_set) => tab_set.id.as_deref(),
        }
    }

    pub fn weight(&self) -> Option<f64> {
        match self {
            Node::Row(row) => row.weight,
            Node::TabSet(tab_set) => tab_set.weight,
        }
    }

    pub(crate) fn set_weight(&mut self, weight: f64) {
        match self {
            Node::Row(row) => row.weight = Some(weight),
            Node::TabSet(tab_set) => tab_set.weight = Some(weight),
        }
    }
}

/// Read-only queries.
impl LayoutModel {
    /// Every tab: border tabs first, then the main tree depth-first.
    pub fn tabs(&self) -> Vec<&TabNode> {
        let mut tabs: Vec<&TabNode> = self.borders.iter().flat_map(|b| &b.children).collect();
        collect_tabs(&self.layout, &mut tabs);
        tabs
    }

    pub fn find_tab(&self, id: &str) -> Option<&TabNode> {
        self.tabs().into_iter().find(|t| t.id.as_deref() == Some(id))
    }

    pub fn find_tab_set(&self, id: &str) -> Option<&TabSetNode> {
        self.tab_sets()
            .into_iter()
            .find(|ts| ts.id.as_deref() == Some(id))
    }

    /// Every tab-set of the main tree, depth-first.
    pub fn tab_sets(&self) -> Vec<&TabSetNode> {
        let mut tab_sets = Vec::new();
        collect_tab_sets(&self.layout, &mut tab_sets);
        tab_sets
    }

    pub fn border(&self, location: BorderLocation) -> Option<&BorderNode> {
        self.borders.iter().find(|b| b.location == location)
    }

    /// Ids of every addressable node, borders included.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.borders.iter().map(BorderNode::id).collect();
        ids.extend(self.tabs().into_iter().filter_map(|t| t.id.clone()));
        collect_node_ids(&self.layout, &mut ids);
        ids
    }
}

fn collect_tabs<'a>(row: &'a RowNode, out: &mut Vec<&'a TabNode>) {
    for child in &row.children {
        match child {
            Node::Row(row) => collect_tabs(row, out),
            Node::TabSet(tab_set) => out.extend(&tab_set.children),
        }
    }
}

fn collect_tab_sets<'a>(row: &'a RowNode, out: &mut Vec<&'a TabSetNode>) {
    for child in &row.children {
        match child {
            Node::Row(row) => collect_tab_sets(row, out),
            Node::TabSet(tab_set) => out.push(tab_set),
        }
    }
}

fn collect_node_ids(row: &RowNode, out: &mut Vec<String>) {
    out.extend(row.id.clone());
    for child in &row.children {
        match child {
            Node::Row(row) => collect_node_ids(row, out),
            Node::TabSet(tab_set) => out.extend(tab_set.id.clone()),
        }
    }
}

/// The root `layout` entry is a row tagged like any other tree node.
mod root_row {
    use super::{Node, RowNode};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize)]
    struct Tagged<'a> {
        #[serde(rename = "type")]
        kind: &'static str,
        #[serde(flatten)]
        row: &'a RowNode,
    }

    pub fn serialize<S: Serializer>(row: &RowNode, serializer: S) -> Result<S::Ok, S::Error> {
        Tagged { kind: "row", row }.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<RowNode, D::Error> {
        match Node::deserialize(deserializer)? {
            Node::Row(row) => Ok(row),
            Node::TabSet(_) => Err(D::Error::custom("layout root must be a row")),
        }
    }
}
