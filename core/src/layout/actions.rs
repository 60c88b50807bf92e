//! Mutations triggered by the user: docking, closing, selecting, resizing.

use super::{BorderLocation, LayoutModel, Node, RowNode, TabNode, TabSetNode};
use std::collections::HashSet;
use thiserror::Error;
use tracing::debug;

/// Weight assumed for nodes that don't carry one.
const DEFAULT_WEIGHT: f64 = 100.0;

/// Where a new tab goes relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockLocation {
    /// Into the target tab-set or border, as its last tab.
    Center,
    Left,
    Right,
    Top,
    Bottom,
}

impl DockLocation {
    fn is_horizontal(self) -> bool {
        matches!(self, DockLocation::Left | DockLocation::Right)
    }

    fn is_leading(self) -> bool {
        matches!(self, DockLocation::Left | DockLocation::Top)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Node is not a tab: {0}")]
    NotATab(String),

    #[error("Cannot dock {location:?} of {target}")]
    InvalidDockTarget {
        target: String,
        location: DockLocation,
    },

    #[error("Tab cannot be closed: {0}")]
    TabNotClosable(String),

    #[error("Node id already in use: {0}")]
    DuplicateId(String),

    #[error("Node cannot be resized: {0}")]
    NotResizable(String),

    #[error("Invalid size {0}: must be finite and positive")]
    InvalidSize(f64),
}

/// Position of a node inside the model.
#[derive(Debug, Clone, PartialEq)]
enum Location {
    Border { border: usize, tab: Option<usize> },
    /// `path` indexes `children` from the root row down to the tab-set.
    TabSet { path: Vec<usize>, tab: Option<usize> },
    Row { path: Vec<usize> },
}

/// Add operations.
impl LayoutModel {
    /// Docks `tab` relative to the node `target_id` and returns the tab's id.
    ///
    /// The target may be a tab-set, a border (`border_<location>`) or a tab, in
    /// which case the tab's container is used. Tabs without an id get a fresh one.
    pub fn add_tab(
        &mut self,
        mut tab: TabNode,
        target_id: &str,
        location: DockLocation,
    ) -> Result<String, LayoutError> {
        let mut ids = IdAllocator::new(self);
        let tab_id = match tab.id.clone() {
            Some(id) if !ids.reserve(&id) => return Err(LayoutError::DuplicateId(id)),
            Some(id) => id,
            None => {
                let id = ids.allocate();
                tab.id = Some(id.clone());
                id
            }
        };

        let target = self
            .locate(target_id)
            .ok_or_else(|| LayoutError::NodeNotFound(target_id.to_string()))?;

        match (target, location) {
            (Location::Border { border, .. }, DockLocation::Center) => {
                let border = &mut self.borders[border];
                border.children.push(tab);
                border.selected = index_i32(border.children.len() - 1);
            }
            (Location::TabSet { path, .. }, DockLocation::Center) => {
                let tab_set = tab_set_mut(&mut self.layout, &path)
                    .ok_or_else(|| LayoutError::NodeNotFound(target_id.to_string()))?;
                tab_set.children.push(tab);
                tab_set.selected = Some(index_i32(tab_set.children.len() - 1));
            }
            (Location::TabSet { path, .. }, edge) => {
                self.dock_beside(&path, tab, edge, &mut ids)
                    .ok_or_else(|| LayoutError::NodeNotFound(target_id.to_string()))?;
            }
            (Location::Border { .. } | Location::Row { .. }, location) => {
                return Err(LayoutError::InvalidDockTarget {
                    target: target_id.to_string(),
                    location,
                });
            }
        }

        debug!(tab = %tab_id, target = target_id, ?location, "tab added");
        Ok(tab_id)
    }

    /// Puts a new tab-set holding `tab` beside the tab-set at `path`.
    fn dock_beside(
        &mut self,
        path: &[usize],
        tab: TabNode,
        edge: DockLocation,
        ids: &mut IdAllocator,
    ) -> Option<()> {
        let (&index, parent_path) = path.split_last()?;
        let parent_horizontal = parent_path.len() % 2 == 0;
        let mut new_set = TabSetNode {
            id: Some(ids.allocate()),
            selected: Some(0),
            children: vec![tab],
            ..TabSetNode::default()
        };

        let parent = row_mut(&mut self.layout, parent_path)?;

        if parent_horizontal == edge.is_horizontal() {
            let target = parent.children.get_mut(index)?;
            let half = target.weight().unwrap_or(DEFAULT_WEIGHT) / 2.0;
            target.set_weight(half);
            new_set.weight = Some(half);

            let at = if edge.is_leading() { index } else { index + 1 };
            parent.children.insert(at, Node::TabSet(new_set));
        } else {
            let slot = parent.children.get_mut(index)?;
            let mut target = std::mem::replace(slot, Node::Row(RowNode::default()));
            let weight = target.weight();
            target.set_weight(DEFAULT_WEIGHT / 2.0);
            new_set.weight = Some(DEFAULT_WEIGHT / 2.0);

            let children = if edge.is_leading() {
                vec![Node::TabSet(new_set), target]
            } else {
                vec![target, Node::TabSet(new_set)]
            };
            *slot = Node::Row(RowNode {
                id: Some(ids.allocate()),
                weight,
                children,
                ..RowNode::default()
            });
        }
        Some(())
    }
}

/// Close and select operations.
impl LayoutModel {
    /// Removes a tab and returns it.
    ///
    /// A tab-set left empty is removed too, unless it is the last one. Closing
    /// the open tab of a border collapses the border.
    pub fn close_tab(&mut self, id: &str) -> Result<TabNode, LayoutError> {
        let location = self
            .locate(id)
            .ok_or_else(|| LayoutError::NodeNotFound(id.to_string()))?;

        let removed = match location {
            Location::Border {
                border,
                tab: Some(index),
            } => {
                let border = &mut self.borders[border];
                if !border.children[index].is_closable() {
                    return Err(LayoutError::TabNotClosable(id.to_string()));
                }
                let removed = border.children.remove(index);
                border.selected =
                    selection_after_removal(border.selected, index, border.children.len(), true);
                removed
            }
            Location::TabSet {
                path,
                tab: Some(index),
            } => {
                let tab_set = tab_set_mut(&mut self.layout, &path)
                    .ok_or_else(|| LayoutError::NodeNotFound(id.to_string()))?;
                if !tab_set.children[index].is_closable() {
                    return Err(LayoutError::TabNotClosable(id.to_string()));
                }
                let removed = tab_set.children.remove(index);
                let selected = selection_after_removal(
                    tab_set.selected.unwrap_or(0),
                    index,
                    tab_set.children.len(),
                    false,
                );
                tab_set.selected = Some(selected);

                if tab_set.children.is_empty() && self.tab_sets().len() > 1 {
                    self.remove_node(&path);
                    tidy(&mut self.layout);
                }
                removed
            }
            _ => return Err(LayoutError::NotATab(id.to_string())),
        };

        debug!(tab = id, "tab closed");
        Ok(removed)
    }

    /// Brings a tab to the front of its container.
    ///
    /// Selecting the open tab of a border again collapses the border.
    pub fn select_tab(&mut self, id: &str) -> Result<(), LayoutError> {
        match self.locate(id) {
            Some(Location::Border {
                border,
                tab: Some(index),
            }) => {
                let border = &mut self.borders[border];
                let index = index_i32(index);
                border.selected = if border.selected == index { -1 } else { index };
                Ok(())
            }
            Some(Location::TabSet {
                path,
                tab: Some(index),
            }) => {
                let tab_set = tab_set_mut(&mut self.layout, &path)
                    .ok_or_else(|| LayoutError::NodeNotFound(id.to_string()))?;
                tab_set.selected = Some(index_i32(index));
                Ok(())
            }
            Some(_) => Err(LayoutError::NotATab(id.to_string())),
            None => Err(LayoutError::NodeNotFound(id.to_string())),
        }
    }

    fn remove_node(&mut self, path: &[usize]) {
        let Some((&index, parent_path)) = path.split_last() else {
            return;
        };
        if let Some(parent) = row_mut(&mut self.layout, parent_path) {
            if index < parent.children.len() {
                parent.children.remove(index);
            }
        }
    }
}

/// Resize operations.
impl LayoutModel {
    /// Sets the splitter weight of a row or tab-set.
    pub fn set_weight(&mut self, id: &str, weight: f64) -> Result<(), LayoutError> {
        check_size(weight)?;
        match self.locate(id) {
            Some(Location::Row { path }) if path.is_empty() => {
                self.layout.weight = Some(weight);
            }
            Some(Location::Row { path } | Location::TabSet { path, tab: None }) => {
                node_mut(&mut self.layout, &path)
                    .ok_or_else(|| LayoutError::NodeNotFound(id.to_string()))?
                    .set_weight(weight);
            }
            Some(_) => return Err(LayoutError::NotResizable(id.to_string())),
            None => return Err(LayoutError::NodeNotFound(id.to_string())),
        }
        Ok(())
    }

    /// Sets the open size of a border.
    pub fn set_border_size(&mut self, location: BorderLocation, size: f64) -> Result<(), LayoutError> {
        check_size(size)?;
        let border = self
            .borders
            .iter_mut()
            .find(|b| b.location == location)
            .ok_or_else(|| LayoutError::NodeNotFound(format!("border_{location}")))?;
        border.size = Some(size);
        Ok(())
    }
}

/// Lookup helpers.
impl LayoutModel {
    fn locate(&self, id: &str) -> Option<Location> {
        for (index, border) in self.borders.iter().enumerate() {
            if border.id() == id {
                return Some(Location::Border {
                    border: index,
                    tab: None,
                });
            }
            if let Some(tab) = position_of(&border.children, id) {
                return Some(Location::Border {
                    border: index,
                    tab: Some(tab),
                });
            }
        }

        if self.layout.id.as_deref() == Some(id) {
            return Some(Location::Row { path: vec![] });
        }

        let mut path = Vec::new();
        locate_in_row(&self.layout, id, &mut path)
    }
}

fn locate_in_row(row: &RowNode, id: &str, path: &mut Vec<usize>) -> Option<Location> {
    for (index, child) in row.children.iter().enumerate() {
        path.push(index);
        let found = match child {
            Node::Row(row) if row.id.as_deref() == Some(id) => Some(Location::Row { path: path.clone() }),
            Node::Row(row) => locate_in_row(row, id, path),
            Node::TabSet(tab_set) if tab_set.id.as_deref() == Some(id) => Some(Location::TabSet {
                path: path.clone(),
                tab: None,
            }),
            Node::TabSet(tab_set) => {
                position_of(&tab_set.children, id).map(|tab| Location::TabSet {
                    path: path.clone(),
                    tab: Some(tab),
                })
            }
        };
        if found.is_some() {
            return found;
        }
        path.pop();
    }
    None
}

fn position_of(tabs: &[TabNode], id: &str) -> Option<usize> {
    tabs.iter().position(|t| t.id.as_deref() == Some(id))
}

fn row_mut<'a>(row: &'a mut RowNode, path: &[usize]) -> Option<&'a mut RowNode> {
    match path.split_first() {
        None => Some(row),
        Some((&index, rest)) => match row.children.get_mut(index)? {
            Node::Row(child) => row_mut(child, rest),
            Node::TabSet(_) => None,
        },
    }
}

fn node_mut<'a>(root: &'a mut RowNode, path: &[usize]) -> Option<&'a mut Node> {
    let (&index, parent_path) = path.split_last()?;
    row_mut(root, parent_path)?.children.get_mut(index)
}

fn tab_set_mut<'a>(root: &'a mut RowNode, path: &[usize]) -> Option<&'a mut TabSetNode> {
    match node_mut(root, path)? {
        Node::TabSet(tab_set) => Some(tab_set),
        Node::Row(_) => None,
    }
}

/// Drops empty rows and hoists the child of single-child rows.
fn tidy(row: &mut RowNode) {
    let children = std::mem::take(&mut row.children);
    for child in children {
        match child {
            Node::TabSet(tab_set) => row.children.push(Node::TabSet(tab_set)),
            Node::Row(mut inner) => {
                tidy(&mut inner);
                if inner.children.len() > 1 {
                    row.children.push(Node::Row(inner));
                    continue;
                }
                match inner.children.pop() {
                    Some(Node::TabSet(mut tab_set)) => {
                        tab_set.weight = inner.weight.or(tab_set.weight);
                        row.children.push(Node::TabSet(tab_set));
                    }
                    // Two levels down runs in the same direction as `row`.
                    Some(Node::Row(grand)) => row.children.extend(grand.children),
                    None => {}
                }
            }
        }
    }
}

fn selection_after_removal(selected: i32, removed: usize, remaining: usize, collapse: bool) -> i32 {
    let removed = index_i32(removed);
    if remaining == 0 {
        return -1;
    }
    if selected == removed {
        if collapse {
            -1
        } else {
            removed.min(index_i32(remaining - 1))
        }
    } else if selected > removed {
        selected - 1
    } else {
        selected
    }
}

fn check_size(size: f64) -> Result<(), LayoutError> {
    if size.is_finite() && size > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidSize(size))
    }
}

fn index_i32(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

/// Hands out `#<n>` ids not used anywhere in the model.
struct IdAllocator {
    taken: HashSet<String>,
    next: usize,
}

impl IdAllocator {
    fn new(model: &LayoutModel) -> Self {
        Self {
            taken: model.ids().into_iter().collect(),
            next: 1,
        }
    }

    /// Claims an explicit id. Returns false if it is already taken.
    fn reserve(&mut self, id: &str) -> bool {
        self.taken.insert(id.to_string())
    }

    fn allocate(&mut self) -> String {
        loop {
            let id = format!("#{}", self.next);
            self.next += 1;
            if self.taken.insert(id.clone()) {
                return id;
            }
        }
    }
}
