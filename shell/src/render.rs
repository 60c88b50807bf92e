//! Plain-text outline of a layout.

use mosaic_core::layout::{BorderNode, LayoutModel, Node, RowNode, TabNode, TabSetNode};
use mosaic_core::types::Theme;
use std::fmt::Write;

pub fn render(model: &LayoutModel, theme: Theme) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "theme: {} ({})", theme, theme.label());
    for border in &model.borders {
        render_border(&mut out, border);
    }
    render_row(&mut out, &model.layout, 0, true);
    out
}

fn render_border(out: &mut String, border: &BorderNode) {
    let state = if border.is_collapsed() { "collapsed" } else { "open" };
    let _ = writeln!(out, "border {} [{state}]", border.location);
    let selected = usize::try_from(border.selected).ok();
    for (index, tab) in border.children.iter().enumerate() {
        render_tab(out, tab, 1, selected == Some(index));
    }
}

fn render_row(out: &mut String, row: &RowNode, depth: usize, horizontal: bool) {
    let direction = if horizontal { "row" } else { "column" };
    let _ = writeln!(out, "{}{direction}{}", indent(depth), weight(row.weight));
    for child in &row.children {
        match child {
            Node::Row(child) => render_row(out, child, depth + 1, !horizontal),
            Node::TabSet(tab_set) => render_tab_set(out, tab_set, depth + 1),
        }
    }
}

fn render_tab_set(out: &mut String, tab_set: &TabSetNode, depth: usize) {
    let id = tab_set.id.as_deref().unwrap_or("-");
    let _ = writeln!(out, "{}tabset {id}{}", indent(depth), weight(tab_set.weight));
    let selected = usize::try_from(tab_set.selected.unwrap_or(0)).ok();
    for (index, tab) in tab_set.children.iter().enumerate() {
        render_tab(out, tab, depth + 1, selected == Some(index));
    }
}

fn render_tab(out: &mut String, tab: &TabNode, depth: usize, selected: bool) {
    let marker = if selected { '*' } else { '-' };
    let kind = tab
        .panel_kind()
        .map(|k| k.to_string())
        .unwrap_or_else(|| "?".to_string());
    let _ = write!(out, "{}{marker} {} [{kind}]", indent(depth), tab.name);
    if let Some(id) = &tab.id {
        let _ = write!(out, " #{id}");
    }
    if let Some(symbol) = tab.config_str("symbol") {
        let _ = write!(out, " {symbol}");
    }
    out.push('\n');
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

fn weight(weight: Option<f64>) -> String {
    weight.map(|w| format!(" ({w})")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_default_layout() {
        let text = render(&LayoutModel::default(), Theme::Red);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "theme: red (Red Focus)");
        assert_eq!(lines[1], "border left [open]");
        assert_eq!(lines[2], "  * Navigator [NavigatorPanel] #navigator");
        assert_eq!(lines[3], "  - Search [SearchPanel] #search");
        assert_eq!(lines[4], "border bottom [collapsed]");
        assert_eq!(lines[5], "  - Console [ConsolePanel] #console");
        assert_eq!(lines[6], "row (100)");
        assert_eq!(lines[7], "  tabset workspace (70)");
        assert_eq!(lines[8], "    * Editor [EditorPanel] #editor-main");
        assert_eq!(lines[9], "    - Design [DesignPanel] #design-main");
        assert_eq!(lines[10], "  tabset inspector-panel (30)");
        assert_eq!(lines.len(), 12);
    }
}
