//! Panel types the component factory knows and the presets in the toolbar menus.

use super::{Attributes, TabNode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Panel-type tag stored in a tab's `component` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Editor,
    Console,
    Navigator,
    Inspector,
    Design,
    Search,
    Charts,
    OptionChain,
    MarketDepth,
    Watchlist,
    /// A tag no panel is registered for. The UI shows a placeholder.
    Unknown(String),
}

impl PanelKind {
    pub const KNOWN: [PanelKind; 10] = [
        PanelKind::Editor,
        PanelKind::Console,
        PanelKind::Navigator,
        PanelKind::Inspector,
        PanelKind::Design,
        PanelKind::Search,
        PanelKind::Charts,
        PanelKind::OptionChain,
        PanelKind::MarketDepth,
        PanelKind::Watchlist,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            PanelKind::Editor => "EditorPanel",
            PanelKind::Console => "ConsolePanel",
            PanelKind::Navigator => "NavigatorPanel",
            PanelKind::Inspector => "InspectorPanel",
            PanelKind::Design => "DesignPanel",
            PanelKind::Search => "SearchPanel",
            PanelKind::Charts => "ChartsPanel",
            PanelKind::OptionChain => "OptionChainPanel",
            PanelKind::MarketDepth => "MarketDepthPanel",
            PanelKind::Watchlist => "WatchlistPanel",
            PanelKind::Unknown(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, PanelKind::Unknown(_))
    }
}

impl From<&str> for PanelKind {
    fn from(tag: &str) -> Self {
        PanelKind::KNOWN
            .into_iter()
            .find(|kind| kind.as_str() == tag)
            .unwrap_or_else(|| PanelKind::Unknown(tag.to_string()))
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TabNode {
    /// Panel type of this tab, `None` if the tab names no component.
    pub fn panel_kind(&self) -> Option<PanelKind> {
        self.component.as_deref().map(PanelKind::from)
    }
}

/// Menu group a preset is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetGroup {
    Charts,
    OptionChain,
    MarketDepth,
    Utility,
}

/// A panel offered by the "Add Panel" menus.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelPreset {
    pub name: String,
    pub kind: PanelKind,
    pub group: PresetGroup,
    pub config: Option<Attributes>,
}

impl PanelPreset {
    fn new(name: impl Into<String>, kind: PanelKind, group: PresetGroup) -> Self {
        Self {
            name: name.into(),
            kind,
            group,
            config: None,
        }
    }

    fn for_symbol(kind: PanelKind, group: PresetGroup, label: &str, symbol: &str) -> Self {
        let mut config = Attributes::new();
        config.insert("symbol".to_string(), Value::from(symbol));
        Self {
            config: Some(config),
            ..Self::new(format!("{label} - {symbol}"), kind, group)
        }
    }

    /// A fresh closable tab for this preset. The layout assigns its id.
    pub fn to_tab(&self) -> TabNode {
        let tab = TabNode::new(&self.name, self.kind.as_str()).closable(true);
        match &self.config {
            Some(config) => tab.with_config(config.clone()),
            None => tab,
        }
    }
}

const CHART_SYMBOLS: [&str; 4] = ["AAPL", "GOOGL", "MSFT", "TSLA"];
const OPTION_CHAIN_SYMBOLS: [&str; 4] = ["AAPL", "GOOGL", "MSFT", "TSLA"];
const MARKET_DEPTH_SYMBOLS: [&str; 2] = ["AAPL", "GOOGL"];

pub fn chart_presets() -> Vec<PanelPreset> {
    CHART_SYMBOLS
        .iter()
        .map(|s| PanelPreset::for_symbol(PanelKind::Charts, PresetGroup::Charts, "Charts", s))
        .collect()
}

pub fn option_chain_presets() -> Vec<PanelPreset> {
    OPTION_CHAIN_SYMBOLS
        .iter()
        .map(|s| {
            PanelPreset::for_symbol(
                PanelKind::OptionChain,
                PresetGroup::OptionChain,
                "Option Chain",
                s,
            )
        })
        .collect()
}

pub fn market_depth_presets() -> Vec<PanelPreset> {
    MARKET_DEPTH_SYMBOLS
        .iter()
        .map(|s| {
            PanelPreset::for_symbol(
                PanelKind::MarketDepth,
                PresetGroup::MarketDepth,
                "Market Depth",
                s,
            )
        })
        .collect()
}

pub fn utility_presets() -> Vec<PanelPreset> {
    vec![
        PanelPreset::new("Editor", PanelKind::Editor, PresetGroup::Utility),
        PanelPreset::new("Console", PanelKind::Console, PresetGroup::Utility),
        PanelPreset::new("Design", PanelKind::Design, PresetGroup::Utility),
    ]
}

/// Every preset, in menu order.
pub fn all_presets() -> Vec<PanelPreset> {
    let mut presets = chart_presets();
    presets.extend(option_chain_presets());
    presets.extend(market_depth_presets());
    presets.extend(utility_presets());
    presets
}

/// Finds a preset by its menu name.
pub fn preset(name: &str) -> Option<PanelPreset> {
    all_presets().into_iter().find(|p| p.name == name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn as_str(self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

/// Market depth for one option strike, as opened from an option chain row.
pub fn market_depth(symbol: &str, strike_price: f64, option_type: OptionType) -> PanelPreset {
    let mut config = Attributes::new();
    config.insert("symbol".to_string(), Value::from(symbol));
    config.insert("strikePrice".to_string(), Value::from(strike_price));
    config.insert("optionType".to_string(), Value::from(option_type.as_str()));

    PanelPreset {
        config: Some(config),
        ..PanelPreset::new(
            format!(
                "Depth {symbol} ₹{strike_price} {}",
                option_type.as_str().to_uppercase()
            ),
            PanelKind::MarketDepth,
            PresetGroup::MarketDepth,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_round_trip() {
        for kind in PanelKind::KNOWN {
            assert_eq!(PanelKind::from(kind.as_str()), kind);
            assert!(kind.is_known());
        }
    }

    #[test]
    fn unknown_tag_is_kept() {
        let kind = PanelKind::from("market-depth");
        assert_eq!(kind, PanelKind::Unknown("market-depth".to_string()));
        assert_eq!(kind.as_str(), "market-depth");
        assert!(!kind.is_known());
    }

    #[test]
    fn menu_has_every_preset() {
        assert_eq!(chart_presets().len(), 4);
        assert_eq!(option_chain_presets().len(), 4);
        assert_eq!(market_depth_presets().len(), 2);
        assert_eq!(utility_presets().len(), 3);
        assert_eq!(all_presets().len(), 13);
    }

    #[test]
    fn symbol_presets_carry_config() {
        let preset = preset("Charts - TSLA").unwrap();
        assert_eq!(preset.kind, PanelKind::Charts);
        assert_eq!(preset.group, PresetGroup::Charts);

        let tab = preset.to_tab();
        assert_eq!(tab.name, "Charts - TSLA");
        assert_eq!(tab.component.as_deref(), Some("ChartsPanel"));
        assert_eq!(tab.config_str("symbol"), Some("TSLA"));
        assert!(tab.is_closable());
        assert!(tab.id.is_none());
    }

    #[test]
    fn utility_presets_have_no_config() {
        let tab = preset("Console").unwrap().to_tab();
        assert_eq!(tab.panel_kind(), Some(PanelKind::Console));
        assert!(tab.config.is_none());
    }

    #[test]
    fn market_depth_for_strike() {
        let preset = market_depth("NIFTY", 19500.0, OptionType::Call);
        assert_eq!(preset.name, "Depth NIFTY ₹19500 CALL");
        assert_eq!(preset.kind, PanelKind::MarketDepth);

        let tab = preset.to_tab();
        assert_eq!(tab.config_str("symbol"), Some("NIFTY"));
        assert_eq!(tab.config_str("optionType"), Some("call"));
        let config = tab.config.unwrap();
        assert_eq!(config.get("strikePrice").and_then(Value::as_f64), Some(19500.0));
    }

    #[test]
    fn market_depth_put_with_fractional_strike() {
        let preset = market_depth("AAPL", 187.5, OptionType::Put);
        assert_eq!(preset.name, "Depth AAPL ₹187.5 PUT");
    }
}
