use crate::types::key::SlotKey;
use crate::types::schema_version::{CURRENT_SCHEMA_VERSION, SchemaVersion};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// User-facing application configuration, persisted as config.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl AppConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> std::path::PathBuf {
        data_dir.join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (name, value) in self.slot_keys() {
            if let Err(e) = SlotKey::try_from(value) {
                errors.push(format!("{name} is not a valid slot key: {e}"));
            }
        }

        if self.layout.data_key.trim() == self.layout.version_key.trim() {
            errors.push("layout.data_key and layout.version_key must differ".to_string());
        }

        if self.layout.schema_version.trim().is_empty() {
            errors.push("layout.schema_version must not be empty".to_string());
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        let keep_or_default = |value: &String, default: String| {
            if SlotKey::try_from(value.as_str()).is_ok() {
                value.clone()
            } else {
                default
            }
        };

        let mut layout = LayoutConfig {
            schema_version: if self.layout.schema_version.trim().is_empty() {
                defaults.layout.schema_version.clone()
            } else {
                self.layout.schema_version.clone()
            },
            data_key: keep_or_default(&self.layout.data_key, defaults.layout.data_key.clone()),
            version_key: keep_or_default(
                &self.layout.version_key,
                defaults.layout.version_key.clone(),
            ),
        };
        if layout.data_key.trim() == layout.version_key.trim() {
            layout.data_key = defaults.layout.data_key;
            layout.version_key = defaults.layout.version_key;
        }

        Self {
            general: GeneralConfig {
                theme_key: keep_or_default(&self.general.theme_key, defaults.general.theme_key),
            },
            layout,
        }
    }

    fn slot_keys(&self) -> [(&'static str, &str); 3] {
        [
            ("general.theme_key", self.general.theme_key.as_str()),
            ("layout.data_key", self.layout.data_key.as_str()),
            ("layout.version_key", self.layout.version_key.as_str()),
        ]
    }
}

/// General application settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            theme_key: default_theme_key(),
        }
    }
}

/// Where and under which schema tag the layout is persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    #[serde(default = "default_data_key")]
    pub data_key: String,
    #[serde(default = "default_version_key")]
    pub version_key: String,
}

impl LayoutConfig {
    pub fn schema_version(&self) -> SchemaVersion {
        SchemaVersion::new(self.schema_version.trim())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            data_key: default_data_key(),
            version_key: default_version_key(),
        }
    }
}

fn default_schema_version() -> String {
    CURRENT_SCHEMA_VERSION.to_string()
}

fn default_data_key() -> String {
    "mosaic_ide_layout".to_string()
}

fn default_version_key() -> String {
    "mosaic_ide_version".to_string()
}

fn default_theme_key() -> String {
    "ide-theme".to_string()
}

/// Theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Red,
    Gray,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Red, Theme::Gray, Theme::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Red => "red",
            Theme::Gray => "gray",
            Theme::Dark => "dark",
        }
    }

    /// Menu label shown in the theme picker.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Red => "Red Focus",
            Theme::Gray => "Neutral",
            Theme::Dark => "Dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
