//! Compatibility tag stored next to a saved layout.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag written by this build. Bump it whenever the saved layout shape changes
/// in a way older documents can't satisfy.
pub const CURRENT_SCHEMA_VERSION: &str = "1.0.0";

/// Literal version string compared byte-for-byte on load.
///
/// No semver ordering is applied: `"1.0"` and `"1.0.0"` are different tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaVersion(String);

impl SchemaVersion {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if a stored tag is loadable by this version.
    pub fn accepts(&self, stored: &str) -> bool {
        self.0 == stored
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(CURRENT_SCHEMA_VERSION)
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SchemaVersion {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}
