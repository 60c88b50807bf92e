use super::AppConfig;
use std::path::PathBuf;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "MOSAIC_DATA_DIR";

/// Core configuration for opening the durable slot database.
#[derive(Clone, Debug)]
pub struct Config {
    pub base_path: PathBuf,
}

impl Config {
    /// Resolves the data directory from the environment.
    ///
    /// `MOSAIC_DATA_DIR` wins, then `$XDG_DATA_HOME/mosaic`, then
    /// `$HOME/.local/share/mosaic`. Returns `None` if none of them is set.
    pub fn from_env() -> Option<Self> {
        let base_path = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("XDG_DATA_HOME").map(|p| PathBuf::from(p).join("mosaic")))
            .or_else(|| {
                std::env::var_os("HOME")
                    .map(|p| PathBuf::from(p).join(".local").join("share").join("mosaic"))
            })?;
        Some(Self { base_path })
    }

    pub fn db_path(&self) -> PathBuf {
        self.base_path.join("mosaic.redb")
    }

    pub fn config_path(&self) -> PathBuf {
        AppConfig::path(&self.base_path)
    }
}
