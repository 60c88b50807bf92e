pub(crate) mod config;
pub use config::{
    AppConfig, AppConfigError, Config, DATA_DIR_ENV, GeneralConfig, LayoutConfig, Theme, UnknownTheme,
};

pub(crate) mod key;
pub use key::{MAX_KEY_LENGTH, SlotKey, SlotKeyError};

pub(crate) mod schema_version;
pub use schema_version::{CURRENT_SCHEMA_VERSION, SchemaVersion};
