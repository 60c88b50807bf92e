mod app;
mod paths;

pub use app::{AppConfig, AppConfigError, GeneralConfig, LayoutConfig, Theme, UnknownTheme};
pub use paths::{Config, DATA_DIR_ENV};
